//! crates/diagnostics/src/tracing_macros.rs
//! Macros emitting tracing events attributed to a log feature.
//!
//! The feature is given as a [`LogFeature`](crate::LogFeature) variant name and
//! becomes the event target `feature::<Variant>`, which
//! [`FeatureFilter`](crate::FeatureFilter) resolves ignoring case.

/// Emit an event for a feature at an explicit level.
///
/// The feature must name a [`LogFeature`](crate::LogFeature) variant; anything
/// else fails to compile.
///
/// # Example
/// ```ignore
/// feature_event!(Otel, tracing::Level::DEBUG, "exporter queue depth {}", depth);
/// ```
///
/// A misspelt feature is rejected:
///
/// ```compile_fail
/// diagnostics::feature_debug!(Otle, "exporter started");
/// ```
#[macro_export]
macro_rules! feature_event {
    ($feature:ident, $level:expr, $($arg:tt)+) => {{
        const _: $crate::LogFeature = $crate::LogFeature::$feature;
        ::tracing::event!(
            target: concat!("feature::", stringify!($feature)),
            $level,
            $($arg)+
        )
    }};
}

/// Emit an error event for a feature.
///
/// # Example
/// ```ignore
/// feature_error!(Transport, "request to {} failed", endpoint);
/// ```
#[macro_export]
macro_rules! feature_error {
    ($feature:ident, $($arg:tt)+) => {
        $crate::feature_event!($feature, ::tracing::Level::ERROR, $($arg)+)
    };
}

/// Emit a warning event for a feature.
///
/// # Example
/// ```ignore
/// feature_warn!(Config, "option {} is deprecated", name);
/// ```
#[macro_export]
macro_rules! feature_warn {
    ($feature:ident, $($arg:tt)+) => {
        $crate::feature_event!($feature, ::tracing::Level::WARN, $($arg)+)
    };
}

/// Emit an informational event for a feature.
///
/// # Example
/// ```ignore
/// feature_info!(Module, "extension loaded");
/// ```
#[macro_export]
macro_rules! feature_info {
    ($feature:ident, $($arg:tt)+) => {
        $crate::feature_event!($feature, ::tracing::Level::INFO, $($arg)+)
    };
}

/// Emit a debug event for a feature.
///
/// # Example
/// ```ignore
/// feature_debug!(OpAmp, "agent description sent");
/// ```
#[macro_export]
macro_rules! feature_debug {
    ($feature:ident, $($arg:tt)+) => {
        $crate::feature_event!($feature, ::tracing::Level::DEBUG, $($arg)+)
    };
}

/// Emit a trace event for a feature.
///
/// # Example
/// ```ignore
/// feature_trace!(Instrumentation, "hook entered for {}", function);
/// ```
#[macro_export]
macro_rules! feature_trace {
    ($feature:ident, $($arg:tt)+) => {
        $crate::feature_event!($feature, ::tracing::Level::TRACE, $($arg)+)
    };
}
