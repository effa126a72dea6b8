//! crates/diagnostics/src/tracing_bridge.rs
//! Bridge between the tracing crate and per-feature log levels.
//!
//! Events are attributed to a [`LogFeature`] through their target: a target of
//! the form `feature::<NAME>` (optionally followed by `::<more>`) selects the
//! named feature, and every other target counts as [`LogFeature::All`]. The
//! event's tracing level is translated to a [`LogLevel`] and checked against
//! the configured [`FeatureLevels`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use diagnostics::{FeatureLevels, init_tracing};
//!
//! let levels = FeatureLevels::parse("ALL=warning,OTEL=debug")?;
//! init_tracing(levels)?;
//!
//! tracing::debug!(target: "feature::OTEL", "exporter started");
//! ```

use tracing::subscriber::Interest;
use tracing::{Level, Metadata};
use tracing_subscriber::layer::{Context, Filter, Layer};
use tracing_subscriber::util::TryInitError;

use crate::feature::LogFeature;
use crate::feature_levels::FeatureLevels;
use crate::level::LogLevel;

/// Target prefix that attributes an event to a specific feature.
pub const FEATURE_TARGET_PREFIX: &str = "feature::";

/// A per-layer filter admitting events whose feature threshold permits them.
#[derive(Clone, Copy, Debug, Default)]
pub struct FeatureFilter {
    levels: FeatureLevels,
}

impl FeatureFilter {
    /// Create a filter enforcing `levels`.
    #[must_use]
    pub const fn new(levels: FeatureLevels) -> Self {
        Self { levels }
    }

    /// Returns the thresholds this filter enforces.
    #[must_use]
    pub const fn levels(&self) -> &FeatureLevels {
        &self.levels
    }

    /// Reports whether an event with the given target and level passes.
    #[must_use]
    pub fn admits(&self, target: &str, level: &Level) -> bool {
        self.levels
            .meets_level_condition(log_level_for(level), feature_for_target(target))
    }
}

/// Map a tracing target to the feature it is attributed to.
///
/// Targets outside the `feature::` namespace, or naming an unknown feature,
/// map to [`LogFeature::All`].
#[must_use]
pub fn feature_for_target(target: &str) -> LogFeature {
    let Some(rest) = target.strip_prefix(FEATURE_TARGET_PREFIX) else {
        return LogFeature::All;
    };
    let name = rest.split_once("::").map_or(rest, |(name, _)| name);
    LogFeature::parse(name).unwrap_or(LogFeature::All)
}

/// Map a tracing level to a log level.
///
/// Tracing has no counterpart to [`LogLevel::Critical`]; critical records are
/// emitted at `ERROR`.
#[must_use]
pub const fn log_level_for(level: &Level) -> LogLevel {
    match *level {
        Level::ERROR => LogLevel::Error,
        Level::WARN => LogLevel::Warning,
        Level::INFO => LogLevel::Info,
        Level::DEBUG => LogLevel::Debug,
        Level::TRACE => LogLevel::Trace,
    }
}

impl<S> Filter<S> for FeatureFilter {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        self.admits(meta.target(), meta.level())
    }

    fn callsite_enabled(&self, _meta: &'static Metadata<'static>) -> Interest {
        // Thresholds belong to the filter instance, not the callsite.
        Interest::sometimes()
    }
}

/// Install a global `fmt` subscriber gated by `levels`.
///
/// Returns an error instead of panicking when a global subscriber is already
/// installed.
pub fn init_tracing(levels: FeatureLevels) -> Result<(), TryInitError> {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(FeatureFilter::new(levels));

    tracing_subscriber::registry().with(layer).try_init()
}

/// Install a global subscriber gated by `levels` and an additional filter.
///
/// # Example
///
/// ```rust,ignore
/// use diagnostics::{FeatureLevels, init_tracing_with_filter};
/// use tracing_subscriber::EnvFilter;
///
/// let levels = FeatureLevels::parse("ALL=debug")?;
/// init_tracing_with_filter(levels, EnvFilter::from_default_env())?;
/// ```
pub fn init_tracing_with_filter<F>(levels: FeatureLevels, filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_filter(FeatureFilter::new(levels));

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
}
