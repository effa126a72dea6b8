#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `diagnostics` provides the typed vocabulary the agent uses to configure its
//! own diagnostics: the [`LogFeature`] categories log records are tagged with,
//! the [`LogLevel`] severity scale, per-feature thresholds in
//! [`FeatureLevels`], and the [`InternalChecksLevel`] scale that gates
//! self-checks.
//!
//! # Design
//!
//! Every code is a `#[repr(u8)]` enum with a fixed table of canonical upper-case
//! names. Parsing matches names ignoring ASCII case and reports failures as
//! [`InvalidConfigurationValue`], which keeps the rejected input verbatim; no
//! parser substitutes a default. An unset internal checks level is an
//! `Option<InternalChecksLevel>` resolved explicitly with
//! [`InternalChecksLevel::resolve`].
//!
//! With the optional `tracing` feature, `FeatureFilter` applies
//! [`FeatureLevels`] to `tracing` events whose target is `feature::<NAME>`,
//! and the `feature_*!` macros emit such events.
//!
//! # Invariants
//!
//! - `parse(name(x)) == x` for every feature, level and checks level.
//! - Names are unique ignoring case.
//! - `InternalChecksLevel::is_enabled(c, m)` holds exactly when `c >= m`.
//! - All values are `Copy` and immutable once built, so they can be shared
//!   across threads without synchronisation.
//!
//! # Examples
//!
//! ```
//! use diagnostics::{InternalChecksLevel, LogFeature, LogLevel, DiagnosticsConfig};
//!
//! let mut config = DiagnosticsConfig::default();
//! config.apply_log_levels("ALL=warning, otel=debug").unwrap();
//! config.apply_internal_checks_level("level_2").unwrap();
//!
//! assert!(config.should_log(LogLevel::Debug, LogFeature::Otel));
//! assert!(!config.should_log(LogLevel::Debug, LogFeature::Transport));
//!
//! let checks = config.effective_checks_level(InternalChecksLevel::Off);
//! assert!(checks.enables(InternalChecksLevel::Level1));
//! assert!(!checks.enables(InternalChecksLevel::Level3));
//!
//! let err = LogFeature::parse("not-a-real-feature").unwrap_err();
//! assert_eq!(err.value(), "not-a-real-feature");
//! ```

mod checks;
mod config;
mod error;
mod feature;
mod feature_levels;
mod feature_set;
mod level;
mod macros;
#[cfg(feature = "tracing")]
mod tracing_bridge;
#[cfg(feature = "tracing")]
mod tracing_macros;

pub use checks::{InternalChecksLevel, is_enabled};
pub use config::DiagnosticsConfig;
pub use error::{InvalidConfigurationValue, ValueKind};
pub use feature::{FEATURE_COUNT, LogFeature, log_feature_name, parse_log_feature};
pub use feature_levels::FeatureLevels;
pub use feature_set::FeatureSet;
pub use level::LogLevel;
#[cfg(feature = "tracing")]
pub use tracing_bridge::{
    FEATURE_TARGET_PREFIX, FeatureFilter, feature_for_target, init_tracing,
    init_tracing_with_filter, log_level_for,
};
