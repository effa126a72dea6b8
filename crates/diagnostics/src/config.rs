//! crates/diagnostics/src/config.rs
//! Diagnostics configuration combining log levels and internal checks.

use crate::checks::InternalChecksLevel;
use crate::error::InvalidConfigurationValue;
use crate::feature::LogFeature;
use crate::feature_levels::FeatureLevels;
use crate::level::LogLevel;

/// Combined diagnostics configuration.
///
/// Built by the agent's configuration loader from raw option strings; this
/// type only owns the typed values and the parsing of each option.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DiagnosticsConfig {
    /// Per-feature log level thresholds.
    pub log_levels: FeatureLevels,
    /// Configured internal checks level; `None` when the option is not set.
    pub internal_checks: Option<InternalChecksLevel>,
}

impl DiagnosticsConfig {
    /// Create a configuration logging every feature at `level` with internal
    /// checks unset.
    #[must_use]
    pub const fn with_log_level(level: LogLevel) -> Self {
        Self {
            log_levels: FeatureLevels::new(level),
            internal_checks: None,
        }
    }

    /// Apply a `FEATURE=LEVEL` list (e.g., "ALL=info,OTEL=debug").
    ///
    /// On error the current log levels are kept.
    pub fn apply_log_levels(&mut self, spec: &str) -> Result<(), InvalidConfigurationValue> {
        self.log_levels.apply(spec)
    }

    /// Apply the internal checks level option (e.g., "level_2" or "2").
    ///
    /// An empty or whitespace-only value unsets the option.
    pub fn apply_internal_checks_level(
        &mut self,
        value: &str,
    ) -> Result<(), InvalidConfigurationValue> {
        if value.trim().is_empty() {
            self.internal_checks = None;
            return Ok(());
        }

        let level = InternalChecksLevel::parse(value)?;
        #[cfg(feature = "tracing")]
        tracing::trace!(level = level.name(), "applied internal checks level");
        self.internal_checks = Some(level);
        Ok(())
    }

    /// Returns the internal checks level in force, substituting `default`
    /// when the option is not set.
    #[must_use]
    pub const fn effective_checks_level(&self, default: InternalChecksLevel) -> InternalChecksLevel {
        InternalChecksLevel::resolve(self.internal_checks, default)
    }

    /// Shorthand for [`FeatureLevels::meets_level_condition`].
    #[must_use]
    pub fn should_log(&self, level: LogLevel, feature: LogFeature) -> bool {
        self.log_levels.meets_level_condition(level, feature)
    }
}
