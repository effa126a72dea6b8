//! crates/diagnostics/src/feature_levels.rs
//! Per-feature log level thresholds.

use ::core::fmt;
use ::core::str::FromStr;

use crate::error::{InvalidConfigurationValue, ValueKind};
use crate::feature::{FEATURE_COUNT, LogFeature};
use crate::level::LogLevel;

/// Log level thresholds for every [`LogFeature`].
///
/// The threshold stored for [`LogFeature::All`] is the default; any other
/// feature either carries its own override or falls back to that default.
/// Storage is a fixed array indexed by feature ordinal, so the value is `Copy`
/// and lookups never allocate.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FeatureLevels {
    default: LogLevel,
    overrides: [Option<LogLevel>; FEATURE_COUNT],
}

impl FeatureLevels {
    /// Creates a configuration where every feature uses `default`.
    #[must_use]
    pub const fn new(default: LogLevel) -> Self {
        Self {
            default,
            overrides: [None; FEATURE_COUNT],
        }
    }

    /// Returns the default threshold applied to features without an override.
    #[must_use]
    pub const fn default_level(&self) -> LogLevel {
        self.default
    }

    /// Returns the override recorded for `feature`, if any.
    #[must_use]
    pub const fn override_for(&self, feature: LogFeature) -> Option<LogLevel> {
        match feature {
            LogFeature::All => None,
            other => self.overrides[other.index()],
        }
    }

    /// Get the effective threshold for a feature.
    #[must_use]
    pub const fn get(&self, feature: LogFeature) -> LogLevel {
        match self.override_for(feature) {
            Some(level) => level,
            None => self.default,
        }
    }

    /// Set the threshold for a feature.
    ///
    /// Setting [`LogFeature::All`] changes the default and keeps existing
    /// overrides.
    pub fn set(&mut self, feature: LogFeature, level: LogLevel) {
        match feature {
            LogFeature::All => self.default = level,
            other => self.overrides[other.index()] = Some(level),
        }
    }

    /// Remove the override for a feature so it follows the default again.
    pub fn clear(&mut self, feature: LogFeature) {
        if feature != LogFeature::All {
            self.overrides[feature.index()] = None;
        }
    }

    /// Set every feature to the specified level, discarding overrides.
    pub fn set_all(&mut self, level: LogLevel) {
        self.default = level;
        self.overrides = [None; FEATURE_COUNT];
    }

    /// Reports whether a message at `level` tagged with `feature` should be emitted.
    #[doc(alias = "doesFeatureMeetsLevelCondition")]
    #[must_use]
    pub fn meets_level_condition(&self, level: LogLevel, feature: LogFeature) -> bool {
        self.get(feature).permits(level)
    }

    /// Returns the most verbose threshold configured for any feature.
    #[must_use]
    pub fn max_level(&self) -> LogLevel {
        self.overrides
            .iter()
            .flatten()
            .copied()
            .fold(self.default, LogLevel::max)
    }

    /// Iterates over features that carry an explicit override, in ordinal order.
    pub fn overrides(&self) -> impl Iterator<Item = (LogFeature, LogLevel)> + '_ {
        LogFeature::VALUES
            .iter()
            .filter_map(|&feature| self.override_for(feature).map(|level| (feature, level)))
    }

    /// Parses a comma-separated list of `FEATURE=LEVEL` entries.
    ///
    /// `ALL=LEVEL` sets the default. Specific overrides win over the default
    /// whatever their position in the list. Whitespace around entries, names
    /// and levels is ignored, and empty entries are skipped. The returned
    /// configuration starts from [`LogLevel::Off`].
    pub fn parse(spec: &str) -> Result<Self, InvalidConfigurationValue> {
        let mut levels = Self::default();
        levels.apply(spec)?;
        Ok(levels)
    }

    /// Applies a comma-separated list of `FEATURE=LEVEL` entries on top of the
    /// current configuration.
    ///
    /// Entries are validated before anything is applied, so a failing list
    /// leaves `self` untouched.
    pub fn apply(&mut self, spec: &str) -> Result<(), InvalidConfigurationValue> {
        let mut updated = *self;
        for entry in spec.split(',') {
            if entry.trim().is_empty() {
                continue;
            }
            let (feature, level) = parse_entry(entry)?;
            updated.set(feature, level);
            #[cfg(feature = "tracing")]
            tracing::trace!(feature = feature.name(), level = level.name(), "applied log feature level");
        }
        *self = updated;
        Ok(())
    }
}

/// Parse an entry like "OTEL=debug" into (Otel, Debug).
///
/// Errors carry the offending entry or token as written, surrounding
/// whitespace included.
fn parse_entry(entry: &str) -> Result<(LogFeature, LogLevel), InvalidConfigurationValue> {
    let Some((name, level)) = entry.split_once('=') else {
        return Err(InvalidConfigurationValue::new(
            ValueKind::FeatureLevelEntry,
            entry,
        ));
    };

    let feature = LogFeature::parse(name.trim())
        .map_err(|_| InvalidConfigurationValue::new(ValueKind::LogFeature, name))?;
    let level = LogLevel::parse(level)?;
    Ok((feature, level))
}

impl fmt::Display for FeatureLevels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", LogFeature::All, self.default)?;
        for (feature, level) in self.overrides() {
            write!(f, ",{feature}={level}")?;
        }
        Ok(())
    }
}

impl FromStr for FeatureLevels {
    type Err = InvalidConfigurationValue;

    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        Self::parse(spec)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FeatureLevels {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FeatureLevels {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let spec = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&spec).map_err(serde::de::Error::custom)
    }
}
