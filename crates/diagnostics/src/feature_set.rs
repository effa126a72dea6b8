//! crates/diagnostics/src/feature_set.rs
//! Sets of log features parsed from comma-separated lists.

use ::core::fmt;
use ::core::str::FromStr;

use crate::error::{InvalidConfigurationValue, ValueKind};
use crate::feature::LogFeature;

/// A set of concrete log features.
///
/// [`LogFeature::All`] is never stored as a member; inserting it selects every
/// concrete feature instead.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct FeatureSet {
    bits: u16,
}

impl FeatureSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Returns a set holding every concrete feature.
    #[must_use]
    pub const fn all() -> Self {
        let mut bits = 0u16;
        let mut index = 1;
        while index < LogFeature::VALUES.len() {
            bits |= 1 << index;
            index += 1;
        }
        Self { bits }
    }

    const fn bit(feature: LogFeature) -> u16 {
        1 << feature.as_u8()
    }

    /// Adds a feature; adding [`LogFeature::All`] selects every feature.
    pub fn insert(&mut self, feature: LogFeature) {
        match feature {
            LogFeature::All => *self = Self::all(),
            other => self.bits |= Self::bit(other),
        }
    }

    /// Removes a feature; removing [`LogFeature::All`] empties the set.
    pub fn remove(&mut self, feature: LogFeature) {
        match feature {
            LogFeature::All => *self = Self::EMPTY,
            other => self.bits &= !Self::bit(other),
        }
    }

    /// Reports whether `feature` is selected.
    ///
    /// For [`LogFeature::All`] this asks whether every feature is selected.
    #[must_use]
    pub const fn contains(&self, feature: LogFeature) -> bool {
        match feature {
            LogFeature::All => self.bits == Self::all().bits,
            other => self.bits & Self::bit(other) != 0,
        }
    }

    /// Reports whether no feature is selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of selected features.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterates over the selected features in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = LogFeature> + '_ {
        LogFeature::VALUES
            .iter()
            .copied()
            .filter(|&feature| feature != LogFeature::All && self.contains(feature))
    }

    /// Parses a comma-separated feature list such as `"OTEL, config"`.
    ///
    /// Tokens are trimmed and empty tokens skipped. The first unknown name
    /// aborts parsing; the error carries that token as written, surrounding
    /// whitespace included.
    pub fn parse(list: &str) -> Result<Self, InvalidConfigurationValue> {
        let mut set = Self::EMPTY;
        for token in list.split(',') {
            let name = token.trim();
            if name.is_empty() {
                continue;
            }
            let feature = LogFeature::parse(name)
                .map_err(|_| InvalidConfigurationValue::new(ValueKind::LogFeature, token))?;
            set.insert(feature);
        }
        Ok(set)
    }
}

impl FromIterator<LogFeature> for FeatureSet {
    fn from_iter<I: IntoIterator<Item = LogFeature>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for feature in iter {
            set.insert(feature);
        }
        set
    }
}

impl fmt::Display for FeatureSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.contains(LogFeature::All) {
            return f.write_str(LogFeature::All.name());
        }
        for (position, feature) in self.iter().enumerate() {
            if position > 0 {
                f.write_str(",")?;
            }
            f.write_str(feature.name())?;
        }
        Ok(())
    }
}

impl FromStr for FeatureSet {
    type Err = InvalidConfigurationValue;

    fn from_str(list: &str) -> Result<Self, Self::Err> {
        Self::parse(list)
    }
}
