//! crates/diagnostics/src/checks.rs
//! Ordered scale gating internal consistency checks.

use ::core::fmt;
use ::core::str::FromStr;

use crate::error::{InvalidConfigurationValue, ValueKind};

/// How much internal self-checking the agent performs.
///
/// Levels are totally ordered: `Off < Level1 < Level2 < Level3 < All`. A check
/// tagged with a minimum level runs when the configured level is at least that
/// minimum. The "not set" state is modelled as `Option<InternalChecksLevel>`
/// and resolved with [`InternalChecksLevel::resolve`] before gating.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum InternalChecksLevel {
    #[doc(alias = "OFF")]
    /// No internal checks.
    Off = 0,
    #[doc(alias = "LEVEL_1")]
    /// Cheap checks only.
    Level1 = 1,
    #[doc(alias = "LEVEL_2")]
    /// Moderately expensive checks.
    Level2 = 2,
    #[doc(alias = "LEVEL_3")]
    /// Expensive checks.
    Level3 = 3,
    #[doc(alias = "ALL")]
    /// Every check.
    All = 4,
}

impl InternalChecksLevel {
    /// Every level in ascending order.
    pub const VALUES: [InternalChecksLevel; 5] = [
        InternalChecksLevel::Off,
        InternalChecksLevel::Level1,
        InternalChecksLevel::Level2,
        InternalChecksLevel::Level3,
        InternalChecksLevel::All,
    ];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Level1 => "LEVEL_1",
            Self::Level2 => "LEVEL_2",
            Self::Level3 => "LEVEL_3",
            Self::All => "ALL",
        }
    }

    /// Returns the ordinal.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Constructs a level from its ordinal.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Level1),
            2 => Some(Self::Level2),
            3 => Some(Self::Level3),
            4 => Some(Self::All),
            _ => None,
        }
    }

    /// Parses a level from its name or ordinal.
    ///
    /// Names match ignoring ASCII case. Ordinals are the single digits `0`
    /// to `4`; signs and leading zeros are rejected. Surrounding whitespace is
    /// ignored. The error carries the untrimmed input.
    pub fn parse(text: &str) -> Result<Self, InvalidConfigurationValue> {
        let trimmed = text.trim();
        let by_name = Self::VALUES
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed));
        by_name
            .or_else(|| match trimmed.as_bytes() {
                [digit @ b'0'..=b'4'] => Self::from_u8(digit - b'0'),
                _ => None,
            })
            .ok_or_else(|| InvalidConfigurationValue::new(ValueKind::InternalChecksLevel, text))
    }

    /// Resolves an optional configured level, falling back to `default`.
    #[must_use]
    pub const fn resolve(configured: Option<Self>, default: Self) -> Self {
        match configured {
            Some(level) => level,
            None => default,
        }
    }

    /// Reports whether checks tagged `minimum` run under `configured`.
    #[must_use]
    pub const fn is_enabled(configured: Self, minimum: Self) -> bool {
        configured as u8 >= minimum as u8
    }

    /// Reports whether checks tagged `minimum` run under this level.
    #[must_use]
    pub const fn enables(self, minimum: Self) -> bool {
        Self::is_enabled(self, minimum)
    }
}

/// Reports whether a check tagged with `minimum` runs when the agent is
/// configured with `configured`.
#[doc(alias = "isInternalChecksLevelEnabled")]
#[must_use]
pub const fn is_enabled(configured: InternalChecksLevel, minimum: InternalChecksLevel) -> bool {
    InternalChecksLevel::is_enabled(configured, minimum)
}

impl fmt::Display for InternalChecksLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InternalChecksLevel {
    type Err = InvalidConfigurationValue;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

impl TryFrom<u8> for InternalChecksLevel {
    type Error = InvalidConfigurationValue;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_u8(value).ok_or_else(|| {
            InvalidConfigurationValue::new(ValueKind::InternalChecksLevel, &value.to_string())
        })
    }
}

impl From<InternalChecksLevel> for u8 {
    fn from(value: InternalChecksLevel) -> Self {
        value.as_u8()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for InternalChecksLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Accepts a level name or an integer ordinal.
#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for InternalChecksLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ChecksLevelVisitor)
    }
}

#[cfg(feature = "serde")]
struct ChecksLevelVisitor;

#[cfg(feature = "serde")]
impl ChecksLevelVisitor {
    fn out_of_range<E: serde::de::Error>(value: impl fmt::Display) -> E {
        E::custom(InvalidConfigurationValue::new(
            ValueKind::InternalChecksLevel,
            &value.to_string(),
        ))
    }
}

#[cfg(feature = "serde")]
impl serde::de::Visitor<'_> for ChecksLevelVisitor {
    type Value = InternalChecksLevel;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an internal checks level name or an integer from 0 to 4")
    }

    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<Self::Value, E> {
        InternalChecksLevel::parse(text).map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
        u8::try_from(value)
            .ok()
            .and_then(InternalChecksLevel::from_u8)
            .ok_or_else(|| Self::out_of_range(value))
    }

    fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
        match u64::try_from(value) {
            Ok(value) => serde::de::Visitor::visit_u64(self, value),
            Err(_) => Err(Self::out_of_range(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use InternalChecksLevel::{All, Level1, Level2, Level3, Off};

    #[test]
    fn ordering_is_total_and_ascending() {
        assert!(Off < Level1);
        assert!(Level1 < Level2);
        assert!(Level2 < Level3);
        assert!(Level3 < All);
    }

    #[test]
    fn documented_gating_examples() {
        assert!(is_enabled(Level2, Level1));
        assert!(is_enabled(Level2, Level2));
        assert!(!is_enabled(Level2, Level3));
        assert!(!is_enabled(Level1, Level2));
        assert!(!is_enabled(Off, Level1));
        assert!(is_enabled(All, Level3));
    }

    #[test]
    fn off_minimum_is_always_enabled() {
        for configured in InternalChecksLevel::VALUES {
            assert!(is_enabled(configured, Off));
        }
    }

    #[test]
    fn all_configured_enables_everything() {
        for minimum in InternalChecksLevel::VALUES {
            assert!(is_enabled(All, minimum));
        }
    }

    #[test]
    fn gating_matches_ordering() {
        for configured in InternalChecksLevel::VALUES {
            for minimum in InternalChecksLevel::VALUES {
                assert_eq!(is_enabled(configured, minimum), configured >= minimum);
                assert_eq!(configured.enables(minimum), configured >= minimum);
            }
        }
    }

    #[test]
    fn resolve_prefers_configured() {
        assert_eq!(InternalChecksLevel::resolve(Some(Level3), Off), Level3);
        assert_eq!(InternalChecksLevel::resolve(None, Level1), Level1);
        assert_eq!(InternalChecksLevel::resolve(Some(Off), All), Off);
    }

    #[test]
    fn parse_names() {
        assert_eq!(InternalChecksLevel::parse("off"), Ok(Off));
        assert_eq!(InternalChecksLevel::parse("Level_1"), Ok(Level1));
        assert_eq!(InternalChecksLevel::parse(" LEVEL_3 "), Ok(Level3));
        assert_eq!(InternalChecksLevel::parse("all"), Ok(All));
    }

    #[test]
    fn parse_ordinals() {
        for level in InternalChecksLevel::VALUES {
            assert_eq!(InternalChecksLevel::parse(&level.as_u8().to_string()), Ok(level));
        }
    }

    #[test]
    fn parse_rejects_out_of_range_and_unknown() {
        for text in ["5", "-1", "+3", "03", "004", "level_4", "", "LEVEL1"] {
            let err = InternalChecksLevel::parse(text).unwrap_err();
            assert_eq!(err.kind(), ValueKind::InternalChecksLevel);
            assert_eq!(err.value(), text);
        }
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(InternalChecksLevel::try_from(2), Ok(Level2));
        let err = InternalChecksLevel::try_from(9).unwrap_err();
        assert_eq!(err.value(), "9");
    }

    #[test]
    fn display_matches_name() {
        assert_eq!(Level2.to_string(), "LEVEL_2");
        let reparsed: InternalChecksLevel = Level2.to_string().parse().unwrap();
        assert_eq!(reparsed, Level2);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn serializes_as_canonical_name() {
            assert_eq!(serde_json::to_string(&Level3).unwrap(), "\"LEVEL_3\"");
        }

        #[test]
        fn deserializes_names_and_integers() {
            let by_name: InternalChecksLevel = serde_json::from_str("\"level_1\"").unwrap();
            assert_eq!(by_name, Level1);
            let by_ordinal: InternalChecksLevel = serde_json::from_str("2").unwrap();
            assert_eq!(by_ordinal, Level2);
            let quoted_ordinal: InternalChecksLevel = serde_json::from_str("\"4\"").unwrap();
            assert_eq!(quoted_ordinal, All);
        }

        #[test]
        fn deserialize_rejects_out_of_range_integers() {
            let err = serde_json::from_str::<InternalChecksLevel>("9").unwrap_err();
            assert!(err.to_string().contains("unknown internal checks level: \"9\""));

            let err = serde_json::from_str::<InternalChecksLevel>("-1").unwrap_err();
            assert!(err.to_string().contains("unknown internal checks level: \"-1\""));

            let err = serde_json::from_str::<InternalChecksLevel>("256").unwrap_err();
            assert!(err.to_string().contains("unknown internal checks level: \"256\""));
        }

        #[test]
        fn deserialize_rejects_other_types() {
            assert!(serde_json::from_str::<InternalChecksLevel>("true").is_err());
            assert!(serde_json::from_str::<InternalChecksLevel>("2.5").is_err());
        }
    }
}
