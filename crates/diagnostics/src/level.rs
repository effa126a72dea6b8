//! crates/diagnostics/src/level.rs
//! Severity scale used by the agent logger.

use ::core::fmt;
use ::core::str::FromStr;

use crate::error::{InvalidConfigurationValue, ValueKind};

/// Log severity, ordered from least to most verbose.
///
/// A configured level acts as a threshold: every message whose level is at or
/// below it is emitted. [`LogLevel::Off`] is a configuration-only value and is
/// never attached to a message.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogLevel {
    /// Logging disabled.
    #[default]
    Off = 0,
    /// Unrecoverable failures.
    Critical = 1,
    /// Errors.
    Error = 2,
    /// Warnings.
    Warning = 3,
    /// Informational messages.
    Info = 4,
    /// Debugging output.
    Debug = 5,
    /// Very detailed tracing output.
    Trace = 6,
}

impl LogLevel {
    /// Every level in ascending order of verbosity.
    pub const VALUES: [LogLevel; 7] = [
        LogLevel::Off,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::Trace,
    ];

    /// Returns the canonical upper-case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Critical => "CRITICAL",
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the numeric representation.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Constructs a level from its numeric representation.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Off),
            1 => Some(Self::Critical),
            2 => Some(Self::Error),
            3 => Some(Self::Warning),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Parses a level name, ignoring surrounding whitespace and ASCII case.
    ///
    /// The error carries the untrimmed input.
    pub fn parse(text: &str) -> Result<Self, InvalidConfigurationValue> {
        let trimmed = text.trim();
        Self::VALUES
            .iter()
            .copied()
            .find(|level| level.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| InvalidConfigurationValue::new(ValueKind::LogLevel, text))
    }

    /// Reports whether a message logged at `message_level` passes this threshold.
    #[must_use]
    pub fn permits(self, message_level: Self) -> bool {
        message_level != Self::Off && message_level <= self
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = InvalidConfigurationValue;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::parse(text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LogLevel {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LogLevel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}
