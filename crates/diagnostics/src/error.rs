//! crates/diagnostics/src/error.rs
//! Error raised when a configuration value cannot be mapped to a typed code.

use ::core::fmt;

use thiserror::Error;

/// Category of configuration value that failed to parse.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ValueKind {
    /// A diagnostic log feature name such as `OTEL`.
    LogFeature,
    /// A log level name such as `DEBUG`.
    LogLevel,
    /// An internal checks level name or ordinal.
    InternalChecksLevel,
    /// A `FEATURE=LEVEL` entry of a per-feature level list.
    FeatureLevelEntry,
}

impl ValueKind {
    /// Returns the human-readable description used in error messages.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::LogFeature => "log feature",
            Self::LogLevel => "log level",
            Self::InternalChecksLevel => "internal checks level",
            Self::FeatureLevelEntry => "log feature level entry",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Error returned when a configuration value matches no registered code.
///
/// The offending input is stored verbatim so the configuration loader can
/// report exactly what the user wrote. Nothing in this crate substitutes a
/// default on failure.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unknown {kind}: \"{value}\"")]
pub struct InvalidConfigurationValue {
    kind: ValueKind,
    value: String,
}

impl InvalidConfigurationValue {
    /// Creates an error recording the kind of value and the offending input.
    #[must_use]
    pub fn new(kind: ValueKind, value: &str) -> Self {
        Self {
            kind,
            value: value.to_owned(),
        }
    }

    /// Returns the kind of value that failed to parse.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        self.kind
    }

    /// Returns the input that failed to parse, exactly as supplied.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}
