//! crates/diagnostics/src/feature.rs
//! Diagnostic log features and their canonical names.

use ::core::fmt;
use ::core::str::FromStr;

use crate::error::{InvalidConfigurationValue, ValueKind};

/// Diagnostic subsystem whose logging can be enabled independently.
///
/// The ordinal values are the codes exchanged with the agent's scripting layer,
/// which identifies features by integer when it forwards log records to the
/// native logger. [`LogFeature::All`] is a pseudo-feature standing for every
/// feature at once; it is what per-feature level lists use to set the default.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LogFeature {
    #[doc(alias = "ALL")]
    /// Every feature.
    All = 0,
    #[doc(alias = "MODULE")]
    /// Extension module lifecycle (startup, shutdown, request hooks).
    Module = 1,
    #[doc(alias = "REQUEST")]
    /// Per-request processing.
    Request = 2,
    #[doc(alias = "TRANSPORT")]
    /// Outbound HTTP transport.
    Transport = 3,
    #[doc(alias = "INSTRUMENTATION")]
    /// Instrumentation hooks placed on user code.
    Instrumentation = 4,
    #[doc(alias = "OTEL")]
    /// Records forwarded from the OpenTelemetry SDK's own logger.
    Otel = 5,
    #[doc(alias = "DEPGUARD")]
    /// Dependency autoloader guard.
    DepGuard = 6,
    #[doc(alias = "CONFIG")]
    /// Configuration loading and remote configuration updates.
    Config = 7,
    #[doc(alias = "COORDINATOR")]
    /// Coordinator process and its shared-memory channel.
    Coordinator = 8,
    #[doc(alias = "OPAMP")]
    /// OpAMP client.
    OpAmp = 9,
    #[doc(alias = "OTLPEXPORT")]
    /// OTLP serialization and export.
    OtlpExport = 10,
}

/// Number of [`LogFeature`] variants, including [`LogFeature::All`].
pub const FEATURE_COUNT: usize = LogFeature::VALUES.len();

impl LogFeature {
    /// Every feature in ordinal order.
    ///
    /// Name lookup scans this list, so it must contain each variant exactly
    /// once; the unit tests enforce that together with [`LogFeature::from_u8`].
    pub const VALUES: [LogFeature; 11] = [
        LogFeature::All,
        LogFeature::Module,
        LogFeature::Request,
        LogFeature::Transport,
        LogFeature::Instrumentation,
        LogFeature::Otel,
        LogFeature::DepGuard,
        LogFeature::Config,
        LogFeature::Coordinator,
        LogFeature::OpAmp,
        LogFeature::OtlpExport,
    ];

    /// Returns the ordered list of all features.
    #[must_use]
    pub const fn values() -> &'static [LogFeature; FEATURE_COUNT] {
        &Self::VALUES
    }

    /// Returns the numeric code of the feature.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns the index of the feature within [`LogFeature::VALUES`].
    #[must_use]
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Constructs a feature from its numeric code.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::All),
            1 => Some(Self::Module),
            2 => Some(Self::Request),
            3 => Some(Self::Transport),
            4 => Some(Self::Instrumentation),
            5 => Some(Self::Otel),
            6 => Some(Self::DepGuard),
            7 => Some(Self::Config),
            8 => Some(Self::Coordinator),
            9 => Some(Self::OpAmp),
            10 => Some(Self::OtlpExport),
            _ => None,
        }
    }

    /// Returns the canonical display name of the feature.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::All => "ALL",
            Self::Module => "MODULE",
            Self::Request => "REQUEST",
            Self::Transport => "TRANSPORT",
            Self::Instrumentation => "INSTRUMENTATION",
            Self::Otel => "OTEL",
            Self::DepGuard => "DEPGUARD",
            Self::Config => "CONFIG",
            Self::Coordinator => "COORDINATOR",
            Self::OpAmp => "OPAMP",
            Self::OtlpExport => "OTLPEXPORT",
        }
    }

    /// Parses a feature name, ignoring ASCII case.
    ///
    /// The input is not trimmed. On failure the error carries `name` verbatim.
    pub fn parse(name: &str) -> Result<Self, InvalidConfigurationValue> {
        Self::VALUES
            .iter()
            .copied()
            .find(|feature| feature.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| InvalidConfigurationValue::new(ValueKind::LogFeature, name))
    }
}

/// Parses a log feature name, ignoring ASCII case.
#[doc(alias = "parseLogFeature")]
pub fn parse_log_feature(name: &str) -> Result<LogFeature, InvalidConfigurationValue> {
    LogFeature::parse(name)
}

/// Returns the canonical name of a log feature.
#[doc(alias = "name_of")]
#[must_use]
pub const fn log_feature_name(feature: LogFeature) -> &'static str {
    feature.name()
}

impl fmt::Display for LogFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogFeature {
    type Err = InvalidConfigurationValue;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::parse(name)
    }
}

impl From<LogFeature> for u8 {
    fn from(value: LogFeature) -> Self {
        value.as_u8()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for LogFeature {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for LogFeature {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        Self::parse(&name).map_err(serde::de::Error::custom)
    }
}
