//! Integration tests for per-feature log level lists.
//!
//! The agent accepts a list such as `ALL=info,OTEL=debug` where `ALL` sets the
//! default threshold and other entries override it for one feature.

use diagnostics::{FeatureLevels, LogFeature, LogLevel, ValueKind};
use proptest::prelude::*;

fn any_feature() -> impl Strategy<Value = LogFeature> {
    proptest::sample::select(LogFeature::VALUES.to_vec())
}

fn any_level() -> impl Strategy<Value = LogLevel> {
    proptest::sample::select(LogLevel::VALUES.to_vec())
}

// ============================================================================
// Parsing Tests
// ============================================================================

/// Verifies a typical configuration value.
#[test]
fn default_with_one_override() {
    let levels = FeatureLevels::parse("ALL=info,OTEL=debug").expect("parse succeeds");

    assert_eq!(levels.get(LogFeature::Otel), LogLevel::Debug);
    for feature in LogFeature::VALUES {
        if feature != LogFeature::Otel {
            assert_eq!(levels.get(feature), LogLevel::Info, "{feature}");
        }
    }
}

/// Verifies that whitespace and case are ignored throughout.
#[test]
fn whitespace_and_case_are_ignored() {
    let levels = FeatureLevels::parse("  all = Warning ,\topamp=TRACE  ").expect("parse succeeds");
    assert_eq!(levels.default_level(), LogLevel::Warning);
    assert_eq!(levels.get(LogFeature::OpAmp), LogLevel::Trace);
}

/// Verifies that the last entry for the same feature wins.
#[test]
fn repeated_entries_last_wins() {
    let levels = FeatureLevels::parse("OTEL=debug,OTEL=error").expect("parse succeeds");
    assert_eq!(levels.get(LogFeature::Otel), LogLevel::Error);
}

/// Verifies that an override may silence a feature below the default.
#[test]
fn override_can_lower_threshold() {
    let levels = FeatureLevels::parse("ALL=trace,TRANSPORT=off").expect("parse succeeds");
    assert!(!levels.meets_level_condition(LogLevel::Critical, LogFeature::Transport));
    assert!(levels.meets_level_condition(LogLevel::Trace, LogFeature::Module));
    assert_eq!(levels.max_level(), LogLevel::Trace);
}

// ============================================================================
// Error Tests
// ============================================================================

#[test]
fn entry_without_separator() {
    let err = FeatureLevels::parse("ALL=info, debug").unwrap_err();
    assert_eq!(err.kind(), ValueKind::FeatureLevelEntry);
    assert_eq!(err.value(), " debug");
}

#[test]
fn unknown_feature_in_entry() {
    let err = FeatureLevels::parse("ALL=info,REQUESTS=debug").unwrap_err();
    assert_eq!(err.kind(), ValueKind::LogFeature);
    assert_eq!(err.value(), "REQUESTS");
}

#[test]
fn unknown_level_in_entry() {
    let err = FeatureLevels::parse("ALL=chatty").unwrap_err();
    assert_eq!(err.kind(), ValueKind::LogLevel);
    assert_eq!(err.value(), "chatty");
}

#[test]
fn failed_apply_keeps_previous_levels() {
    let mut levels = FeatureLevels::parse("ALL=error").expect("parse succeeds");
    let before = levels;
    assert!(levels.apply("OTEL=debug,=info").is_err());
    assert_eq!(levels, before);
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    #[test]
    fn display_parses_back(
        default in any_level(),
        overrides in proptest::collection::vec((any_feature(), any_level()), 0..=8),
    ) {
        let mut levels = FeatureLevels::new(default);
        for (feature, level) in overrides {
            levels.set(feature, level);
        }
        let rendered = levels.to_string();
        prop_assert_eq!(FeatureLevels::parse(&rendered), Ok(levels));
    }

    #[test]
    fn meets_level_condition_matches_threshold(
        default in any_level(),
        feature in any_feature(),
        message in any_level(),
    ) {
        let levels = FeatureLevels::new(default);
        let expected = message != LogLevel::Off && message <= default;
        prop_assert_eq!(levels.meets_level_condition(message, feature), expected);
    }
}
