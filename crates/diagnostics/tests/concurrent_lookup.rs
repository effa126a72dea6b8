//! Integration tests for lookups shared across threads.
//!
//! Parsed configuration values are plain `Copy` data; many threads may parse
//! names and consult the same configuration concurrently.

use std::thread;

use diagnostics::{
    DiagnosticsConfig, InternalChecksLevel, LogFeature, LogLevel, is_enabled, parse_log_feature,
};

const THREADS: usize = 8;
const ROUNDS: usize = 1_000;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn configuration_types_are_send_and_sync() {
    assert_send_sync::<LogFeature>();
    assert_send_sync::<LogLevel>();
    assert_send_sync::<InternalChecksLevel>();
    assert_send_sync::<DiagnosticsConfig>();
    assert_send_sync::<diagnostics::InvalidConfigurationValue>();
}

#[test]
fn concurrent_name_parsing_agrees() {
    thread::scope(|scope| {
        for worker in 0..THREADS {
            scope.spawn(move || {
                for round in 0..ROUNDS {
                    let feature = LogFeature::VALUES[(worker + round) % LogFeature::VALUES.len()];
                    let lowered = feature.name().to_ascii_lowercase();
                    assert_eq!(parse_log_feature(&lowered), Ok(feature));
                }
            });
        }
    });
}

#[test]
fn shared_configuration_gives_identical_answers() {
    let mut config = DiagnosticsConfig::default();
    config
        .apply_log_levels("ALL=warning,COORDINATOR=trace")
        .expect("parse succeeds");
    config
        .apply_internal_checks_level("LEVEL_2")
        .expect("parse succeeds");
    let config = &config;

    thread::scope(|scope| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                scope.spawn(move || {
                    let checks = config.effective_checks_level(InternalChecksLevel::Off);
                    let mut answers = Vec::new();
                    for _ in 0..ROUNDS / 10 {
                        answers.push((
                            config.should_log(LogLevel::Trace, LogFeature::Coordinator),
                            config.should_log(LogLevel::Info, LogFeature::Config),
                            is_enabled(checks, InternalChecksLevel::Level2),
                            is_enabled(checks, InternalChecksLevel::Level3),
                        ));
                    }
                    answers
                })
            })
            .collect();

        for handle in handles {
            let answers = handle.join().expect("worker thread panicked");
            assert!(answers.iter().all(|&a| a == (true, false, true, false)));
        }
    });
}
