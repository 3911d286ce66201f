//! Unit tests for crossover-pair verification

use chrono::{DateTime, TimeZone, Utc};
use entry_signal::models::{CrossoverEvent, StochReading};
use entry_signal::signals::{
    is_blacklisted, scan_entries, verify_latest, verify_pair, Disqualification, Verdict,
};

fn at(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

fn crossover(secs: i64, macd: f64, rsi: f64, k: f64, d: f64) -> CrossoverEvent {
    CrossoverEvent::new(at(secs), macd, rsi, k, d)
}

fn baseline() -> CrossoverEvent {
    crossover(1, 0.1, 45.0, 20.0, 30.0)
}

#[test]
fn test_empty_sequence_has_no_previous() {
    assert_eq!(
        verify_latest(&[]),
        Verdict::Skip(Disqualification::NoPreviousCrossover)
    );
}

#[test]
fn test_single_crossover_has_no_previous() {
    let single = [crossover(1, 5.0, 90.0, 60.0, 40.0)];
    assert_eq!(
        verify_latest(&single),
        Verdict::Skip(Disqualification::NoPreviousCrossover)
    );
}

#[test]
fn test_rising_pair_is_entry() {
    let crossovers = [baseline(), crossover(2, 0.3, 55.0, 60.0, 40.0)];
    assert_eq!(verify_latest(&crossovers), Verdict::Entry);
    assert!(verify_latest(&crossovers).is_entry());
}

#[test]
fn test_only_last_two_crossovers_are_compared() {
    // The first crossover would fail every rule against the last one.
    let crossovers = [
        crossover(0, 9.0, 99.0, 10.0, 90.0),
        baseline(),
        crossover(2, 0.3, 55.0, 60.0, 40.0),
    ];
    assert!(verify_latest(&crossovers).is_entry());
}

#[test]
fn test_macd_not_rising() {
    let current = crossover(2, 0.1, 55.0, 60.0, 40.0);
    assert_eq!(
        verify_pair(&baseline(), &current),
        Verdict::Skip(Disqualification::MacdNotRising {
            previous: 0.1,
            current: 0.1
        })
    );
}

#[test]
fn test_macd_failure_short_circuits_other_rules() {
    // RSI and STOCH would also fail here; MACD is reported.
    let current = crossover(2, -0.5, 10.0, 10.0, 95.0);
    let verdict = verify_pair(&baseline(), &current);
    assert!(matches!(
        verdict.disqualification(),
        Some(Disqualification::MacdNotRising { .. })
    ));
}

#[test]
fn test_rsi_not_rising() {
    let previous = crossover(1, 0.1, 70.0, 20.0, 30.0);
    let current = crossover(2, 0.3, 65.0, 60.0, 40.0);
    assert_eq!(
        verify_pair(&previous, &current),
        Verdict::Skip(Disqualification::RsiNotRising {
            previous: 70.0,
            current: 65.0
        })
    );
}

#[test]
fn test_rsi_at_threshold_is_not_bullish() {
    let current = crossover(2, 0.3, 50.0, 60.0, 40.0);
    assert_eq!(
        verify_pair(&baseline(), &current),
        Verdict::Skip(Disqualification::RsiNotBullish { current: 50.0 })
    );
}

#[test]
fn test_rsi_failure_short_circuits_stoch() {
    let current = crossover(2, 0.3, 48.0, 10.0, 90.0);
    assert!(matches!(
        verify_pair(&baseline(), &current).disqualification(),
        Some(Disqualification::RsiNotBullish { .. })
    ));
}

#[test]
fn test_stoch_k_must_exceed_d() {
    let equal = crossover(2, 0.3, 55.0, 40.0, 40.0);
    assert_eq!(
        verify_pair(&baseline(), &equal),
        Verdict::Skip(Disqualification::StochNotBullish { k: 40.0, d: 40.0 })
    );

    // k < d inside a blacklisted band reports the alignment failure first.
    let exhausted = crossover(2, 0.3, 55.0, 92.0, 95.0);
    assert_eq!(
        verify_pair(&baseline(), &exhausted),
        Verdict::Skip(Disqualification::StochNotBullish { k: 92.0, d: 95.0 })
    );
}

#[test]
fn test_stoch_blacklisted_bands() {
    for (k, d) in [(95.0, 92.0), (85.0, 82.0), (82.0, 75.0)] {
        let current = crossover(2, 0.3, 55.0, k, d);
        assert_eq!(
            verify_pair(&baseline(), &current),
            Verdict::Skip(Disqualification::StochBlacklisted { k, d }),
            "k={} d={} should be blacklisted",
            k,
            d
        );
    }
}

#[test]
fn test_blacklist_bounds_are_inclusive() {
    let inside = [
        (90.0, 90.0),
        (99.0, 99.0),
        (80.0, 80.0),
        (89.0, 89.0),
        (84.0, 70.0),
        (80.0, 79.0),
        (85.0, 87.0),
    ];
    for (k, d) in inside {
        assert!(is_blacklisted(&StochReading { k, d }), "k={} d={}", k, d);
    }

    let outside = [
        (100.0, 95.0),
        (95.0, 89.5),
        (89.5, 85.0),
        (85.0, 75.0),
        (84.0, 69.0),
        (79.0, 70.0),
        (60.0, 40.0),
    ];
    for (k, d) in outside {
        assert!(!is_blacklisted(&StochReading { k, d }), "k={} d={}", k, d);
    }
}

#[test]
fn test_near_blacklist_is_entry() {
    let current = crossover(2, 0.3, 55.0, 85.0, 75.0);
    assert!(verify_pair(&baseline(), &current).is_entry());
}

#[test]
fn test_nan_readings_are_disqualified() {
    let current = crossover(2, f64::NAN, 55.0, 60.0, 40.0);
    assert!(!verify_pair(&baseline(), &current).is_entry());

    let current = crossover(2, 0.3, f64::NAN, 60.0, 40.0);
    assert!(!verify_pair(&baseline(), &current).is_entry());
}

#[test]
fn test_verification_is_idempotent() {
    let crossovers = [baseline(), crossover(2, 0.3, 55.0, 92.0, 95.0)];
    let first = verify_latest(&crossovers);
    let second = verify_latest(&crossovers);
    assert_eq!(first, second);
}

#[test]
fn test_disqualification_messages_name_rule_and_values() {
    let macd = Disqualification::MacdNotRising {
        previous: 0.3,
        current: 0.1,
    };
    assert_eq!(
        macd.to_string(),
        "MACD crossover wasn't higher than previous crossover, 0.3 -> 0.1"
    );

    let stoch = Disqualification::StochBlacklisted { k: 95.0, d: 92.0 };
    assert_eq!(
        stoch.to_string(),
        "STOCH falls within blacklisted ranges, k:95 d:92"
    );

    let rsi = Disqualification::RsiNotBullish { current: 45.5 };
    assert_eq!(rsi.to_string(), "RSI wasn't above 50, 45.5");
}

#[test]
fn test_scan_entries_skips_first_crossover() {
    let crossovers = [
        crossover(1, 0.5, 60.0, 70.0, 50.0),
        crossover(2, 0.1, 45.0, 20.0, 30.0),
        crossover(3, 0.3, 55.0, 60.0, 40.0),
        crossover(4, 0.2, 58.0, 60.0, 40.0),
        crossover(5, 0.4, 62.0, 65.0, 45.0),
    ];
    let times: Vec<_> = scan_entries(&crossovers).iter().map(|c| c.time).collect();
    assert_eq!(times, vec![at(3), at(5)]);
}

#[test]
fn test_scan_entries_short_sequences() {
    assert!(scan_entries(&[]).is_empty());
    assert!(scan_entries(&[baseline()]).is_empty());
}
