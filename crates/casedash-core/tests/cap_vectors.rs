//! Tick-cap boundary vectors: every target from 0 to 40, capped and uncapped.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use casedash_core::animation::{AnimationRun, Phase, DEFAULT_TICK_CAP};
use casedash_core::metric::Targets;

/// Run to completion; returns (snapshot count, final value, final phase).
fn drain(target: i64, cap: Option<u32>) -> (u32, u64, Phase) {
    let targets = Targets::from_pairs([("x", target)]).unwrap();
    let mut run = AnimationRun::new(&targets, cap);
    run.begin();
    let mut count = 0;
    let mut prev = 0;
    while let Some(snap) = run.tick() {
        count += 1;
        let v = snap.value("x").unwrap();
        assert!(v >= prev, "T={target}: value went down at tick {}", snap.tick);
        assert!(v <= target as u64, "T={target}: overshot at tick {}", snap.tick);
        prev = v;
    }
    (count, run.snapshot().value("x").unwrap(), run.phase())
}

#[test]
fn capped_runs_stop_at_min_of_target_and_cap() {
    let cap = u64::from(DEFAULT_TICK_CAP);
    for t in 0..=40i64 {
        let (count, value, phase) = drain(t, Some(DEFAULT_TICK_CAP));
        let expected = (t as u64).min(cap);
        assert_eq!(value, expected, "T={t}");
        assert_eq!(u64::from(count), expected, "T={t}");
        assert_eq!(phase, Phase::Completed, "T={t}");
    }
}

#[test]
fn uncapped_runs_always_reach_target() {
    for t in 0..=40i64 {
        let (count, value, phase) = drain(t, None);
        assert_eq!(value, t as u64, "T={t}");
        assert_eq!(u64::from(count), t as u64, "T={t}");
        assert_eq!(phase, Phase::Completed, "T={t}");
    }
}

#[test]
fn cap_boundaries() {
    // (target, ticks, final value)
    let vectors = [(1, 1, 1), (24, 24, 24), (25, 25, 25), (26, 25, 25)];
    for (t, ticks, value) in vectors {
        let (count, v, phase) = drain(t, Some(25));
        assert_eq!((count, v), (ticks, value), "T={t}");
        assert_eq!(phase, Phase::Completed, "T={t}");
    }
}

#[test]
fn mixed_targets_share_one_tick_budget() {
    let targets = Targets::from_pairs([("low", 1), ("at_cap", 25), ("over", 26)]).unwrap();
    let mut run = AnimationRun::new(&targets, Some(25));
    run.begin();
    let mut last = None;
    while let Some(snap) = run.tick() {
        last = Some(snap);
    }
    let last = last.unwrap();
    assert_eq!(last.tick, 25);
    assert_eq!(last.phase, Phase::Completed);
    assert_eq!(last.value("low"), Some(1));
    assert_eq!(last.value("at_cap"), Some(25));
    assert_eq!(last.value("over"), Some(25));
}
