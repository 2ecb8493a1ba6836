//! AnimationRun state-machine tests (no clock involved).

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use casedash_core::animation::{AnimationRun, Phase, DEFAULT_TICK_CAP};
use casedash_core::metric::Targets;

fn targets(pairs: &[(&str, i64)]) -> Targets {
    Targets::from_pairs(pairs.iter().map(|(k, v)| (*k, *v))).unwrap()
}

fn run_to_end(run: &mut AnimationRun) -> Vec<casedash_core::animation::Snapshot> {
    let mut out = Vec::new();
    while let Some(s) = run.tick() {
        out.push(s);
    }
    out
}

#[test]
fn stock_dashboard_reaches_every_target_before_cap() {
    let t = targets(&[("reports", 24), ("pending", 8), ("resolved", 16), ("urgent", 5)]);
    let mut run = AnimationRun::new(&t, Some(DEFAULT_TICK_CAP));
    assert_eq!(run.begin(), Phase::Running);

    let snaps = run_to_end(&mut run);
    let last = snaps.last().unwrap();
    assert_eq!(last.phase, Phase::Completed);
    assert_eq!(last.tick, 24);
    assert_eq!(last.value("reports"), Some(24));
    assert_eq!(last.value("pending"), Some(8));
    assert_eq!(last.value("resolved"), Some(16));
    assert_eq!(last.value("urgent"), Some(5));
    assert_eq!(run.planned_ticks(), 24);
}

#[test]
fn cap_stops_short_of_large_target() {
    let t = targets(&[("x", 30)]);
    let mut run = AnimationRun::new(&t, Some(25));
    run.begin();
    let snaps = run_to_end(&mut run);
    assert_eq!(snaps.len(), 25);
    assert_eq!(run.phase(), Phase::Completed);
    assert_eq!(run.metric("x").unwrap().current(), 25);
    assert_eq!(run.metric("x").unwrap().target(), 30);
}

#[test]
fn uncapped_run_reaches_large_target() {
    let t = targets(&[("x", 30)]);
    let mut run = AnimationRun::new(&t, None);
    run.begin();
    let snaps = run_to_end(&mut run);
    assert_eq!(snaps.len(), 30);
    assert_eq!(snaps.last().unwrap().value("x"), Some(30));
}

#[test]
fn values_follow_min_of_tick_and_target() {
    let t = targets(&[("a", 3), ("b", 10), ("c", 0)]);
    let mut run = AnimationRun::new(&t, Some(25));
    run.begin();
    let mut prev_a = 0;
    let mut prev_b = 0;
    for s in run_to_end(&mut run) {
        let k = u64::from(s.tick);
        assert_eq!(s.value("a"), Some(k.min(3)));
        assert_eq!(s.value("b"), Some(k.min(10)));
        assert_eq!(s.value("c"), Some(0));
        assert!(s.value("a").unwrap() >= prev_a);
        assert!(s.value("b").unwrap() >= prev_b);
        prev_a = s.value("a").unwrap();
        prev_b = s.value("b").unwrap();
    }
}

#[test]
fn empty_targets_complete_without_ticking() {
    let mut run = AnimationRun::new(&Targets::default(), Some(25));
    assert_eq!(run.begin(), Phase::Completed);
    assert!(run.tick().is_none());
    assert_eq!(run.ticks(), 0);
}

#[test]
fn all_zero_targets_complete_without_ticking() {
    let t = targets(&[("a", 0), ("b", 0)]);
    let mut run = AnimationRun::new(&t, Some(25));
    assert_eq!(run.begin(), Phase::Completed);
    assert_eq!(run.planned_ticks(), 0);
}

#[test]
fn cancel_freezes_values_and_is_idempotent() {
    let t = targets(&[("a", 10)]);
    let mut run = AnimationRun::new(&t, Some(25));
    run.begin();
    for _ in 0..4 {
        run.tick();
    }
    assert!(run.cancel());
    assert!(!run.cancel());
    assert!(run.tick().is_none());
    let s = run.snapshot();
    assert_eq!(s.phase, Phase::Cancelled);
    assert_eq!(s.tick, 4);
    assert_eq!(s.value("a"), Some(4));
}

#[test]
fn completed_run_cannot_be_cancelled_or_restarted() {
    let t = targets(&[("a", 1)]);
    let mut run = AnimationRun::new(&t, Some(25));
    run.begin();
    run.tick();
    assert_eq!(run.phase(), Phase::Completed);
    assert!(!run.cancel());
    assert_eq!(run.begin(), Phase::Completed);
    assert_eq!(run.phase(), Phase::Completed);
}

#[test]
fn tick_before_begin_is_ignored() {
    let t = targets(&[("a", 2)]);
    let mut run = AnimationRun::new(&t, Some(25));
    assert!(run.tick().is_none());
    assert_eq!(run.phase(), Phase::Idle);
}

#[test]
fn snapshot_serializes_with_lowercase_phase() {
    let t = targets(&[("a", 2)]);
    let mut run = AnimationRun::new(&t, Some(25));
    run.begin();
    let s = run.tick().unwrap();
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["tick"], 1);
    assert_eq!(json["phase"], "running");
    assert_eq!(json["values"]["a"], 1);
}
