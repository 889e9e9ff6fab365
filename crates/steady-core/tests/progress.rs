use jiff::Timestamp;
use uuid::Uuid;

use steady_core::models::goal::{Goal, GoalStatus, GoalUnit};
use steady_core::progress::{
    apply_completion, apply_relapse, completion_due, elapsed_clock, elapsed_in_unit, progress,
    target_end, ProgressPolicy,
};

fn ts(s: &str) -> Timestamp {
    s.parse().expect("valid timestamp literal")
}

fn goal(objective: i64, unit: GoalUnit, started_at: Timestamp) -> Goal {
    Goal {
        id: Uuid::new_v4(),
        user_id: "user-1".to_string(),
        addiction: "cigarro".to_string(),
        title: "30 dias sem cigarro".to_string(),
        description: None,
        objective,
        unit,
        started_at,
        expected_end: target_end(started_at, objective, unit),
        ended_at: None,
        completed_at: None,
        status: GoalStatus::Active,
        motivation: None,
        progress: 0.0,
        created_at: started_at,
        updated_at: started_at,
    }
}

#[test]
fn elapsed_whole_hours_days_weeks() {
    let start = ts("2026-03-01T00:00:00Z");
    let now = ts("2026-03-15T07:30:00Z");

    assert_eq!(
        elapsed_in_unit(start, now, GoalUnit::Hours),
        Some(14 * 24 + 7)
    );
    assert_eq!(elapsed_in_unit(start, now, GoalUnit::Days), Some(14));
    assert_eq!(elapsed_in_unit(start, now, GoalUnit::Weeks), Some(2));
}

#[test]
fn elapsed_months_is_calendar_aware() {
    let start = ts("2026-01-31T12:00:00Z");

    // Not a full month until the same day-of-month boundary.
    assert_eq!(
        elapsed_in_unit(start, ts("2026-02-27T12:00:00Z"), GoalUnit::Months),
        Some(0)
    );
    // Jan 31 → Feb 28 saturates at the end of February.
    assert_eq!(
        elapsed_in_unit(start, ts("2026-02-28T12:00:00Z"), GoalUnit::Months),
        Some(1)
    );
    // Constrained month stepping: Jan 31 +3mo lands exactly on Apr 30.
    assert_eq!(
        elapsed_in_unit(start, ts("2026-04-29T12:00:00Z"), GoalUnit::Months),
        Some(2)
    );
    assert_eq!(
        elapsed_in_unit(start, ts("2026-04-30T12:00:00Z"), GoalUnit::Months),
        Some(3)
    );
}

#[test]
fn month_goal_reads_full_when_it_comes_due() {
    // Jan 31 + 1 month saturates at Feb 28; elapsed months and completion
    // must agree at that instant.
    let start = ts("2026-01-31T12:00:00Z");
    let g = goal(1, GoalUnit::Months, start);
    let due = ts("2026-02-28T12:00:00Z");

    assert!(completion_due(&g, due));
    let p = progress(&g, due, ProgressPolicy::Linear);
    assert_eq!(p.elapsed, Some(1));
    assert_eq!(p.percentage, 100.0);
}

#[test]
fn elapsed_clamps_to_zero_when_now_before_start() {
    let start = ts("2026-06-01T00:00:00Z");
    let now = ts("2026-05-20T00:00:00Z");

    assert_eq!(elapsed_in_unit(start, now, GoalUnit::Days), Some(0));
    assert_eq!(elapsed_in_unit(start, now, GoalUnit::Months), Some(0));

    let p = progress(&goal(10, GoalUnit::Days, start), now, ProgressPolicy::Linear);
    assert_eq!(p.elapsed_days, 0);
    assert_eq!(p.percentage, 0.0);
}

#[test]
fn units_goal_is_not_time_driven() {
    let start = ts("2026-03-01T00:00:00Z");
    let now = ts("2026-03-20T00:00:00Z");
    assert_eq!(elapsed_in_unit(start, now, GoalUnit::Units), None);

    // Progress falls back to the persisted fraction.
    let mut g = goal(10, GoalUnit::Units, start);
    g.progress = 0.4;
    let p = progress(&g, now, ProgressPolicy::Linear);
    assert_eq!(p.elapsed, None);
    assert!((p.percentage - 40.0).abs() < 1e-9);
}

#[test]
fn linear_percentage_caps_at_100() {
    let start = ts("2026-03-01T00:00:00Z");
    let g = goal(10, GoalUnit::Days, start);

    // Whole elapsed units drive the formula: 5.5 days in counts as 5 of 10.
    let halfway = progress(&g, ts("2026-03-06T12:00:00Z"), ProgressPolicy::Linear);
    assert!((halfway.percentage - 50.0).abs() < 1e-9);

    let overshot = progress(&g, ts("2026-04-01T00:00:00Z"), ProgressPolicy::Linear);
    assert_eq!(overshot.percentage, 100.0);
}

#[test]
fn staged_boost_floors_and_stages() {
    let start = ts("2026-03-01T00:00:00Z");
    let g = goal(180, GoalUnit::Days, start);

    // Day zero shows the 5% floor instead of 0%.
    let day0 = progress(&g, ts("2026-03-01T06:00:00Z"), ProgressPolicy::StagedBoost);
    assert!((day0.percentage - 5.0).abs() < 1e-9);

    // Day 7 tops the first stage at 15%.
    let day7 = progress(&g, ts("2026-03-08T06:00:00Z"), ProgressPolicy::StagedBoost);
    assert!((day7.percentage - 15.0).abs() < 1e-9);

    // Day 30 tops the second stage at 40%.
    let day30 = progress(&g, ts("2026-03-31T06:00:00Z"), ProgressPolicy::StagedBoost);
    assert!((day30.percentage - 40.0).abs() < 1e-9);

    // Beyond day 30 the curve never drops below 40%: day 40 of 180 is
    // 22.2% linear but still reads the 40% floor.
    let day40 = progress(&g, ts("2026-04-10T06:00:00Z"), ProgressPolicy::StagedBoost);
    assert_eq!(day40.percentage, 40.0);
}

#[test]
fn staged_boost_follows_linear_once_it_overtakes() {
    let start = ts("2026-01-01T00:00:00Z");
    let g = goal(60, GoalUnit::Days, start);

    // Day 45 of 60: linear = 75% > 40%.
    let p = progress(&g, ts("2026-02-15T00:00:00Z"), ProgressPolicy::StagedBoost);
    assert!((p.percentage - 75.0).abs() < 1e-9);
}

#[test]
fn seven_day_goal_completes_just_past_the_objective() {
    let start = ts("2026-03-01T00:00:00Z");
    let mut g = goal(7, GoalUnit::Days, start);

    // One hour past start + 7 days.
    let now = ts("2026-03-08T01:00:00Z");
    assert!(completion_due(&g, now));

    let p = progress(&g, now, ProgressPolicy::Linear);
    assert_eq!(p.percentage, 100.0);

    assert!(apply_completion(&mut g, now));
    assert_eq!(g.status, GoalStatus::Completed);
    assert_eq!(g.completed_at, Some(now));
    assert_eq!(g.ended_at, Some(now));
}

#[test]
fn completion_never_fires_twice() {
    let start = ts("2026-03-01T00:00:00Z");
    let mut g = goal(7, GoalUnit::Days, start);
    let now = ts("2026-03-08T01:00:00Z");

    assert!(apply_completion(&mut g, now));
    // Re-evaluation on an already-completed goal is a no-op.
    assert!(!apply_completion(&mut g, now));
    assert!(!apply_completion(&mut g, ts("2026-03-09T00:00:00Z")));
    assert_eq!(g.completed_at, Some(now));
}

#[test]
fn completion_not_due_before_objective_or_for_inactive_goals() {
    let start = ts("2026-03-01T00:00:00Z");
    let g = goal(7, GoalUnit::Days, start);
    assert!(!completion_due(&g, ts("2026-03-07T23:00:00Z")));

    let mut paused = goal(7, GoalUnit::Days, start);
    paused.status = GoalStatus::Paused;
    assert!(!completion_due(&paused, ts("2026-04-01T00:00:00Z")));

    // Non-time-driven goals never complete on elapsed time.
    let units = goal(7, GoalUnit::Units, start);
    assert!(!completion_due(&units, ts("2027-01-01T00:00:00Z")));
}

#[test]
fn relapse_resets_clock_and_nothing_else() {
    let start = ts("2026-03-01T00:00:00Z");
    let mut g = goal(10, GoalUnit::Days, start);

    // Day 5 of 10: 50%.
    let day5 = ts("2026-03-06T00:00:00Z");
    let before = progress(&g, day5, ProgressPolicy::Linear);
    assert!((before.percentage - 50.0).abs() < 1e-9);

    apply_relapse(&mut g, day5);
    assert_eq!(g.started_at, day5);
    assert_eq!(g.status, GoalStatus::Active);
    assert_eq!(g.title, "30 dias sem cigarro");
    assert_eq!(g.objective, 10);

    // Immediately recomputed progress reads as though the goal just started.
    let after = progress(&g, day5, ProgressPolicy::Linear);
    assert_eq!(after.elapsed_days, 0);
    assert_eq!(after.percentage, 0.0);

    // Under staged-boost the day-zero floor applies, not a stale 50%.
    let boosted = progress(&g, day5, ProgressPolicy::StagedBoost);
    assert!((boosted.percentage - 5.0).abs() < 1e-9);
}

#[test]
fn target_end_matches_unit_arithmetic() {
    let start = ts("2026-01-31T10:00:00Z");

    assert_eq!(
        target_end(start, 12, GoalUnit::Hours),
        Some(ts("2026-01-31T22:00:00Z"))
    );
    assert_eq!(
        target_end(start, 2, GoalUnit::Weeks),
        Some(ts("2026-02-14T10:00:00Z"))
    );
    // Calendar month addition saturates at the end of February.
    assert_eq!(
        target_end(start, 1, GoalUnit::Months),
        Some(ts("2026-02-28T10:00:00Z"))
    );
    assert_eq!(target_end(start, 3, GoalUnit::Units), None);
}

#[test]
fn elapsed_clock_breaks_down_components() {
    let start = ts("2026-03-01T00:00:00Z");
    let clock = elapsed_clock(start, ts("2026-03-03T05:04:09Z"));
    assert_eq!(clock.days, 2);
    assert_eq!(clock.hours, 5);
    assert_eq!(clock.minutes, 4);
    assert_eq!(clock.seconds, 9);

    let skewed = elapsed_clock(start, ts("2026-02-28T00:00:00Z"));
    assert_eq!((skewed.days, skewed.hours, skewed.minutes, skewed.seconds), (0, 0, 0, 0));
}
