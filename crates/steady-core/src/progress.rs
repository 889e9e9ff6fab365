//! Goal progress engine.
//!
//! Pure functions over a goal's static fields and a caller-supplied `now`.
//! Nothing here performs I/O or can fail: callers persist the results and
//! may safely recompute after a failed write.
//!
//! Completion is a single-shot state check, not a timer: [`apply_completion`]
//! is a no-op unless the goal is active and due, so re-running it on an
//! already-completed goal never fires twice.

use jiff::tz::TimeZone;
use jiff::{Span, Timestamp, Unit};
use serde::Serialize;

use crate::models::goal::{Goal, GoalStatus, GoalUnit};

const SECS_PER_HOUR: i64 = 3_600;
const SECS_PER_DAY: i64 = 86_400;

/// Percentage-shaping policy.
///
/// The product shipped two curves at different times. They are never mixed:
/// the policy is an explicit parameter and the API serves [`Linear`].
///
/// [`Linear`]: ProgressPolicy::Linear
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressPolicy {
    /// `min(elapsed / objective * 100, 100)`, floor 0.
    Linear,
    /// Early-boost curve: day 0 shows 5% instead of 0%, days 1–7 map onto
    /// 5–15%, days 8–30 onto 15–40%, and beyond day 30 `max(40, linear)`.
    /// Introduced because pure linear progress felt discouragingly slow on
    /// new goals.
    StagedBoost,
}

/// Display-ready progress for a goal at a point in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Whole days since the goal's start, clamped at zero.
    pub elapsed_days: i64,
    /// Whole elapsed count in the goal's own unit. `None` for the
    /// non-time-driven `unidades` unit.
    pub elapsed: Option<i64>,
    /// Shaped percentage in `0.0..=100.0`.
    pub percentage: f64,
}

/// Breakdown of continuous elapsed time, for the detail-screen counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ElapsedClock {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

/// Whole elapsed count between `start` and `now` in `unit`.
///
/// Hours, days and weeks are fixed-length periods; months are calendar
/// months. Clamped to zero when `now < start` (clock skew or a future-dated
/// goal). Returns `None` for `unidades`, which is not time-driven.
pub fn elapsed_in_unit(start: Timestamp, now: Timestamp, unit: GoalUnit) -> Option<i64> {
    let secs = (now.as_second() - start.as_second()).max(0);
    match unit {
        GoalUnit::Hours => Some(secs / SECS_PER_HOUR),
        GoalUnit::Days => Some(secs / SECS_PER_DAY),
        GoalUnit::Weeks => Some(secs / (7 * SECS_PER_DAY)),
        GoalUnit::Months => Some(elapsed_months(start, now)),
        GoalUnit::Units => None,
    }
}

/// Whole days between `start` and `now`, clamped at zero.
pub fn elapsed_days(start: Timestamp, now: Timestamp) -> i64 {
    (now.as_second() - start.as_second()).max(0) / SECS_PER_DAY
}

/// Days/hours/minutes/seconds breakdown of the time since `start`.
pub fn elapsed_clock(start: Timestamp, now: Timestamp) -> ElapsedClock {
    let secs = (now.as_second() - start.as_second()).max(0);
    ElapsedClock {
        days: secs / SECS_PER_DAY,
        hours: secs % SECS_PER_DAY / SECS_PER_HOUR,
        minutes: secs % SECS_PER_HOUR / 60,
        seconds: secs % 60,
    }
}

/// Whole calendar months between `start` and `now`, using the same
/// constrained month stepping as [`target_end`]: the largest `m` such that
/// `start + m months <= now`. A goal anchored on Jan 31 is one month old on
/// Feb 28, exactly when a 1-month objective comes due.
fn elapsed_months(start: Timestamp, now: Timestamp) -> i64 {
    if now < start {
        return 0;
    }
    let start = start.to_zoned(TimeZone::UTC);
    let now = now.to_zoned(TimeZone::UTC);

    // `until` can be off by one near saturated month ends (Jan 31 + 1 month
    // lands on Feb 28, which `until` does not count), so treat it as an
    // estimate and settle on the constrained boundary.
    let mut months = start
        .until((Unit::Month, &now))
        .map(|span| i64::from(span.get_months()))
        .unwrap_or(0)
        .max(0);
    while months > 0 {
        match start.checked_add(Span::new().months(months)) {
            Ok(boundary) if boundary <= now => break,
            _ => months -= 1,
        }
    }
    loop {
        match start.checked_add(Span::new().months(months + 1)) {
            Ok(boundary) if boundary <= now => months += 1,
            _ => break,
        }
    }
    months
}

/// The timestamp at which a goal's objective is reached: `start + objective`
/// in the goal's unit, calendar-aware for months. `None` for `unidades`.
pub fn target_end(start: Timestamp, objective: i64, unit: GoalUnit) -> Option<Timestamp> {
    let span = match unit {
        GoalUnit::Hours => Span::new().hours(objective),
        GoalUnit::Days => Span::new().days(objective),
        GoalUnit::Weeks => Span::new().weeks(objective),
        GoalUnit::Months => Span::new().months(objective),
        GoalUnit::Units => return None,
    };
    start
        .to_zoned(TimeZone::UTC)
        .checked_add(span)
        .ok()
        .map(|z| z.timestamp())
}

/// Compute display-ready progress for a goal under the given policy.
///
/// Completed goals always read 100%. For `unidades`, the persisted progress
/// fraction is taken verbatim. Elapsed time never goes negative.
pub fn progress(goal: &Goal, now: Timestamp, policy: ProgressPolicy) -> GoalProgress {
    let days = elapsed_days(goal.started_at, now);
    let elapsed = elapsed_in_unit(goal.started_at, now, goal.unit);

    if goal.status == GoalStatus::Completed {
        return GoalProgress {
            elapsed_days: days,
            elapsed,
            percentage: 100.0,
        };
    }

    let linear = match elapsed {
        Some(n) if goal.objective > 0 => {
            (n as f64 / goal.objective as f64 * 100.0).clamp(0.0, 100.0)
        }
        Some(_) => 0.0,
        // Fall back to the persisted fraction for non-time-driven units.
        None => (goal.progress * 100.0).clamp(0.0, 100.0),
    };

    let percentage = match (policy, elapsed) {
        (ProgressPolicy::Linear, _) | (_, None) => linear,
        (ProgressPolicy::StagedBoost, Some(_)) => staged_boost(days, linear),
    };

    GoalProgress {
        elapsed_days: days,
        elapsed,
        percentage,
    }
}

fn staged_boost(elapsed_days: i64, linear: f64) -> f64 {
    let pct = match elapsed_days {
        d if d <= 0 => 5.0,
        d @ 1..=7 => 5.0 + d as f64 / 7.0 * 10.0,
        d @ 8..=30 => 15.0 + (d - 7) as f64 / 23.0 * 25.0,
        _ => linear.max(40.0),
    };
    pct.min(100.0)
}

/// Whether an active, time-driven goal has reached its objective.
///
/// Equivalent to "fractional elapsed time >= objective": true exactly when
/// `now` has reached [`target_end`].
pub fn completion_due(goal: &Goal, now: Timestamp) -> bool {
    if goal.status != GoalStatus::Active {
        return false;
    }
    match target_end(goal.started_at, goal.objective, goal.unit) {
        Some(end) => now >= end,
        None => false,
    }
}

/// Transition a due goal to `concluida`. Returns whether a transition
/// happened.
///
/// Idempotent: a goal that is not active and due (including one already
/// completed) is left untouched, so the completion check may be re-run
/// freely after a failed persist.
pub fn apply_completion(goal: &mut Goal, now: Timestamp) -> bool {
    if !completion_due(goal, now) {
        return false;
    }
    goal.status = GoalStatus::Completed;
    goal.completed_at = Some(now);
    goal.ended_at = Some(now);
    goal.progress = 1.0;
    goal.updated_at = now;
    true
}

/// Relapse: restart the progress clock from `now`.
///
/// Resets only the time anchor and the persisted fraction. Status, title and
/// objective are untouched — the goal stays active and history is kept.
pub fn apply_relapse(goal: &mut Goal, now: Timestamp) {
    goal.started_at = now;
    goal.expected_end = target_end(now, goal.objective, goal.unit);
    goal.progress = 0.0;
    goal.updated_at = now;
}
