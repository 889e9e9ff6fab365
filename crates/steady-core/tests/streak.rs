use jiff::civil::date;

use steady_core::streak::current_streak;

#[test]
fn no_activity_means_no_streak() {
    assert_eq!(current_streak(date(2026, 8, 30), []), 0);
}

#[test]
fn three_consecutive_days_ending_today() {
    let today = date(2026, 8, 30);
    let dates = [date(2026, 8, 30), date(2026, 8, 29), date(2026, 8, 28)];
    assert_eq!(current_streak(today, dates), 3);
}

#[test]
fn streak_may_end_yesterday() {
    let today = date(2026, 8, 30);
    let dates = [date(2026, 8, 29), date(2026, 8, 28)];
    assert_eq!(current_streak(today, dates), 2);
}

#[test]
fn gap_stops_the_count() {
    let today = date(2026, 8, 30);
    // Today plus an entry three days ago: the gap breaks the chain.
    let dates = [date(2026, 8, 30), date(2026, 8, 27)];
    assert_eq!(current_streak(today, dates), 1);
}

#[test]
fn stale_activity_reads_zero() {
    let today = date(2026, 8, 30);
    let dates = [date(2026, 8, 28), date(2026, 8, 27), date(2026, 8, 26)];
    assert_eq!(current_streak(today, dates), 0);
}

#[test]
fn duplicate_days_count_once() {
    let today = date(2026, 8, 30);
    let dates = [
        date(2026, 8, 30),
        date(2026, 8, 30),
        date(2026, 8, 29),
        date(2026, 8, 29),
    ];
    assert_eq!(current_streak(today, dates), 2);
}

#[test]
fn unordered_input_is_fine() {
    let today = date(2026, 8, 30);
    let dates = [date(2026, 8, 28), date(2026, 8, 30), date(2026, 8, 29)];
    assert_eq!(current_streak(today, dates), 3);
}

#[test]
fn streak_spans_month_boundaries() {
    let today = date(2026, 3, 2);
    let dates = [
        date(2026, 3, 2),
        date(2026, 3, 1),
        date(2026, 2, 28),
        date(2026, 2, 27),
    ];
    assert_eq!(current_streak(today, dates), 4);
}
