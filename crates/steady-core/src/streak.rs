//! Consecutive-day streak computation.

use jiff::civil;

/// Current consecutive-day streak ending today or yesterday.
///
/// Dates may repeat and arrive in any order; only distinct calendar days
/// count. If the most recent activity is older than yesterday the streak is
/// broken and reads 0. Otherwise days are counted backward until the first
/// gap.
pub fn current_streak(today: civil::Date, dates: impl IntoIterator<Item = civil::Date>) -> u32 {
    let mut distinct: Vec<civil::Date> = dates.into_iter().collect();
    distinct.sort_unstable();
    distinct.dedup();

    let Some(&most_recent) = distinct.last() else {
        return 0;
    };
    let yesterday = match today.yesterday() {
        Ok(d) => d,
        Err(_) => return 0,
    };
    if most_recent != today && most_recent != yesterday {
        return 0;
    }

    let mut streak = 1;
    let mut current = most_recent;
    for &date in distinct.iter().rev().skip(1) {
        let Ok(previous) = current.yesterday() else {
            break;
        };
        if date != previous {
            break;
        }
        streak += 1;
        current = date;
    }
    streak
}
