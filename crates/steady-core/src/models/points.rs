use jiff::civil;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A gamification point award.
///
/// Intended invariant: at most one award per user per reason per calendar
/// day; `meta_concluida` additionally at most once per goal ever. Enforced
/// by [`already_awarded_on`] and [`goal_already_awarded`] before insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PointAward {
    pub id: Uuid,
    pub user_id: String,
    pub quantity: i64,
    pub reason: String,
    pub awarded_at: jiff::Timestamp,
    /// Back-link to the goal that earned the award, if any.
    pub goal_id: Option<Uuid>,
    /// Back-link to the journal entry that earned the award, if any.
    pub entry_id: Option<Uuid>,
}

/// Recognized award reasons and their quantities.
pub mod reason {
    pub const JOURNAL_ENTRY: &str = "diario_completo";
    pub const FORUM_POST: &str = "comunidade_post";
    pub const CHATBOT_CHAT: &str = "chatbot_conversa";
    pub const GOAL_COMPLETED: &str = "meta_concluida";

    pub fn quantity(reason: &str) -> i64 {
        match reason {
            GOAL_COMPLETED => 5,
            _ => 1,
        }
    }
}

/// Whether `awards` already contains an award with `reason` on the calendar
/// day of `date` (UTC).
pub fn already_awarded_on(awards: &[PointAward], reason: &str, date: civil::Date) -> bool {
    awards
        .iter()
        .any(|a| a.reason == reason && award_date(a) == date)
}

/// Whether the goal has ever earned a `meta_concluida` award. Completion may
/// be re-checked after a failed write; this keeps the award single-shot.
pub fn goal_already_awarded(awards: &[PointAward], goal_id: Uuid) -> bool {
    awards
        .iter()
        .any(|a| a.reason == reason::GOAL_COMPLETED && a.goal_id == Some(goal_id))
}

/// Sum of all awarded quantities.
pub fn total(awards: &[PointAward]) -> i64 {
    awards.iter().map(|a| a.quantity).sum()
}

fn award_date(award: &PointAward) -> civil::Date {
    award.awarded_at.to_zoned(jiff::tz::TimeZone::UTC).date()
}
