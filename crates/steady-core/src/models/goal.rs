use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;

/// Upper bound on a goal's numeric objective. Keeps the calendar span
/// arithmetic in `progress::target_end` well clear of overflow.
pub const MAX_OBJECTIVE: i64 = 10_000;

/// Validate the user-supplied fields of a new goal.
pub fn validate_new(title: &str, addiction: &str, objective: i64) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::MissingField("title".to_string()));
    }
    if addiction.trim().is_empty() {
        return Err(CoreError::MissingField("addiction".to_string()));
    }
    if objective <= 0 || objective > MAX_OBJECTIVE {
        return Err(CoreError::InvalidObjective(objective));
    }
    Ok(())
}

/// A recovery goal ("meta"): a numeric objective against a single mutable
/// time anchor.
///
/// `started_at` anchors all elapsed-time math. A relapse resets it to the
/// present without deleting the goal or its history; nothing else moves it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Goal {
    pub id: Uuid,
    /// Auth subject of the owning user.
    pub user_id: String,
    /// Free-text addiction type, e.g. "cigarro".
    pub addiction: String,
    pub title: String,
    pub description: Option<String>,
    /// Positive numeric objective, in `unit`s.
    pub objective: i64,
    pub unit: GoalUnit,
    /// The progress clock. Reset by a relapse.
    pub started_at: jiff::Timestamp,
    /// Predicted end, computed from `started_at + objective` at creation
    /// for time-driven units.
    pub expected_end: Option<jiff::Timestamp>,
    pub ended_at: Option<jiff::Timestamp>,
    pub completed_at: Option<jiff::Timestamp>,
    pub status: GoalStatus,
    /// AI-generated motivational text fetched at creation time.
    pub motivation: Option<String>,
    /// Persisted progress fraction in `0.0..=1.0`. Only authoritative for
    /// the non-time-driven `unidades` unit; time-driven units recompute.
    pub progress: f64,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// Unit of a goal's numeric objective. Wire values keep the product's
/// Portuguese vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalUnit {
    #[serde(rename = "horas")]
    Hours,
    #[serde(rename = "dias")]
    Days,
    #[serde(rename = "semanas")]
    Weeks,
    #[serde(rename = "meses")]
    Months,
    /// Not time-driven; progress comes from the persisted fraction.
    #[serde(rename = "unidades")]
    Units,
}

impl GoalUnit {
    /// Whether elapsed time drives this unit's progress.
    pub fn is_time_driven(self) -> bool {
        !matches!(self, GoalUnit::Units)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "ativa")]
    Active,
    /// Terminal.
    #[serde(rename = "concluida")]
    Completed,
    /// Externally settable; not driven by computed logic.
    #[serde(rename = "pausada")]
    Paused,
    /// Terminal.
    #[serde(rename = "falha")]
    Failed,
}
