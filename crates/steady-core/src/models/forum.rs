use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A community forum post.
///
/// Posts are never hard-deleted; `deleted` hides them from listings while
/// preserving the thread for moderation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForumPost {
    pub id: Uuid,
    pub user_id: String,
    pub kind: PostKind,
    pub title: String,
    pub body: String,
    /// Present only when `kind` is `Meeting`.
    pub meeting: Option<MeetingDetails>,
    pub deleted: bool,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostKind {
    #[serde(rename = "relato")]
    Story,
    #[serde(rename = "dica")]
    Tip,
    #[serde(rename = "ajuda")]
    Help,
    #[serde(rename = "encontro")]
    Meeting,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingDetails {
    pub location: String,
    pub scheduled_at: jiff::Timestamp,
}

/// A like on a post. Uniqueness per (post, user) is structural: the row is
/// keyed by both ids, so a second like overwrites the first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Like {
    pub post_id: Uuid,
    pub user_id: String,
    pub created_at: jiff::Timestamp,
}

/// A comment on a post, threaded by optional parent comment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: String,
    /// Parent comment within the same post, for threading.
    pub parent_id: Option<Uuid>,
    pub body: String,
    pub created_at: jiff::Timestamp,
}
