use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A journal ("diário") entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: Uuid,
    pub user_id: String,
    pub text: String,
    pub recorded_at: jiff::Timestamp,
    /// Best-effort AI reflection on the entry; absent when generation
    /// failed or was skipped.
    pub reflection: Option<String>,
}

/// A media attachment owned by a journal entry. The blob itself lives in
/// object storage under `media_key`; this row is the reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JournalAttachment {
    pub id: Uuid,
    pub entry_id: Uuid,
    pub user_id: String,
    pub kind: AttachmentKind,
    pub media_key: String,
    pub content_type: String,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentKind {
    Photo,
    Audio,
}
