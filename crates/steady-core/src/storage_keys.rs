//! Storage key/path conventions.
//!
//! Pure string functions — no AWS SDK dependency. These define the canonical
//! layout of row documents and media blobs in the Steady bucket. Prefixes
//! keep the backing tables' Portuguese names.

use uuid::Uuid;

pub fn goal(user_id: &str, id: Uuid) -> String {
    format!("metas/{user_id}/{id}.json")
}

pub fn goals_prefix(user_id: &str) -> String {
    format!("metas/{user_id}/")
}

pub fn journal_entry(user_id: &str, id: Uuid) -> String {
    format!("diarios/{user_id}/entradas/{id}.json")
}

pub fn journal_entries_prefix(user_id: &str) -> String {
    format!("diarios/{user_id}/entradas/")
}

pub fn journal_attachment(user_id: &str, entry_id: Uuid, id: Uuid) -> String {
    format!("diarios/{user_id}/anexos/{entry_id}/{id}.json")
}

pub fn journal_attachments_prefix(user_id: &str, entry_id: Uuid) -> String {
    format!("diarios/{user_id}/anexos/{entry_id}/")
}

pub fn forum_post(id: Uuid) -> String {
    format!("forum/posts/{id}.json")
}

pub const FORUM_POSTS_PREFIX: &str = "forum/posts/";

/// Keyed by (post, user) so a like is unique per user per post.
pub fn forum_like(post_id: Uuid, user_id: &str) -> String {
    format!("forum/likes/{post_id}/{user_id}.json")
}

pub fn forum_likes_prefix(post_id: Uuid) -> String {
    format!("forum/likes/{post_id}/")
}

pub fn forum_comment(post_id: Uuid, id: Uuid) -> String {
    format!("forum/comments/{post_id}/{id}.json")
}

pub fn forum_comments_prefix(post_id: Uuid) -> String {
    format!("forum/comments/{post_id}/")
}

pub fn point_award(user_id: &str, id: Uuid) -> String {
    format!("pontos/{user_id}/{id}.json")
}

pub fn point_awards_prefix(user_id: &str) -> String {
    format!("pontos/{user_id}/")
}

pub fn chat_exchange(user_id: &str, id: Uuid) -> String {
    format!("chatbot/{user_id}/{id}.json")
}

pub fn chat_exchanges_prefix(user_id: &str) -> String {
    format!("chatbot/{user_id}/")
}

pub fn user_profile(user_id: &str) -> String {
    format!("users/{user_id}.json")
}

pub fn avatar(user_id: &str) -> String {
    format!("media/avatars/{user_id}")
}

pub fn journal_media(user_id: &str, id: Uuid) -> String {
    format!("media/diarios/{user_id}/{id}")
}
