use std::time::Duration;

use axum::extract::{Path, State};
use axum::{Extension, Json};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use steady_bedrock::{generate, prompts};
use steady_core::models::journal::{AttachmentKind, JournalAttachment, JournalEntry};
use steady_core::models::points::reason;
use steady_core::storage_keys;
use steady_core::streak;
use steady_storage::{objects, rows};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::points::award_daily;
use crate::state::AppState;

/// Presigned URLs are valid for 15 minutes.
const PRESIGN_TTL: Duration = Duration::from_secs(15 * 60);

pub async fn list_entries(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<JournalEntry>>, ApiError> {
    let prefix = storage_keys::journal_entries_prefix(&user.sub);
    let mut entries: Vec<JournalEntry> =
        rows::list_rows(&state.s3, &state.bucket, &prefix).await?;
    entries.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    Ok(Json(entries))
}

#[derive(Deserialize)]
pub struct CreateEntry {
    pub text: String,
}

#[derive(Serialize)]
pub struct CreatedEntry {
    #[serde(flatten)]
    pub entry: JournalEntry,
    /// Whether this entry earned today's `diario_completo` point.
    pub points_awarded: bool,
}

pub async fn create_entry(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateEntry>,
) -> Result<Json<CreatedEntry>, ApiError> {
    let text = input.text.trim();
    if text.is_empty() {
        return Err(ApiError::BadRequest("text is required".to_string()));
    }

    // Reflection is best-effort; the entry saves without it.
    let prompt = prompts::journal_reflection(text);
    let reflection = match generate::generate_text(
        &state.aws_config,
        &state.model_id,
        &prompt,
        generate::GenerationParams::STANDARD,
    )
    .await
    {
        Ok(r) => Some(r),
        Err(e) => {
            tracing::warn!("reflection generation failed: {e}");
            None
        }
    };

    let now = Timestamp::now();
    let entry = JournalEntry {
        id: Uuid::new_v4(),
        user_id: user.sub.clone(),
        text: text.to_string(),
        recorded_at: now,
        reflection,
    };

    let key = storage_keys::journal_entry(&user.sub, entry.id);
    rows::save_row(&state.s3, &state.bucket, &key, &entry).await?;

    let points_awarded = award_daily(
        &state,
        &user.sub,
        reason::JOURNAL_ENTRY,
        now,
        None,
        Some(entry.id),
    )
    .await?;

    Ok(Json(CreatedEntry {
        entry,
        points_awarded,
    }))
}

#[derive(Serialize)]
pub struct StreakView {
    pub streak: u32,
}

/// Consecutive-day writing streak, counted over UTC calendar dates.
pub async fn streak(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<StreakView>, ApiError> {
    let prefix = storage_keys::journal_entries_prefix(&user.sub);
    let entries: Vec<JournalEntry> = rows::list_rows(&state.s3, &state.bucket, &prefix).await?;

    let today = Timestamp::now().to_zoned(TimeZone::UTC).date();
    let dates = entries
        .iter()
        .map(|e| e.recorded_at.to_zoned(TimeZone::UTC).date());
    Ok(Json(StreakView {
        streak: streak::current_streak(today, dates),
    }))
}

#[derive(Deserialize)]
pub struct CreateAttachment {
    pub kind: AttachmentKind,
    pub content_type: String,
}

#[derive(Serialize)]
pub struct CreatedAttachment {
    #[serde(flatten)]
    pub attachment: JournalAttachment,
    /// Presigned PUT the client uploads the media bytes to.
    pub upload_url: String,
}

pub async fn create_attachment(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(entry_id): Path<Uuid>,
    Json(input): Json<CreateAttachment>,
) -> Result<Json<CreatedAttachment>, ApiError> {
    // The entry must exist before anything can hang off it.
    let entry_key = storage_keys::journal_entry(&user.sub, entry_id);
    let (_entry, _): (JournalEntry, _) =
        rows::load_row(&state.s3, &state.bucket, &entry_key).await?;

    let id = Uuid::new_v4();
    let media_key = storage_keys::journal_media(&user.sub, id);
    let upload_url = objects::presign_put(
        &state.s3,
        &state.bucket,
        &media_key,
        Some(&input.content_type),
        PRESIGN_TTL,
    )
    .await?;

    let attachment = JournalAttachment {
        id,
        entry_id,
        user_id: user.sub.clone(),
        kind: input.kind,
        media_key,
        content_type: input.content_type,
        created_at: Timestamp::now(),
    };

    let key = storage_keys::journal_attachment(&user.sub, entry_id, id);
    rows::save_row(&state.s3, &state.bucket, &key, &attachment).await?;

    Ok(Json(CreatedAttachment {
        attachment,
        upload_url,
    }))
}

#[derive(Serialize)]
pub struct AttachmentView {
    #[serde(flatten)]
    pub attachment: JournalAttachment,
    pub download_url: String,
}

pub async fn list_attachments(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(entry_id): Path<Uuid>,
) -> Result<Json<Vec<AttachmentView>>, ApiError> {
    let prefix = storage_keys::journal_attachments_prefix(&user.sub, entry_id);
    let attachments: Vec<JournalAttachment> =
        rows::list_rows(&state.s3, &state.bucket, &prefix).await?;

    let mut views = Vec::with_capacity(attachments.len());
    for attachment in attachments {
        let download_url =
            objects::presign_get(&state.s3, &state.bucket, &attachment.media_key, PRESIGN_TTL)
                .await?;
        views.push(AttachmentView {
            attachment,
            download_url,
        });
    }
    Ok(Json(views))
}
