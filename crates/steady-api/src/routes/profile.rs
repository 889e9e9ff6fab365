use std::time::Duration;

use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use steady_core::models::profile::UserProfile;
use steady_core::storage_keys;
use steady_storage::error::StorageError;
use steady_storage::{objects, rows};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

const PRESIGN_TTL: Duration = Duration::from_secs(15 * 60);

#[derive(Serialize)]
pub struct ProfileView {
    #[serde(flatten)]
    pub profile: UserProfile,
    /// Presigned download URL for the stored avatar, when one exists.
    pub avatar_download_url: Option<String>,
}

async fn present(state: &AppState, profile: UserProfile) -> Result<ProfileView, ApiError> {
    let avatar_download_url = match &profile.avatar_url {
        Some(key) => Some(objects::presign_get(&state.s3, &state.bucket, key, PRESIGN_TTL).await?),
        None => None,
    };
    Ok(ProfileView {
        profile,
        avatar_download_url,
    })
}

/// Loads the profile row, materializing a default one on first access.
/// Signup normally creates the row, but users migrated from older builds
/// may not have one.
pub(crate) async fn load_or_init(
    state: &AppState,
    user_id: &str,
) -> Result<(UserProfile, String), ApiError> {
    let key = storage_keys::user_profile(user_id);
    match rows::load_row(&state.s3, &state.bucket, &key).await {
        Ok((profile, etag)) => Ok((profile, etag)),
        Err(StorageError::NotFound { .. }) => {
            let now = Timestamp::now();
            let profile = UserProfile {
                user_id: user_id.to_string(),
                name: None,
                avatar_url: None,
                addiction: None,
                dependency_level: None,
                onboarding_complete: false,
                created_at: now,
                updated_at: now,
            };
            let etag = rows::save_row(&state.s3, &state.bucket, &key, &profile).await?;
            Ok((profile, etag))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn get_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<ProfileView>, ApiError> {
    let (profile, _etag) = load_or_init(&state, &user.sub).await?;
    Ok(Json(present(&state, profile).await?))
}

#[derive(Deserialize)]
pub struct UpdateProfile {
    pub name: Option<String>,
    pub addiction: Option<String>,
    pub dependency_level: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<UpdateProfile>,
) -> Result<Json<ProfileView>, ApiError> {
    let (mut profile, etag) = load_or_init(&state, &user.sub).await?;

    if let Some(name) = input.name {
        let name = name.trim();
        profile.name = (!name.is_empty()).then(|| name.to_string());
    }
    if let Some(addiction) = input.addiction {
        let addiction = addiction.trim();
        profile.addiction = (!addiction.is_empty()).then(|| addiction.to_string());
    }
    if let Some(level) = input.dependency_level {
        let level = level.trim();
        profile.dependency_level = (!level.is_empty()).then(|| level.to_string());
    }
    profile.updated_at = Timestamp::now();

    let key = storage_keys::user_profile(&user.sub);
    rows::save_row_if_match(&state.s3, &state.bucket, &key, &profile, &etag).await?;

    Ok(Json(present(&state, profile).await?))
}

#[derive(Serialize)]
pub struct AvatarUpload {
    /// Presigned PUT for the avatar bytes.
    pub upload_url: String,
    /// Storage key recorded on the profile.
    pub avatar_key: String,
}

/// One avatar object per user; a new upload overwrites the old one in place.
pub async fn upload_avatar(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<AvatarUpload>, ApiError> {
    let avatar_key = storage_keys::avatar(&user.sub);
    let upload_url =
        objects::presign_put(&state.s3, &state.bucket, &avatar_key, None, PRESIGN_TTL).await?;

    let (mut profile, etag) = load_or_init(&state, &user.sub).await?;
    if profile.avatar_url.as_deref() != Some(avatar_key.as_str()) {
        profile.avatar_url = Some(avatar_key.clone());
        profile.updated_at = Timestamp::now();
        let key = storage_keys::user_profile(&user.sub);
        rows::save_row_if_match(&state.s3, &state.bucket, &key, &profile, &etag).await?;
    }

    Ok(Json(AvatarUpload {
        upload_url,
        avatar_key,
    }))
}
