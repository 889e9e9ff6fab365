use axum::extract::State;
use axum::Json;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use steady_auth::flows;
use steady_core::models::profile::UserProfile;
use steady_core::storage_keys;
use steady_storage::rows;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Serialize)]
pub struct SignUpResponse {
    pub user_id: String,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(input): Json<SignUpRequest>,
) -> Result<Json<SignUpResponse>, ApiError> {
    let email = input.email.trim();
    let name = input.name.trim();
    if email.is_empty() || input.password.is_empty() || name.is_empty() {
        return Err(ApiError::BadRequest(
            "email, password and name are required".to_string(),
        ));
    }

    let user_id = flows::sign_up(
        &state.cognito,
        &state.cognito_client_id,
        email,
        &input.password,
        name,
    )
    .await?;

    // Seed the profile row so first login never 404s.
    let now = Timestamp::now();
    let profile = UserProfile {
        user_id: user_id.clone(),
        name: Some(name.to_string()),
        avatar_url: None,
        addiction: None,
        dependency_level: None,
        onboarding_complete: false,
        created_at: now,
        updated_at: now,
    };
    let key = storage_keys::user_profile(&user_id);
    rows::save_row(&state.s3, &state.bucket, &key, &profile).await?;

    tracing::info!(%user_id, "user registered");
    Ok(Json(SignUpResponse { user_id }))
}

#[derive(Deserialize)]
pub struct ConfirmRequest {
    pub email: String,
    pub code: String,
}

pub async fn confirm(
    State(state): State<AppState>,
    Json(input): Json<ConfirmRequest>,
) -> Result<Json<()>, ApiError> {
    flows::confirm_sign_up(
        &state.cognito,
        &state.cognito_client_id,
        input.email.trim(),
        input.code.trim(),
    )
    .await?;
    Ok(Json(()))
}

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
}

impl From<flows::SessionTokens> for SessionResponse {
    fn from(tokens: flows::SessionTokens) -> Self {
        Self {
            access_token: tokens.access_token,
            id_token: tokens.id_token,
            refresh_token: tokens.refresh_token,
        }
    }
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(input): Json<SignInRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let tokens = flows::sign_in(
        &state.cognito,
        &state.cognito_client_id,
        input.email.trim(),
        &input.password,
    )
    .await?;
    Ok(Json(tokens.into()))
}

#[derive(Deserialize)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(input): Json<RefreshRequest>,
) -> Result<Json<SessionResponse>, ApiError> {
    let tokens = flows::refresh_session(
        &state.cognito,
        &state.cognito_client_id,
        &input.refresh_token,
    )
    .await?;
    Ok(Json(tokens.into()))
}

#[derive(Deserialize)]
pub struct SignOutRequest {
    pub access_token: String,
}

pub async fn sign_out(
    State(state): State<AppState>,
    Json(input): Json<SignOutRequest>,
) -> Result<Json<()>, ApiError> {
    flows::sign_out(&state.cognito, &input.access_token).await?;
    Ok(Json(()))
}
