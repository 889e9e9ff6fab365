use axum::extract::State;
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use steady_bedrock::{generate, prompts};
use steady_core::models::goal::{Goal, GoalStatus, GoalUnit};
use steady_core::progress;
use steady_core::storage_keys;
use steady_storage::rows;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::profile::load_or_init;
use crate::state::AppState;

/// The starter goal every new user gets: 30 clean days.
const FIRST_GOAL_TITLE: &str = "Minha Primeira Meta Rumo à Recuperação!";
const FIRST_GOAL_DAYS: i64 = 30;

#[derive(Deserialize)]
pub struct FinishOnboarding {
    pub addiction: String,
    pub dependency_level: String,
}

#[derive(Serialize)]
pub struct OnboardingResult {
    pub motivation: String,
    pub goal_id: Uuid,
}

/// Closes the onboarding flow: records the user's answers, generates a
/// short welcome motivation, and seeds the first goal so the home screen
/// is never empty.
pub async fn finish(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<FinishOnboarding>,
) -> Result<Json<OnboardingResult>, ApiError> {
    let addiction = input.addiction.trim();
    let dependency_level = input.dependency_level.trim();
    if addiction.is_empty() || dependency_level.is_empty() {
        return Err(ApiError::BadRequest(
            "addiction and dependency_level are required".to_string(),
        ));
    }

    let (mut profile, etag) = load_or_init(&state, &user.sub).await?;
    profile.addiction = Some(addiction.to_string());
    profile.dependency_level = Some(dependency_level.to_string());
    profile.onboarding_complete = true;
    profile.updated_at = Timestamp::now();

    let profile_key = storage_keys::user_profile(&user.sub);
    rows::save_row_if_match(&state.s3, &state.bucket, &profile_key, &profile, &etag).await?;

    let prompt = prompts::onboarding_motivation(addiction, dependency_level);
    let motivation = match generate::generate_text(
        &state.aws_config,
        &state.model_id,
        &prompt,
        generate::GenerationParams::ONBOARDING,
    )
    .await
    {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!("onboarding motivation generation failed: {e}");
            prompts::MOTIVATION_FALLBACK.to_string()
        }
    };

    let now = Timestamp::now();
    let goal = Goal {
        id: Uuid::new_v4(),
        user_id: user.sub.clone(),
        addiction: addiction.to_string(),
        title: FIRST_GOAL_TITLE.to_string(),
        description: Some(format!("Superar o vício em {addiction}")),
        objective: FIRST_GOAL_DAYS,
        unit: GoalUnit::Days,
        started_at: now,
        expected_end: progress::target_end(now, FIRST_GOAL_DAYS, GoalUnit::Days),
        ended_at: None,
        completed_at: None,
        status: GoalStatus::Active,
        motivation: Some(motivation.clone()),
        progress: 0.0,
        created_at: now,
        updated_at: now,
    };

    let goal_key = storage_keys::goal(&user.sub, goal.id);
    rows::save_row(&state.s3, &state.bucket, &goal_key, &goal).await?;

    tracing::info!(goal_id = %goal.id, "onboarding complete, first goal created");
    Ok(Json(OnboardingResult {
        motivation,
        goal_id: goal.id,
    }))
}
