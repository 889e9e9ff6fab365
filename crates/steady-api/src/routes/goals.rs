use axum::extract::{Path, State};
use axum::{Extension, Json};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use steady_bedrock::{generate, prompts};
use steady_core::models::goal::{self as goal_model, Goal, GoalStatus, GoalUnit};
use steady_core::models::points::{self, reason};
use steady_core::models::profile::UserProfile;
use steady_core::progress::{
    self, apply_completion, apply_relapse, ElapsedClock, GoalProgress, ProgressPolicy,
};
use steady_core::storage_keys;
use steady_storage::{objects, rows};

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::routes::points::{insert_award, load_awards};

/// Percentage shaping served by the API. The staged-boost curve exists in
/// the engine but is not product-authoritative.
const POLICY: ProgressPolicy = ProgressPolicy::Linear;

#[derive(Serialize)]
pub struct GoalView {
    #[serde(flatten)]
    pub goal: Goal,
    /// Display-ready progress computed at read time. Distinct from the
    /// goal's own persisted `progress` fraction.
    pub computed: GoalProgress,
}

#[derive(Serialize)]
pub struct GoalDetail {
    #[serde(flatten)]
    pub goal: Goal,
    pub computed: GoalProgress,
    /// Continuous time-since-start counter for the detail screen.
    pub clock: ElapsedClock,
}

fn view(goal: Goal, now: Timestamp) -> GoalView {
    let computed = progress::progress(&goal, now, POLICY);
    GoalView { goal, computed }
}

pub async fn list_goals(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Vec<GoalView>>, ApiError> {
    let prefix = storage_keys::goals_prefix(&user.sub);
    let mut goals: Vec<Goal> = rows::list_rows(&state.s3, &state.bucket, &prefix).await?;
    goals.sort_by(|a, b| b.started_at.cmp(&a.started_at));

    let now = Timestamp::now();
    Ok(Json(goals.into_iter().map(|g| view(g, now)).collect()))
}

#[derive(Deserialize)]
pub struct CreateGoal {
    pub title: String,
    pub description: Option<String>,
    pub addiction: String,
    pub objective: i64,
    pub unit: GoalUnit,
}

pub async fn create_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Json(input): Json<CreateGoal>,
) -> Result<Json<GoalView>, ApiError> {
    let title = input.title.trim();
    let addiction = input.addiction.trim();
    goal_model::validate_new(title, addiction, input.objective)?;

    // Dependency level collected at onboarding seeds the motivation prompt.
    let dependency_level = load_dependency_level(&state, &user.sub).await;

    let prompt = prompts::goal_motivation(addiction, dependency_level.as_deref());
    let motivation = match generate::generate_text(
        &state.aws_config,
        &state.model_id,
        &prompt,
        generate::GenerationParams::STANDARD,
    )
    .await
    {
        Ok(text) => Some(text),
        Err(e) => {
            // AI text is best-effort; the goal is created regardless.
            tracing::warn!("motivation generation failed: {e}");
            Some(prompts::MOTIVATION_FALLBACK.to_string())
        }
    };

    let now = Timestamp::now();
    let goal = Goal {
        id: Uuid::new_v4(),
        user_id: user.sub.clone(),
        addiction: addiction.to_string(),
        title: title.to_string(),
        description: input
            .description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from),
        objective: input.objective,
        unit: input.unit,
        started_at: now,
        expected_end: progress::target_end(now, input.objective, input.unit),
        ended_at: None,
        completed_at: None,
        status: GoalStatus::Active,
        motivation,
        progress: 0.0,
        created_at: now,
        updated_at: now,
    };

    let key = storage_keys::goal(&user.sub, goal.id);
    rows::save_row(&state.s3, &state.bucket, &key, &goal).await?;

    Ok(Json(view(goal, now)))
}

pub async fn get_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<GoalDetail>, ApiError> {
    let key = storage_keys::goal(&user.sub, id);
    let (goal, _etag): (Goal, _) = rows::load_row(&state.s3, &state.bucket, &key).await?;

    let now = Timestamp::now();
    let computed = progress::progress(&goal, now, POLICY);
    let clock = progress::elapsed_clock(goal.started_at, now);
    Ok(Json(GoalDetail {
        goal,
        computed,
        clock,
    }))
}

pub async fn delete_goal(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<()>, ApiError> {
    let key = storage_keys::goal(&user.sub, id);
    objects::delete_object(&state.s3, &state.bucket, &key).await?;
    Ok(Json(()))
}

/// Relapse: restart the goal's progress clock from now.
///
/// Destructive from the user's point of view (all elapsed progress is
/// discarded), so the app confirms before calling. The write is
/// ETag-guarded against a concurrent completion check.
pub async fn relapse(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<GoalView>, ApiError> {
    let key = storage_keys::goal(&user.sub, id);
    let (mut goal, etag): (Goal, String) = rows::load_row(&state.s3, &state.bucket, &key).await?;

    if goal.status != GoalStatus::Active {
        return Err(ApiError::BadRequest(
            "only an active goal can register a relapse".to_string(),
        ));
    }

    let now = Timestamp::now();
    apply_relapse(&mut goal, now);
    rows::save_row_if_match(&state.s3, &state.bucket, &key, &goal, &etag).await?;

    tracing::info!(goal_id = %id, "relapse registered, clock reset");
    Ok(Json(view(goal, now)))
}

#[derive(Serialize)]
pub struct CompletionCheck {
    /// Whether the goal is completed after this check.
    pub completed: bool,
    /// Whether this check performed the transition.
    pub transitioned: bool,
    /// Whether this check inserted the completion award.
    pub awarded: bool,
    pub progress: GoalProgress,
}

/// Single-shot completion check.
///
/// Replaces the old free-running client timer: the app calls this when the
/// countdown reaches the objective (or on screen load). Safe to call any
/// number of times — the transition is a pure-state no-op once completed and
/// the 5-point `meta_concluida` award is keyed to the goal, so neither can
/// double-fire. A failed award write is repaired by the next check.
pub async fn check_completion(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Path(id): Path<Uuid>,
) -> Result<Json<CompletionCheck>, ApiError> {
    let key = storage_keys::goal(&user.sub, id);
    let (mut goal, etag): (Goal, String) = rows::load_row(&state.s3, &state.bucket, &key).await?;

    let now = Timestamp::now();
    let transitioned = apply_completion(&mut goal, now);
    if transitioned {
        // Status write first; the award below is retryable on its own.
        rows::save_row_if_match(&state.s3, &state.bucket, &key, &goal, &etag).await?;
        tracing::info!(goal_id = %id, "goal completed");
    }

    let mut awarded = false;
    if goal.status == GoalStatus::Completed {
        let awards = load_awards(&state, &user.sub).await?;
        if !points::goal_already_awarded(&awards, goal.id) {
            insert_award(
                &state,
                &user.sub,
                reason::GOAL_COMPLETED,
                now,
                Some(goal.id),
                None,
            )
            .await?;
            awarded = true;
        }
    }

    let progress = progress::progress(&goal, now, POLICY);
    Ok(Json(CompletionCheck {
        completed: goal.status == GoalStatus::Completed,
        transitioned,
        awarded,
        progress,
    }))
}

async fn load_dependency_level(state: &AppState, user_id: &str) -> Option<String> {
    let key = storage_keys::user_profile(user_id);
    match rows::load_row::<UserProfile>(&state.s3, &state.bucket, &key).await {
        Ok((profile, _)) => profile.dependency_level,
        Err(_) => None,
    }
}
