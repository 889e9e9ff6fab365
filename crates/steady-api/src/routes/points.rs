use axum::extract::State;
use axum::{Extension, Json};
use jiff::tz::TimeZone;
use jiff::Timestamp;
use serde::Serialize;
use uuid::Uuid;

use steady_core::models::points::{self, PointAward};
use steady_core::storage_keys;
use steady_storage::rows;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PointsSummary {
    pub awards: Vec<PointAward>,
    pub total: i64,
}

pub async fn list_points(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
) -> Result<Json<PointsSummary>, ApiError> {
    let mut awards = load_awards(&state, &user.sub).await?;
    awards.sort_by(|a, b| b.awarded_at.cmp(&a.awarded_at));
    let total = points::total(&awards);
    Ok(Json(PointsSummary { awards, total }))
}

pub(crate) async fn load_awards(
    state: &AppState,
    user_id: &str,
) -> Result<Vec<PointAward>, ApiError> {
    let prefix = storage_keys::point_awards_prefix(user_id);
    Ok(rows::list_rows(&state.s3, &state.bucket, &prefix).await?)
}

/// Insert an award unless one with the same reason already exists for the
/// calendar day of `now` (the once-per-reason-per-day invariant). Returns
/// whether an award was inserted.
pub(crate) async fn award_daily(
    state: &AppState,
    user_id: &str,
    reason: &str,
    now: Timestamp,
    goal_id: Option<Uuid>,
    entry_id: Option<Uuid>,
) -> Result<bool, ApiError> {
    let awards = load_awards(state, user_id).await?;
    let today = now.to_zoned(TimeZone::UTC).date();
    if points::already_awarded_on(&awards, reason, today) {
        return Ok(false);
    }

    insert_award(state, user_id, reason, now, goal_id, entry_id).await?;
    Ok(true)
}

pub(crate) async fn insert_award(
    state: &AppState,
    user_id: &str,
    reason: &str,
    now: Timestamp,
    goal_id: Option<Uuid>,
    entry_id: Option<Uuid>,
) -> Result<(), ApiError> {
    let award = PointAward {
        id: Uuid::new_v4(),
        user_id: user_id.to_string(),
        quantity: points::reason::quantity(reason),
        reason: reason.to_string(),
        awarded_at: now,
        goal_id,
        entry_id,
    };
    let key = storage_keys::point_award(user_id, award.id);
    rows::save_row(&state.s3, &state.bucket, &key, &award).await?;

    tracing::info!(user_id, reason, quantity = award.quantity, "points awarded");
    Ok(())
}
