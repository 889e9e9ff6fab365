use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use crate::state::AppState;

/// JWT validation middleware.
///
/// Extracts the `Authorization: Bearer <token>` header, validates the JWT
/// against the user pool, and inserts [`AuthUser`] into request extensions
/// for handlers to use. Without a decoding key (local development) the raw
/// token is taken as the subject, unverified.
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let auth_header = req
        .headers()
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or(StatusCode::UNAUTHORIZED)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(StatusCode::UNAUTHORIZED)?;

    if token.is_empty() {
        return Err(StatusCode::UNAUTHORIZED);
    }

    let sub = match &state.decoding_key {
        Some(key) => {
            let claims = steady_auth::jwt::validate_token(
                token,
                key,
                &state.cognito_user_pool_id,
                &state.cognito_region,
            )
            .map_err(|e| {
                tracing::warn!("rejected token: {e}");
                StatusCode::UNAUTHORIZED
            })?;
            claims.sub
        }
        None => token.to_string(),
    };

    req.extensions_mut().insert(AuthUser { sub });

    Ok(next.run(req).await)
}

/// Authenticated user extracted from JWT claims.
#[derive(Clone, Debug)]
pub struct AuthUser {
    pub sub: String,
}
