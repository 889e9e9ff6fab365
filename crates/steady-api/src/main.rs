use std::env;
use std::sync::Arc;

use axum::middleware as axum_mw;
use axum::routing::{delete, get, post, put};
use axum::Router;
use jsonwebtoken::DecodingKey;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let bucket = env::var("STEADY_BUCKET").unwrap_or_else(|_| "steady".to_string());
    let cognito_user_pool_id =
        env::var("COGNITO_USER_POOL_ID").unwrap_or_else(|_| "us-east-1_placeholder".to_string());
    let cognito_client_id =
        env::var("COGNITO_CLIENT_ID").unwrap_or_else(|_| "placeholder".to_string());
    let cognito_region = env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string());
    let model_id = env::var("STEADY_MODEL_ID")
        .unwrap_or_else(|_| "us.amazon.nova-lite-v1:0".to_string());

    // RS256 public key of the user pool, provisioned from the JWKS. Absent in
    // local development, where tokens pass through unverified.
    let decoding_key = match (env::var("COGNITO_RSA_MODULUS"), env::var("COGNITO_RSA_EXPONENT")) {
        (Ok(n), Ok(e)) => Some(Arc::new(
            DecodingKey::from_rsa_components(&n, &e)
                .map_err(|e| eyre::eyre!("invalid COGNITO_RSA_* key material: {e}"))?,
        )),
        _ => {
            tracing::warn!("COGNITO_RSA_* not set, token signatures will not be verified");
            None
        }
    };

    let aws_config = steady_storage::client::load_config().await;
    let s3 = steady_storage::client::build_client(&aws_config);
    let cognito = steady_auth::client::build_client(&aws_config);

    let state = AppState {
        s3,
        bucket,
        aws_config,
        cognito,
        cognito_user_pool_id,
        cognito_client_id,
        cognito_region,
        decoding_key,
        model_id,
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth flows and health are public; everything else requires a session.
    let public = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/auth/registro", post(routes::auth::sign_up))
        .route("/auth/confirmar", post(routes::auth::confirm))
        .route("/auth/login", post(routes::auth::sign_in))
        .route("/auth/refresh", post(routes::auth::refresh))
        .route("/auth/logout", post(routes::auth::sign_out));

    let protected = Router::new()
        .route("/metas", get(routes::goals::list_goals))
        .route("/metas", post(routes::goals::create_goal))
        .route("/metas/{id}", get(routes::goals::get_goal))
        .route("/metas/{id}", delete(routes::goals::delete_goal))
        .route("/metas/{id}/recaida", post(routes::goals::relapse))
        .route("/metas/{id}/verificar", post(routes::goals::check_completion))
        .route("/diarios", get(routes::journal::list_entries))
        .route("/diarios", post(routes::journal::create_entry))
        .route("/diarios/sequencia", get(routes::journal::streak))
        .route(
            "/diarios/{entry_id}/anexos",
            get(routes::journal::list_attachments),
        )
        .route(
            "/diarios/{entry_id}/anexos",
            post(routes::journal::create_attachment),
        )
        .route("/forum/posts", get(routes::forum::list_posts))
        .route("/forum/posts", post(routes::forum::create_post))
        .route("/forum/posts/{id}", delete(routes::forum::delete_post))
        .route("/forum/posts/{id}/curtir", post(routes::forum::like_post))
        .route("/forum/posts/{id}/curtir", delete(routes::forum::unlike_post))
        .route(
            "/forum/posts/{id}/comentarios",
            get(routes::forum::list_comments),
        )
        .route(
            "/forum/posts/{id}/comentarios",
            post(routes::forum::create_comment),
        )
        .route("/chatbot/mensagem", post(routes::chatbot::send_message))
        .route("/chatbot/historico", get(routes::chatbot::history))
        .route("/pontos", get(routes::points::list_points))
        .route("/perfil", get(routes::profile::get_profile))
        .route("/perfil", put(routes::profile::update_profile))
        .route("/perfil/avatar", post(routes::profile::upload_avatar))
        .route("/onboarding/finalizar", post(routes::onboarding::finish))
        .route_layer(axum_mw::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    let app = public
        .merge(protected)
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
