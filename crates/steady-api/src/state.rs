use aws_sdk_cognitoidentityprovider::Client as CognitoClient;
use aws_sdk_s3::Client as S3Client;
use jsonwebtoken::DecodingKey;
use std::sync::Arc;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub s3: S3Client,
    pub bucket: String,
    pub aws_config: aws_config::SdkConfig,
    pub cognito: CognitoClient,
    pub cognito_user_pool_id: String,
    pub cognito_client_id: String,
    pub cognito_region: String,
    /// RS256 public key of the user pool, pre-fetched from the JWKS at
    /// startup. `None` only in local development, where tokens are not
    /// cryptographically verified.
    pub decoding_key: Option<Arc<DecodingKey>>,
    /// Bedrock inference profile ID used for all text generation.
    pub model_id: String,
}
