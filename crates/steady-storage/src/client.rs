use aws_config::SdkConfig;
use aws_sdk_s3::Client;

/// Load the default AWS config. Shared across the S3, Cognito and Bedrock
/// clients so credentials are resolved once.
pub async fn load_config() -> SdkConfig {
    aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await
}

/// Build an S3 client from a loaded config.
pub fn build_client(config: &SdkConfig) -> Client {
    Client::new(config)
}
