use aws_config::SdkConfig;
use aws_sdk_cognitoidentityprovider::Client;

/// Build a Cognito Identity Provider client from a loaded config.
pub fn build_client(config: &SdkConfig) -> Client {
    Client::new(config)
}
