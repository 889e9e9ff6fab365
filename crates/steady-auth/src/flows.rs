use std::collections::HashMap;

use aws_sdk_cognitoidentityprovider::types::{AttributeType, AuthFlowType};
use aws_sdk_cognitoidentityprovider::Client;
use tracing::info;

use crate::error::AuthError;

/// A successful session: the token triple returned by Cognito.
#[derive(Debug, Clone)]
pub struct SessionTokens {
    pub access_token: String,
    pub id_token: String,
    pub refresh_token: String,
}

/// Register a new user. Returns the new user's subject.
///
/// Cognito sends the confirmation code out of band; the account is unusable
/// until [`confirm_sign_up`] succeeds.
pub async fn sign_up(
    client: &Client,
    user_pool_client_id: &str,
    email: &str,
    password: &str,
    name: &str,
) -> Result<String, AuthError> {
    info!(email, "signing up user");

    let name_attr = AttributeType::builder()
        .name("name")
        .value(name)
        .build()
        .map_err(|e| AuthError::SignUpFailed(e.to_string()))?;

    let resp = client
        .sign_up()
        .client_id(user_pool_client_id)
        .username(email)
        .password(password)
        .user_attributes(name_attr)
        .send()
        .await
        .map_err(|e| AuthError::SignUpFailed(e.into_service_error().to_string()))?;

    Ok(resp.user_sub().to_string())
}

/// Confirm a sign-up with the emailed confirmation code.
pub async fn confirm_sign_up(
    client: &Client,
    user_pool_client_id: &str,
    email: &str,
    code: &str,
) -> Result<(), AuthError> {
    client
        .confirm_sign_up()
        .client_id(user_pool_client_id)
        .username(email)
        .confirmation_code(code)
        .send()
        .await
        .map_err(|e| AuthError::SignUpFailed(e.into_service_error().to_string()))?;

    Ok(())
}

/// Initiate username/password authentication.
pub async fn sign_in(
    client: &Client,
    user_pool_client_id: &str,
    email: &str,
    password: &str,
) -> Result<SessionTokens, AuthError> {
    info!(email, "initiating auth");

    let mut auth_params = HashMap::new();
    auth_params.insert("USERNAME".to_string(), email.to_string());
    auth_params.insert("PASSWORD".to_string(), password.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::UserPasswordAuth)
        .client_id(user_pool_client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    let result = resp
        .authentication_result()
        .ok_or_else(|| AuthError::AuthFailed("no authentication result".to_string()))?;

    Ok(SessionTokens {
        access_token: result.access_token().unwrap_or_default().to_string(),
        id_token: result.id_token().unwrap_or_default().to_string(),
        refresh_token: result.refresh_token().unwrap_or_default().to_string(),
    })
}

/// Refresh a session. Cognito does not rotate the refresh token here, so the
/// original one is echoed back in the result.
pub async fn refresh_session(
    client: &Client,
    user_pool_client_id: &str,
    refresh_token: &str,
) -> Result<SessionTokens, AuthError> {
    let mut auth_params = HashMap::new();
    auth_params.insert("REFRESH_TOKEN".to_string(), refresh_token.to_string());

    let resp = client
        .initiate_auth()
        .auth_flow(AuthFlowType::RefreshTokenAuth)
        .client_id(user_pool_client_id)
        .set_auth_parameters(Some(auth_params))
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    let result = resp
        .authentication_result()
        .ok_or_else(|| AuthError::AuthFailed("refresh returned no result".to_string()))?;

    Ok(SessionTokens {
        access_token: result.access_token().unwrap_or_default().to_string(),
        id_token: result.id_token().unwrap_or_default().to_string(),
        refresh_token: refresh_token.to_string(),
    })
}

/// Invalidate every session of the calling user.
pub async fn sign_out(client: &Client, access_token: &str) -> Result<(), AuthError> {
    client
        .global_sign_out()
        .access_token(access_token)
        .send()
        .await
        .map_err(|e| AuthError::Cognito(e.into_service_error().to_string()))?;

    Ok(())
}
