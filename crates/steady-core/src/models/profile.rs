use serde::{Deserialize, Serialize};

/// A user profile row, keyed by the auth subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Auth subject from the identity provider.
    pub user_id: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    /// Default addiction type collected during onboarding, e.g. "álcool".
    pub addiction: Option<String>,
    /// Default dependency level collected during onboarding.
    pub dependency_level: Option<String>,
    pub onboarding_complete: bool,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}
