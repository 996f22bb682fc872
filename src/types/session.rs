use serde::{Deserialize, Serialize};

/// User object returned by the auth service for a valid access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: String,
}

impl Session {
    pub fn from_auth_user(user: AuthUser, access_token: &str) -> Self {
        Session {
            user_id: user.id,
            email: user.email,
            access_token: access_token.to_string(),
        }
    }
}
