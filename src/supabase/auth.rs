use log::{debug, warn};
use reqwest::StatusCode;

use crate::error::AppError;
use crate::types::session::{AuthUser, Session};

use super::SupabaseClient;

impl SupabaseClient {
    /// `Ok(None)` when the auth service does not recognise the token.
    pub async fn get_session(&self, access_token: &str) -> Result<Option<Session>, AppError> {
        if access_token.is_empty() {
            return Ok(None);
        }

        let response = self.get("/auth/v1/user", access_token).send().await?;
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            debug!("auth service rejected access token: {}", status);
            return Ok(None);
        }

        if !status.is_success() {
            let error_message = response.text().await?;
            warn!("Error retrieving session: {} {}", status, error_message);
            return Err(AppError::FetchFailed(format!("session lookup returned {}", status)));
        }

        let user: AuthUser = response.json().await?;
        Ok(Some(Session::from_auth_user(user, access_token)))
    }
}
