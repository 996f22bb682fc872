//! Client for the hosted auth/data service. Only the two reads the app needs
//! are implemented: resolving a session from an access token and the
//! current user's subscription row.

pub mod auth;
pub mod subscriptions;

use std::time::Duration;

use reqwest::{Client, RequestBuilder};

use crate::error::AppError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SupabaseClient {
    client: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, AppError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(SupabaseClient {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
        })
    }

    fn get(&self, path: &str, access_token: &str) -> RequestBuilder {
        self.client
            .get(format!("{}{}", self.base_url, path))
            .header("accept", "application/json")
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
    }
}
