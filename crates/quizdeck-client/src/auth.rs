//! Identity provider client (login / register).

use serde::{Deserialize, Serialize};
use tracing::instrument;

use quizdeck_core::error::ServiceError;
use quizdeck_core::traits::Credential;

use crate::config::QuizdeckConfig;
use crate::http::{build_client, decode, send_error, DEFAULT_TIMEOUT_SECS};

/// Message shown when the identity provider gives no reason.
pub const AUTH_FALLBACK: &str = "Authentication failed";

pub struct IdentityClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct AuthRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    username: String,
    #[serde(default)]
    is_admin: bool,
}

impl IdentityClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client: build_client(timeout_secs),
        }
    }

    pub fn from_config(config: &QuizdeckConfig) -> Self {
        Self::with_timeout(&config.api_base_url, config.request_timeout_secs)
    }

    /// Log in with existing credentials.
    #[instrument(skip(self, password))]
    pub async fn login(&self, username: &str, password: &str) -> Result<Credential, ServiceError> {
        self.authenticate("/auth/login", username, password).await
    }

    /// Create an account and log in.
    #[instrument(skip(self, password))]
    pub async fn register(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Credential, ServiceError> {
        self.authenticate("/auth/register", username, password).await
    }

    async fn authenticate(
        &self,
        endpoint: &str,
        username: &str,
        password: &str,
    ) -> Result<Credential, ServiceError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, endpoint))
            .header("content-type", "application/json")
            .json(&AuthRequest { username, password })
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_secs))?;

        let token: TokenResponse = decode(response).await?;
        Ok(Credential {
            token: token.access_token,
            username: token.username,
            is_admin: token.is_admin,
        })
    }
}
