//! Read-only client for the statistics/history store.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use quizdeck_core::error::ServiceError;
use quizdeck_core::traits::Credential;

use crate::config::QuizdeckConfig;
use crate::http::{build_client, decode, send_error, DEFAULT_TIMEOUT_SECS};

/// Message shown when a statistics read is rejected as unauthenticated.
pub const SESSION_EXPIRED: &str = "Session expired. Please login again.";

/// Shown when the user listing is refused without a detail.
pub const ADMIN_REQUIRED: &str = "Admin access required";

/// Label for an account without a recorded login.
pub const NEVER_LOGGED_IN: &str = "Never";

/// Aggregate statistics over all of a user's attempts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub username: String,
    pub total_quizzes: u32,
    pub average_score: f64,
    pub total_correct: u32,
    pub total_wrong: u32,
    pub total_unanswered: u32,
    /// Seconds.
    pub total_time_spent: u64,
}

/// One past attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub quiz_name: String,
    pub score: f64,
    pub max_score: f64,
    pub score_percentage: f64,
    pub attempt_number: u32,
    /// Seconds.
    pub time_spent: u64,
    #[serde(with = "completed_at_format")]
    pub completed_at: NaiveDateTime,
}

/// A registered account, as listed for administrators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub quiz_count: u32,
    /// `None` for accounts that never logged in.
    #[serde(default, with = "last_login_format")]
    pub last_login: Option<NaiveDateTime>,
    #[serde(default)]
    pub last_ip: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(with = "completed_at_format")]
    pub created_at: NaiveDateTime,
}

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

fn parse_timestamp(raw: &str) -> chrono::ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT).or_else(|_| raw.parse::<NaiveDateTime>())
}

mod completed_at_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&value.format(super::TIMESTAMP_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_timestamp(&raw).map_err(serde::de::Error::custom)
    }
}

/// `"Never"` (or null) on the wire means no login yet.
mod last_login_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(at) => s.serialize_str(&at.format(super::TIMESTAMP_FORMAT).to_string()),
            None => s.serialize_str(super::NEVER_LOGGED_IN),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        match Option::<String>::deserialize(d)? {
            None => Ok(None),
            Some(raw) if raw.is_empty() || raw == super::NEVER_LOGGED_IN => Ok(None),
            Some(raw) => super::parse_timestamp(&raw)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// Format a duration the way the dashboard does: `1h 5m` or `12m`.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

pub struct StatsClient {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl StatsClient {
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

    #[instrument(skip_all, fields(user = %credential.username))]
    pub async fn stats(&self, credential: &Credential) -> Result<UserStats, ServiceError> {
        self.get("/auth/stats", credential).await
    }

    /// Past attempts, newest first.
    #[instrument(skip_all, fields(user = %credential.username))]
    pub async fn history(&self, credential: &Credential) -> Result<Vec<HistoryEntry>, ServiceError> {
        self.get("/auth/history", credential).await
    }

    /// Every registered account. The service answers 403 for non-admins.
    #[instrument(skip_all, fields(user = %credential.username))]
    pub async fn admin_users(&self, credential: &Credential) -> Result<Vec<AdminUser>, ServiceError> {
        self.get("/auth/admin/users", credential).await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        credential: &Credential,
    ) -> Result<T, ServiceError> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .header("Authorization", format!("Bearer {}", credential.token))
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_secs))?;
        decode(response).await
    }
}
