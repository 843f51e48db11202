//! Client configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level quizdeck configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizdeckConfig {
    /// Base URL of the quiz API, including any `/api` prefix.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// Path of the start-quiz endpoint.
    #[serde(default = "default_start_path")]
    pub start_path: String,
    /// Path of the submit-quiz endpoint.
    #[serde(default = "default_submit_path")]
    pub submit_path: String,
    /// Upper bound on questions drawn per quiz (server default when unset).
    #[serde(default)]
    pub max_questions: Option<u32>,
    /// Per-request timeout.
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    /// Where the login credential is kept.
    #[serde(default)]
    pub credentials_path: Option<PathBuf>,
}

fn default_api_base_url() -> String {
    "http://localhost:8000/api".to_string()
}
fn default_start_path() -> String {
    "/quiz/start".to_string()
}
fn default_submit_path() -> String {
    "/quiz/submit".to_string()
}
fn default_timeout() -> u64 {
    crate::http::DEFAULT_TIMEOUT_SECS
}

impl Default for QuizdeckConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            start_path: default_start_path(),
            submit_path: default_submit_path(),
            max_questions: None,
            request_timeout_secs: default_timeout(),
            credentials_path: None,
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        let Some(end) = result[start..].find('}') else {
            break;
        };
        let var_name = &result[start + 2..start + end];
        let value = std::env::var(var_name).unwrap_or_default();
        result = format!("{}{}{}", &result[..start], value, &result[start + end + 1..]);
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `quizdeck.toml` in the current directory
/// 2. `~/.config/quizdeck/config.toml`
///
/// `QUIZDECK_API_URL` overrides the API base URL.
pub fn load_config() -> Result<QuizdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<QuizdeckConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("quizdeck.toml");
            if local.exists() {
                Some(local)
            } else {
                config_dir()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            toml::from_str::<QuizdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => QuizdeckConfig::default(),
    };

    if let Ok(url) = std::env::var("QUIZDECK_API_URL") {
        config.api_base_url = url;
    }

    config.api_base_url = resolve_env_vars(&config.api_base_url);
    config.start_path = resolve_env_vars(&config.start_path);
    config.submit_path = resolve_env_vars(&config.submit_path);
    config.credentials_path = config
        .credentials_path
        .map(|p| PathBuf::from(resolve_env_vars(&p.to_string_lossy())));

    anyhow::ensure!(
        config.request_timeout_secs >= 1,
        "request_timeout_secs must be at least 1"
    );

    Ok(config)
}

/// `~/.config/quizdeck`, if `HOME` is set.
pub fn config_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("quizdeck"))
}
