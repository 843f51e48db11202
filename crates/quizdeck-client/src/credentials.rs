//! Credential storage.
//!
//! The session core only ever reads a credential; this store is written by
//! the login and logout commands.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use quizdeck_core::traits::Credential;

use crate::config::{config_dir, QuizdeckConfig};

/// Environment variable whose value replaces the stored token.
pub const TOKEN_ENV: &str = "QUIZDECK_TOKEN";

/// A TOML file holding at most one credential.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The store named by `config`, or `~/.config/quizdeck/credentials.toml`.
    pub fn from_config(config: &QuizdeckConfig) -> Result<Self> {
        let path = match &config.credentials_path {
            Some(p) => p.clone(),
            None => config_dir()
                .map(|dir| dir.join("credentials.toml"))
                .context("cannot locate credentials: HOME is not set")?,
        };
        Ok(Self::new(path))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored credential. `QUIZDECK_TOKEN` takes precedence.
    pub fn load(&self) -> Result<Option<Credential>> {
        self.load_with_token(std::env::var(TOKEN_ENV).ok())
    }

    /// Read the stored credential, letting a non-empty `token_override`
    /// replace its token.
    pub fn load_with_token(&self, token_override: Option<String>) -> Result<Option<Credential>> {
        let stored = if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)
                .with_context(|| format!("failed to read credentials: {}", self.path.display()))?;
            Some(
                toml::from_str::<Credential>(&content).with_context(|| {
                    format!("failed to parse credentials: {}", self.path.display())
                })?,
            )
        } else {
            None
        };

        match token_override {
            Some(token) if !token.is_empty() => Ok(Some(Credential {
                token,
                username: stored.as_ref().map(|c| c.username.clone()).unwrap_or_default(),
                is_admin: stored.map(|c| c.is_admin).unwrap_or(false),
            })),
            _ => Ok(stored),
        }
    }

    /// Persist `credential`, replacing any previous one.
    pub fn save(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let content = toml::to_string(credential).context("failed to serialize credential")?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("failed to write credentials: {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))
                .with_context(|| format!("failed to restrict {}", self.path.display()))?;
        }
        Ok(())
    }

    /// Remove the stored credential. Returns `false` if there was none.
    pub fn clear(&self) -> Result<bool> {
        if !self.path.exists() {
            return Ok(false);
        }
        std::fs::remove_file(&self.path)
            .with_context(|| format!("failed to remove {}", self.path.display()))?;
        Ok(true)
    }
}
