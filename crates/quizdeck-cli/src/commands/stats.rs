//! The `quizdeck stats`, `quizdeck history`, and `quizdeck users` commands.

use std::path::PathBuf;

use anyhow::Result;

use quizdeck_client::stats::{ADMIN_REQUIRED, SESSION_EXPIRED};
use quizdeck_client::{load_config_from, CredentialStore, StatsClient};
use quizdeck_core::error::ServiceError;
use quizdeck_core::traits::Credential;

use crate::output;

/// Resolve the store, the credential, and the client for a statistics read.
fn prepare(config_path: Option<PathBuf>) -> Result<(CredentialStore, Credential, StatsClient)> {
    let config = load_config_from(config_path.as_deref())?;
    let store = CredentialStore::from_config(&config)?;
    let Some(credential) = store.load()? else {
        anyhow::bail!("not logged in. Run `quizdeck login` first.");
    };
    Ok((store, credential, StatsClient::from_config(&config)))
}

/// Map a failed read to a user-facing error, forcing re-login on 401.
fn read_failed(store: &CredentialStore, err: ServiceError) -> anyhow::Error {
    if err.is_auth_expired() {
        if let Err(e) = store.clear() {
            tracing::warn!(error = %e, "could not remove expired credential");
        }
        return anyhow::anyhow!(SESSION_EXPIRED);
    }
    anyhow::Error::new(err).context("Failed to fetch statistics")
}

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (store, credential, client) = prepare(config_path)?;
    let stats = client
        .stats(&credential)
        .await
        .map_err(|e| read_failed(&store, e))?;
    print!("{}", output::stats_text(&stats));
    Ok(())
}

pub async fn history(config_path: Option<PathBuf>) -> Result<()> {
    let (store, credential, client) = prepare(config_path)?;
    let history = client
        .history(&credential)
        .await
        .map_err(|e| read_failed(&store, e))?;
    print!("{}", output::history_text(&history));
    Ok(())
}

pub async fn users(config_path: Option<PathBuf>) -> Result<()> {
    let (store, credential, client) = prepare(config_path)?;
    let users = client.admin_users(&credential).await.map_err(|e| {
        if e.status() == Some(403) {
            anyhow::anyhow!(e.detail().unwrap_or(ADMIN_REQUIRED).to_string())
        } else {
            read_failed(&store, e)
        }
    })?;
    print!("{}", output::users_text(&users));
    Ok(())
}
