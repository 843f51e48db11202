//! The `quizdeck login` and `quizdeck logout` commands.

use std::path::PathBuf;

use anyhow::Result;

use quizdeck_client::auth::AUTH_FALLBACK;
use quizdeck_client::{load_config_from, CredentialStore, IdentityClient};

pub async fn execute(
    username: String,
    password: String,
    register: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    anyhow::ensure!(
        username.trim().len() >= 3,
        "username must be at least 3 characters"
    );
    anyhow::ensure!(
        password.len() >= 6,
        "password must be at least 6 characters"
    );

    let config = load_config_from(config_path.as_deref())?;
    let store = CredentialStore::from_config(&config)?;
    let client = IdentityClient::from_config(&config);

    let outcome = if register {
        client.register(&username, &password).await
    } else {
        client.login(&username, &password).await
    };
    let credential = outcome.map_err(|e| {
        tracing::debug!(error = %e, "authentication failed");
        anyhow::anyhow!(e.detail().unwrap_or(AUTH_FALLBACK).to_string())
    })?;

    store.save(&credential)?;
    if credential.is_admin {
        println!("Logged in as {} (admin)", credential.username);
    } else {
        println!("Logged in as {}", credential.username);
    }
    Ok(())
}

pub fn logout(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let store = CredentialStore::from_config(&config)?;
    if store.clear()? {
        println!("Logged out.");
    } else {
        println!("Not logged in.");
    }
    Ok(())
}
