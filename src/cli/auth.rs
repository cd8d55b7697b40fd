use dialoguer::{Input, Password};
use serde_json::json;

use crate::auth::keychain;
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;

pub async fn handle_login(config: &RuntimeConfig) -> Result<(), AppError> {
    let username = match config.username.as_deref().filter(|u| !u.is_empty()) {
        Some(username) => username.to_string(),
        None => Input::new()
            .with_prompt("Hue bridge username")
            .interact_text()
            .map_err(|e| AppError::InvalidInput(e.to_string()))?,
    };

    let api_key: String = Password::new()
        .with_prompt("Model API key (leave empty to skip)")
        .allow_empty_password(true)
        .interact()
        .map_err(|e| AppError::InvalidInput(e.to_string()))?;

    keychain::set_value(keychain::BRIDGE_USERNAME, &username)?;
    if !api_key.is_empty() {
        keychain::set_value(keychain::API_KEY, &api_key)?;
    }

    print_json(&json!({
        "status": "stored",
        "bridge_username": true,
        "api_key": !api_key.is_empty(),
    }));

    Ok(())
}

pub async fn handle_logout(_config: &RuntimeConfig) -> Result<(), AppError> {
    keychain::clear()?;
    print_json(&json!({"status": "cleared"}));
    Ok(())
}

pub async fn handle_status(config: &RuntimeConfig) -> Result<(), AppError> {
    let stored_username = keychain::get_value(keychain::BRIDGE_USERNAME)?;
    let stored_api_key = keychain::get_value(keychain::API_KEY)?;

    print_json(&json!({
        "bridge_ip": config.bridge_ip.as_deref().filter(|ip| !ip.is_empty()).unwrap_or("discover"),
        "username_source": username_source(config.username.as_deref(), stored_username.is_some()),
        "api_key_stored": stored_api_key.is_some(),
    }));
    Ok(())
}

/// Where the bridge username will be taken from. Flag and environment share one clap argument.
fn username_source(explicit: Option<&str>, stored: bool) -> &'static str {
    if explicit.is_some_and(|u| !u.is_empty()) {
        "flag_or_env"
    } else if stored {
        "keychain"
    } else {
        "missing"
    }
}
