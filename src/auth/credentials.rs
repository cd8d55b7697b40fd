use crate::auth::keychain;
use crate::config::{BridgeConfig, RuntimeConfig};
use crate::error::AppError;

/// Bridge username from the command line or environment, falling back to the keychain.
pub fn bridge_username(config: &RuntimeConfig) -> Result<String, AppError> {
    if let Some(username) = config.username.as_deref().filter(|u| !u.is_empty()) {
        return Ok(username.to_string());
    }
    keychain::get_value(keychain::BRIDGE_USERNAME)?
        .filter(|u| !u.is_empty())
        .ok_or_else(|| {
            AppError::NotConfigured(
                "No bridge username configured. Run 'huechat login' or set HUE_USERNAME.".into(),
            )
        })
}

/// Model API key from the command line or environment, falling back to the keychain.
pub fn api_key(explicit: Option<&str>) -> Result<String, AppError> {
    if let Some(key) = explicit.filter(|k| !k.is_empty()) {
        return Ok(key.to_string());
    }
    keychain::get_value(keychain::API_KEY)?
        .filter(|k| !k.is_empty())
        .ok_or_else(|| {
            AppError::NotConfigured(
                "No model API key configured. Run 'huechat login' or set OPENAI_API_KEY.".into(),
            )
        })
}

pub fn bridge_config(config: &RuntimeConfig) -> Result<BridgeConfig, AppError> {
    let username = bridge_username(config)?;
    Ok(BridgeConfig::new(config.bridge_ip.clone(), username)
        .with_discovery_url(config.discovery_url.clone()))
}
