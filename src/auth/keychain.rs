use keyring::Entry;

use crate::error::AppError;

const SERVICE: &str = "huechat";

pub const BRIDGE_USERNAME: &str = "bridge_username";
pub const API_KEY: &str = "api_key";

fn entry(key: &str) -> Result<Entry, AppError> {
    Entry::new(SERVICE, key).map_err(|e| AppError::Keychain(e.to_string()))
}

pub fn get_value(key: &str) -> Result<Option<String>, AppError> {
    let entry = entry(key)?;
    match entry.get_password() {
        Ok(val) => Ok(Some(val)),
        Err(keyring::Error::NoEntry) => Ok(None),
        Err(e) => Err(AppError::Keychain(e.to_string())),
    }
}

pub fn set_value(key: &str, value: &str) -> Result<(), AppError> {
    let entry = entry(key)?;
    entry
        .set_password(value)
        .map_err(|e| AppError::Keychain(e.to_string()))
}

fn delete_value(key: &str) -> Result<(), AppError> {
    let entry = entry(key)?;
    match entry.delete_credential() {
        Ok(()) => Ok(()),
        Err(keyring::Error::NoEntry) => Ok(()),
        Err(e) => Err(AppError::Keychain(e.to_string())),
    }
}

pub fn clear() -> Result<(), AppError> {
    delete_value(BRIDGE_USERNAME)?;
    delete_value(API_KEY)?;
    Ok(())
}
