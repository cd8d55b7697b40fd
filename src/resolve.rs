use crate::api::client::HueClient;
use crate::auth::credentials::bridge_config;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::light::Light;

/// Build a bridge client from flags, environment and stored credentials.
pub fn hue_client(config: &RuntimeConfig) -> Result<HueClient, AppError> {
    HueClient::new(bridge_config(config)?)
}

/// Look up a light on the bridge by name or id.
pub async fn resolve_light(client: &HueClient, name_or_id: &str) -> Result<Light, AppError> {
    let lights = client.list_lights().await?;
    find_light(&lights, name_or_id).cloned()
}

/// Resolution priority:
/// 1. Exact name match
/// 2. Exact id match
/// 3. Case-insensitive name match
/// 4. Partial name match (only if exactly one result)
pub fn find_light<'a>(lights: &'a [Light], name_or_id: &str) -> Result<&'a Light, AppError> {
    if let Some(light) = lights.iter().find(|l| l.name == name_or_id) {
        return Ok(light);
    }

    if let Ok(id) = name_or_id.parse::<u32>() {
        if let Some(light) = lights.iter().find(|l| l.id == id) {
            return Ok(light);
        }
    }

    let name_lower = name_or_id.to_lowercase();

    if let Some(light) = lights.iter().find(|l| l.name.to_lowercase() == name_lower) {
        return Ok(light);
    }

    let partial_matches: Vec<&Light> = lights
        .iter()
        .filter(|l| l.name.to_lowercase().contains(&name_lower))
        .collect();

    match partial_matches.as_slice() {
        [light] => Ok(*light),
        [] => Err(AppError::LightNotFound(name_or_id.to_string())),
        many => {
            let names: Vec<&str> = many.iter().map(|l| l.name.as_str()).collect();
            Err(AppError::LightNotFound(format!(
                "Multiple lights match '{}': {}",
                name_or_id,
                names.join(", ")
            )))
        }
    }
}
