use serde_json::json;

use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;

use super::super::resolve;

pub async fn handle(config: &RuntimeConfig) -> Result<(), AppError> {
    let client = resolve::hue_client(config)?;
    let locator = client.locator();
    let address = locator.address().await?.to_string();
    print_json(&json!({
        "address": address,
        "discovered": config.bridge_ip.as_deref().map_or(true, str::is_empty),
        "base_url": locator.base_url().await?,
    }));
    Ok(())
}
