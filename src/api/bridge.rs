use tokio::sync::OnceCell;
use tracing::{debug, warn};

use super::response::DiscoveredBridge;
use crate::config::BridgeConfig;
use crate::error::AppError;

/// Resolves the bridge's REST base URL, discovering the bridge at most once.
pub struct BridgeLocator {
    client: reqwest::Client,
    config: BridgeConfig,
    address: OnceCell<String>,
}

impl BridgeLocator {
    pub fn new(client: reqwest::Client, config: BridgeConfig) -> Self {
        Self {
            client,
            config,
            address: OnceCell::new(),
        }
    }

    /// The bridge address, from configuration or a one-time discovery lookup.
    pub async fn address(&self) -> Result<&str, AppError> {
        let address = self
            .address
            .get_or_try_init(|| async move {
                match &self.config.address {
                    Some(address) => Ok(address.clone()),
                    None => self.discover().await,
                }
            })
            .await?;
        Ok(address.as_str())
    }

    pub async fn base_url(&self) -> Result<String, AppError> {
        let address = self.address().await?;
        Ok(format!("http://{}/api/{}/", address, self.config.username))
    }

    async fn discover(&self) -> Result<String, AppError> {
        let url = &self.config.discovery_url;
        debug!(%url, "discovering hue bridge");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::Discovery(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Discovery(format!(
                "{} returned {}",
                url, status
            )));
        }

        let bridges: Vec<DiscoveredBridge> = response
            .json()
            .await
            .map_err(|e| AppError::Discovery(e.to_string()))?;

        if bridges.len() > 1 {
            warn!(
                count = bridges.len(),
                "found multiple hue bridges, continuing with the first one"
            );
        }

        let bridge = bridges
            .into_iter()
            .next()
            .ok_or_else(|| AppError::Discovery("No Philips Hue bridges found.".into()))?;

        debug!(id = %bridge.id, address = %bridge.internal_ip_address, "using discovered bridge");
        Ok(bridge.internal_ip_address)
    }
}
