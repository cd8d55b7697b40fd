use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, warn};

use super::bridge::BridgeLocator;
use super::response::{bridge_errors, HueLightRecord, LightStateUpdate};
use crate::config::BridgeConfig;
use crate::error::AppError;
use crate::models::color::{HueColor, RgbColor};
use crate::models::light::{Light, LightOutcome};

/// A state change that can be applied to one light or to every light.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Power(bool),
    Color(RgbColor),
}

impl StateChange {
    fn to_update(self) -> LightStateUpdate {
        match self {
            StateChange::Power(on) => LightStateUpdate::power(on),
            StateChange::Color(rgb) => LightStateUpdate::color(HueColor::from(rgb)),
        }
    }
}

pub struct HueClient {
    client: reqwest::Client,
    locator: BridgeLocator,
}

fn build_http_client() -> Result<reqwest::Client, AppError> {
    Ok(reqwest::Client::builder()
        .user_agent(concat!("huechat/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(15))
        .build()?)
}

impl HueClient {
    pub fn new(config: BridgeConfig) -> Result<Self, AppError> {
        let client = build_http_client()?;
        let locator = BridgeLocator::new(client.clone(), config);
        Ok(Self { client, locator })
    }

    pub fn locator(&self) -> &BridgeLocator {
        &self.locator
    }

    /// Fetch every light known to the bridge, ordered by id.
    pub async fn list_lights(&self) -> Result<Vec<Light>, AppError> {
        let body = self.get("lights").await?;

        let records: HashMap<String, HueLightRecord> = serde_json::from_value(body)
            .map_err(|e| AppError::MalformedResponse(format!("light listing: {}", e)))?;

        let mut lights = records
            .into_iter()
            .map(|(key, record)| -> Result<Light, AppError> {
                let id = key.parse::<u32>().map_err(|_| {
                    AppError::MalformedResponse(format!("light id '{}' is not numeric", key))
                })?;
                Ok(Light {
                    id,
                    name: record.name,
                    is_on: record.state.on,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        lights.sort_by_key(|light| light.id);
        Ok(lights)
    }

    /// Turn one light, or every light when `id` is `None`, on or off.
    pub async fn set_power(&self, id: Option<u32>, on: bool) -> Result<bool, AppError> {
        self.apply(id, StateChange::Power(on)).await
    }

    /// Switch one light, or every light when `id` is `None`, on and set its color.
    pub async fn set_color(&self, id: Option<u32>, color: RgbColor) -> Result<bool, AppError> {
        self.apply(id, StateChange::Color(color)).await
    }

    async fn apply(&self, id: Option<u32>, change: StateChange) -> Result<bool, AppError> {
        match id {
            Some(id) => self.change(id, change).await,
            None => {
                let outcomes = self.change_all(change).await?;
                Ok(outcomes.iter().all(|outcome| outcome.success))
            }
        }
    }

    /// Apply a change to a single light. `Ok(false)` means the bridge refused it.
    pub async fn change(&self, id: u32, change: StateChange) -> Result<bool, AppError> {
        self.put_state(id, &change.to_update()).await
    }

    /// Apply a change to every light, one at a time in listing order.
    ///
    /// Every light is attempted even after a failure.
    pub async fn change_all(&self, change: StateChange) -> Result<Vec<LightOutcome>, AppError> {
        let lights = self.list_lights().await?;
        let update = change.to_update();

        let mut outcomes = Vec::with_capacity(lights.len());
        for light in &lights {
            let success = self.put_state(light.id, &update).await?;
            if !success {
                warn!(id = light.id, name = %light.name, "bridge rejected state change");
            }
            outcomes.push(LightOutcome {
                id: light.id,
                success,
            });
        }
        Ok(outcomes)
    }

    async fn get(&self, path: &str) -> Result<serde_json::Value, AppError> {
        let url = format!("{}{}", self.locator.base_url().await?, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: text,
            });
        }

        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| AppError::MalformedResponse(e.to_string()))?;

        let errors = bridge_errors(&body);
        if !errors.is_empty() {
            return Err(AppError::Upstream {
                status: status.as_u16(),
                message: errors.join("; "),
            });
        }

        Ok(body)
    }

    async fn put_state(&self, id: u32, update: &LightStateUpdate) -> Result<bool, AppError> {
        let url = format!("{}lights/{}/state", self.locator.base_url().await?, id);
        debug!(%url, body = ?update, "PUT");

        let response = self.client.put(&url).json(update).send().await?;
        let status = response.status();

        if !status.is_success() {
            warn!(id, %status, "light state change failed");
            return Ok(false);
        }

        let text = response.text().await?;
        if let Ok(body) = serde_json::from_str::<serde_json::Value>(&text) {
            let errors = bridge_errors(&body);
            if !errors.is_empty() {
                warn!(id, errors = ?errors, "bridge reported errors");
                return Ok(false);
            }
        }

        Ok(true)
    }
}
