//! Bridge wire shapes. Nothing here leaves the `api` module.

use serde::{Deserialize, Serialize};

use crate::models::color::HueColor;

#[derive(Debug, Deserialize)]
pub struct HueLightRecord {
    pub name: String,
    #[serde(default)]
    pub state: HueLightState,
}

#[derive(Debug, Default, Deserialize)]
pub struct HueLightState {
    pub on: Option<bool>,
}

#[derive(Debug, Deserialize)]
pub struct DiscoveredBridge {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "internalipaddress")]
    pub internal_ip_address: String,
}

/// Body of `PUT /lights/{id}/state`. Unset fields are left untouched by the bridge.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct LightStateUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hue: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sat: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bri: Option<u8>,
}

impl LightStateUpdate {
    pub fn power(on: bool) -> Self {
        Self {
            on: Some(on),
            ..Default::default()
        }
    }

    pub fn color(color: HueColor) -> Self {
        Self {
            on: Some(true),
            hue: Some(color.hue),
            sat: Some(color.saturation),
            bri: Some(color.brightness),
        }
    }
}

/// Collect the descriptions of any `{"error": {...}}` entries in a bridge reply.
///
/// The bridge answers most requests with HTTP 200 and reports failures inside
/// a JSON array instead.
pub fn bridge_errors(body: &serde_json::Value) -> Vec<String> {
    let Some(entries) = body.as_array() else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| entry.get("error"))
        .map(|error| {
            error
                .get("description")
                .and_then(|d| d.as_str())
                .unwrap_or("unknown bridge error")
                .to_string()
        })
        .collect()
}
