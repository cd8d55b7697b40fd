//! Light operations exposed to the chat model as callable functions.

use serde::Deserialize;
use serde_json::json;

use crate::api::client::HueClient;
use crate::error::AppError;
use crate::models::color::RgbColor;

pub const GET_LIGHTS: &str = "get_lights";
pub const CHANGE_STATE: &str = "change_state";
pub const CHANGE_LIGHT_COLOR: &str = "change_light_color";

#[derive(Debug, Deserialize)]
struct ChangeStateArgs {
    #[serde(default)]
    id: Option<u32>,
    is_on: bool,
}

#[derive(Debug, Deserialize)]
struct ChangeColorArgs {
    #[serde(default)]
    id: Option<u32>,
    red: i64,
    green: i64,
    blue: i64,
}

pub struct ToolSet {
    client: HueClient,
}

impl ToolSet {
    pub fn new(client: HueClient) -> Self {
        Self { client }
    }

    /// Tool declarations in the chat-completions `tools` format.
    pub fn definitions() -> serde_json::Value {
        let id = json!({
            "type": ["integer", "null"],
            "description": "Light id. Set to null to change all lights",
        });
        let channel = |name: &str| {
            json!({
                "type": "integer",
                "minimum": 0,
                "maximum": 255,
                "description": format!("{} channel (0-255)", name),
            })
        };

        json!([
            {
                "type": "function",
                "function": {
                    "name": GET_LIGHTS,
                    "description": "Gets a list of lights and their current state",
                    "parameters": {"type": "object", "properties": {}},
                }
            },
            {
                "type": "function",
                "function": {
                    "name": CHANGE_STATE,
                    "description": "Changes the state of the light. Set id to null to change all lights. Returns true if the status change was a success",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": id,
                            "is_on": {"type": "boolean", "description": "Whether the light should be on"},
                        },
                        "required": ["id", "is_on"],
                    },
                }
            },
            {
                "type": "function",
                "function": {
                    "name": CHANGE_LIGHT_COLOR,
                    "description": "Changes the color of the light to an RGB value. Set id to null to change all lights. Returns true if the color change was a success",
                    "parameters": {
                        "type": "object",
                        "properties": {
                            "id": id,
                            "red": channel("Red"),
                            "green": channel("Green"),
                            "blue": channel("Blue"),
                        },
                        "required": ["id", "red", "green", "blue"],
                    },
                }
            },
        ])
    }

    /// Run the named tool with JSON-encoded arguments.
    pub async fn call(&self, name: &str, arguments: &str) -> Result<serde_json::Value, AppError> {
        match name {
            GET_LIGHTS => {
                let lights = self.client.list_lights().await?;
                Ok(serde_json::to_value(lights)?)
            }
            CHANGE_STATE => {
                let args: ChangeStateArgs = parse_args(name, arguments)?;
                let success = self.client.set_power(args.id, args.is_on).await?;
                Ok(json!(success))
            }
            CHANGE_LIGHT_COLOR => {
                let args: ChangeColorArgs = parse_args(name, arguments)?;
                let color = RgbColor::from_channels(args.red, args.green, args.blue)?;
                let success = self.client.set_color(args.id, color).await?;
                Ok(json!(success))
            }
            other => Err(AppError::InvalidInput(format!("Unknown tool '{}'", other))),
        }
    }
}

fn parse_args<T: serde::de::DeserializeOwned>(tool: &str, arguments: &str) -> Result<T, AppError> {
    let arguments = if arguments.trim().is_empty() {
        "{}"
    } else {
        arguments
    };
    serde_json::from_str(arguments)
        .map_err(|e| AppError::InvalidInput(format!("Invalid arguments for {}: {}", tool, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BridgeConfig;

    fn offline_tools() -> ToolSet {
        // Port 9 is discard; nothing in these tests should reach the network.
        let config = BridgeConfig::new(Some("127.0.0.1:9".into()), "test");
        ToolSet::new(HueClient::new(config).unwrap())
    }

    #[test]
    fn test_definitions_names() {
        let defs = ToolSet::definitions();
        let names: Vec<&str> = defs
            .as_array()
            .unwrap()
            .iter()
            .map(|d| d["function"]["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, vec![GET_LIGHTS, CHANGE_STATE, CHANGE_LIGHT_COLOR]);
    }

    #[test]
    fn test_id_is_nullable() {
        let defs = ToolSet::definitions();
        assert_eq!(
            defs[1]["function"]["parameters"]["properties"]["id"]["type"],
            json!(["integer", "null"])
        );
    }

    #[tokio::test]
    async fn test_unknown_tool() {
        let err = offline_tools().call("open_garage", "{}").await.unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_missing_required_argument() {
        let err = offline_tools()
            .call(CHANGE_STATE, r#"{"id": 1}"#)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("is_on"));
    }

    #[tokio::test]
    async fn test_color_out_of_range_rejected_before_request() {
        let err = offline_tools()
            .call(CHANGE_LIGHT_COLOR, r#"{"id": 1, "red": 300, "green": 0, "blue": 0}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }
}
