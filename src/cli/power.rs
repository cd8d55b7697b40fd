use clap::Subcommand;
use serde_json::json;

use crate::api::client::{HueClient, StateChange};
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;

use super::super::resolve;

#[derive(Subcommand)]
pub enum PowerCommand {
    /// Turn a light on (all lights when omitted)
    On {
        /// Light name or ID
        light: Option<String>,
    },

    /// Turn a light off (all lights when omitted)
    Off {
        /// Light name or ID
        light: Option<String>,
    },

    /// Toggle a light's power state
    Toggle {
        /// Light name or ID
        light: String,
    },

    /// Check a light's power status
    Status {
        /// Light name or ID
        light: String,
    },
}

pub async fn handle(cmd: &PowerCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    let client = resolve::hue_client(config)?;
    match cmd {
        PowerCommand::On { light } => switch(&client, light.as_deref(), true).await,
        PowerCommand::Off { light } => switch(&client, light.as_deref(), false).await,
        PowerCommand::Toggle { light } => {
            let light = resolve::resolve_light(&client, light).await?;
            let on = light.is_on != Some(true);
            let success = client.change(light.id, StateChange::Power(on)).await?;
            print_json(&json!({
                "light": light.name,
                "id": light.id,
                "power": if on { "on" } else { "off" },
                "success": success,
            }));
            Ok(())
        }
        PowerCommand::Status { light } => {
            let light = resolve::resolve_light(&client, light).await?;
            print_json(&json!({
                "light": light.name,
                "id": light.id,
                "power": light.power_label(),
            }));
            Ok(())
        }
    }
}

async fn switch(client: &HueClient, light: Option<&str>, on: bool) -> Result<(), AppError> {
    let power = if on { "on" } else { "off" };
    match light {
        Some(light) => {
            let light = resolve::resolve_light(client, light).await?;
            let success = client.change(light.id, StateChange::Power(on)).await?;
            print_json(&json!({
                "light": light.name,
                "id": light.id,
                "power": power,
                "success": success,
            }));
        }
        None => {
            let outcomes = client.change_all(StateChange::Power(on)).await?;
            print_json(&json!({
                "power": power,
                "success": outcomes.iter().all(|o| o.success),
                "lights": outcomes,
            }));
        }
    }
    Ok(())
}
