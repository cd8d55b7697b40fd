use clap::Subcommand;
use serde_json::json;

use crate::cli::output::{print_json, print_lights};
use crate::config::RuntimeConfig;
use crate::error::AppError;

use super::super::resolve;

#[derive(Subcommand)]
pub enum LightsCommand {
    /// List all lights
    List,

    /// Get a single light
    Get {
        /// Light name or ID
        light: String,
    },
}

pub async fn handle(cmd: &LightsCommand, config: &RuntimeConfig) -> Result<(), AppError> {
    let client = resolve::hue_client(config)?;
    match cmd {
        LightsCommand::List => {
            let lights = client.list_lights().await?;
            print_lights(&lights, config.output_mode);
            Ok(())
        }
        LightsCommand::Get { light } => {
            let light = resolve::resolve_light(&client, light).await?;
            print_json(&json!(light));
            Ok(())
        }
    }
}
