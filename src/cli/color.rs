use clap::Args;
use serde_json::json;

use crate::api::client::StateChange;
use crate::cli::output::print_json;
use crate::config::RuntimeConfig;
use crate::error::AppError;
use crate::models::color::{HueColor, RgbColor};

use super::super::resolve;

#[derive(Args)]
pub struct ColorArgs {
    /// Red (0-255)
    pub red: u8,
    /// Green (0-255)
    pub green: u8,
    /// Blue (0-255)
    pub blue: u8,
    /// Light name or ID (all lights when omitted)
    #[arg(short, long)]
    pub light: Option<String>,
}

pub async fn handle(args: &ColorArgs, config: &RuntimeConfig) -> Result<(), AppError> {
    let client = resolve::hue_client(config)?;
    let rgb = RgbColor::new(args.red, args.green, args.blue);
    let change = StateChange::Color(rgb);
    let hue = HueColor::from(rgb);

    match &args.light {
        Some(light) => {
            let light = resolve::resolve_light(&client, light).await?;
            let success = client.change(light.id, change).await?;
            print_json(&json!({
                "light": light.name,
                "id": light.id,
                "rgb": rgb,
                "hue": hue,
                "success": success,
            }));
        }
        None => {
            let outcomes = client.change_all(change).await?;
            print_json(&json!({
                "rgb": rgb,
                "hue": hue,
                "success": outcomes.iter().all(|o| o.success),
                "lights": outcomes,
            }));
        }
    }
    Ok(())
}
