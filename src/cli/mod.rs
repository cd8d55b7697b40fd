pub mod auth;
pub mod bridge;
pub mod chat;
pub mod color;
pub mod lights;
pub mod output;
pub mod power;

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_DISCOVERY_URL;

#[derive(Parser)]
#[command(
    name = "huechat",
    version,
    about = "Control Philips Hue lights directly or by chatting with a language model"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as human-readable table instead of JSON
    #[arg(short = 't', long = "table", global = true)]
    pub table: bool,

    /// Verbose output (log HTTP requests and tool calls)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Bridge IP address (discovered through meethue.com when unset)
    #[arg(long, env = "HUE_BRIDGE_IP", global = true)]
    pub bridge_ip: Option<String>,

    /// Bridge username (whitelisted API user)
    #[arg(long, env = "HUE_USERNAME", global = true, hide_env_values = true)]
    pub username: Option<String>,

    /// Bridge discovery endpoint
    #[arg(long, env = "HUE_DISCOVERY_URL", global = true, hide = true, default_value = DEFAULT_DISCOVERY_URL)]
    pub discovery_url: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store the bridge username and model API key in the keychain
    Login,

    /// Clear stored credentials
    Logout,

    /// Show stored credentials and bridge settings
    Status,

    /// List and inspect lights
    #[command(subcommand)]
    Lights(lights::LightsCommand),

    /// Turn lights on or off
    #[command(subcommand)]
    Power(power::PowerCommand),

    /// Set a light's color from RGB values
    Color(color::ColorArgs),

    /// Show the resolved bridge address
    Bridge,

    /// Chat with a model that can control the lights
    Chat(chat::ChatArgs),
}
