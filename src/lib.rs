pub mod api;
pub mod auth;
pub mod chat;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod resolve;
pub mod tools;

use cli::output::print_error;
use config::{OutputMode, RuntimeConfig};
use error::AppError;

pub async fn run(cli_args: cli::Cli) -> i32 {
    logging::init(cli_args.verbose);

    let config = RuntimeConfig {
        output_mode: if cli_args.table {
            OutputMode::Table
        } else {
            OutputMode::Json
        },
        bridge_ip: cli_args.bridge_ip,
        username: cli_args.username,
        discovery_url: cli_args.discovery_url,
    };

    let result = dispatch(cli_args.command, &config).await;

    match result {
        Ok(()) => 0,
        Err(err) => {
            print_error(&err);
            err.exit_code()
        }
    }
}

async fn dispatch(command: cli::Commands, config: &RuntimeConfig) -> Result<(), AppError> {
    match command {
        cli::Commands::Login => cli::auth::handle_login(config).await,
        cli::Commands::Logout => cli::auth::handle_logout(config).await,
        cli::Commands::Status => cli::auth::handle_status(config).await,
        cli::Commands::Lights(cmd) => cli::lights::handle(&cmd, config).await,
        cli::Commands::Power(cmd) => cli::power::handle(&cmd, config).await,
        cli::Commands::Color(args) => cli::color::handle(&args, config).await,
        cli::Commands::Bridge => cli::bridge::handle(config).await,
        cli::Commands::Chat(args) => cli::chat::handle(&args, config).await,
    }
}
