use std::io::Write;

use clap::Args;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use crate::auth::credentials;
use crate::chat::client::ChatClient;
use crate::chat::session::ChatSession;
use crate::cli::output::print_error;
use crate::config::{ChatConfig, RuntimeConfig, DEFAULT_CHAT_ENDPOINT, DEFAULT_MODEL};
use crate::error::AppError;
use crate::tools::ToolSet;

use super::super::resolve;

#[derive(Args)]
pub struct ChatArgs {
    /// Model to chat with
    #[arg(long, env = "HUECHAT_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of an OpenAI-compatible API
    #[arg(long, env = "HUECHAT_ENDPOINT", default_value = DEFAULT_CHAT_ENDPOINT)]
    pub endpoint: String,

    /// API key for the model endpoint
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

/// Read-eval-print loop: one user line in, one model reply out, until an empty line or EOF.
pub async fn handle(args: &ChatArgs, config: &RuntimeConfig) -> Result<(), AppError> {
    let chat_config = ChatConfig {
        endpoint: args.endpoint.clone(),
        model: args.model.clone(),
        api_key: credentials::api_key(args.api_key.as_deref())?,
    };
    let client = ChatClient::new(chat_config)?;
    info!(model = client.model(), "starting chat");

    let tools = ToolSet::new(resolve::hue_client(config)?);
    let mut session = ChatSession::new(client, tools);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("User > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        match session.send(input).await {
            Ok(reply) => println!("Assistant > {}", reply),
            Err(err) => print_error(&err),
        }
    }

    Ok(())
}
