use tracing::{debug, warn};

use super::client::{ChatClient, ChatMessage};
use crate::error::AppError;
use crate::tools::ToolSet;

pub const MAX_TOOL_ROUNDS: usize = 8;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant that controls the user's \
Philips Hue lights. Use the available functions to look up and change lights, and tell \
the user plainly what happened.";

/// A running conversation in which the model may call the light tools.
pub struct ChatSession {
    client: ChatClient,
    tools: ToolSet,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new(client: ChatClient, tools: ToolSet) -> Self {
        Self {
            client,
            tools,
            history: vec![ChatMessage::system(SYSTEM_PROMPT)],
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Send one user turn and return the model's final text reply.
    ///
    /// On error the history is restored to what it was before the turn.
    pub async fn send(&mut self, text: &str) -> Result<String, AppError> {
        let checkpoint = self.history.len();
        let result = self.run_turn(text).await;
        if result.is_err() {
            self.history.truncate(checkpoint);
        }
        result
    }

    async fn run_turn(&mut self, text: &str) -> Result<String, AppError> {
        self.history.push(ChatMessage::user(text));
        let definitions = ToolSet::definitions();

        for round in 0..MAX_TOOL_ROUNDS {
            let reply = self.client.complete(&self.history, &definitions).await?;
            let calls = reply.requested_calls().to_vec();
            let content = reply.content.clone();
            self.history.push(reply);

            if calls.is_empty() {
                return Ok(content.unwrap_or_default());
            }

            for call in calls {
                debug!(round, tool = %call.function.name, args = %call.function.arguments, "tool call");
                let output = match self
                    .tools
                    .call(&call.function.name, &call.function.arguments)
                    .await
                {
                    Ok(value) => value,
                    Err(err) => {
                        warn!(tool = %call.function.name, error = %err, "tool call failed");
                        err.to_json()
                    }
                };
                self.history
                    .push(ChatMessage::tool(call.id, output.to_string()));
            }
        }

        Err(AppError::Llm {
            message: format!(
                "Model was still requesting tools after {} rounds",
                MAX_TOOL_ROUNDS
            ),
            status: None,
        })
    }
}
