pub const DEFAULT_DISCOVERY_URL: &str = "https://discovery.meethue.com/";
pub const DEFAULT_MODEL: &str = "gpt-4";
pub const DEFAULT_CHAT_ENDPOINT: &str = "https://api.openai.com/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    Table,
}

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub output_mode: OutputMode,
    pub bridge_ip: Option<String>,
    pub username: Option<String>,
    pub discovery_url: String,
}

/// Where the bridge lives and which whitelisted user to talk to it as.
///
/// `address` is `None` when the bridge should be located through the cloud
/// discovery endpoint.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    pub address: Option<String>,
    pub username: String,
    pub discovery_url: String,
}

impl BridgeConfig {
    pub fn new(address: Option<String>, username: impl Into<String>) -> Self {
        Self {
            address: address.filter(|a| !a.is_empty()),
            username: username.into(),
            discovery_url: DEFAULT_DISCOVERY_URL.to_string(),
        }
    }

    pub fn with_discovery_url(mut self, url: impl Into<String>) -> Self {
        self.discovery_url = url.into();
        self
    }
}

#[derive(Debug, Clone)]
pub struct ChatConfig {
    pub endpoint: String,
    pub model: String,
    pub api_key: String,
}
