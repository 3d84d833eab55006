use crate::telegram::types::Update;
use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    pub name: String,
    pub token: String,
    /// Overridable so tests can point the client at a local mock server.
    #[serde(default = "default_api_root")]
    pub api_root: String,
}

fn default_api_root() -> String {
    "https://api.telegram.org".to_string()
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ServerConfig {
    pub ip: String,
    pub port: u16,
    #[serde(default, alias = "pubkeyfile")]
    pub pubkey_path: Option<String>,
    #[serde(default, alias = "privkeyfile")]
    pub privkey_path: Option<String>,
}

/// Application-side consumer of decoded updates, shared by the polling
/// runner and the webhook listener.
#[async_trait]
pub trait UpdateHandler: Send + Sync + 'static {
    async fn handle_update(&self, update: Update) -> Result<()>;
}
