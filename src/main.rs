use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use gramline::telegram::bot::{MessageOptions, TelegramBot};
use gramline::telegram::types::Update;
use gramline::UpdateHandler;
use tracing::info;

/// Echoes every text message back to its chat.
struct EchoHandler {
    bot: Arc<TelegramBot>,
}

#[async_trait]
impl UpdateHandler for EchoHandler {
    async fn handle_update(&self, update: Update) -> Result<()> {
        if let Some(message) = update.message {
            if let Some(text) = &message.text {
                info!("echoing to chat {}", message.chat_id());
                self.bot
                    .send_message(message.chat_id(), text, &MessageOptions::default())
                    .await?;
            }
        }
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = gramline::utils::get_config("config.toml").await?;
    let bot = Arc::new(TelegramBot::new(config.bot));

    let me = bot.get_me().await?;
    info!(
        "starting as @{} ...",
        me.username.as_deref().unwrap_or("unknown")
    );

    let handler = EchoHandler { bot: bot.clone() };
    bot.poll_updates(&handler).await;
    Ok(())
}
