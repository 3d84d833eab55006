pub mod codec;
pub mod server;
pub mod telegram;
mod types;
pub mod utils;
pub use types::{BotConfig, Config, ServerConfig, UpdateHandler};
