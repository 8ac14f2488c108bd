//! Binary for the repost bot: load .env, config, tracing, then run the dispatcher.

use anyhow::Result;
use repost_core::init_tracing;
use repost_store::MessageRegistry;
use repost_telegram::{run_bot, RepostConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = RepostConfig::from_env()?;
    init_tracing(config.log_file.as_deref())?;

    let registry = MessageRegistry::new();
    run_bot(config, registry).await
}
