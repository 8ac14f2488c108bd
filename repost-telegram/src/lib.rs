//! # repost-telegram
//!
//! Telegram glue for the repost bot: env config, classification of incoming
//! private messages into [`repost_core::SavedContent`], mapping of suggestion
//! payloads to Telegram inline-result types, and the dispatcher wiring
//! (commands, saves, inline answers). Handles only Telegram connectivity; all
//! state lives in [`repost_store::MessageRegistry`].

mod answers;
mod classify;
mod config;
mod runner;

pub use answers::to_inline_result;
pub use classify::classify_message;
pub use config::RepostConfig;
pub use runner::{run_bot, Command};
