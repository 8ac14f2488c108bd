//! Dispatcher wiring: commands, private-message saves, inline answers.
//! External: teloxide dispatcher and send/answer calls, MessageRegistry for
//! state, repost-inline for resolution. Outbound failures are logged and never
//! retried; they cannot affect registry state.

use crate::answers::to_inline_result;
use crate::classify::classify_message;
use crate::config::RepostConfig;
use repost_core::{RepostError, SavedContent, UserId};
use repost_inline::resolve;
use repost_store::MessageRegistry;
use teloxide::prelude::*;
use teloxide::types::{ChatId, InlineQuery, InlineQueryResult, ReplyParameters};
use teloxide::utils::command::BotCommands;
use tracing::{error, info, instrument};

// --- User-facing texts ---
const GUIDE: &str = "Welcome to the Repost Bot!\n\n\
Here's how to use me:\n\
1. **Save a Message:**  \n\
   Send any text, photo, video, audio, or document message in this DM.\n\
   I'll save your message and assign it a unique numeric ID.\n\n\
2. **Resend a Message Inline:**  \n\
   In any chat, type my username. You will see the last 5 messages you sent here as suggestions.\n\
   You can also type the numeric ID to resend a specific message.\n\n\
Enjoy using the bot!";
const MSG_UNSUPPORTED: &str = "Sorry, that type of message is unsupported.";
const MSG_CLEARED: &str = "✅ Your saved messages have been cleared.";
const MSG_NOTHING_TO_CLEAR: &str = "ℹ️ You don't have any saved messages.";

/// Bot commands; both respond in private chats only.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub enum Command {
    /// Show the usage guide.
    Start,
    /// Delete all your saved messages.
    Clear,
}

/// Builds the teloxide bot from config and runs the dispatcher until shutdown.
#[instrument(skip(config, registry))]
pub async fn run_bot(config: RepostConfig, registry: MessageRegistry) -> anyhow::Result<()> {
    let mut bot = Bot::new(config.bot_token.clone());
    if let Some(url) = &config.telegram_api_url {
        let url = reqwest::Url::parse(url)
            .map_err(|e| RepostError::Config(format!("Invalid TELEGRAM_API_URL: {}", e)))?;
        bot = bot.set_api_url(url);
    }

    if let Ok(me) = bot.get_me().await {
        if let Some(username) = &me.user.username {
            info!(username = %username, "Bot identity resolved");
        }
    }

    let handler = dptree::entry()
        .branch(
            Update::filter_message()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(Update::filter_message().endpoint(handle_message))
        .branch(Update::filter_inline_query().endpoint(handle_inline_query));

    info!("Bot started successfully");

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![registry])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}

/// Sends plain text to the chat, mapping transport failures to [`RepostError`].
async fn send_text(bot: &Bot, chat_id: ChatId, text: &str) -> repost_core::Result<()> {
    bot.send_message(chat_id, text)
        .await
        .map_err(|e| RepostError::Bot(e.to_string()))?;
    Ok(())
}

/// /start and /clear, private chats only; elsewhere both are ignored.
async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    registry: MessageRegistry,
) -> repost_core::Result<()> {
    if !msg.chat.is_private() {
        return Ok(());
    }
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let user_id = user.id.0 as UserId;

    match cmd {
        Command::Start => {
            info!(user_id = user_id, "step: /start guide requested");
            if let Err(e) = send_text(&bot, msg.chat.id, GUIDE).await {
                error!(error = %e, user_id = user_id, "Failed to send start guide");
            }
        }
        Command::Clear => {
            let had_records = registry.clear(user_id).await;
            let reply = if had_records {
                MSG_CLEARED
            } else {
                MSG_NOTHING_TO_CLEAR
            };
            if let Err(e) = send_text(&bot, msg.chat.id, reply).await {
                error!(error = %e, user_id = user_id, "Failed to send clear confirmation");
            }
        }
    }
    Ok(())
}

/// Private non-command messages: classify, save, confirm with the assigned id
/// as a reply to the originating message. Unsupported shapes are rejected
/// before the store is touched.
async fn handle_message(
    bot: Bot,
    msg: Message,
    registry: MessageRegistry,
) -> repost_core::Result<()> {
    if !msg.chat.is_private() {
        return Ok(());
    }
    let Some(user) = msg.from.as_ref() else {
        return Ok(());
    };
    let user_id = user.id.0 as UserId;

    let content: Option<SavedContent> = classify_message(&msg);
    let Some(content) = content else {
        info!(user_id = user_id, "Rejected unsupported message kind");
        if let Err(e) = send_text(&bot, msg.chat.id, MSG_UNSUPPORTED).await {
            error!(error = %e, user_id = user_id, "Failed to send rejection");
        }
        return Ok(());
    };

    let saved = registry.save(user_id, content).await;
    let confirmation = format!("Message saved!\nID: {}", saved.id);
    let request = bot
        .send_message(msg.chat.id, confirmation)
        .reply_parameters(ReplyParameters::new(msg.id));
    if let Err(e) = request.await {
        // The record is already stored; a lost confirmation only costs the user the id display.
        error!(error = %e, user_id = user_id, record_id = saved.id, "Failed to send save confirmation");
    }
    Ok(())
}

/// Inline queries: resolve against the sender's store and answer with zero
/// cache lifetime so the suggestion list reflects store state live.
async fn handle_inline_query(
    bot: Bot,
    query: InlineQuery,
    registry: MessageRegistry,
) -> repost_core::Result<()> {
    let user_id = query.from.id.0 as UserId;
    let payloads = resolve(&registry, user_id, &query.query).await;
    let results: Vec<InlineQueryResult> = payloads.iter().map(to_inline_result).collect();

    let answer = bot
        .answer_inline_query(query.id, results)
        .cache_time(0)
        .is_personal(true);
    if let Err(e) = answer.await {
        error!(error = %e, user_id = user_id, "Failed to answer inline query");
    }
    Ok(())
}
