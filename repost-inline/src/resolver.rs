//! Record selection for an inline query: exact-id lookup when the query is
//! all digits, otherwise the most recent five.

use crate::format::{format_suggestion, SuggestionPayload};
use chrono::Utc;
use repost_core::UserId;
use repost_store::MessageRegistry;
use tracing::info;

/// How many records a non-id query shows.
pub const RECENT_LIMIT: usize = 5;

/// Resolves a raw inline query against the user's store.
///
/// A trimmed query of one or more decimal digits is an exact-id lookup: one
/// result when the id exists, none otherwise. Anything else (empty included)
/// yields the most recent [`RECENT_LIMIT`] records, most-recent-first; the
/// query text is deliberately not used as a filter. All results of one call
/// share a single resolution-time nonce.
pub async fn resolve(
    registry: &MessageRegistry,
    user_id: UserId,
    raw_query: &str,
) -> Vec<SuggestionPayload> {
    let query = raw_query.trim();
    let nonce = Utc::now().timestamp_millis();

    let records = if !query.is_empty() && query.chars().all(|c| c.is_ascii_digit()) {
        // A value too large for u64 cannot name a stored record; treat as a miss.
        match query.parse::<u64>() {
            Ok(id) => registry.get_by_id(user_id, id).await.into_iter().collect(),
            Err(_) => Vec::new(),
        }
    } else {
        registry.get_recent(user_id, RECENT_LIMIT).await
    };

    let results: Vec<SuggestionPayload> = records
        .iter()
        .map(|record| format_suggestion(record, nonce))
        .collect();

    info!(
        user_id = user_id,
        query = %query,
        count = results.len(),
        "Resolved inline query"
    );
    results
}
