//! # repost-inline
//!
//! Inline-query resolution for the repost bot: picks which saved records to
//! show (exact-id lookup vs most-recent-five) and formats each into a
//! transport-agnostic [`SuggestionPayload`]. Stateless; a pure function of
//! current store state plus the query string.

pub mod format;
pub mod resolver;

pub use format::{format_suggestion, SuggestionPayload, PREVIEW_CHARS};
pub use resolver::{resolve, RECENT_LIMIT};
