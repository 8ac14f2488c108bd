//! # repost-store
//!
//! In-memory per-user message store: [`MessageRegistry`] owns all saved-message
//! state, assigns per-user monotonic ids, and serves the two retrieval modes
//! (exact id, most-recent-N). No knowledge of Telegram or output formatting.

pub mod registry;

pub use registry::MessageRegistry;
