//! # repost-core
//!
//! Core types for the repost bot: [`SavedRecord`], [`SavedContent`], [`ContentKind`],
//! the error type, and tracing initialization. Transport-agnostic; used by
//! repost-store, repost-inline, and repost-telegram.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{RepostError, Result};
pub use logger::init_tracing;
pub use types::{ContentKind, SavedContent, SavedRecord, UserId};
