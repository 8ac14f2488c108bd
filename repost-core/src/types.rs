//! Core types: content kind, saved content variants, and the saved record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Telegram sender id; each user owns one store keyed by this.
pub type UserId = i64;

/// Closed set of supported content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentKind {
    Text,
    Photo,
    Video,
    Audio,
    Document,
}

impl ContentKind {
    /// Upper-case label used in suggestion titles and descriptions (e.g. "PHOTO").
    pub fn label(&self) -> &'static str {
        match self {
            ContentKind::Text => "TEXT",
            ContentKind::Photo => "PHOTO",
            ContentKind::Video => "VIDEO",
            ContentKind::Audio => "AUDIO",
            ContentKind::Document => "DOCUMENT",
        }
    }
}

/// Content of one saved message. Text carries the body; media kinds carry an
/// opaque Telegram file handle plus an optional caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SavedContent {
    Text { body: String },
    Photo { file_id: String, caption: Option<String> },
    Video { file_id: String, caption: Option<String> },
    Audio { file_id: String, caption: Option<String> },
    Document { file_id: String, caption: Option<String> },
}

impl SavedContent {
    pub fn kind(&self) -> ContentKind {
        match self {
            SavedContent::Text { .. } => ContentKind::Text,
            SavedContent::Photo { .. } => ContentKind::Photo,
            SavedContent::Video { .. } => ContentKind::Video,
            SavedContent::Audio { .. } => ContentKind::Audio,
            SavedContent::Document { .. } => ContentKind::Document,
        }
    }

    /// Caption of a media variant; None for Text and for media saved without one.
    pub fn caption(&self) -> Option<&str> {
        match self {
            SavedContent::Text { .. } => None,
            SavedContent::Photo { caption, .. }
            | SavedContent::Video { caption, .. }
            | SavedContent::Audio { caption, .. }
            | SavedContent::Document { caption, .. } => caption.as_deref(),
        }
    }
}

/// One stored content item with its per-user id and insertion timestamp.
/// `id` is unique within a user's store and never reused; `created_at` is set
/// once at insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRecord {
    pub id: u64,
    pub content: SavedContent,
    pub created_at: DateTime<Utc>,
}
