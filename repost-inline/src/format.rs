//! Formatting of one [`SavedRecord`] into a suggestion payload.
//!
//! Payload shapes are transport-agnostic; repost-telegram maps them to the
//! Telegram inline-result types. Audio and Document fall back to an article
//! with a bracketed textual placeholder: the inline-result API has no
//! article form that re-sends those by reference, so the binary content is
//! never re-sent.

use chrono::Local;
use repost_core::{SavedContent, SavedRecord};

/// Max characters of body/caption shown in the preview line. Only the preview
/// is truncated; the resend payload always carries the full content.
pub const PREVIEW_CHARS: usize = 40;

/// One inline suggestion, shaped by the record's kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestionPayload {
    /// Selection inserts `message_text` literally. Used for Text and for the
    /// Audio/Document placeholder fallback.
    Article {
        result_id: String,
        title: String,
        description: String,
        message_text: String,
    },
    /// References the stored photo handle directly, carrying the caption.
    Photo {
        result_id: String,
        title: String,
        description: String,
        file_id: String,
        caption: String,
    },
    /// Same pattern as Photo, for video handles.
    Video {
        result_id: String,
        title: String,
        description: String,
        file_id: String,
        caption: String,
    },
}

impl SuggestionPayload {
    pub fn result_id(&self) -> &str {
        match self {
            SuggestionPayload::Article { result_id, .. }
            | SuggestionPayload::Photo { result_id, .. }
            | SuggestionPayload::Video { result_id, .. } => result_id,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            SuggestionPayload::Article { description, .. }
            | SuggestionPayload::Photo { description, .. }
            | SuggestionPayload::Video { description, .. } => description,
        }
    }
}

/// First `PREVIEW_CHARS` characters of the record's body or caption; empty for
/// captionless media.
fn preview(record: &SavedRecord) -> String {
    let source = match &record.content {
        SavedContent::Text { body } => body.as_str(),
        other => other.caption().unwrap_or(""),
    };
    source.chars().take(PREVIEW_CHARS).collect()
}

/// Maps one record to its suggestion payload.
///
/// The result id combines the record's stable id with the caller-supplied
/// resolution-time `nonce`, so repeated queries for the same record are never
/// treated as cached-identical by the transport. The description line is
/// `"<KIND> | <preview> | ID: <id> | <HH:MM>"` with the local time of the save.
pub fn format_suggestion(record: &SavedRecord, nonce: i64) -> SuggestionPayload {
    let result_id = format!("{}_{}", record.id, nonce);
    let kind = record.content.kind();
    let title = format!("{} #{}", kind.label(), record.id);
    let short_time = record
        .created_at
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();
    let description = format!(
        "{} | {} | ID: {} | {}",
        kind.label(),
        preview(record),
        record.id,
        short_time
    );

    match &record.content {
        SavedContent::Text { body } => SuggestionPayload::Article {
            result_id,
            title,
            description,
            message_text: body.clone(),
        },
        SavedContent::Photo { file_id, caption } => SuggestionPayload::Photo {
            result_id,
            title,
            description,
            file_id: file_id.clone(),
            caption: caption.clone().unwrap_or_default(),
        },
        SavedContent::Video { file_id, caption } => SuggestionPayload::Video {
            result_id,
            title,
            description,
            file_id: file_id.clone(),
            caption: caption.clone().unwrap_or_default(),
        },
        SavedContent::Audio { caption, .. } => SuggestionPayload::Article {
            result_id,
            title,
            description,
            message_text: format!("[AUDIO] {}", caption.as_deref().unwrap_or("")),
        },
        SavedContent::Document { caption, .. } => SuggestionPayload::Article {
            result_id,
            title,
            description,
            message_text: format!("[DOCUMENT] {}", caption.as_deref().unwrap_or("")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(id: u64, content: SavedContent) -> SavedRecord {
        SavedRecord {
            id,
            content,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_preview_truncates_long_text() {
        let body = "a".repeat(100);
        let rec = record(1, SavedContent::Text { body: body.clone() });
        let payload = format_suggestion(&rec, 1000);
        assert!(payload.description().contains(&"a".repeat(PREVIEW_CHARS)));
        assert!(!payload.description().contains(&"a".repeat(PREVIEW_CHARS + 1)));
        match payload {
            SuggestionPayload::Article { message_text, .. } => assert_eq!(message_text, body),
            other => panic!("expected article, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_handles_multibyte_text() {
        let body = "日".repeat(60);
        let rec = record(2, SavedContent::Text { body });
        // Must not panic on a non-ASCII boundary.
        let payload = format_suggestion(&rec, 0);
        assert!(payload.description().contains(&"日".repeat(PREVIEW_CHARS)));
    }

    #[test]
    fn test_captionless_media_has_empty_preview() {
        let rec = record(
            3,
            SavedContent::Photo {
                file_id: "f".to_string(),
                caption: None,
            },
        );
        let payload = format_suggestion(&rec, 0);
        assert!(payload.description().starts_with("PHOTO |  | ID: 3 | "));
    }

    #[test]
    fn test_result_id_combines_record_id_and_nonce() {
        let rec = record(
            9,
            SavedContent::Text {
                body: "x".to_string(),
            },
        );
        assert_eq!(format_suggestion(&rec, 12345).result_id(), "9_12345");
    }
}
