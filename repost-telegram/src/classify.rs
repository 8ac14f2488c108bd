//! Classification of incoming Telegram messages into [`SavedContent`].
//! Depends only on teloxide types; unsupported shapes (stickers, voice notes,
//! locations, ...) yield `None` so callers can reject before touching the store.

use repost_core::SavedContent;
use teloxide::types::Message;

/// Maps a Telegram message to the content that would be saved, or `None` when
/// the shape is unsupported. For photos Telegram sends several resolutions
/// sorted ascending; the largest variant is kept, like the other media kinds
/// together with the optional caption.
pub fn classify_message(msg: &Message) -> Option<SavedContent> {
    if let Some(text) = msg.text() {
        return Some(SavedContent::Text {
            body: text.to_string(),
        });
    }

    let caption = msg.caption().map(|c| c.to_string());

    if let Some(sizes) = msg.photo() {
        let largest = sizes.last()?;
        return Some(SavedContent::Photo {
            file_id: largest.file.id.0.clone(),
            caption,
        });
    }
    if let Some(video) = msg.video() {
        return Some(SavedContent::Video {
            file_id: video.file.id.0.clone(),
            caption,
        });
    }
    if let Some(audio) = msg.audio() {
        return Some(SavedContent::Audio {
            file_id: audio.file.id.0.clone(),
            caption,
        });
    }
    if let Some(document) = msg.document() {
        return Some(SavedContent::Document {
            file_id: document.file.id.0.clone(),
            caption,
        });
    }

    None
}
