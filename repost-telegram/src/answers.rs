//! Mapping from [`SuggestionPayload`] to teloxide inline-result types.
//!
//! Article payloads become `InlineQueryResultArticle` with text content;
//! photo/video payloads become the cached-file variants referencing the stored
//! Telegram file handle.

use repost_inline::SuggestionPayload;
use teloxide::types::{
    FileId, InlineQueryResult, InlineQueryResultArticle, InlineQueryResultCachedPhoto,
    InlineQueryResultCachedVideo, InputMessageContent, InputMessageContentText,
};

/// Converts one payload to the Telegram inline-result shape.
pub fn to_inline_result(payload: &SuggestionPayload) -> InlineQueryResult {
    match payload {
        SuggestionPayload::Article {
            result_id,
            title,
            description,
            message_text,
        } => InlineQueryResult::Article(
            InlineQueryResultArticle::new(
                result_id.clone(),
                title.clone(),
                InputMessageContent::Text(InputMessageContentText::new(message_text.clone())),
            )
            .description(description.clone()),
        ),
        SuggestionPayload::Photo {
            result_id,
            title,
            description,
            file_id,
            caption,
        } => InlineQueryResult::CachedPhoto(
            InlineQueryResultCachedPhoto::new(result_id.clone(), FileId(file_id.clone()))
                .title(title.clone())
                .description(description.clone())
                .caption(caption.clone()),
        ),
        SuggestionPayload::Video {
            result_id,
            title,
            description,
            file_id,
            caption,
        } => InlineQueryResult::CachedVideo(
            InlineQueryResultCachedVideo::new(
                result_id.clone(),
                FileId(file_id.clone()),
                title.clone(),
            )
            .description(description.clone())
            .caption(caption.clone()),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_maps_to_text_content() {
        let payload = SuggestionPayload::Article {
            result_id: "1_999".to_string(),
            title: "TEXT #1".to_string(),
            description: "TEXT | hi | ID: 1 | 12:00".to_string(),
            message_text: "hi".to_string(),
        };
        match to_inline_result(&payload) {
            InlineQueryResult::Article(article) => {
                assert_eq!(article.title, "TEXT #1");
                assert_eq!(article.description.as_deref(), Some("TEXT | hi | ID: 1 | 12:00"));
                match article.input_message_content {
                    InputMessageContent::Text(text) => assert_eq!(text.message_text, "hi"),
                    other => panic!("expected text content, got {:?}", other),
                }
            }
            other => panic!("expected article result, got {:?}", other),
        }
    }

    #[test]
    fn test_photo_maps_to_cached_photo() {
        let payload = SuggestionPayload::Photo {
            result_id: "2_999".to_string(),
            title: "PHOTO #2".to_string(),
            description: "PHOTO | vacation | ID: 2 | 12:00".to_string(),
            file_id: "photo-file".to_string(),
            caption: "vacation".to_string(),
        };
        match to_inline_result(&payload) {
            InlineQueryResult::CachedPhoto(photo) => {
                assert_eq!(photo.photo_file_id.0, "photo-file");
                assert_eq!(photo.caption.as_deref(), Some("vacation"));
            }
            other => panic!("expected cached photo, got {:?}", other),
        }
    }

    #[test]
    fn test_video_maps_to_cached_video() {
        let payload = SuggestionPayload::Video {
            result_id: "3_999".to_string(),
            title: "VIDEO #3".to_string(),
            description: "VIDEO |  | ID: 3 | 12:00".to_string(),
            file_id: "video-file".to_string(),
            caption: String::new(),
        };
        match to_inline_result(&payload) {
            InlineQueryResult::CachedVideo(video) => {
                assert_eq!(video.video_file_id.0, "video-file");
                assert_eq!(video.title, "VIDEO #3");
            }
            other => panic!("expected cached video, got {:?}", other),
        }
    }
}
