//! Projection of the raw GraphQL document into the normalized record.
//!
//! The document is untrusted: any nested field may be absent, so every
//! access is an explicit presence check and the strongly-typed record is
//! assembled only at this boundary, all-or-nothing.

use serde_json::Value;

use crate::error::{InstagramError, Result};
use crate::request;
use crate::types::{Author, Dimensions, ImageMedia, MediaItem, MusicInfo, PostData, VideoMedia};

/// Map a parsed GraphQL response document into a [`PostData`] record.
///
/// Pure; callers that already hold a captured document (fixtures, tests)
/// can run it offline.
pub fn extract_post(shortcode: &str, document: &Value) -> Result<PostData> {
    let post = document
        .pointer("/data/xdt_shortcode_media")
        .filter(|fragment| !fragment.is_null())
        .ok_or(InstagramError::PostNotFound)?;

    let description = post
        .pointer("/edge_media_to_caption/edges/0/node/text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let media = match post
        .pointer("/edge_sidecar_to_children/edges")
        .and_then(Value::as_array)
    {
        Some(edges) => edges
            .iter()
            .map(|edge| {
                let node = edge.get("node").ok_or(InstagramError::MissingField {
                    path: "/edge_sidecar_to_children/edges/node",
                })?;
                media_item(node, true)
            })
            .collect::<Result<Vec<_>>>()?,
        None => vec![media_item(post, false)?],
    };

    let music_info = post
        .get("clips_music_attribution_info")
        .filter(|fragment| !fragment.is_null())
        .map(music_info)
        .transpose()?;

    Ok(PostData {
        description,
        url: request::permalink(shortcode),
        author: author(post)?,
        media,
        music_info,
    })
}

fn author(post: &Value) -> Result<Author> {
    Ok(Author {
        username: required_str(post, "/owner/username")?,
        full_name: required_str(post, "/owner/full_name")?,
        is_verified: required_bool(post, "/owner/is_verified")?,
        profile_pic_url: required_str(post, "/owner/profile_pic_url")?,
        followers_count: required_u64(post, "/owner/edge_followed_by/count")?,
    })
}

/// Map one media node into its tagged variant.
///
/// Carousel children (`fall_back_to_display`) substitute `display_url` when
/// `thumbnail_src` is absent; the top-level fragment does not, and its
/// thumbnail may come out empty.
fn media_item(node: &Value, fall_back_to_display: bool) -> Result<MediaItem> {
    let is_video = node
        .get("is_video")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let dimensions = Dimensions {
        width: required_u64(node, "/dimensions/width")?,
        height: required_u64(node, "/dimensions/height")?,
    };

    let thumbnail_url = match node.get("thumbnail_src").and_then(Value::as_str) {
        Some(thumbnail) => Some(thumbnail.to_owned()),
        None if fall_back_to_display => node
            .get("display_url")
            .and_then(Value::as_str)
            .map(str::to_owned),
        None => None,
    };

    if is_video {
        Ok(MediaItem::Video(VideoMedia {
            url: required_str(node, "/video_url")?,
            thumbnail_url,
            dimensions,
            duration: node.get("video_duration").and_then(Value::as_f64),
            view_count: node.get("video_view_count").and_then(Value::as_u64),
            play_count: node.get("video_play_count").and_then(Value::as_u64),
        }))
    } else {
        Ok(MediaItem::Image(ImageMedia {
            url: required_str(node, "/display_url")?,
            thumbnail_url,
            dimensions,
        }))
    }
}

fn music_info(fragment: &Value) -> Result<MusicInfo> {
    Ok(MusicInfo {
        artist_name: required_str(fragment, "/artist_name")?,
        song_name: required_str(fragment, "/song_name")?,
        is_original_audio: required_bool(fragment, "/uses_original_audio")?,
        audio_id: required_str(fragment, "/audio_id")?,
    })
}

fn required_str(value: &Value, path: &'static str) -> Result<String> {
    value
        .pointer(path)
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or(InstagramError::MissingField { path })
}

fn required_bool(value: &Value, path: &'static str) -> Result<bool> {
    value
        .pointer(path)
        .and_then(Value::as_bool)
        .ok_or(InstagramError::MissingField { path })
}

fn required_u64(value: &Value, path: &'static str) -> Result<u64> {
    value
        .pointer(path)
        .and_then(Value::as_u64)
        .ok_or(InstagramError::MissingField { path })
}
