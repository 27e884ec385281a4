//! The normalized post record.
//!
//! This is the stable output contract; everything is constructed fresh per
//! call and serializes to the camelCase JSON shape downstream consumers read.

use serde::{Deserialize, Serialize};

/// Everything extracted from a single post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    /// Caption text; empty when the post has no caption edge.
    pub description: String,
    /// Canonical permalink derived from the shortcode.
    pub url: String,
    pub author: Author,
    /// Media items in source order. Single posts produce one item,
    /// carousels one per child.
    pub media: Vec<MediaItem>,
    /// Audio attribution; only set when the post carries the fragment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_info: Option<MusicInfo>,
}

/// The posting account, from the post's `owner` object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub username: String,
    pub full_name: String,
    pub is_verified: bool,
    pub profile_pic_url: String,
    pub followers_count: u64,
}

/// One media entry.
///
/// Tagged so the video-only attributes (duration, counts) cannot be read
/// off an image.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaItem {
    Video(VideoMedia),
    Image(ImageMedia),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoMedia {
    /// Direct video URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub dimensions: Dimensions,
    /// Duration in seconds, when the source provides it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMedia {
    /// Full-size display URL.
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub dimensions: Dimensions,
}

/// Pixel dimensions of a media item.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: u64,
    pub height: u64,
}

/// Audio attribution of a post, from `clips_music_attribution_info`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicInfo {
    pub artist_name: String,
    pub song_name: String,
    pub is_original_audio: bool,
    pub audio_id: String,
}
