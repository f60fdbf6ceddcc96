//! Media kind classification
//!
//! A media URL renders either as an image or as a video; nothing else exists.
//! When a record does not declare the kind, it is inferred from the URL
//! extension. The inference rule lives here so every component that needs it
//! shares one definition instead of re-deriving it ad hoc.

use serde::{Deserialize, Serialize};

/// Rendering path for a media URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Infer the media kind from a URL extension.
    ///
    /// `.mp4`, `.webm` and `.ogg` (case insensitive, at the end of the URL)
    /// are video; everything else is an image.
    pub fn from_url(url: &str) -> MediaKind {
        let lower = url.to_ascii_lowercase();
        if lower.ends_with(".mp4") || lower.ends_with(".webm") || lower.ends_with(".ogg") {
            MediaKind::Video
        } else {
            MediaKind::Image
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_extensions() {
        assert_eq!(MediaKind::from_url("https://cdn/x/clip.mp4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("clip.webm"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("clip.ogg"), MediaKind::Video);
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(MediaKind::from_url("CLIP.MP4"), MediaKind::Video);
        assert_eq!(MediaKind::from_url("clip.WebM"), MediaKind::Video);
    }

    #[test]
    fn test_everything_else_is_image() {
        assert_eq!(MediaKind::from_url("photo.jpg"), MediaKind::Image);
        assert_eq!(MediaKind::from_url("photo.png"), MediaKind::Image);
        assert_eq!(MediaKind::from_url(""), MediaKind::Image);
        // Extension must terminate the URL; query strings defeat the match
        assert_eq!(MediaKind::from_url("clip.mp4?w=640"), MediaKind::Image);
    }
}
