//! Gallery paging rules
//!
//! A gallery larger than the threshold shows only the first `threshold`
//! items inline, with the last visible slot rendered as an overflow
//! affordance ("+N") instead of real media. Clicking the affordance opens
//! the full listing; clicking any other visible item opens the single-item
//! viewer at that item's global index.

use crate::model::MediaItem;
use serde::Serialize;

/// Default number of gallery items shown inline
pub const GALLERY_THRESHOLD: usize = 6;

/// Truncated gallery view with overflow metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryPage {
    /// At most `threshold` items, in gallery order
    pub visible: Vec<MediaItem>,
    /// Items hidden behind the overflow affordance
    pub overflow_count: usize,
    pub has_overflow: bool,
}

impl GalleryPage {
    /// Visible slot that renders as the overflow affordance, if any
    pub fn overflow_slot(&self) -> Option<usize> {
        if self.has_overflow {
            Some(self.visible.len() - 1)
        } else {
            None
        }
    }
}

/// Truncate a gallery to its inline page.
///
/// A gallery within the threshold passes through unchanged with no overflow.
pub fn page_gallery(gallery: &[MediaItem], threshold: usize) -> GalleryPage {
    if gallery.len() <= threshold {
        GalleryPage {
            visible: gallery.to_vec(),
            overflow_count: 0,
            has_overflow: false,
        }
    } else {
        GalleryPage {
            visible: gallery[..threshold].to_vec(),
            overflow_count: gallery.len() - threshold,
            has_overflow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gallery_of(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem {
                url: format!("img{i}.jpg"),
                alt: String::new(),
                kind: None,
            })
            .collect()
    }

    #[test]
    fn test_page_within_threshold() {
        let gallery = gallery_of(5);
        let page = page_gallery(&gallery, GALLERY_THRESHOLD);
        assert_eq!(page.visible, gallery);
        assert_eq!(page.overflow_count, 0);
        assert!(!page.has_overflow);
        assert_eq!(page.overflow_slot(), None);
    }

    #[test]
    fn test_page_at_exact_threshold() {
        let gallery = gallery_of(6);
        let page = page_gallery(&gallery, GALLERY_THRESHOLD);
        assert_eq!(page.visible.len(), 6);
        assert!(!page.has_overflow);
    }

    #[test]
    fn test_page_with_overflow() {
        let gallery = gallery_of(9);
        let page = page_gallery(&gallery, GALLERY_THRESHOLD);
        assert_eq!(page.visible.len(), 6);
        assert_eq!(page.overflow_count, 3);
        assert!(page.has_overflow);
        // Last visible slot is the "+3" affordance
        assert_eq!(page.overflow_slot(), Some(5));
        // Visible items are the first six, in order
        assert_eq!(page.visible[0].url, "img0.jpg");
        assert_eq!(page.visible[5].url, "img5.jpg");
    }

    #[test]
    fn test_page_empty_gallery() {
        let page = page_gallery(&[], GALLERY_THRESHOLD);
        assert!(page.visible.is_empty());
        assert_eq!(page.overflow_count, 0);
        assert!(!page.has_overflow);
    }
}
