//! Assembled year view
//!
//! Everything the archive page needs for one year, derived in one place
//! from the normalized record: financial summary, flattened media sequence,
//! and the paged gallery.

use serde::Serialize;
use utsav_common::finance::{aggregate, FinancialSummary};
use utsav_common::flatten::{flatten, FlattenedMediaEntry};
use utsav_common::paging::{page_gallery, GalleryPage, GALLERY_THRESHOLD};
use utsav_common::YearRecord;

/// Complete read-side view of one festival year
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearView {
    pub year: i32,
    /// False when the backend fetch failed and defaults were substituted
    pub loaded: bool,
    pub record: YearRecord,
    pub summary: FinancialSummary,
    /// The unified media sequence the modal viewer navigates
    pub media: Vec<FlattenedMediaEntry>,
    pub gallery_page: GalleryPage,
}

impl YearView {
    pub fn assemble(year: i32, record: YearRecord, loaded: bool) -> Self {
        let summary = aggregate(&record);
        let media = flatten(&record);
        let gallery_page = page_gallery(&record.gallery, GALLERY_THRESHOLD);
        Self {
            year,
            loaded,
            record,
            summary,
            media,
            gallery_page,
        }
    }
}
