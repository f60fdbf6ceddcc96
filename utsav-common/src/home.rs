//! Home-page media feed
//!
//! The home page shows a rotating sample of gallery images drawn from every
//! archived year, plus the span of years covered. Only items explicitly
//! declared as images participate; undeclared and video items stay out of
//! the rotation. The sample is shuffled, so two loads of the home page show
//! different slides.

use crate::api::types::YearEntry;
use crate::media::MediaKind;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

/// Most images the home feed ever shows
pub const HOME_FEED_LIMIT: usize = 10;

/// One home-feed slide: a gallery image tagged with its year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeImage {
    pub url: String,
    pub alt: String,
    pub year: i32,
}

/// Range of years present in the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearSpan {
    pub start_year: i32,
    pub end_year: i32,
    pub total_years: usize,
}

/// Collect every declared gallery image across all years, in index order
pub fn collect_home_images(entries: &[YearEntry]) -> Vec<HomeImage> {
    entries
        .iter()
        .flat_map(|entry| {
            entry
                .record
                .gallery
                .iter()
                .filter(|item| item.kind == Some(MediaKind::Image))
                .map(|item| HomeImage {
                    url: item.url.clone(),
                    alt: item.alt.clone(),
                    year: entry.year,
                })
        })
        .collect()
}

/// Span of years covered by the archive; `None` when it is empty
pub fn year_span(entries: &[YearEntry]) -> Option<YearSpan> {
    let mut years: Vec<i32> = entries.iter().map(|entry| entry.year).collect();
    years.sort_unstable();
    Some(YearSpan {
        start_year: *years.first()?,
        end_year: *years.last()?,
        total_years: years.len(),
    })
}

/// Shuffle the collected images and keep at most `limit`
pub fn sample_feed(entries: &[YearEntry], limit: usize) -> Vec<HomeImage> {
    sample_feed_with(entries, limit, &mut rand::thread_rng())
}

/// Sampling with a caller-supplied RNG
pub fn sample_feed_with<R: Rng>(entries: &[YearEntry], limit: usize, rng: &mut R) -> Vec<HomeImage> {
    let mut images = collect_home_images(entries);
    images.shuffle(rng);
    images.truncate(limit);
    images
}
