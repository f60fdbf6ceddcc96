//! Media flattening for the unified modal viewer
//!
//! Every section of a year record that carries displayable media feeds one
//! ordered, globally indexed sequence: gallery items first, then the laddu
//! winner's image, then each event winner's image. This priority order is a
//! contract with the click targets in the UI; changing it breaks the index
//! correspondence the viewer relies on.

use crate::media::MediaKind;
use crate::model::YearRecord;
use serde::Serialize;

/// Which part of the record a flattened entry came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceSection {
    Gallery,
    LadduWinner,
    EventWinner,
}

/// One entry in the flattened media sequence. Derived, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlattenedMediaEntry {
    /// Dense 0-based position in the full sequence
    pub global_index: usize,
    /// Provenance tag
    pub source_section: SourceSection,
    /// Position within the source section
    pub source_index: usize,
    pub url: String,
    pub alt: String,
    pub kind: MediaKind,
}

/// Flatten a normalized record into the viewer's media sequence.
///
/// Entries with an empty URL are skipped entirely and never occupy an index.
/// `global_index` is the running count at append time, so the full recompute
/// on every call yields identical assignments for identical input.
pub fn flatten(record: &YearRecord) -> Vec<FlattenedMediaEntry> {
    let mut entries = Vec::new();

    for (index, item) in record.gallery.iter().enumerate() {
        if item.url.is_empty() {
            continue;
        }
        let alt = if item.alt.is_empty() {
            format!("Gallery image {}", index + 1)
        } else {
            item.alt.clone()
        };
        entries.push(FlattenedMediaEntry {
            global_index: entries.len(),
            source_section: SourceSection::Gallery,
            source_index: index,
            url: item.url.clone(),
            alt,
            kind: item.kind.unwrap_or_else(|| MediaKind::from_url(&item.url)),
        });
    }

    let laddu = &record.laddu_winner;
    if !laddu.image.is_empty() {
        entries.push(FlattenedMediaEntry {
            global_index: entries.len(),
            source_section: SourceSection::LadduWinner,
            source_index: 0,
            url: laddu.image.clone(),
            alt: format!("Laddu Winner - {}", laddu.name),
            kind: MediaKind::from_url(&laddu.image),
        });
    }

    for (index, winner) in record.event_winners.iter().enumerate() {
        if winner.image.is_empty() {
            continue;
        }
        entries.push(FlattenedMediaEntry {
            global_index: entries.len(),
            source_section: SourceSection::EventWinner,
            source_index: index,
            url: winner.image.clone(),
            alt: format!("{} Winner - {}", winner.event, winner.winner),
            kind: MediaKind::from_url(&winner.image),
        });
    }

    entries
}
