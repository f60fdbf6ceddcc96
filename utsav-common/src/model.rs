//! Year record data model and boundary normalization
//!
//! The backend stores one record per festival year. The read side never
//! deserializes that record directly: everything coming off the wire passes
//! through [`normalize`], which turns any JSON-shaped value into a fully
//! defaulted [`YearRecord`]. Downstream components (aggregation, flattening,
//! paging) may therefore assume every field is present and drop defensive
//! checks.
//!
//! Wire field names are camelCase to match the stored JSON documents.

use crate::media::MediaKind;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The complete per-year festival dataset
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearRecord {
    /// Gallery media in display order
    #[serde(default)]
    pub gallery: Vec<MediaItem>,
    /// Winner of the laddu auction
    #[serde(default)]
    pub laddu_winner: LadduWinner,
    /// Per-event winners in display order
    #[serde(default)]
    pub event_winners: Vec<EventWinner>,
    /// Contributor of the idol
    #[serde(default)]
    pub idol_contributor: IdolContributor,
    /// Monetary contributions in display order
    #[serde(default)]
    pub other_contributors: Vec<Contribution>,
    /// Itemized expenses in display order
    #[serde(default)]
    pub expenses: Vec<Expense>,
    /// Reported total collection; independent of the contributor sum
    #[serde(default)]
    pub collection: f64,
}

/// One gallery photo or video
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub url: String,
    /// Alt text; empty means "derive one at display time"
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alt: String,
    /// Declared rendering kind; `None` means "infer from the URL"
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<MediaKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LadduWinner {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventWinner {
    #[serde(default)]
    pub event: String,
    #[serde(default)]
    pub winner: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IdolContributor {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub image: String,
}

/// One named monetary contribution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
}

/// One expense line item
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub amount: f64,
}

/// Normalize a raw backend value into a fully defaulted [`YearRecord`].
///
/// Total for any JSON-shaped input: absent, null, or wrong-typed fields take
/// their documented defaults (empty list, zero-valued struct, `0` for
/// `collection`). Unrecognized fields are ignored. Pure; never fails.
pub fn normalize(raw: &Value) -> YearRecord {
    let field = |name: &str| raw.as_object().and_then(|m| m.get(name));

    YearRecord {
        gallery: array_items(field("gallery"), normalize_media_item),
        laddu_winner: normalize_laddu_winner(field("ladduWinner")),
        event_winners: array_items(field("eventWinners"), normalize_event_winner),
        idol_contributor: normalize_idol_contributor(field("idolContributor")),
        other_contributors: array_items(field("otherContributors"), normalize_contribution),
        expenses: array_items(field("expenses"), normalize_expense),
        // Only an actual JSON number counts; no string coercion here
        collection: field("collection").and_then(Value::as_f64).unwrap_or(0.0),
    }
}

/// Map each element of an array field; a non-array field yields an empty list
fn array_items<T>(value: Option<&Value>, f: impl Fn(&Value) -> T) -> Vec<T> {
    match value.and_then(Value::as_array) {
        Some(items) => items.iter().map(f).collect(),
        None => Vec::new(),
    }
}

/// String sub-field, defaulting to empty
fn string_of(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Amount sub-field with numeric-string coercion; anything else is 0
fn amount_of(value: &Value, key: &str) -> f64 {
    match value.get(key) {
        Some(v) => match v {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
            _ => 0.0,
        },
        None => 0.0,
    }
}

fn normalize_media_item(value: &Value) -> MediaItem {
    // Older records stored the address under "src" rather than "url"
    let url = match string_of(value, "url") {
        u if u.is_empty() => string_of(value, "src"),
        u => u,
    };
    let kind = value
        .get("type")
        .and_then(Value::as_str)
        .and_then(|s| match s {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        });
    MediaItem {
        url,
        alt: string_of(value, "alt"),
        kind,
    }
}

fn normalize_laddu_winner(value: Option<&Value>) -> LadduWinner {
    match value {
        Some(v) if v.is_object() => LadduWinner {
            name: string_of(v, "name"),
            image: string_of(v, "image"),
            description: string_of(v, "description"),
        },
        _ => LadduWinner::default(),
    }
}

fn normalize_event_winner(value: &Value) -> EventWinner {
    EventWinner {
        event: string_of(value, "event"),
        winner: string_of(value, "winner"),
        description: string_of(value, "description"),
        image: string_of(value, "image"),
    }
}

fn normalize_idol_contributor(value: Option<&Value>) -> IdolContributor {
    match value {
        Some(v) if v.is_object() => IdolContributor {
            name: string_of(v, "name"),
            image: string_of(v, "image"),
        },
        _ => IdolContributor::default(),
    }
}

fn normalize_contribution(value: &Value) -> Contribution {
    Contribution {
        name: string_of(value, "name"),
        amount: amount_of(value, "amount"),
    }
}

fn normalize_expense(value: &Value) -> Expense {
    Expense {
        category: string_of(value, "category"),
        amount: amount_of(value, "amount"),
    }
}
