//! Wire types for the festival backend REST API
//!
//! The backend's responses are not trusted: list payloads are parsed
//! leniently from raw JSON, and every embedded record passes through the
//! normalizer. Write-side request bodies are typed and serialized directly.

use crate::model::{normalize, YearRecord};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One element of the year index (`GET /festival`)
#[derive(Debug, Clone, PartialEq)]
pub struct YearEntry {
    pub year: i32,
    pub record: YearRecord,
    /// Backend-reported remaining amount, when present
    pub remaining_amount: Option<f64>,
}

/// Body for `POST /festival`
#[derive(Debug, Clone, Serialize)]
pub struct CreateYearRequest {
    pub year: i32,
    pub data: YearRecord,
}

/// Body for `PUT /festival/:year`
#[derive(Debug, Clone, Serialize)]
pub struct UpdateYearRequest {
    pub data: YearRecord,
}

/// Response of `POST /upload`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub urls: Vec<String>,
}

/// Parse the year index leniently.
///
/// A non-array payload yields an empty index; entries without an integer
/// `year` are skipped rather than failing the whole list.
pub fn parse_year_list(raw: &Value) -> Vec<YearEntry> {
    let items = match raw.as_array() {
        Some(items) => items,
        None => return Vec::new(),
    };

    items
        .iter()
        .filter_map(|item| {
            let year: i32 = item
                .get("year")
                .and_then(Value::as_i64)?
                .try_into()
                .ok()?;
            Some(YearEntry {
                year,
                record: normalize(item.get("data").unwrap_or(&Value::Null)),
                remaining_amount: item.get("remaining_amount").and_then(Value::as_f64),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_year_list() {
        let raw = json!([
            {"year": 2024, "data": {"collection": 100}, "remaining_amount": 42.5},
            {"year": 2023, "data": {}}
        ]);
        let entries = parse_year_list(&raw);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].year, 2024);
        assert_eq!(entries[0].record.collection, 100.0);
        assert_eq!(entries[0].remaining_amount, Some(42.5));
        assert_eq!(entries[1].remaining_amount, None);
    }

    #[test]
    fn test_parse_year_list_skips_malformed_entries() {
        let raw = json!([
            {"year": "not-a-year", "data": {}},
            {"data": {}},
            {"year": 2022}
        ]);
        let entries = parse_year_list(&raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, 2022);
        assert_eq!(entries[0].record, YearRecord::default());
    }

    #[test]
    fn test_parse_year_list_skips_out_of_range_year() {
        // A year outside i32 must be skipped, not truncated into a bogus one
        let raw = json!([
            {"year": 9_999_999_999i64, "data": {}},
            {"year": 2021, "data": {}}
        ]);
        let entries = parse_year_list(&raw);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].year, 2021);
    }

    #[test]
    fn test_parse_year_list_non_array() {
        assert!(parse_year_list(&json!({"oops": true})).is_empty());
        assert!(parse_year_list(&json!(null)).is_empty());
    }

    #[test]
    fn test_create_request_shape() {
        let body = CreateYearRequest {
            year: 2025,
            data: YearRecord::default(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["year"], 2025);
        assert!(json["data"]["gallery"].is_array());
    }
}
