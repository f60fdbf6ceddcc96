//! Financial aggregation for a year record
//!
//! Totals are computed from the normalized contributor and expense lists.
//! The record's stored `collection` field is reported to callers separately
//! and is NOT reconciled against the computed contribution total.

use crate::model::YearRecord;
use serde::Serialize;

/// Derived financial totals for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Sum of all contribution amounts
    pub total_contribution: f64,
    /// Sum of all expense amounts
    pub total_expenses: f64,
    /// `total_contribution - total_expenses`; may be negative
    pub remaining: f64,
}

/// Compute financial totals from a normalized record.
///
/// Pure and deterministic; defined for empty lists (all outputs zero).
pub fn aggregate(record: &YearRecord) -> FinancialSummary {
    let total_contribution: f64 = record.other_contributors.iter().map(|c| c.amount).sum();
    let total_expenses: f64 = record.expenses.iter().map(|e| e.amount).sum();

    FinancialSummary {
        total_contribution,
        total_expenses,
        remaining: total_contribution - total_expenses,
    }
}
