//! Best-candidate selection over a table.
//!
//! A single sequential pass: the query is normalized once, every row's key
//! cell is normalized and scored against it, and the maximum is tracked
//! with strict greater-than comparison so the earliest row wins ties. Rows
//! are read-only during the scan, so the loop could be parallelized, but
//! any such change must reconstruct the lowest-row-index tie-break in its
//! reduction step; the sequential scan keeps that property for free.

use flookup_model::{LookupError, MatchResult, Result, Table};
use tracing::{debug, trace};

use crate::normalize::normalize;
use crate::score::composite;

/// Minimum composite score required to report a match.
pub const ACCEPTANCE_THRESHOLD: f64 = 0.3;

/// Finds the best fuzzy match for `query` in the first column of `table`
/// and returns the cell at `target_column` (1-based) of the winning row.
///
/// Validation runs before any scoring, each case a distinct terminal
/// failure:
/// - empty query or zero column index → [`LookupError::MissingParameters`]
/// - empty, ragged, or zero-width table → [`LookupError::InvalidTable`]
/// - column index beyond the row width → [`LookupError::ColumnOutOfRange`]
///
/// A best score below the acceptance threshold is not an error; it yields
/// [`MatchResult::not_found`].
pub fn lookup(query: &str, table: &Table, target_column: usize) -> Result<MatchResult> {
    if query.is_empty() || target_column == 0 {
        return Err(LookupError::MissingParameters);
    }
    let Some(width) = table.rectangular_width() else {
        return Err(LookupError::InvalidTable);
    };
    if target_column > width {
        return Err(LookupError::ColumnOutOfRange);
    }

    let normalized_query = normalize(query);
    let mut best_score = 0.0_f64;
    let mut best_row: Option<usize> = None;
    for (index, row) in table.rows.iter().enumerate() {
        let key = &row.cells[0];
        if key.is_empty() {
            trace!(row = index, "skipping row with empty key cell");
            continue;
        }
        let normalized_key = normalize(&key.as_text());
        let score = composite(&normalized_query, &normalized_key);
        trace!(row = index, score, key = %normalized_key, "scored candidate");
        if score > best_score {
            best_score = score;
            best_row = Some(index);
        }
    }

    match best_row {
        Some(index) if best_score >= ACCEPTANCE_THRESHOLD => {
            debug!(row = index, score = best_score, "accepted best candidate");
            let value = table.rows[index].cells[target_column - 1].clone();
            Ok(MatchResult {
                row: Some(index),
                value: Some(value),
                confidence: best_score,
            })
        }
        _ => {
            debug!(score = best_score, "no candidate reached the threshold");
            Ok(MatchResult::not_found())
        }
    }
}
