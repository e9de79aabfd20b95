//! Soft-fail boundary for the hosting formula layer.
//!
//! The host invokes lookup as a pure function over cell ranges and expects
//! a display value back under all circumstances. Typed errors render to
//! their sentinel text, a below-threshold scan renders to the not-found
//! sentinel, and a panic anywhere in the engine is caught here and rendered
//! as the generic internal-error sentinel.

use std::panic::{self, AssertUnwindSafe};

use flookup_model::{CellValue, FormulaValue, LookupError, MatchResult, Table};

use crate::engine;

/// Display value for a scan whose best score missed the threshold.
pub const NOT_FOUND: &str = "#N/A";

/// The primary operation exposed to the formula layer.
///
/// Returns one display value, or a `(value, confidence)` pair when
/// `with_confidence` is set. Error sentinels are always a single value;
/// the host shows one error cell regardless of the requested shape.
pub fn fuzzy_lookup(
    query: &str,
    table: &Table,
    target_column: usize,
    with_confidence: bool,
) -> FormulaValue {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        engine::lookup(query, table, target_column)
    }))
    .unwrap_or_else(|payload| Err(LookupError::Internal(panic_message(payload.as_ref()))));

    match outcome {
        Err(error) => FormulaValue::Single(error.to_string()),
        Ok(result) if !result.is_match() => {
            if with_confidence {
                FormulaValue::Pair(NOT_FOUND.to_string(), "0%".to_string())
            } else {
                FormulaValue::Single(NOT_FOUND.to_string())
            }
        }
        Ok(result) => {
            let value = result
                .value
                .as_ref()
                .map(CellValue::as_text)
                .unwrap_or_default();
            if with_confidence {
                FormulaValue::Pair(value, format_confidence(&result))
            } else {
                FormulaValue::Single(value)
            }
        }
    }
}

fn format_confidence(result: &MatchResult) -> String {
    format!("{}%", (result.confidence * 100.0).round() as i64)
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unexpected internal failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use flookup_model::Row;

    use super::*;

    fn one_row(key: &str, value: &str) -> Table {
        Table::from_rows(vec![Row::new(vec![
            CellValue::Text(key.to_string()),
            CellValue::Text(value.to_string()),
        ])])
    }

    #[test]
    fn errors_stay_single_even_with_confidence_requested() {
        let grid = one_row("John Smith", "CEO");
        assert_eq!(
            fuzzy_lookup("", &grid, 2, true),
            FormulaValue::Single("#ERROR: Missing required parameters".into())
        );
    }

    #[test]
    fn not_found_shapes() {
        let grid = one_row("John Smith", "CEO");
        assert_eq!(
            fuzzy_lookup("Zyxqq", &grid, 2, false),
            FormulaValue::Single("#N/A".into())
        );
        assert_eq!(
            fuzzy_lookup("Zyxqq", &grid, 2, true),
            FormulaValue::Pair("#N/A".into(), "0%".into())
        );
    }

    #[test]
    fn empty_target_cell_renders_as_empty_text() {
        let grid = Table::from_rows(vec![Row::new(vec![
            CellValue::Text("John Smith".into()),
            CellValue::Empty,
        ])]);
        assert_eq!(
            fuzzy_lookup("John Smith", &grid, 2, false),
            FormulaValue::Single(String::new())
        );
    }

    #[test]
    fn confidence_is_rounded_integer_percent() {
        let grid = one_row("John Smith", "CEO");
        let result = fuzzy_lookup("John Smith", &grid, 2, true);
        assert_eq!(result, FormulaValue::Pair("CEO".into(), "100%".into()));
    }
}
