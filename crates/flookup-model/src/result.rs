//! Match outcome and formula-boundary value shapes.

use crate::table::CellValue;

/// Outcome of a single lookup scan. Constructed fresh per invocation and
/// discarded after the output value is produced.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// Index of the winning row, or `None` when no candidate cleared the
    /// acceptance threshold.
    pub row: Option<usize>,
    /// The cell at the requested target column of the winning row.
    pub value: Option<CellValue>,
    /// Composite confidence in `[0, 1]`. Zero when no match was accepted.
    pub confidence: f64,
}

impl MatchResult {
    pub fn not_found() -> Self {
        Self {
            row: None,
            value: None,
            confidence: 0.0,
        }
    }

    pub fn is_match(&self) -> bool {
        self.row.is_some()
    }
}

/// What the hosting formula layer receives: one display value, or a value
/// paired with a confidence percentage. Errors travel through this shape as
/// sentinel text rather than as `Err` — the host shows a cell, not a fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaValue {
    Single(String),
    Pair(String, String),
}

impl FormulaValue {
    /// The primary display value (matched cell text or sentinel).
    pub fn primary(&self) -> &str {
        match self {
            Self::Single(value) | Self::Pair(value, _) => value,
        }
    }

    /// The confidence percentage string, when one was requested.
    pub fn confidence(&self) -> Option<&str> {
        match self {
            Self::Single(_) => None,
            Self::Pair(_, confidence) => Some(confidence),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_cover_both_shapes() {
        let single = FormulaValue::Single("#N/A".into());
        assert_eq!(single.primary(), "#N/A");
        assert_eq!(single.confidence(), None);

        let pair = FormulaValue::Pair("CEO".into(), "87%".into());
        assert_eq!(pair.primary(), "CEO");
        assert_eq!(pair.confidence(), Some("87%"));
    }

    #[test]
    fn not_found_carries_zero_confidence() {
        let result = MatchResult::not_found();
        assert!(!result.is_match());
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.value, None);
    }
}
