//! Diagnostic scanner for FUZZYLOOKUP formulas in sheet exports.
//!
//! Display-only convenience: finds where the lookup formula is used in a
//! saved sheet (CSV or plain text) so existing usage can be inspected. Has
//! no bearing on matching behavior.

/// Formula name searched for, up to and including its opening parenthesis.
const FORMULA_OPEN: &str = "FUZZYLOOKUP(";

/// One formula occurrence in the scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaHit {
    /// 1-based line number.
    pub line: usize,
    /// 1-based character offset within the line.
    pub column: usize,
    /// The formula text up to its balanced closing parenthesis, or the
    /// rest of the line when unbalanced.
    pub formula: String,
}

/// Scans text content for `FUZZYLOOKUP(...)` occurrences.
pub fn scan_formulas(content: &str) -> Vec<FormulaHit> {
    let mut hits = Vec::new();
    for (line_index, line) in content.lines().enumerate() {
        let mut search_from = 0;
        while let Some(found) = line[search_from..].find(FORMULA_OPEN) {
            let start = search_from + found;
            hits.push(FormulaHit {
                line: line_index + 1,
                column: line[..start].chars().count() + 1,
                formula: extract_formula(&line[start..]),
            });
            search_from = start + FORMULA_OPEN.len();
        }
    }
    hits
}

fn extract_formula(text: &str) -> String {
    let mut depth = 0i32;
    for (offset, ch) in text.char_indices() {
        if ch == '(' {
            depth += 1;
        } else if ch == ')' {
            depth -= 1;
            if depth == 0 {
                return text[..offset + ch.len_utf8()].to_string();
            }
        }
    }
    text.to_string()
}
