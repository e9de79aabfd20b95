use flookup_match::formula::fuzzy_lookup;
use flookup_model::{CellValue, FormulaValue, Row, Table};

fn text_table(rows: &[&[&str]]) -> Table {
    Table::from_rows(
        rows.iter()
            .map(|cells| {
                Row::new(
                    cells
                        .iter()
                        .map(|&cell| CellValue::Text(cell.to_string()))
                        .collect(),
                )
            })
            .collect(),
    )
}

fn parse_percent(confidence: &str) -> i64 {
    confidence
        .strip_suffix('%')
        .expect("confidence ends with %")
        .parse()
        .expect("confidence is an integer")
}

#[test]
fn exact_match_returns_target_cell() {
    let grid = text_table(&[&["John Smith", "CEO"]]);
    assert_eq!(
        fuzzy_lookup("John Smith", &grid, 2, false),
        FormulaValue::Single("CEO".into())
    );
}

#[test]
fn single_typo_is_accepted_with_confidence() {
    let grid = text_table(&[&["acne", "X"]]);
    let result = fuzzy_lookup("acme", &grid, 2, true);
    assert_eq!(result.primary(), "X");
    let percent = parse_percent(result.confidence().expect("confidence requested"));
    assert!(
        (30..100).contains(&percent),
        "one-typo match should clear the threshold without reaching certainty, got {percent}%"
    );
}

#[test]
fn unrelated_query_is_not_found() {
    let grid = text_table(&[&["John Smith", "CEO"]]);
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
fn empty_query_is_a_missing_parameter() {
    let grid = text_table(&[&["John Smith", "CEO"]]);
    assert_eq!(
        fuzzy_lookup("", &grid, 2, false),
        FormulaValue::Single("#ERROR: Missing required parameters".into())
    );
}

#[test]
fn zero_column_is_a_missing_parameter() {
    let grid = text_table(&[&["John Smith", "CEO"]]);
    assert_eq!(
        fuzzy_lookup("John", &grid, 0, false),
        FormulaValue::Single("#ERROR: Missing required parameters".into())
    );
}

#[test]
fn column_beyond_width_is_out_of_range() {
    let grid = text_table(&[&["John Smith", "CEO"], &["Jane Doe", "CFO"]]);
    assert_eq!(
        fuzzy_lookup("John", &grid, 5, false),
        FormulaValue::Single("#ERROR: Column index out of range".into())
    );
}

#[test]
fn empty_and_ragged_tables_are_invalid() {
    assert_eq!(
        fuzzy_lookup("John", &Table::from_rows(vec![]), 1, false),
        FormulaValue::Single("#ERROR: Invalid table array".into())
    );
    let ragged = Table::from_rows(vec![
        Row::new(vec![CellValue::Text("a".into()), CellValue::Empty]),
        Row::new(vec![CellValue::Text("b".into())]),
    ]);
    assert_eq!(
        fuzzy_lookup("a", &ragged, 1, false),
        FormulaValue::Single("#ERROR: Invalid table array".into())
    );
}

#[test]
fn titles_and_suffixes_do_not_block_a_match() {
    let grid = text_table(&[&["Jane Smith MD", "A"], &["Bob Jones", "B"]]);
    let result = fuzzy_lookup("Dr Jane Smith", &grid, 1, true);
    assert_eq!(result.primary(), "Jane Smith MD");
    let percent = parse_percent(result.confidence().expect("confidence requested"));
    assert!(
        percent >= 50,
        "stripped-title match should score at least 50%, got {percent}%"
    );
}

#[test]
fn tie_break_is_deterministic_across_calls() {
    let grid = text_table(&[&["Alpha", "first"], &["Alpha", "second"]]);
    for _ in 0..10 {
        assert_eq!(
            fuzzy_lookup("Alpha", &grid, 2, false),
            FormulaValue::Single("first".into())
        );
    }
}

#[test]
fn rows_with_empty_keys_are_skipped() {
    let grid = Table::from_rows(vec![
        Row::new(vec![CellValue::Empty, CellValue::Text("ghost".into())]),
        Row::new(vec![
            CellValue::Text("John Smith".into()),
            CellValue::Text("CEO".into()),
        ]),
    ]);
    assert_eq!(
        fuzzy_lookup("John Smith", &grid, 2, false),
        FormulaValue::Single("CEO".into())
    );
}

#[test]
fn numeric_target_cells_render_as_text() {
    let grid = Table::from_rows(vec![Row::new(vec![
        CellValue::Text("John Smith".into()),
        CellValue::Number(42.0),
    ])]);
    assert_eq!(
        fuzzy_lookup("John Smith", &grid, 2, false),
        FormulaValue::Single("42".into())
    );
}

#[test]
fn reordered_business_names_still_match() {
    let grid = text_table(&[
        &["Acme Widgets Inc", "Supplier"],
        &["Globex Corporation", "Customer"],
    ]);
    let result = fuzzy_lookup("Widgets Acme", &grid, 2, true);
    assert_eq!(result.primary(), "Supplier");
}
