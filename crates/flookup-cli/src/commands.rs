//! Command implementations for the lookup harness.

use std::fs;

use anyhow::{Context, Result};
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{CellAlignment, ContentArrangement, Table as DisplayTable};
use tracing::info;

use flookup_cli::scan::scan_formulas;
use flookup_cli::table_io::load_table;
use flookup_match::score::{
    EDIT_WEIGHT, EXACT_WEIGHT, SIMILARITY_WEIGHT, ScoreComponents, TOKEN_WEIGHT,
};
use flookup_match::{fuzzy_lookup, normalize};
use flookup_model::{CellValue, FormulaValue, Row, Table};

use crate::cli::{LookupArgs, ScanArgs};

pub fn run_lookup(args: &LookupArgs) -> Result<i32> {
    let table = load_table(&args.table, !args.no_header)?;
    info!(rows = table.rows.len(), table = %args.table.display(), "loaded table");

    let result = fuzzy_lookup(&args.query, &table, args.column, args.with_confidence);
    match &result {
        FormulaValue::Single(value) => println!("{value}"),
        FormulaValue::Pair(value, confidence) => println!("{value}\t{confidence}"),
    }

    if args.explain {
        print_explanation(&args.query, &table, args.column);
    }

    Ok(if result.primary().starts_with("#ERROR") {
        1
    } else {
        0
    })
}

/// Prints the per-scorer breakdown for the winning candidate, when one
/// exists.
fn print_explanation(query: &str, table: &Table, column: usize) {
    let Ok(result) = flookup_match::lookup(query, table, column) else {
        return;
    };
    let Some(row) = result.row else {
        return;
    };

    let key = table.rows[row].cells[0].as_text();
    let components = ScoreComponents::measure(&normalize(query), &normalize(&key));
    let mut display = new_display_table(vec!["Scorer", "Score", "Weight"]);
    for (name, score, weight) in [
        ("exact substring", components.exact, EXACT_WEIGHT),
        ("edit distance", components.edit, EDIT_WEIGHT),
        ("jaro-winkler", components.similarity, SIMILARITY_WEIGHT),
        ("token match", components.token, TOKEN_WEIGHT),
    ] {
        display.add_row(vec![
            name.to_string(),
            format!("{score:.3}"),
            format!("{weight:.1}"),
        ]);
    }
    display.add_row(vec![
        "composite".to_string(),
        format!("{:.3}", result.confidence),
        "1.0".to_string(),
    ]);
    eprintln!("{display}");
}

pub fn run_scan(args: &ScanArgs) -> Result<i32> {
    let content = fs::read_to_string(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    let hits = scan_formulas(&content);
    if hits.is_empty() {
        println!("No FUZZYLOOKUP formulas found.");
        return Ok(0);
    }
    info!(count = hits.len(), "found formulas");

    let mut display = new_display_table(vec!["Line", "Col", "Formula"]);
    for hit in hits {
        display.add_row(vec![hit.line.to_string(), hit.column.to_string(), hit.formula]);
    }
    println!("{display}");
    Ok(0)
}

pub fn run_demo() -> Result<i32> {
    let table = demo_table();
    let queries = [
        "John Smith",
        "jon smyth",
        "Dr Jane Smith",
        "ACME, Inc.",
        "Zyxqq",
    ];

    let mut display = new_display_table(vec!["Query", "Result", "Confidence"]);
    for query in queries {
        match fuzzy_lookup(query, &table, 2, true) {
            FormulaValue::Pair(value, confidence) => {
                display.add_row(vec![query.to_string(), value, confidence]);
            }
            FormulaValue::Single(value) => {
                display.add_row(vec![query.to_string(), value, "-".to_string()]);
            }
        }
    }
    println!("{display}");
    Ok(0)
}

fn new_display_table(header: Vec<&str>) -> DisplayTable {
    let mut display = DisplayTable::new();
    display
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    if let Some(column) = display.column_mut(0) {
        column.set_cell_alignment(CellAlignment::Left);
    }
    display
}

fn demo_table() -> Table {
    let people = [
        ("John Smith", "CEO"),
        ("Jane Smith MD", "Physician"),
        ("Acme Company", "Supplier"),
        ("Robert Jones", "Accountant"),
    ];
    Table::from_rows(
        people
            .iter()
            .map(|(name, role)| {
                Row::new(vec![
                    CellValue::Text((*name).to_string()),
                    CellValue::Text((*role).to_string()),
                ])
            })
            .collect(),
    )
}
