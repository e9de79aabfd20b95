#![deny(unsafe_code)]

/// A scalar spreadsheet value.
///
/// Cells are heterogeneous: a key column may mix names and codes, and the
/// returned column may hold numbers. Coercion to text happens in exactly one
/// place ([`CellValue::as_text`]) so the key column and the returned field
/// render consistently.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Empty,
}

impl CellValue {
    /// Renders the cell as display text. `Empty` renders as the empty
    /// string; integral numbers render without a fractional part.
    pub fn as_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(number) => format_number(*number),
            Self::Empty => String::new(),
        }
    }

    /// True when the cell is absent or holds no text.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(text) => text.is_empty(),
            Self::Number(_) => false,
        }
    }
}

fn format_number(number: f64) -> String {
    if number.fract() == 0.0 && number.abs() < 1e15 {
        format!("{}", number as i64)
    } else {
        number.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }
}

/// An ordered grid of rows. The first column is the match key.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Table {
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Returns the common row width when the table is a valid grid:
    /// at least one row, every row the same width, width at least one.
    /// Returns `None` otherwise.
    pub fn rectangular_width(&self) -> Option<usize> {
        let first = self.rows.first()?;
        let width = first.cells.len();
        if width == 0 {
            return None;
        }
        self.rows
            .iter()
            .all(|row| row.cells.len() == width)
            .then_some(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_cells_render_verbatim() {
        assert_eq!(CellValue::Text("CEO".into()).as_text(), "CEO");
    }

    #[test]
    fn integral_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(42.0).as_text(), "42");
        assert_eq!(CellValue::Number(2.5).as_text(), "2.5");
        assert_eq!(CellValue::Number(-7.0).as_text(), "-7");
    }

    #[test]
    fn empty_cell_renders_as_empty_text() {
        assert_eq!(CellValue::Empty.as_text(), "");
        assert!(CellValue::Empty.is_empty());
        assert!(CellValue::Text(String::new()).is_empty());
        assert!(!CellValue::Number(0.0).is_empty());
    }

    #[test]
    fn rectangular_width_accepts_uniform_grid() {
        let table = Table::from_rows(vec![
            Row::new(vec![CellValue::Text("a".into()), CellValue::Empty]),
            Row::new(vec![CellValue::Text("b".into()), CellValue::Number(1.0)]),
        ]);
        assert_eq!(table.rectangular_width(), Some(2));
    }

    #[test]
    fn rectangular_width_rejects_empty_and_ragged_grids() {
        assert_eq!(Table::from_rows(vec![]).rectangular_width(), None);
        assert_eq!(
            Table::from_rows(vec![Row::new(vec![])]).rectangular_width(),
            None
        );
        let ragged = Table::from_rows(vec![
            Row::new(vec![CellValue::Text("a".into())]),
            Row::new(vec![CellValue::Text("b".into()), CellValue::Empty]),
        ]);
        assert_eq!(ragged.rectangular_width(), None);
    }

    #[test]
    fn cell_value_serializes_tagged() {
        let json = serde_json::to_string(&CellValue::Text("x".into())).expect("serialize cell");
        assert_eq!(json, r#"{"kind":"Text","value":"x"}"#);
    }
}
