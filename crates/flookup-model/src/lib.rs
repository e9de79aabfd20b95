#![deny(unsafe_code)]

//! Shared data model for fuzzy name lookup.
//!
//! Holds the table grid types, the per-invocation match result, the
//! formula-boundary value shape, and the sentinel error taxonomy. The
//! matching engine itself lives in `flookup-match`.

pub mod error;
pub mod result;
pub mod table;

pub use error::{LookupError, Result};
pub use result::{FormulaValue, MatchResult};
pub use table::{CellValue, Row, Table};
