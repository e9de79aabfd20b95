#![deny(unsafe_code)]

//! Library surface of the lookup harness: logging setup, CSV table
//! loading, and the formula scanner. The binary's argument parsing and
//! command dispatch live in `main.rs`.

pub mod logging;
pub mod scan;
pub mod table_io;
