//! # table_printer
//!
//! Pretty-prints tables as bordered, column-aligned plain text.
//!
//! Give the printer a header row and a (possibly ragged) grid of optional
//! string values; it wraps or truncates long values, sizes every column to
//! its widest cell, and frames the result with a pluggable border style.
//!
//! ## Quick Start
//!
//! ```rust
//! use table_printer::prelude::*;
//!
//! let printer = TablePrinter::new()
//!     .border_style(&HEAVY)
//!     .row_numbers(true)
//!     .null_value("n/a");
//!
//! let data = TableData::new()
//!     .with_headers(["firstName", "lastName"])
//!     .with_row([Some("john"), Some("doe")])
//!     .with_row([Some("Roger E."), None]);
//!
//! let table = printer.print_source(&data).unwrap();
//! assert!(table.contains("n/a"));
//! ```
//!
//! ## Core Concepts
//!
//! - **`TablePrinter`**: immutable configuration plus the print operations
//! - **`TableSource`**: where headers and rows come from
//! - **`Cell`**: one value as a list of fixed-width lines
//! - **`Grid`**: header and body cells with computed column widths
//! - **`BorderStyle`**: the glyphs drawn around and between cells

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod border;
pub mod cell;
mod encode;
pub mod error;
pub mod grid;
pub mod logging;
pub mod printer;
pub mod render;
pub mod source;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::border::{BorderGlyphs, BorderStyle, HEAVY, PLAIN};
    pub use crate::cell::Cell;
    pub use crate::error::{ConfigurationError, TableError};
    pub use crate::grid::{Grid, Row};
    pub use crate::printer::{DEFAULT_PRINTER, PrinterConfig, TablePrinter};
    pub use crate::render::Renderer;
    pub use crate::source::{IntoCellValue, IterSource, TableData, TableSource};
}

// Re-export key types at crate root
pub use border::BorderStyle;
pub use error::{ConfigurationError, Result, TableError};
pub use printer::{PrinterConfig, TablePrinter};
pub use source::{TableData, TableSource};
