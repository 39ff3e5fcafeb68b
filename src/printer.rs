//! The table printer facade.
//!
//! A [`TablePrinter`] holds an immutable [`PrinterConfig`] and turns table
//! data into bordered text. Every print call builds a fresh [`Grid`],
//! renders it, and encodes the result; nothing is shared between calls, so
//! one printer can serve any number of threads.
//!
//! # Examples
//!
//! ```
//! use table_printer::printer::TablePrinter;
//!
//! let printer = TablePrinter::new();
//! let table = printer
//!     .print(["firstName", "lastName"], [["john", "doe"], ["joe", "doe"]])
//!     .unwrap();
//! assert_eq!(
//!     table,
//!     "+-----------+----------+\n\
//!      | firstName | lastName |\n\
//!      |===========|==========|\n\
//!      | john      | doe      |\n\
//!      | joe       | doe      |\n\
//!      +-----------+----------+\n"
//! );
//! ```

use std::io::Write;
use std::sync::LazyLock;

use encoding_rs::Encoding;
use log::debug;

use crate::border::{BorderStyle, PLAIN};
use crate::encode;
use crate::error::{ConfigurationError, Result};
use crate::grid::Grid;
use crate::render::Renderer;
use crate::source::{IntoCellValue, IterSource, TableSource};

/// Default hard wrap/truncate width of a cell.
pub const DEFAULT_MAX_CELL_WIDTH: usize = 100;

/// Default replacement for tab characters.
pub const DEFAULT_TAB_REPLACEMENT: &str = "        ";

/// Default output encoding label.
pub const DEFAULT_ENCODING: &str = "UTF-8";

/// Printer with the default configuration.
pub static DEFAULT_PRINTER: LazyLock<TablePrinter> = LazyLock::new(TablePrinter::default);

/// Options shared by every part of a print call.
#[derive(Debug, Clone)]
pub struct PrinterConfig {
    /// Rendered in place of absent values.
    pub null_value: String,
    /// Glyphs used for borders and dividers.
    pub border_style: &'static dyn BorderStyle,
    /// Hard wrap (or truncate) width of every cell, at least 1.
    pub max_cell_width: usize,
    /// Wrap long values over several lines instead of truncating them.
    pub wraparound: bool,
    /// First body row to print, by original index.
    pub start_row: usize,
    /// Last body row to print, inclusive; `None` prints to the end.
    pub end_row: Option<usize>,
    /// Draw a rule between every pair of body rows.
    pub horizontal_dividers: bool,
    /// Prepend a `#` column holding each row's original index.
    pub row_numbers: bool,
    /// Output encoding label, such as `"UTF-8"` or `"latin1"`.
    pub encoding: String,
    /// Substituted for every tab character.
    pub tab_replacement: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            null_value: String::new(),
            border_style: &PLAIN,
            max_cell_width: DEFAULT_MAX_CELL_WIDTH,
            wraparound: true,
            start_row: 0,
            end_row: None,
            horizontal_dividers: false,
            row_numbers: false,
            encoding: DEFAULT_ENCODING.to_string(),
            tab_replacement: DEFAULT_TAB_REPLACEMENT.to_string(),
        }
    }
}

impl PrinterConfig {
    /// Check the configuration and resolve the output encoding.
    pub fn validate(&self) -> std::result::Result<&'static Encoding, ConfigurationError> {
        if self.max_cell_width == 0 {
            return Err(ConfigurationError::ZeroCellWidth);
        }
        encode::resolve(&self.encoding)
    }
}

/// Pretty-prints tables.
#[derive(Debug, Clone, Default)]
pub struct TablePrinter {
    config: PrinterConfig,
}

impl From<PrinterConfig> for TablePrinter {
    fn from(config: PrinterConfig) -> Self {
        Self { config }
    }
}

impl TablePrinter {
    /// Create a printer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a printer from a complete configuration.
    #[must_use]
    pub fn with_config(config: PrinterConfig) -> Self {
        Self { config }
    }

    /// The configuration of this printer.
    #[must_use]
    pub fn config(&self) -> &PrinterConfig {
        &self.config
    }

    /// Set the text shown for absent values.
    #[must_use]
    pub fn null_value(mut self, value: impl Into<String>) -> Self {
        self.config.null_value = value.into();
        self
    }

    /// Set the border style.
    #[must_use]
    pub fn border_style(mut self, style: &'static dyn BorderStyle) -> Self {
        self.config.border_style = style;
        self
    }

    /// Set the maximum cell width.
    #[must_use]
    pub fn max_cell_width(mut self, width: usize) -> Self {
        self.config.max_cell_width = width;
        self
    }

    /// Enable or disable wrapping of long values.
    #[must_use]
    pub fn wraparound(mut self, wrap: bool) -> Self {
        self.config.wraparound = wrap;
        self
    }

    /// Set the first body row to print.
    #[must_use]
    pub fn start_row(mut self, row: usize) -> Self {
        self.config.start_row = row;
        self
    }

    /// Set the last body row to print (inclusive).
    #[must_use]
    pub fn end_row(mut self, row: usize) -> Self {
        self.config.end_row = Some(row);
        self
    }

    /// Enable or disable rules between body rows.
    #[must_use]
    pub fn horizontal_dividers(mut self, enabled: bool) -> Self {
        self.config.horizontal_dividers = enabled;
        self
    }

    /// Enable or disable the row number column.
    #[must_use]
    pub fn row_numbers(mut self, enabled: bool) -> Self {
        self.config.row_numbers = enabled;
        self
    }

    /// Set the output encoding label.
    #[must_use]
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.config.encoding = label.into();
        self
    }

    /// Set the tab replacement string.
    #[must_use]
    pub fn tab_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.config.tab_replacement = replacement.into();
        self
    }

    /// Print headers and rows to a string.
    ///
    /// Pass an empty collection for absent headers or rows. Rows are pulled
    /// only up to `end_row`, so `rows` may be endless when it is set.
    pub fn print<H, R>(&self, headers: H, rows: R) -> Result<String>
    where
        H: IntoIterator,
        H::Item: IntoCellValue,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: IntoCellValue,
    {
        self.print_source(&IterSource::new(headers, rows))
    }

    /// Print headers and rows to a byte stream.
    pub fn print_to<H, R, W>(&self, headers: H, rows: R, out: &mut W) -> Result<()>
    where
        H: IntoIterator,
        H::Item: IntoCellValue,
        R: IntoIterator,
        R::Item: IntoIterator,
        <R::Item as IntoIterator>::Item: IntoCellValue,
        W: Write + ?Sized,
    {
        self.print_source_to(&IterSource::new(headers, rows), out)
    }

    /// Print a data source to a string.
    ///
    /// The table is rendered into an owned buffer and decoded with the
    /// configured encoding; on error no partial text is returned.
    pub fn print_source<S: TableSource + ?Sized>(&self, source: &S) -> Result<String> {
        let encoding = self.config.validate()?;
        let mut buffer = Vec::new();
        self.write_encoded(source, encoding, &mut buffer)?;
        Ok(encode::decode(encoding, &buffer))
    }

    /// Print a data source to a byte stream, then flush it.
    ///
    /// The configuration is checked before any byte is written.
    pub fn print_source_to<S, W>(&self, source: &S, out: &mut W) -> Result<()>
    where
        S: TableSource + ?Sized,
        W: Write + ?Sized,
    {
        let encoding = self.config.validate()?;
        self.write_encoded(source, encoding, out)
    }

    /// Build the grid a print call would render.
    pub fn grid<S: TableSource + ?Sized>(&self, source: &S) -> Result<Grid> {
        self.config.validate()?;
        Ok(Grid::build(source, &self.config))
    }

    fn write_encoded<S, W>(&self, source: &S, encoding: &'static Encoding, out: &mut W) -> Result<()>
    where
        S: TableSource + ?Sized,
        W: Write + ?Sized,
    {
        let grid = Grid::build(source, &self.config);
        let text = Renderer::new(&grid, self.config.border_style)
            .horizontal_dividers(self.config.horizontal_dividers)
            .render_to_string();

        let (bytes, substituted) = encode::encode(encoding, &text);
        if substituted > 0 {
            debug!(
                "{substituted} characters of the {} table not representable in {}, written as '?'",
                self.config.border_style.name(),
                encoding.name()
            );
        }
        debug!("writing {} bytes of table text as {}", bytes.len(), encoding.name());

        out.write_all(&bytes)?;
        out.flush()?;
        Ok(())
    }
}
