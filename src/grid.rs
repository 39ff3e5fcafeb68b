//! The finalized grid of a table.
//!
//! A [`Grid`] is built fresh for every print call. It holds the header row,
//! the body rows that survived the row window, and the width of every
//! column. Building a grid never fails: absent values, absent headers and
//! ragged rows are all absorbed by padding.

use log::{debug, trace};

use crate::cell::Cell;
use crate::printer::PrinterConfig;
use crate::source::TableSource;

/// One row of cells, in render order. May be shorter than the column count.
pub type Row = Vec<Cell>;

/// Width-computed header and body rows, ready to render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    header: Row,
    body: Vec<Row>,
    column_widths: Vec<usize>,
}

impl Grid {
    /// Build a grid from a data source.
    ///
    /// Rows are consumed first and filtered to the inclusive window
    /// `config.start_row..=config.end_row` by original index; consumption
    /// stops once that window is passed. Headers are consumed afterwards and
    /// padded with the labels `"0"`, `"1"`, ... of the missing column
    /// indices when the body is wider than the header.
    pub fn build<S: TableSource + ?Sized>(source: &S, config: &PrinterConfig) -> Self {
        let mut grid = Self::default();
        let max_cell_width = config.max_cell_width.max(1);

        if let Some(rows) = source.rows() {
            let window_end = config.end_row.map_or(usize::MAX, |end| end.saturating_add(1));
            for (index, values) in rows.enumerate().take(window_end) {
                if index < config.start_row {
                    trace!("row {index} is before the row window, skipped");
                    continue;
                }
                let mut row = Row::with_capacity(values.len() + usize::from(config.row_numbers));
                if config.row_numbers {
                    row.push(Cell::new(Some(index.to_string().as_str()), config));
                }
                row.extend(values.iter().map(|value| Cell::new(value.as_deref(), config)));
                grid.body.push(row);
            }
        }

        for row in &grid.body {
            fold_widths(&mut grid.column_widths, row, max_cell_width);
        }

        let mut header = Row::new();
        if config.row_numbers {
            header.push(Cell::new(Some("#"), config));
        }
        if let Some(headers) = source.headers() {
            header.extend(headers.map(|value| Cell::new(value.as_deref(), config)));
        }
        for missing in header.len()..grid.column_widths.len() {
            header.push(Cell::new(Some(missing.to_string().as_str()), config));
        }
        fold_widths(&mut grid.column_widths, &header, max_cell_width);
        grid.header = header;

        debug!(
            "built table grid: {} body rows, column widths {:?}",
            grid.body.len(),
            grid.column_widths
        );
        grid
    }

    /// The header row, including the `#` column and synthetic labels.
    #[must_use]
    pub fn header(&self) -> &[Cell] {
        &self.header
    }

    /// Body rows inside the row window, in original order.
    #[must_use]
    pub fn body(&self) -> &[Row] {
        &self.body
    }

    /// Width of every column, in column order.
    #[must_use]
    pub fn column_widths(&self) -> &[usize] {
        &self.column_widths
    }

    /// Width of one column, zero when no cell contributes to it.
    #[must_use]
    pub fn column_width(&self, column: usize) -> usize {
        self.column_widths.get(column).copied().unwrap_or(0)
    }

    /// Number of columns any row or the header reaches.
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.column_widths.len()
    }

    /// Whether there is anything to render.
    #[must_use]
    pub fn exists(&self) -> bool {
        !(self.header.is_empty() && self.body.is_empty())
    }
}

/// Widen columns to fit every cell of `row`.
fn fold_widths(widths: &mut Vec<usize>, row: &[Cell], max_cell_width: usize) {
    for (column, cell) in row.iter().enumerate() {
        let width = cell.width().min(max_cell_width);
        match widths.get_mut(column) {
            Some(current) => *current = (*current).max(width),
            None => widths.push(width),
        }
    }
}
