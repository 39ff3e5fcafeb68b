//! Rendering a [`Grid`] as framed text.
//!
//! The renderer only decides *where* a glyph goes; *which* glyph is asked
//! of the [`BorderStyle`]. Output is plain text with `\n` line endings,
//! encoded to bytes by the printer afterwards.
//!
//! Layout, for two columns:
//!
//! ```text
//! +----+------+      top edge
//! | id | name |      header block (one line per header line)
//! |====|======|      header rule
//! | 1  | john |      body row
//! |----+------|      row rule (only with horizontal dividers)
//! | 2  | tom  |      body row
//! +----+------+      bottom edge
//! ```
//!
//! With no body rows the header rule is drawn with the bottom corners and
//! closes the table.

use std::fmt::{self, Write};

use crate::border::{BorderStyle, rule};
use crate::cell::Cell;
use crate::grid::Grid;

/// Writes one grid with one border style.
#[derive(Debug, Clone, Copy)]
pub struct Renderer<'a> {
    grid: &'a Grid,
    border: &'a dyn BorderStyle,
    horizontal_dividers: bool,
}

impl<'a> Renderer<'a> {
    /// Create a renderer.
    #[must_use]
    pub fn new(grid: &'a Grid, border: &'a dyn BorderStyle) -> Self {
        Self {
            grid,
            border,
            horizontal_dividers: false,
        }
    }

    /// Draw a rule between every pair of body rows.
    #[must_use]
    pub fn horizontal_dividers(mut self, enabled: bool) -> Self {
        self.horizontal_dividers = enabled;
        self
    }

    /// Render the table into `out`. Writes nothing if the grid is empty.
    pub fn render<W: Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        if !self.grid.exists() {
            return Ok(());
        }
        let border = self.border;
        let body = self.grid.body();

        self.write_rule(
            out,
            border.top_left_corner(),
            border.top_edge_divider(),
            border.horizontal_fill(true, false),
            border.top_right_corner(),
        )?;

        self.write_block(out, self.grid.header())?;

        if body.is_empty() {
            self.write_rule(
                out,
                border.bottom_left_corner(),
                border.cross(true, true),
                border.horizontal_fill(false, true),
                border.bottom_right_corner(),
            )?;
            return Ok(());
        }

        self.write_rule(
            out,
            border.left_edge_divider(true),
            border.cross(true, false),
            border.horizontal_fill(false, true),
            border.right_edge_divider(true),
        )?;

        for (index, row) in body.iter().enumerate() {
            if index > 0 && self.horizontal_dividers {
                self.write_rule(
                    out,
                    border.left_edge_divider(false),
                    border.cross(false, false),
                    border.horizontal_fill(false, false),
                    border.right_edge_divider(false),
                )?;
            }
            self.write_block(out, row)?;
        }

        self.write_rule(
            out,
            border.bottom_left_corner(),
            border.bottom_edge_divider(),
            border.horizontal_fill(true, false),
            border.bottom_right_corner(),
        )
    }

    /// Render the table into a new string.
    #[must_use]
    pub fn render_to_string(&self) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.render(&mut out);
        out
    }

    fn write_rule<W: Write + ?Sized>(
        &self,
        out: &mut W,
        left: char,
        divider: char,
        fill: char,
        right: char,
    ) -> fmt::Result {
        out.write_str(&rule(self.grid.column_widths(), left, divider, fill, right))?;
        out.write_char('\n')
    }

    /// Write every line of a header or body row, cells in lockstep.
    fn write_block<W: Write + ?Sized>(&self, out: &mut W, cells: &[Cell]) -> fmt::Result {
        let outer = self.border.vertical_fill(true);
        let inner = self.border.vertical_fill(false);
        let line_count = cells.iter().map(Cell::line_count).max().unwrap_or(0);

        for line_index in 0..line_count {
            out.write_char(outer)?;
            for column in 0..self.grid.column_count() {
                if column > 0 {
                    out.write_char(inner)?;
                }
                let line = cells.get(column).map_or("", |cell| cell.line(line_index));
                let padding = self
                    .grid
                    .column_width(column)
                    .saturating_sub(line.chars().count());
                write!(out, " {line}{:padding$} ", "")?;
            }
            out.write_char(outer)?;
            out.write_char('\n')?;
        }
        Ok(())
    }
}
