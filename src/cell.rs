//! Table cells.
//!
//! A [`Cell`] is the display form of one table value: an ordered list of
//! lines, each at most `max_cell_width` characters long. Widths are counted
//! in `char`s; wrapping never looks at words or graphemes.

use std::sync::LazyLock;

use regex::Regex;
use smallvec::{SmallVec, smallvec};

use crate::printer::PrinterConfig;

static NEWLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n|\n|\r").expect("valid regex"));

/// The wrapped or truncated lines of one table value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    lines: SmallVec<[String; 1]>,
}

impl Cell {
    /// Build a cell from an optional value.
    ///
    /// An absent value renders as `config.null_value`. Tabs are replaced by
    /// `config.tab_replacement`. With wraparound the text is split on `\n`,
    /// `\r\n` and `\r`, and every physical line is hard-wrapped at
    /// `config.max_cell_width` characters; without it all newlines are
    /// dropped and the text is truncated to a single line.
    ///
    /// # Examples
    ///
    /// ```
    /// use table_printer::cell::Cell;
    /// use table_printer::printer::PrinterConfig;
    ///
    /// let config = PrinterConfig { max_cell_width: 4, ..PrinterConfig::default() };
    /// let cell = Cell::new(Some("abcdefghij"), &config);
    /// assert_eq!(cell.lines(), ["abcd", "efgh", "ij"]);
    /// ```
    #[must_use]
    pub fn new(value: Option<&str>, config: &PrinterConfig) -> Self {
        let text = value
            .unwrap_or(&config.null_value)
            .replace('\t', &config.tab_replacement);
        let width = config.max_cell_width.max(1);

        let lines = if config.wraparound {
            wrap(&text, width)
        } else {
            let joined: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
            smallvec![take_chars(&joined, width).to_string()]
        };

        Self { lines }
    }

    /// All lines of this cell.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines; never zero.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// The line at `index`, or `""` past the last line.
    #[must_use]
    pub fn line(&self, index: usize) -> &str {
        self.lines.get(index).map_or("", String::as_str)
    }

    /// Length in characters of the longest line.
    #[must_use]
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

/// Split on newlines and hard-wrap every physical line.
///
/// Trailing empty physical lines are dropped, so `"20\n"` is one line and a
/// value made only of newlines is a single empty line. A physical line of
/// exactly `k * width` characters yields `k` lines.
fn wrap(text: &str, width: usize) -> SmallVec<[String; 1]> {
    let mut physical: Vec<&str> = NEWLINE_RE.split(text).collect();
    while physical.len() > 1 && physical.last().is_some_and(|line| line.is_empty()) {
        physical.pop();
    }

    let mut lines = SmallVec::new();
    for line in physical {
        if line.is_empty() {
            lines.push(String::new());
            continue;
        }
        let mut chunk = String::with_capacity(width);
        let mut chunk_len = 0;
        for c in line.chars() {
            if chunk_len == width {
                lines.push(std::mem::take(&mut chunk));
                chunk_len = 0;
            }
            chunk.push(c);
            chunk_len += 1;
        }
        lines.push(chunk);
    }
    lines
}

/// The first `n` characters of `s`.
fn take_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(width: usize) -> PrinterConfig {
        PrinterConfig {
            max_cell_width: width,
            ..PrinterConfig::default()
        }
    }

    #[test]
    fn test_absent_value_uses_null_value() {
        let config = PrinterConfig {
            null_value: "n/a".to_string(),
            ..PrinterConfig::default()
        };
        assert_eq!(Cell::new(None, &config).lines(), ["n/a"]);
    }

    #[test]
    fn test_empty_value_is_one_empty_line() {
        let cell = Cell::new(Some(""), &config(10));
        assert_eq!(cell.line_count(), 1);
        assert_eq!(cell.line(0), "");
        assert_eq!(cell.width(), 0);
    }

    #[test]
    fn test_tab_replacement() {
        let config = PrinterConfig {
            tab_replacement: "..".to_string(),
            ..PrinterConfig::default()
        };
        assert_eq!(Cell::new(Some("a\tb"), &config).lines(), ["a..b"]);
        assert_eq!(
            Cell::new(Some("a\tb"), &PrinterConfig::default()).lines(),
            ["a        b"]
        );
    }

    #[test]
    fn test_wrap_hard_breaks() {
        let cell = Cell::new(Some("johnWithVeryLong"), &config(10));
        assert_eq!(cell.lines(), ["johnWithVe", "ryLong"]);
    }

    #[test]
    fn test_wrap_exact_multiple_has_no_trailing_line() {
        let cell = Cell::new(Some("abcdef"), &config(3));
        assert_eq!(cell.lines(), ["abc", "def"]);
        let cell = Cell::new(Some("abc"), &config(3));
        assert_eq!(cell.lines(), ["abc"]);
    }

    #[test]
    fn test_wrap_all_newline_variants() {
        let cell = Cell::new(Some("a\nb\r\nc\rd"), &config(10));
        assert_eq!(cell.lines(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_wrap_keeps_leading_empty_lines() {
        let cell = Cell::new(Some("\n\n\n20"), &config(10));
        assert_eq!(cell.lines(), ["", "", "", "20"]);
    }

    #[test]
    fn test_wrap_drops_trailing_newlines() {
        let cell = Cell::new(Some("20\n\n"), &config(10));
        assert_eq!(cell.lines(), ["20"]);
    }

    #[test]
    fn test_only_newlines_is_one_empty_line() {
        let cell = Cell::new(Some("\n\r\n"), &config(10));
        assert_eq!(cell.lines(), [""]);
    }

    #[test]
    fn test_truncate_without_wraparound() {
        let config = PrinterConfig {
            wraparound: false,
            max_cell_width: 5,
            ..PrinterConfig::default()
        };
        assert_eq!(Cell::new(Some("ab\ncd\r\nefgh"), &config).lines(), ["abcde"]);
        assert_eq!(Cell::new(Some("ab"), &config).lines(), ["ab"]);
    }

    #[test]
    fn test_wrap_counts_chars_not_bytes() {
        let cell = Cell::new(Some("ääääää"), &config(4));
        assert_eq!(cell.lines(), ["ääää", "ää"]);
        assert_eq!(cell.width(), 4);
    }

    #[test]
    fn test_line_past_end_is_empty() {
        let cell = Cell::new(Some("x"), &config(10));
        assert_eq!(cell.line(3), "");
    }

    #[test]
    fn test_take_chars() {
        assert_eq!(take_chars("héllo", 2), "hé");
        assert_eq!(take_chars("hi", 5), "hi");
    }
}
