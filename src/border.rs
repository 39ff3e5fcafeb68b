//! Border glyphs for tables.
//!
//! A [`BorderStyle`] answers one question per structural position of a
//! table: which character to draw there. The renderer never hard-codes a
//! glyph, so new looks only need a new implementation of the trait.
//!
//! Two styles ship with the crate:
//!
//! ```text
//! PLAIN                     HEAVY
//! +----+------+             ╔════╤══════╗
//! | id | name |             ║ id │ name ║
//! |====|======|             ╠════╪══════╣
//! | 1  | john |             ║ 1  │ john ║
//! |----+------|             ╟────┼──────╢
//! | 2  | tom  |             ║ 2  │ tom  ║
//! +----+------+             ╚════╧══════╝
//! ```

use std::fmt;

/// Glyph lookup for every position of a rendered table.
///
/// `header` selects the rule between the header block and the body rather
/// than a rule between two body rows. `body_empty` is set when there are no
/// body rows below the header, in which case the header rule closes the
/// table and some styles draw it like a bottom edge.
pub trait BorderStyle: fmt::Debug + Send + Sync {
    /// Short name used in diagnostics.
    fn name(&self) -> &str {
        "custom"
    }

    fn top_left_corner(&self) -> char;
    fn top_right_corner(&self) -> char;
    fn bottom_left_corner(&self) -> char;
    fn bottom_right_corner(&self) -> char;

    /// Where a column boundary meets the top edge.
    fn top_edge_divider(&self) -> char;
    /// Where a column boundary meets the bottom edge.
    fn bottom_edge_divider(&self) -> char;

    /// Left end of a horizontal rule inside the table.
    fn left_edge_divider(&self, header: bool) -> char;
    /// Right end of a horizontal rule inside the table.
    fn right_edge_divider(&self, header: bool) -> char;

    /// Where a column boundary crosses a horizontal rule inside the table.
    fn cross(&self, header: bool, body_empty: bool) -> char;

    /// Horizontal line glyph. `border` selects the top and bottom edges.
    fn horizontal_fill(&self, border: bool, header: bool) -> char;

    /// Vertical line glyph. `border` selects the outer left and right edges,
    /// otherwise the separator between two columns.
    fn vertical_fill(&self, border: bool) -> char;
}

/// Border style backed by a fixed glyph table.
///
/// Each rule is 4 characters: `[left, fill, divider, right]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderGlyphs {
    name: &'static str,
    /// Top edge: ╔═╤╗
    top: [char; 4],
    /// Header-to-body rule: ╠═╪╣
    header_rule: [char; 4],
    /// Cross used when the header rule closes an empty table: ╧
    closing_cross: char,
    /// Rule between two body rows: ╟─┼╢
    row_rule: [char; 4],
    /// Bottom edge: ╚═╧╝
    bottom: [char; 4],
    /// Vertical lines: [outer, inner]
    vertical: [char; 2],
}

impl BorderGlyphs {
    /// Create a glyph table.
    #[must_use]
    pub const fn new(
        name: &'static str,
        top: [char; 4],
        header_rule: [char; 4],
        closing_cross: char,
        row_rule: [char; 4],
        bottom: [char; 4],
        vertical: [char; 2],
    ) -> Self {
        Self {
            name,
            top,
            header_rule,
            closing_cross,
            row_rule,
            bottom,
            vertical,
        }
    }

    /// Whether every glyph of this style is a single-byte ASCII character.
    #[must_use]
    pub fn is_ascii(&self) -> bool {
        self.top
            .iter()
            .chain(&self.header_rule)
            .chain(&self.row_rule)
            .chain(&self.bottom)
            .chain(&self.vertical)
            .chain(std::iter::once(&self.closing_cross))
            .all(char::is_ascii)
    }
}

impl BorderStyle for BorderGlyphs {
    fn name(&self) -> &str {
        self.name
    }

    fn top_left_corner(&self) -> char {
        self.top[0]
    }

    fn top_right_corner(&self) -> char {
        self.top[3]
    }

    fn bottom_left_corner(&self) -> char {
        self.bottom[0]
    }

    fn bottom_right_corner(&self) -> char {
        self.bottom[3]
    }

    fn top_edge_divider(&self) -> char {
        self.top[2]
    }

    fn bottom_edge_divider(&self) -> char {
        self.bottom[2]
    }

    fn left_edge_divider(&self, header: bool) -> char {
        if header {
            self.header_rule[0]
        } else {
            self.row_rule[0]
        }
    }

    fn right_edge_divider(&self, header: bool) -> char {
        if header {
            self.header_rule[3]
        } else {
            self.row_rule[3]
        }
    }

    fn cross(&self, header: bool, body_empty: bool) -> char {
        match (header, body_empty) {
            (true, true) => self.closing_cross,
            (true, false) => self.header_rule[2],
            (false, _) => self.row_rule[2],
        }
    }

    fn horizontal_fill(&self, border: bool, header: bool) -> char {
        if border {
            self.top[1]
        } else if header {
            self.header_rule[1]
        } else {
            self.row_rule[1]
        }
    }

    fn vertical_fill(&self, border: bool) -> char {
        if border {
            self.vertical[0]
        } else {
            self.vertical[1]
        }
    }
}

impl fmt::Display for BorderGlyphs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display a sample 3x3 box
        let widths = [3, 3, 3];
        let outer = self.vertical_fill(true);
        let inner = self.vertical_fill(false);
        let content = format!("{outer}     {inner}     {inner}     {outer}");
        writeln!(
            f,
            "{}",
            rule(
                &widths,
                self.top_left_corner(),
                self.top_edge_divider(),
                self.horizontal_fill(true, false),
                self.top_right_corner(),
            )
        )?;
        writeln!(f, "{content}")?;
        writeln!(
            f,
            "{}",
            rule(
                &widths,
                self.left_edge_divider(true),
                self.cross(true, false),
                self.horizontal_fill(false, true),
                self.right_edge_divider(true),
            )
        )?;
        writeln!(f, "{content}")?;
        write!(
            f,
            "{}",
            rule(
                &widths,
                self.bottom_left_corner(),
                self.bottom_edge_divider(),
                self.horizontal_fill(true, false),
                self.bottom_right_corner(),
            )
        )
    }
}

/// Build a horizontal rule for the given content widths.
///
/// Each column contributes `width + 2` fill glyphs (content plus one space
/// of padding on either side); columns are separated by `divider`.
#[must_use]
pub fn rule(widths: &[usize], left: char, divider: char, fill: char, right: char) -> String {
    let mut result = String::with_capacity(widths.iter().map(|w| w + 3).sum::<usize>() + 2);
    result.push(left);
    for (i, &width) in widths.iter().enumerate() {
        if i > 0 {
            result.push(divider);
        }
        for _ in 0..width + 2 {
            result.push(fill);
        }
    }
    result.push(right);
    result
}

// ============================================================================
// Built-in Border Styles
// ============================================================================

/// Single-byte ASCII borders with an `=` header rule.
pub const PLAIN: BorderGlyphs = BorderGlyphs::new(
    "plain",
    ['+', '-', '+', '+'],
    ['|', '=', '|', '|'],
    '+',
    ['|', '-', '+', '|'],
    ['+', '-', '+', '+'],
    ['|', '|'],
);

/// Double-line outer frame and header rule, single-line interior.
pub const HEAVY: BorderGlyphs = BorderGlyphs::new(
    "heavy",
    ['\u{2554}', '\u{2550}', '\u{2564}', '\u{2557}'], // ╔═╤╗
    ['\u{2560}', '\u{2550}', '\u{256A}', '\u{2563}'], // ╠═╪╣
    '\u{2567}',                                       // ╧
    ['\u{255F}', '\u{2500}', '\u{253C}', '\u{2562}'], // ╟─┼╢
    ['\u{255A}', '\u{2550}', '\u{2567}', '\u{255D}'], // ╚═╧╝
    ['\u{2551}', '\u{2502}'],                         // ║│
);

/// Look up a built-in border style by name (case-insensitive).
#[must_use]
pub fn by_name(name: &str) -> Option<&'static BorderGlyphs> {
    match name.to_ascii_lowercase().as_str() {
        "plain" | "ascii" => Some(&PLAIN),
        "heavy" | "double" | "utf8" | "utf-8" => Some(&HEAVY),
        _ => None,
    }
}
