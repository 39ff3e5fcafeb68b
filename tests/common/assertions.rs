//! Logged assertion helpers for table tests.

#![allow(dead_code)]

use std::fmt::Debug;

/// Assert equality with detailed logging.
#[track_caller]
pub fn assert_eq_logged<T: PartialEq + Debug>(context: &str, actual: T, expected: T) {
    tracing::debug!(
        context = context,
        expected = ?expected,
        actual = ?actual,
        "asserting equality"
    );

    assert_eq!(
        actual, expected,
        "{context}: expected {expected:?}, got {actual:?}"
    );
}

/// Assert that every line of a rendered table has the same width in chars.
#[track_caller]
pub fn assert_rectangular(table: &str) {
    let widths: Vec<usize> = table.lines().map(|line| line.chars().count()).collect();
    tracing::debug!(widths = ?widths, "line widths");
    if let Some(first) = widths.first() {
        assert!(
            widths.iter().all(|w| w == first),
            "ragged table output:\n{table}"
        );
    }
}

/// The trimmed text of every content line, split per column. Rule lines are skipped.
pub fn content_rows(table: &str, outer: char, inner: char) -> Vec<Vec<String>> {
    table
        .lines()
        .filter(|line| {
            let mut chars = line.chars();
            chars.next() == Some(outer) && chars.next() == Some(' ')
        })
        .map(|line| {
            let inside = line
                .trim_start_matches(outer)
                .trim_end_matches(outer);
            inside
                .split(inner)
                .map(|cell| cell.trim().to_string())
                .collect()
        })
        .collect()
}
