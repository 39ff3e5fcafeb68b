//! Thread safety tests for table_printer.
//!
//! This module verifies:
//! 1. Public types are Send + Sync (compile-time verification)
//! 2. One printer can be shared across threads without changing its output

use std::sync::Arc;
use std::thread;

use table_printer::border::{BorderGlyphs, HEAVY};
use table_printer::prelude::*;

// ============================================================================
// COMPILE-TIME SEND + SYNC VERIFICATION
// ============================================================================

/// Helper function to verify a type is Send + Sync at compile time.
fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn test_printer_types_are_send_sync() {
    assert_send_sync::<TablePrinter>();
    assert_send_sync::<PrinterConfig>();
    assert_send_sync::<BorderGlyphs>();
    assert_send_sync::<&'static dyn BorderStyle>();
}

#[test]
fn test_data_types_are_send_sync() {
    assert_send_sync::<TableData>();
    assert_send_sync::<Grid>();
    assert_send_sync::<Cell>();
}

// ============================================================================
// CONCURRENT PRINTING
// ============================================================================

#[test]
fn test_shared_printer_concurrent_output() {
    let printer = Arc::new(
        TablePrinter::new()
            .border_style(&HEAVY)
            .row_numbers(true)
            .max_cell_width(6),
    );

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let printer = Arc::clone(&printer);
            thread::spawn(move || {
                let rows: Vec<Vec<String>> = (0..20)
                    .map(|i| vec![format!("thread{t}"), format!("value number {i}")])
                    .collect();
                let data = TableData::from_parts(["owner", "value"], rows);
                let first = printer.print_source(&data).unwrap();
                let second = printer.print_source(&data).unwrap();
                assert_eq!(first, second);
                first
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let output = handle.join().expect("thread panicked");
        assert!(output.contains("║ 0  │ thread │ value  ║"), "{output}");
        assert!(output.contains(&format!("║    │ {t}      │ number ║")), "{output}");
        assert_eq!(output.lines().count(), 1 + 1 + 1 + 20 * 3 + 1);
    }
}

#[test]
fn test_default_printer_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            thread::spawn(move || {
                DEFAULT_PRINTER
                    .print(["n"], [[t.to_string()]])
                    .unwrap()
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let output = handle.join().expect("thread panicked");
        assert_eq!(output, format!("+---+\n| n |\n|===|\n| {t} |\n+---+\n"));
    }
}
