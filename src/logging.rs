//! A plain-text logger for the `log` crate.
//!
//! The printer reports what it did (rows kept, column widths, bytes
//! written) through `log::debug!` and `log::trace!`. Hosts that have no
//! logger of their own can install [`PlainLogger`] to see those records.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::{OffsetDateTime, format_description::OwnedFormatItem};

/// Destination shared by every log call.
pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Logger writing one line per record:
/// `[time] LEVEL    message (module)`.
///
/// # Thread Safety
///
/// The writer is protected by a mutex; a writer poisoned by a panicking
/// thread keeps being used.
pub struct PlainLogger {
    writer: SharedWriter,
    level: LevelFilter,
    show_time: bool,
    show_level: bool,
    show_target: bool,
    time_format: OwnedFormatItem,
}

impl PlainLogger {
    /// Create a logger writing to `writer`.
    #[must_use]
    pub fn new(writer: SharedWriter) -> Self {
        let time_format = time::format_description::parse_owned::<2>("[hour]:[minute]:[second]")
            .unwrap_or_else(|_| OwnedFormatItem::Literal(Vec::<u8>::new().into_boxed_slice()));
        Self {
            writer,
            level: LevelFilter::Info,
            show_time: true,
            show_level: true,
            show_target: true,
            time_format,
        }
    }

    /// Create a logger writing to standard error.
    #[must_use]
    pub fn stderr() -> Self {
        Self::new(Arc::new(Mutex::new(io::stderr())))
    }

    /// Set the minimum log level.
    #[must_use]
    pub fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Enable or disable timestamps.
    #[must_use]
    pub fn show_time(mut self, show: bool) -> Self {
        self.show_time = show;
        self
    }

    /// Enable or disable the level column.
    #[must_use]
    pub fn show_level(mut self, show: bool) -> Self {
        self.show_level = show;
        self
    }

    /// Enable or disable the module path suffix.
    #[must_use]
    pub fn show_target(mut self, show: bool) -> Self {
        self.show_target = show;
        self
    }

    /// Override time format (`time` crate format description).
    #[must_use]
    pub fn time_format(mut self, format: &str) -> Self {
        if let Ok(parsed) = time::format_description::parse_owned::<2>(format) {
            self.time_format = parsed;
        }
        self
    }

    /// Install as the global logger.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time(&self) -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(&self.time_format)
            .unwrap_or_else(|_| now.to_string())
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();
        if self.show_time {
            line.push('[');
            line.push_str(&self.format_time());
            line.push_str("] ");
        }
        if self.show_level {
            line.push_str(&format!("{:<8} ", record.level()));
        }
        line.push_str(&record.args().to_string());
        if self.show_target {
            line.push_str(&format!(" ({})", record.target()));
        }
        line
    }
}

impl Log for PlainLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        // A logger has nowhere to report its own write failures.
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}

fn lock_recover<T: ?Sized>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
