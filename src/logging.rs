//! Logging for the `log` facade.
//!
//! The library only emits records (`trace!` for each matched syntax class,
//! `debug!` for parse failures). [`SwatchLogger`] is the sink the binary
//! installs: one `HH:MM:SS LEVEL message` line per record on stderr, with
//! the level colored when stderr is a terminal.

use std::io::{self, Write};
use std::sync::Mutex;

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::sync::lock_recover;
use crate::terminal;

const TIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

/// Logger writing compact, optionally colored lines.
///
/// # Thread Safety
///
/// The writer sits behind a mutex with poison recovery, so records from
/// different threads never interleave within a line.
pub struct SwatchLogger {
    level: LevelFilter,
    show_time: bool,
    color: bool,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl SwatchLogger {
    /// Create a logger writing to stderr at `Info` level.
    ///
    /// Level colors are enabled when stderr is a terminal and `NO_COLOR`
    /// is unset.
    #[must_use]
    pub fn new() -> Self {
        let no_color = std::env::var("NO_COLOR").is_ok_and(|value| !value.is_empty());
        Self {
            level: LevelFilter::Info,
            show_time: true,
            color: !no_color && terminal::is_stderr_terminal(),
            writer: Mutex::new(Box::new(io::stderr())),
        }
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

    /// Enable or disable level colors.
    #[must_use]
    pub fn color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Write records somewhere other than stderr.
    #[must_use]
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.writer = Mutex::new(writer);
        self
    }

    /// Install as the global logger.
    ///
    /// # Errors
    ///
    /// Returns `SetLoggerError` if a global logger is already installed.
    pub fn init(self) -> Result<(), SetLoggerError> {
        log::set_max_level(self.level);
        log::set_boxed_logger(Box::new(self))
    }

    fn format_time() -> String {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        now.format(TIME_FORMAT).unwrap_or_else(|_| now.to_string())
    }

    const fn level_code(level: Level) -> &'static str {
        match level {
            Level::Trace => "2",
            Level::Debug => "2;34",
            Level::Info => "32",
            Level::Warn => "33",
            Level::Error => "1;31",
        }
    }

    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::new();

        if self.show_time {
            line.push_str(&Self::format_time());
            line.push(' ');
        }

        let padded = format!("{:<5}", record.level());
        if self.color {
            line.push_str(&format!(
                "\x1b[{}m{padded}\x1b[0m",
                Self::level_code(record.level())
            ));
        } else {
            line.push_str(&padded);
        }
        line.push(' ');
        line.push_str(&record.args().to_string());
        line
    }
}

impl Default for SwatchLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Log for SwatchLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = self.format_record(record);
        let mut writer = lock_recover(&self.writer);
        // Nowhere left to report a failing stderr
        let _ = writeln!(writer, "{line}");
    }

    fn flush(&self) {
        let _ = lock_recover(&self.writer).flush();
    }
}
