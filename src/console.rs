//! Console - the output sink for swatch lines.
//!
//! The `Console` owns the writer (stdout by default), the resolved color
//! system and the [`Swatch`] renderer. Every input string becomes exactly one
//! line of output, valid or not.

use std::fmt;
use std::io::{self, Write};
use std::sync::Mutex;

use crate::color::parse_color;
use crate::named;
use crate::palette::ColorSystem;
use crate::swatch::{Swatch, SwatchStyle};
use crate::sync::lock_recover;
use crate::terminal::{self, EnvSettings};

/// Writes swatch lines.
pub struct Console {
    writer: Mutex<Box<dyn Write + Send>>,
    swatch: Swatch,
    is_terminal: bool,
}

impl fmt::Debug for Console {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Console")
            .field("swatch", &self.swatch)
            .field("is_terminal", &self.is_terminal)
            .finish_non_exhaustive()
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

impl Console {
    /// Create a console on stdout with detected settings.
    #[must_use]
    pub fn new() -> Self {
        ConsoleBuilder::default().build()
    }

    /// Create a console builder for custom configuration.
    #[must_use]
    pub fn builder() -> ConsoleBuilder {
        ConsoleBuilder::default()
    }

    /// Check if this console outputs to a terminal.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Get the color system in use.
    #[must_use]
    pub const fn color_system(&self) -> Option<ColorSystem> {
        self.swatch.color_system()
    }

    /// Check if colors are enabled.
    #[must_use]
    pub const fn is_color_enabled(&self) -> bool {
        self.color_system().is_some()
    }

    /// The renderer used for each line.
    #[must_use]
    pub const fn swatch(&self) -> &Swatch {
        &self.swatch
    }

    /// Parse `input` and write its swatch line.
    ///
    /// Returns whether the input was a valid color.
    ///
    /// # Errors
    ///
    /// Returns the writer's error if the line cannot be written. An invalid
    /// color is not an error.
    pub fn print_color(&self, input: &str) -> io::Result<bool> {
        let result = parse_color(input);
        self.print_line(&self.swatch.render(input, &result))?;
        Ok(result.is_ok())
    }

    /// Write a swatch line for every color keyword, sorted by name.
    ///
    /// # Errors
    ///
    /// Stops at the first write error and returns it.
    pub fn print_keywords(&self) -> io::Result<()> {
        for name in named::names() {
            self.print_color(name)?;
        }
        Ok(())
    }

    /// Write one line of raw text.
    ///
    /// # Errors
    ///
    /// Returns any error from writing or flushing the writer.
    pub fn print_line(&self, line: &str) -> io::Result<()> {
        let mut writer = lock_recover(&self.writer);
        writeln!(writer, "{line}")?;
        writer.flush()
    }
}

/// Builder for creating a Console with custom settings.
#[derive(Default)]
pub struct ConsoleBuilder {
    color_system: Option<ColorSystem>,
    no_color: bool,
    force_terminal: Option<bool>,
    swatch_width: Option<usize>,
    style: Option<SwatchStyle>,
    max_line_width: Option<usize>,
    writer: Option<Box<dyn Write + Send>>,
}

impl ConsoleBuilder {
    /// Set the color system, skipping detection.
    #[must_use]
    pub fn color_system(mut self, system: ColorSystem) -> Self {
        self.color_system = Some(system);
        self
    }

    /// Disable colors.
    #[must_use]
    pub fn no_color(mut self) -> Self {
        self.no_color = true;
        self
    }

    /// Force terminal mode.
    #[must_use]
    pub fn force_terminal(mut self, force: bool) -> Self {
        self.force_terminal = Some(force);
        self
    }

    /// Set the swatch block width.
    #[must_use]
    pub fn swatch_width(mut self, width: usize) -> Self {
        self.swatch_width = Some(width);
        self
    }

    /// Set the swatch block style.
    #[must_use]
    pub fn style(mut self, style: SwatchStyle) -> Self {
        self.style = Some(style);
        self
    }

    /// Truncate echoed input so lines fit in `width` cells.
    #[must_use]
    pub fn max_line_width(mut self, width: usize) -> Self {
        self.max_line_width = Some(width);
        self
    }

    /// Write to `writer` instead of stdout.
    ///
    /// A custom writer is never considered a terminal unless
    /// [`force_terminal`](Self::force_terminal) says so.
    #[must_use]
    pub fn writer(mut self, writer: Box<dyn Write + Send>) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Build the console.
    #[must_use]
    pub fn build(self) -> Console {
        let custom_writer = self.writer.is_some();
        let is_terminal = self
            .force_terminal
            .unwrap_or_else(|| !custom_writer && terminal::is_terminal());

        let color_system = if self.no_color {
            None
        } else if let Some(system) = self.color_system {
            Some(system)
        } else if is_terminal {
            terminal::detect_color_system_with(&EnvSettings::from_env(), true)
        } else {
            None
        };

        let mut swatch = Swatch::new(color_system)
            .style(self.style.unwrap_or_default())
            .max_line_width(self.max_line_width);
        if let Some(width) = self.swatch_width {
            swatch = swatch.width(width);
        }

        log::debug!(
            "console: terminal={is_terminal} color_system={}",
            color_system.map_or("none", |system| system.name())
        );

        Console {
            writer: Mutex::new(self.writer.unwrap_or_else(|| Box::new(io::stdout()))),
            swatch,
            is_terminal,
        }
    }
}
