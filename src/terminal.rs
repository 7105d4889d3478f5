//! Terminal capability detection.
//!
//! Decides whether swatches can be painted at all, and with how many colors,
//! from the usual environment conventions:
//! - `NO_COLOR` (non-empty): no colors
//! - `FORCE_COLOR` (non-empty, not `0`): treat output as a terminal
//! - `COLORTERM=truecolor` or `24bit`: 24-bit color
//! - `TERM` suffix `-256color` / `-kitty`: 256 colors
//! - `TERM` suffix `-16color`: standard colors
//! - `TERM=dumb` or `TERM=unknown`: no colors
//! - otherwise: standard colors when writing to a terminal

use std::io::IsTerminal;

use crate::palette::ColorSystem;

/// Environment variables relevant to color detection.
#[derive(Debug, Clone, Default)]
pub struct EnvSettings {
    pub no_color: Option<String>,
    pub force_color: Option<String>,
    pub colorterm: Option<String>,
    pub term: Option<String>,
}

impl EnvSettings {
    /// Read the settings from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            no_color: std::env::var("NO_COLOR").ok(),
            force_color: std::env::var("FORCE_COLOR").ok(),
            colorterm: std::env::var("COLORTERM").ok(),
            term: std::env::var("TERM").ok(),
        }
    }

    fn forces_terminal(&self) -> bool {
        self.force_color.as_deref().is_some_and(|value| {
            let value = value.trim();
            // Empty / "0" means unset
            !value.is_empty() && value != "0"
        })
    }
}

/// Get the terminal width in cells, if stdout has one.
#[must_use]
pub fn terminal_width() -> Option<usize> {
    crossterm::terminal::size().ok().map(|(w, _)| usize::from(w))
}

/// Check if stdout is connected to a terminal (or `FORCE_COLOR` says so).
#[must_use]
pub fn is_terminal() -> bool {
    EnvSettings::from_env().forces_terminal() || std::io::stdout().is_terminal()
}

/// Check if stderr is connected to a terminal (or `FORCE_COLOR` says so).
#[must_use]
pub fn is_stderr_terminal() -> bool {
    EnvSettings::from_env().forces_terminal() || std::io::stderr().is_terminal()
}

/// Detect the color system for stdout from the process environment.
#[must_use]
pub fn detect_color_system() -> Option<ColorSystem> {
    detect_color_system_with(&EnvSettings::from_env(), std::io::stdout().is_terminal())
}

/// Detect the color system from explicit settings.
///
/// `is_tty` is whether the output stream is a terminal; `FORCE_COLOR` in
/// `env` overrides it.
#[must_use]
pub fn detect_color_system_with(env: &EnvSettings, is_tty: bool) -> Option<ColorSystem> {
    // https://no-color.org/
    if env.no_color.as_deref().is_some_and(|value| !value.is_empty()) {
        return None;
    }

    if !is_tty && !env.forces_terminal() {
        return None;
    }

    if let Some(colorterm) = env.colorterm.as_deref() {
        let colorterm = colorterm.trim().to_lowercase();
        if colorterm == "truecolor" || colorterm == "24bit" {
            return Some(ColorSystem::TrueColor);
        }
    }

    let term = env
        .term
        .as_deref()
        .map(|value| value.trim().to_lowercase())
        .unwrap_or_default();
    if term == "dumb" || term == "unknown" {
        return None;
    }
    // "xterm-256color" -> "256color"
    match term.rsplit('-').next().unwrap_or("") {
        "kitty" | "256color" => Some(ColorSystem::EightBit),
        "16color" => Some(ColorSystem::Standard),
        // Windows consoles accept 24-bit VT sequences
        _ if cfg!(windows) => Some(ColorSystem::TrueColor),
        _ => Some(ColorSystem::Standard),
    }
}
