//! Environment-variable fixtures for terminal detection tests.
//!
//! Mutating the process environment is `unsafe` in edition 2024 and racy
//! across threads. Every test using these helpers must be `#[serial]`.

#![allow(dead_code)]

/// Variables consulted by color detection.
pub const COLOR_VARS: [&str; 4] = ["NO_COLOR", "FORCE_COLOR", "COLORTERM", "TERM"];

/// A simulated terminal environment.
#[derive(Debug, Clone, Default)]
pub struct TerminalEnv {
    pub term: Option<String>,
    pub colorterm: Option<String>,
    pub no_color: Option<String>,
    pub force_color: Option<String>,
}

impl TerminalEnv {
    /// Nothing set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn term(mut self, value: &str) -> Self {
        self.term = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn colorterm(mut self, value: &str) -> Self {
        self.colorterm = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn no_color(mut self, value: &str) -> Self {
        self.no_color = Some(value.to_string());
        self
    }

    #[must_use]
    pub fn force_color(mut self, value: &str) -> Self {
        self.force_color = Some(value.to_string());
        self
    }

    fn value_of(&self, key: &str) -> Option<&str> {
        match key {
            "NO_COLOR" => self.no_color.as_deref(),
            "FORCE_COLOR" => self.force_color.as_deref(),
            "COLORTERM" => self.colorterm.as_deref(),
            "TERM" => self.term.as_deref(),
            _ => None,
        }
    }

    /// Run `f` with exactly this environment, restoring the previous values.
    pub fn apply<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R,
    {
        let saved: Vec<(&str, Option<String>)> = COLOR_VARS
            .iter()
            .map(|&key| (key, std::env::var(key).ok()))
            .collect();

        for key in COLOR_VARS {
            set_or_remove(key, self.value_of(key));
        }

        let result = f();

        for (key, value) in &saved {
            set_or_remove(key, value.as_deref());
        }

        result
    }
}

fn set_or_remove(key: &str, value: Option<&str>) {
    // SAFETY: callers are #[serial], so no other test thread touches the
    // environment concurrently
    unsafe {
        match value {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }
}
