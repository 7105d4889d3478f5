//! Command-line configuration for the `colorswatch` binary.
//!
//! The parser is hand-rolled; the flag surface is small enough that a CLI
//! framework would add more than it saves.

use log::LevelFilter;

use crate::console::ConsoleBuilder;
use crate::palette::ColorSystem;
use crate::swatch::{DEFAULT_WIDTH, MAX_WIDTH, SwatchStyle};

/// Environment variable supplying the default `--log-level`.
pub const LOG_ENV: &str = "COLORSWATCH_LOG";

/// How the color system is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    None,
    Standard,
    EightBit,
    TrueColor,
}

impl ColorMode {
    /// Parse a `--color-system` value.
    ///
    /// # Errors
    ///
    /// Returns a usage message for unknown modes.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "none" | "no" | "off" => Ok(Self::None),
            "standard" | "16" => Ok(Self::Standard),
            "eight_bit" | "eightbit" | "256" => Ok(Self::EightBit),
            "truecolor" | "true" | "24bit" => Ok(Self::TrueColor),
            _ => Err(format!(
                "Invalid --color-system value `{value}` (expected: auto|none|standard|eight_bit|truecolor)."
            )),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    #[default]
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Parse a `--log-level` (or `COLORSWATCH_LOG`) value.
    ///
    /// # Errors
    ///
    /// Returns an error message if the value is not a known level name.
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "off" | "none" => Ok(Self::Off),
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" => Ok(Self::Debug),
            "trace" => Ok(Self::Trace),
            _ => Err(format!(
                "Invalid log level `{value}` (expected: off|error|warn|info|debug|trace)."
            )),
        }
    }

    #[must_use]
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            Self::Off => LevelFilter::Off,
            Self::Error => LevelFilter::Error,
            Self::Warn => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
            Self::Trace => LevelFilter::Trace,
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::struct_excessive_bools, reason = "one field per switch")]
pub struct Config {
    pub help: bool,
    pub version: bool,
    pub list: bool,
    pub force_terminal: bool,
    pub labeled: bool,
    pub width: usize,
    pub color_system: ColorMode,
    /// `None` when `--log-level` was not given.
    pub log_level: Option<LogLevel>,
    /// Positional arguments, in order.
    pub colors: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            help: false,
            version: false,
            list: false,
            force_terminal: false,
            labeled: false,
            width: DEFAULT_WIDTH,
            color_system: ColorMode::Auto,
            log_level: None,
            colors: Vec::new(),
        }
    }
}

impl Config {
    /// The effective log level: the flag, else `env_value`, else off.
    ///
    /// # Errors
    ///
    /// Returns an error message for an unparseable `env_value`, so the
    /// caller can warn about it.
    pub fn resolve_log_level(&self, env_value: Option<&str>) -> Result<LogLevel, String> {
        match (self.log_level, env_value) {
            (Some(level), _) => Ok(level),
            (None, Some(raw)) if !raw.trim().is_empty() => {
                LogLevel::parse(raw).map_err(|err| format!("{LOG_ENV}: {err}"))
            }
            (None, _) => Ok(LogLevel::Off),
        }
    }

    /// A console builder carrying the output flags.
    #[must_use]
    pub fn console_builder(&self) -> ConsoleBuilder {
        let mut builder = ConsoleBuilder::default().swatch_width(self.width);
        if self.force_terminal {
            builder = builder.force_terminal(true);
        }
        if self.labeled {
            builder = builder.style(SwatchStyle::Labeled);
        }
        match self.color_system {
            ColorMode::Auto => builder,
            ColorMode::None => builder.no_color(),
            ColorMode::Standard => builder.color_system(ColorSystem::Standard),
            ColorMode::EightBit => builder.color_system(ColorSystem::EightBit),
            ColorMode::TrueColor => builder.color_system(ColorSystem::TrueColor),
        }
    }
}

/// Parse the full argument vector (including the binary name).
///
/// # Errors
///
/// Returns a usage message for unknown flags, missing flag values and
/// out-of-range values.
pub fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut iter = args.into_iter();
    // Drop binary name if present.
    let _ = iter.next();

    let mut cfg = Config::default();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "-h" | "--help" => cfg.help = true,
            "-V" | "--version" => cfg.version = true,
            "--list" => cfg.list = true,
            "--force-terminal" => cfg.force_terminal = true,
            "--labeled" => cfg.labeled = true,
            "--width" => {
                let raw = next_value(&mut iter, "--width")?;
                cfg.width = parse_width(&raw)?;
            }
            "--color-system" => {
                let raw = next_value(&mut iter, "--color-system")?;
                cfg.color_system = ColorMode::parse(&raw)?;
            }
            "--log-level" => {
                let raw = next_value(&mut iter, "--log-level")?;
                cfg.log_level = Some(LogLevel::parse(&raw)?);
            }
            "--" => {
                cfg.colors.extend(iter.by_ref());
            }
            // "-" is the stdin marker, not a flag
            flag if flag.starts_with('-') && flag != "-" => {
                return Err(format!(
                    "Unknown flag: {arg}\n\nRun with `--help` to see valid options."
                ));
            }
            _ => cfg.colors.push(arg),
        }
    }

    Ok(cfg)
}

fn next_value(iter: &mut impl Iterator<Item = String>, flag: &str) -> Result<String, String> {
    iter.next()
        .ok_or_else(|| format!("Missing value for `{flag}`."))
}

fn parse_width(raw: &str) -> Result<usize, String> {
    let value = raw
        .parse::<usize>()
        .map_err(|_| format!("Invalid --width value `{raw}` (expected a positive integer)."))?;
    if !(1..=MAX_WIDTH).contains(&value) {
        return Err(format!(
            "Invalid --width value `{raw}` (expected 1..={MAX_WIDTH})."
        ));
    }
    Ok(value)
}

/// `colorswatch <version>`.
pub const VERSION_TEXT: &str = concat!("colorswatch ", env!("CARGO_PKG_VERSION"), "\n");

pub const HELP_TEXT: &str = r#"colorswatch - preview CSS color strings as terminal swatches

USAGE:
    colorswatch [OPTIONS] [COLOR]...
    colorswatch [OPTIONS] -            Read colors from stdin, one per line

With no COLOR arguments, colors are read from stdin.

ACCEPTED FORMATS:
    #rrggbb  #rgb  #rgba               Hex (case-insensitive)
    rgb(R, G, B)  rgba(...)            Integer channels
    rgb(R%, G%, B%)                    Percent channels
    hsl(H, S%, L%)  hsla(...)          Hue in degrees
    hsl(H%, S%, L%)                    Hue as a percentage of a turn
    tomato, RebeccaPurple, ...         CSS color keywords (see --list)

OPTIONS:
    --list                      Print a swatch for every color keyword
    --labeled                   Write the hex code inside each swatch
    --width <cells>             Swatch width (1..=64, default: 5)
    --color-system <mode>       auto|none|standard|eight_bit|truecolor
    --force-terminal            Treat stdout as a TTY (even when piped)
    --log-level <level>         off|error|warn|info|debug|trace (stderr)
    --                          Treat every following argument as a color

    -h, --help                  Print help and exit
    -V, --version               Print version and exit

ENVIRONMENT:
    COLORSWATCH_LOG             Default for --log-level
    NO_COLOR                    Disable colors
    FORCE_COLOR                 Color even when stdout is not a terminal

EXIT STATUS:
    0 on success (invalid colors included), 1 on I/O errors, 2 on usage errors.
"#;
