//! Color string parsing.
//!
//! This module turns a textual color specification into an [`RgbTriplet`].
//! Accepted syntaxes, tried in this order:
//! - 6-digit hex: `#RRGGBB` (anything after the sixth digit is ignored)
//! - 3/4-digit hex: `#RGB`, `#RGBA` (alpha ignored)
//! - RGB integers: `rgb(255, 0, 0)`, `rgba(160 0 0 / 50%)`
//! - RGB percentages: `rgb(100%, 50%, 0%)`
//! - HSL with degree hue: `hsl(169, 57%, 75%)`
//! - HSL with percentage hue: `hsl(57%, 43%, 56%)`
//! - CSS keywords: `tomato`, `RebeccaPurple`
//!
//! The first syntax that matches decides the result; there is no backtracking
//! into later syntaxes once a match has been converted.
//!
//! # Examples
//!
//! ```
//! use colorswatch::color::{RgbTriplet, SyntaxKind, classify, parse_color};
//!
//! assert_eq!(parse_color("#F00").unwrap(), RgbTriplet::new(255, 0, 0));
//! assert_eq!(parse_color("Chocolate").unwrap(), RgbTriplet::new(210, 105, 30));
//! assert!(parse_color("rgb(100%, 60%, 0)").is_err());
//!
//! let (kind, _) = classify("hsl(169, 57%, 75%)").unwrap();
//! assert_eq!(kind, SyntaxKind::HslDegrees);
//! ```

use lru::LruCache;
use regex::{Captures, Regex};
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex};

use crate::convert::{
    hex_pair_to_decimal, hsl_to_rgb, percent_to_channel, percent_to_degrees, wrap_hue,
};
use crate::named;
use crate::sync::lock_recover;

/// RGB color triplet.
///
/// Channels are conventionally `0..=255` but are not clamped: `rgb(300,0,0)`
/// parses to a red channel of 300.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RgbTriplet {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl RgbTriplet {
    /// Create a new triplet from RGB components.
    #[must_use]
    pub const fn new(red: i32, green: i32, blue: i32) -> Self {
        Self { red, green, blue }
    }

    /// Channels clamped into `0..=255`, for terminal output.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "clamped to 0-255")]
    pub fn clamped(&self) -> (u8, u8, u8) {
        let clamp = |v: i32| v.clamp(0, 255) as u8;
        (clamp(self.red), clamp(self.green), clamp(self.blue))
    }

    /// Returns CSS-style hex format `#rrggbb` of the clamped channels.
    #[must_use]
    pub fn hex(&self) -> String {
        let (r, g, b) = self.clamped();
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Perceived brightness (`0.299 R + 0.587 G + 0.114 B`), truncated.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, reason = "truncation is intended")]
    pub fn luminance(&self) -> i32 {
        let v = 0.299 * f64::from(self.red)
            + 0.587 * f64::from(self.green)
            + 0.114 * f64::from(self.blue);
        v as i32
    }
}

impl From<(u8, u8, u8)> for RgbTriplet {
    fn from((red, green, blue): (u8, u8, u8)) -> Self {
        Self::new(i32::from(red), i32::from(green), i32::from(blue))
    }
}

impl fmt::Display for RgbTriplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "R:{:3} G:{:3} B:{:3}", self.red, self.green, self.blue)
    }
}

impl FromStr for RgbTriplet {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s)
    }
}

impl TryFrom<&str> for RgbTriplet {
    type Error = ColorParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_color(value)
    }
}

/// The syntax class a color string matched, in matching priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SyntaxKind {
    /// `#RRGGBB`, prefix match.
    Hex6 = 1,
    /// `#RGB` or `#RGBA`, fully anchored.
    HexShort = 2,
    /// `rgb()`/`rgba()` with integer channels.
    RgbInteger = 3,
    /// `rgb()`/`rgba()` with percentage channels.
    RgbPercent = 4,
    /// `hsl()`/`hsla()` with the hue in degrees.
    HslDegrees = 5,
    /// `hsl()`/`hsla()` with the hue as a percentage.
    HslPercent = 6,
    /// CSS color keyword.
    Keyword = 7,
}

impl SyntaxKind {
    /// Short name of the syntax class.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Hex6 => "hex",
            Self::HexShort => "hex-short",
            Self::RgbInteger => "rgb",
            Self::RgbPercent => "rgb-percent",
            Self::HslDegrees => "hsl",
            Self::HslPercent => "hsl-percent",
            Self::Keyword => "keyword",
        }
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type for color parsing.
///
/// Callers generally treat both variants as "not a valid color"; the split
/// exists so that diagnostics can say why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// The input matched no syntax class and no keyword.
    NotRecognized(String),
    /// The input had HSL shape but a negative hue or a saturation/lightness
    /// outside `0..=100`.
    OutOfRange {
        hue: i32,
        saturation: i32,
        lightness: i32,
    },
}

impl ColorParseError {
    /// Returns true for the HSL range failure.
    #[must_use]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotRecognized(s) => write!(f, "Unrecognized color: {s:?}"),
            Self::OutOfRange {
                hue,
                saturation,
                lightness,
            } => write!(
                f,
                "HSL component out of range: hsl({hue}, {saturation}%, {lightness}%)"
            ),
        }
    }
}

impl std::error::Error for ColorParseError {}

// ============================================================================
// Syntax Table
// ============================================================================

type Converter = fn(&Captures<'_>) -> Result<RgbTriplet, ColorParseError>;

/// One row of the dispatch table: a pattern and how to convert its captures.
struct SyntaxRule {
    kind: SyntaxKind,
    pattern: Regex,
    convert: Converter,
}

impl SyntaxRule {
    fn new(kind: SyntaxKind, pattern: &str, convert: Converter) -> Self {
        Self {
            kind,
            pattern: Regex::new(pattern).expect("valid regex"),
            convert,
        }
    }
}

/// Pattern rules in priority order. Keywords are looked up after these.
///
/// Patterns are ASCII-only (`-u`) so `\d` never matches non-ASCII digits.
/// Whitespace is spelled `[\t\n\f\r ]` because `\s` would also accept a
/// vertical tab. Only the hex shorthand rule is anchored at the end.
static RULES: LazyLock<[SyntaxRule; 6]> = LazyLock::new(|| {
    [
        SyntaxRule::new(SyntaxKind::Hex6, r"(?i-u)^#[0-9a-f]{6}", from_hex_pairs),
        SyntaxRule::new(SyntaxKind::HexShort, r"(?i-u)^#[0-9a-f]{3,4}$", from_hex_nibbles),
        SyntaxRule::new(
            SyntaxKind::RgbInteger,
            r"(?i-u)^rgba?\([\t\n\f\r ]*(\d+)[,\t\n\f\r ][\t\n\f\r ]*(\d+)[,\t\n\f\r ][\t\n\f\r ]*(\d+)",
            from_rgb_integers,
        ),
        SyntaxRule::new(
            SyntaxKind::RgbPercent,
            r"(?i-u)^rgba?\([\t\n\f\r ]*(\d+)%[,\t\n\f\r ][\t\n\f\r ]*(\d+)%[,\t\n\f\r ][\t\n\f\r ]*(\d+)%",
            from_rgb_percentages,
        ),
        SyntaxRule::new(
            SyntaxKind::HslDegrees,
            r"(?i-u)^hsla?\([\t\n\f\r ]*(\d+)[,\t\n\f\r ][\t\n\f\r ]*(\d+)%[,\t\n\f\r ][\t\n\f\r ]*(\d+)%",
            from_hsl_degrees,
        ),
        SyntaxRule::new(
            SyntaxKind::HslPercent,
            r"(?i-u)^hsla?\([\t\n\f\r ]*(\d+)%[,\t\n\f\r ][\t\n\f\r ]*(\d+)%[,\t\n\f\r ][\t\n\f\r ]*(\d+)%",
            from_hsl_percentages,
        ),
    ]
});

/// Decode `#rrggbb` (or a longer string with that prefix) pair by pair.
fn decode_hex6(hex: &str) -> RgbTriplet {
    RgbTriplet::new(
        hex_pair_to_decimal(&hex[1..3]),
        hex_pair_to_decimal(&hex[3..5]),
        hex_pair_to_decimal(&hex[5..7]),
    )
}

fn from_hex_pairs(caps: &Captures<'_>) -> Result<RgbTriplet, ColorParseError> {
    Ok(decode_hex6(&caps[0]))
}

fn from_hex_nibbles(caps: &Captures<'_>) -> Result<RgbTriplet, ColorParseError> {
    let hex = &caps[0];
    Ok(RgbTriplet::new(
        hex_pair_to_decimal(&hex[1..2]),
        hex_pair_to_decimal(&hex[2..3]),
        hex_pair_to_decimal(&hex[3..4]),
    ))
}

/// Parse a run of ASCII digits. Values past `i64::MAX` saturate.
fn field(caps: &Captures<'_>, index: usize) -> i64 {
    caps[index].parse().unwrap_or(i64::MAX)
}

/// A field as a channel or percentage, saturating at `i32::MAX`.
fn narrow_field(caps: &Captures<'_>, index: usize) -> i32 {
    i32::try_from(field(caps, index)).unwrap_or(i32::MAX)
}

fn fields(caps: &Captures<'_>) -> (i32, i32, i32) {
    (
        narrow_field(caps, 1),
        narrow_field(caps, 2),
        narrow_field(caps, 3),
    )
}

fn from_rgb_integers(caps: &Captures<'_>) -> Result<RgbTriplet, ColorParseError> {
    let (r, g, b) = fields(caps);
    Ok(RgbTriplet::new(r, g, b))
}

fn from_rgb_percentages(caps: &Captures<'_>) -> Result<RgbTriplet, ColorParseError> {
    let (r, g, b) = fields(caps);
    Ok(RgbTriplet::new(
        percent_to_channel(r),
        percent_to_channel(g),
        percent_to_channel(b),
    ))
}

// The hue is reduced modulo 360 at full width, before narrowing to `i32`.
fn from_hsl_degrees(caps: &Captures<'_>) -> Result<RgbTriplet, ColorParseError> {
    let hue = wrap_hue(field(caps, 1));
    hsl_to_rgb(hue, narrow_field(caps, 2), narrow_field(caps, 3))
}

fn from_hsl_percentages(caps: &Captures<'_>) -> Result<RgbTriplet, ColorParseError> {
    let hue = wrap_hue(percent_to_degrees(field(caps, 1)));
    hsl_to_rgb(hue, narrow_field(caps, 2), narrow_field(caps, 3))
}

// ============================================================================
// Entry Points
// ============================================================================

/// Parse a color string into an RGB triplet.
///
/// # Errors
///
/// Returns `ColorParseError::NotRecognized` if no syntax matches, or
/// `ColorParseError::OutOfRange` for HSL input with invalid components.
pub fn parse_color(input: &str) -> Result<RgbTriplet, ColorParseError> {
    classify(input).map(|(_, triplet)| triplet)
}

/// Parse a color string, also reporting which syntax class matched (cached).
///
/// # Errors
///
/// Same as [`parse_color`].
pub fn classify(input: &str) -> Result<(SyntaxKind, RgbTriplet), ColorParseError> {
    static CACHE: LazyLock<Mutex<LruCache<String, (SyntaxKind, RgbTriplet)>>> =
        LazyLock::new(|| Mutex::new(LruCache::new(NonZeroUsize::new(1024).expect("non-zero"))));

    if let Some(&cached) = lock_recover(&CACHE).get(input) {
        log::trace!("color cache hit for {input:?}");
        return Ok(cached);
    }

    match classify_uncached(input) {
        Ok(parsed) => {
            lock_recover(&CACHE).put(input.to_string(), parsed);
            Ok(parsed)
        }
        Err(err) => {
            log::debug!("{err}");
            Err(err)
        }
    }
}

fn classify_uncached(input: &str) -> Result<(SyntaxKind, RgbTriplet), ColorParseError> {
    for rule in RULES.iter() {
        if let Some(caps) = rule.pattern.captures(input) {
            log::trace!("{input:?} matched {}", rule.kind);
            return (rule.convert)(&caps).map(|triplet| (rule.kind, triplet));
        }
    }

    if let Some(hex) = named::lookup(input) {
        log::trace!("{input:?} matched {}", SyntaxKind::Keyword);
        return Ok((SyntaxKind::Keyword, decode_hex6(hex)));
    }

    Err(ColorParseError::NotRecognized(input.to_string()))
}
