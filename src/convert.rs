//! Numeric conversions behind color parsing.
//!
//! This module turns the raw numeric fields extracted by the syntax matcher
//! into channel values:
//! - hex digit pairs (and doubled shorthand nibbles) to decimal
//! - percentages to 0-255 channels and to hue degrees
//! - HSL to RGB using the hexagonal sextant model
//!
//! All channel results are truncated, never rounded.
//!
//! # Examples
//!
//! ```
//! use colorswatch::convert::{hex_pair_to_decimal, hsl_to_rgb};
//! use colorswatch::color::RgbTriplet;
//!
//! assert_eq!(hex_pair_to_decimal("3c"), 60);
//! assert_eq!(hex_pair_to_decimal("F"), 255);
//!
//! let teal = hsl_to_rgb(169, 57, 75).unwrap();
//! assert_eq!(teal, RgbTriplet::new(154, 227, 214));
//! ```

use crate::color::{ColorParseError, RgbTriplet};

/// Lightness below this value uses the dark branch of the max/min split.
const LIGHTNESS_SPLIT: i32 = 49;

/// Decode one or two hex digits into a decimal value.
///
/// A single digit is doubled first (`"e"` reads as `"ee"`). Empty input,
/// input longer than two bytes, and non-hex characters all decode to `0`;
/// callers are expected to have validated digit counts already.
#[must_use]
pub fn hex_pair_to_decimal(digits: &str) -> i32 {
    match digits.len() {
        1 => i32::from_str_radix(&digits.repeat(2), 16).unwrap_or(0),
        2 => i32::from_str_radix(digits, 16).unwrap_or(0),
        _ => 0,
    }
}

/// Scale a `0..=100` percentage to a `0..=255` channel (`p * 255 / 100`).
#[must_use]
pub fn percent_to_channel(percent: i32) -> i32 {
    saturate(i64::from(percent) * 255 / 100)
}

/// Rescale a percentage hue to degrees (`p * 360 / 100`).
///
/// Takes the full `i64` field so hues past `i32::MAX` still reduce to the
/// right angle in [`wrap_hue`].
#[must_use]
pub fn percent_to_degrees(percent: i64) -> i64 {
    i64::try_from(i128::from(percent) * 360 / 100)
        .unwrap_or(if percent < 0 { i64::MIN } else { i64::MAX })
}

/// Reduce a hue in degrees into `0..360`.
#[must_use]
pub fn wrap_hue(degrees: i64) -> i32 {
    i32::try_from(degrees.rem_euclid(360)).unwrap_or(0)
}

fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Convert HSL to RGB.
///
/// `hue` is in degrees and may exceed 360 (it is reduced modulo 360), but
/// must not be negative. `saturation` and `lightness` are percentages in
/// `0..=100`.
///
/// # Errors
///
/// Returns `ColorParseError::OutOfRange` when any component is outside its
/// accepted range.
#[expect(
    clippy::cast_possible_truncation,
    reason = "channels are bounded by 2.55 * 100 and truncation is intended"
)]
pub fn hsl_to_rgb(
    hue: i32,
    saturation: i32,
    lightness: i32,
) -> Result<RgbTriplet, ColorParseError> {
    if hue < 0 || !(0..=100).contains(&saturation) || !(0..=100).contains(&lightness) {
        return Err(ColorParseError::OutOfRange {
            hue,
            saturation,
            lightness,
        });
    }

    let hue = hue % 360;
    let h = f64::from(hue);
    let s = f64::from(saturation);
    let l = f64::from(lightness);

    let (max, min) = if lightness < LIGHTNESS_SPLIT {
        (2.55 * (l + l * (s / 100.0)), 2.55 * (l - l * (s / 100.0)))
    } else {
        (
            2.55 * (l + (100.0 - l) * (s / 100.0)),
            2.55 * (l - (100.0 - l) * (s / 100.0)),
        )
    };
    let span = max - min;

    let (r, g, b) = match hue {
        0..60 => (max, min + span * h / 60.0, min),
        60..120 => (min + span * (120.0 - h) / 60.0, max, min),
        120..180 => (min, max, min + span * (h - 120.0) / 60.0),
        180..240 => (min, min + span * (240.0 - h) / 60.0, max),
        240..300 => (min + span * (h - 240.0) / 60.0, min, max),
        _ => (max, min, min + span * (360.0 - h) / 60.0),
    };

    Ok(RgbTriplet::new(r as i32, g as i32, b as i32))
}
