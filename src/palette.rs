//! Terminal color systems and swatch downgrading.
//!
//! Swatches are painted with 24-bit background colors when the terminal
//! supports them. Otherwise the triplet is mapped to the nearest entry of the
//! 256-color palette (6x6x6 cube plus grayscale ramp) or of the 16 standard
//! ANSI colors.

use crate::color::RgbTriplet;

/// Terminal color system capability, ordered by color resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum ColorSystem {
    /// 4-bit ANSI colors (16 colors).
    #[default]
    Standard = 1,
    /// 8-bit colors (256 colors).
    EightBit = 2,
    /// 24-bit RGB colors.
    TrueColor = 3,
}

impl ColorSystem {
    /// Get the name of this color system.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::EightBit => "eight_bit",
            Self::TrueColor => "truecolor",
        }
    }
}

/// Standard 16-color ANSI palette (VGA values).
pub static STANDARD_PALETTE: [(u8, u8, u8); 16] = [
    (0, 0, 0),       // 0: Black
    (170, 0, 0),     // 1: Red
    (0, 170, 0),     // 2: Green
    (170, 85, 0),    // 3: Yellow
    (0, 0, 170),     // 4: Blue
    (170, 0, 170),   // 5: Magenta
    (0, 170, 170),   // 6: Cyan
    (170, 170, 170), // 7: White
    (85, 85, 85),    // 8: Bright Black
    (255, 85, 85),   // 9: Bright Red
    (85, 255, 85),   // 10: Bright Green
    (255, 255, 85),  // 11: Bright Yellow
    (85, 85, 255),   // 12: Bright Blue
    (255, 85, 255),  // 13: Bright Magenta
    (85, 255, 255),  // 14: Bright Cyan
    (255, 255, 255), // 15: Bright White
];

/// Levels of the 6x6x6 color cube (indices 16-231).
const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Lightness and saturation (HLS model, both 0.0-1.0).
fn lightness_saturation((r, g, b): (u8, u8, u8)) -> (f64, f64) {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let lightness = f64::midpoint(max, min);

    let delta = max - min;
    if delta < f64::EPSILON {
        return (lightness, 0.0);
    }
    let saturation = if lightness <= 0.5 {
        delta / (max + min)
    } else {
        delta / (2.0 - max - min)
    };
    (lightness, saturation)
}

/// Convert RGB to the nearest 8-bit color number.
#[must_use]
#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "indices are bounded before the cast"
)]
pub fn rgb_to_eight_bit(rgb: (u8, u8, u8)) -> u8 {
    let (lightness, saturation) = lightness_saturation(rgb);

    // Low saturation goes to the grayscale ramp (232-255)
    if saturation < 0.15 {
        if lightness < 0.04 {
            return 16;
        }
        if lightness > 0.96 {
            return 231;
        }
        let gray = ((lightness - 0.04) / 0.92 * 24.0).round() as u8;
        return 232 + gray.min(23);
    }

    let quantize = |v: u8| -> u8 {
        let index = if v < CUBE_LEVELS[1] {
            (f64::from(v) / 95.0).round() as u8
        } else {
            1 + ((f64::from(v) - 95.0) / 40.0).round() as u8
        };
        index.min(5)
    };

    16 + 36 * quantize(rgb.0) + 6 * quantize(rgb.1) + quantize(rgb.2)
}

/// Convert RGB to the nearest standard 16-color number.
#[must_use]
pub fn rgb_to_standard(rgb: (u8, u8, u8)) -> u8 {
    (0u8..16)
        .zip(STANDARD_PALETTE.iter())
        .min_by_key(|&(_, &entry)| color_distance(rgb, entry))
        .map_or(0, |(index, _)| index)
}

/// Weighted ("redmean") color distance.
fn color_distance(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let (r1, g1, b1) = (u32::from(a.0), u32::from(a.1), u32::from(a.2));
    let (r2, g2, b2) = (u32::from(b.0), u32::from(b.1), u32::from(b.2));

    let red_mean = u32::midpoint(r1, r2);
    let red_diff = r1.abs_diff(r2);
    let green_diff = g1.abs_diff(g2);
    let blue_diff = b1.abs_diff(b2);

    (((512 + red_mean) * red_diff * red_diff) >> 8)
        + 4 * green_diff * green_diff
        + (((767 - red_mean) * blue_diff * blue_diff) >> 8)
}

/// SGR parameters selecting `triplet` as a color in `system`.
///
/// Channels outside `0..=255` are clamped before encoding.
#[must_use]
pub fn sgr_codes(triplet: RgbTriplet, system: ColorSystem, foreground: bool) -> Vec<String> {
    let rgb = triplet.clamped();
    let lead = if foreground { "38" } else { "48" };
    match system {
        ColorSystem::TrueColor => vec![
            lead.to_string(),
            "2".to_string(),
            rgb.0.to_string(),
            rgb.1.to_string(),
            rgb.2.to_string(),
        ],
        ColorSystem::EightBit => vec![
            lead.to_string(),
            "5".to_string(),
            rgb_to_eight_bit(rgb).to_string(),
        ],
        ColorSystem::Standard => {
            let number = rgb_to_standard(rgb);
            let code = match (number < 8, foreground) {
                (true, true) => 30 + number,
                (true, false) => 40 + number,
                (false, true) => 82 + number,
                (false, false) => 92 + number,
            };
            vec![code.to_string()]
        }
    }
}
