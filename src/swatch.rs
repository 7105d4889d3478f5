//! Swatch line rendering.
//!
//! Each input renders as one line: a block of background color followed by
//! the channel values and the original input,
//!
//! ```text
//! ▒▒▒▒▒ R:255 G: 99 B: 71 <tomato>
//! ```
//!
//! or, when the input is not a color, a blank block and an explicit marker:
//!
//! ```text
//!       <invalid value> <tomatoe>
//! ```
//!
//! A failed parse is never painted with a fallback color.

use unicode_width::UnicodeWidthChar;

use crate::color::{ColorParseError, RgbTriplet};
use crate::palette::{ColorSystem, sgr_codes};

/// Default block width in cells.
pub const DEFAULT_WIDTH: usize = 5;

/// Widest block accepted by [`Swatch::width`].
pub const MAX_WIDTH: usize = 64;

/// Marker printed in place of channel values for unparseable input.
pub const INVALID_MARKER: &str = "<invalid value>";

/// Labels darker than this get a light foreground.
const DARK_LUMINANCE: i32 = 80;

/// How the color block is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchStyle {
    /// A plain block of background color.
    #[default]
    Block,
    /// The block carries the `#rrggbb` code in a contrasting foreground.
    Labeled,
}

/// Renders parse results as swatch lines.
#[derive(Debug, Clone)]
pub struct Swatch {
    color_system: Option<ColorSystem>,
    width: usize,
    style: SwatchStyle,
    max_line_width: Option<usize>,
}

impl Swatch {
    /// Create a renderer for the given color system (`None` = no colors).
    #[must_use]
    pub const fn new(color_system: Option<ColorSystem>) -> Self {
        Self {
            color_system,
            width: DEFAULT_WIDTH,
            style: SwatchStyle::Block,
            max_line_width: None,
        }
    }

    /// Set the block width, clamped to `1..=MAX_WIDTH`.
    #[must_use]
    pub fn width(mut self, width: usize) -> Self {
        self.width = width.clamp(1, MAX_WIDTH);
        self
    }

    /// Set the block style.
    #[must_use]
    pub const fn style(mut self, style: SwatchStyle) -> Self {
        self.style = style;
        self
    }

    /// Truncate the echoed input so lines fit in `width` cells.
    #[must_use]
    pub const fn max_line_width(mut self, width: Option<usize>) -> Self {
        self.max_line_width = width;
        self
    }

    /// The color system swatches are painted with.
    #[must_use]
    pub const fn color_system(&self) -> Option<ColorSystem> {
        self.color_system
    }

    fn block_width(&self) -> usize {
        match self.style {
            SwatchStyle::Block => self.width,
            // Room for "#rrggbb"
            SwatchStyle::Labeled => self.width.max(7),
        }
    }

    /// Render one line (without the trailing newline).
    #[must_use]
    pub fn render(&self, input: &str, result: &Result<RgbTriplet, ColorParseError>) -> String {
        let block_width = self.block_width();
        let (block, values) = match result {
            Ok(triplet) => (self.paint_block(*triplet, block_width), triplet.to_string()),
            Err(_) => (" ".repeat(block_width), INVALID_MARKER.to_string()),
        };

        let used = block_width + 1 + cell_len(&values) + 1;
        let echoed = match self.max_line_width {
            Some(max) => truncate_cells(input, max.saturating_sub(used + 2)),
            None => input.to_string(),
        };

        format!("{block} {values} <{echoed}>")
    }

    fn paint_block(&self, triplet: RgbTriplet, block_width: usize) -> String {
        let content = match self.style {
            SwatchStyle::Block => " ".repeat(block_width),
            SwatchStyle::Labeled => format!("{:^block_width$}", triplet.hex()),
        };

        let Some(system) = self.color_system else {
            return content;
        };

        let mut codes = sgr_codes(triplet, system, false);
        if self.style == SwatchStyle::Labeled {
            codes.extend(sgr_codes(contrast_foreground(triplet), system, true));
        }
        format!("\x1b[{}m{content}\x1b[0m", codes.join(";"))
    }
}

impl Default for Swatch {
    fn default() -> Self {
        Self::new(Some(ColorSystem::TrueColor))
    }
}

/// Near-white text on dark swatches, near-black text on light ones.
#[must_use]
pub fn contrast_foreground(background: RgbTriplet) -> RgbTriplet {
    if background.luminance() < DARK_LUMINANCE {
        RgbTriplet::new(230, 230, 230)
    } else {
        RgbTriplet::new(20, 20, 20)
    }
}

fn cell_len(text: &str) -> usize {
    text.chars().map(|c| c.width().unwrap_or(0)).sum()
}

/// Truncate `text` to at most `max` cells, marking the cut with `…`.
fn truncate_cells(text: &str, max: usize) -> String {
    if cell_len(text) <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}
