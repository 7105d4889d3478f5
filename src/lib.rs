//! # colorswatch
//!
//! Parse CSS color strings into RGB triplets and preview them as terminal
//! swatches.
//!
//! ## Quick Start
//!
//! ```rust
//! use colorswatch::prelude::*;
//!
//! let tomato = parse_color("tomato").unwrap();
//! assert_eq!(tomato, RgbTriplet::new(255, 99, 71));
//! assert_eq!(parse_color("hsl(120, 100%, 25%)").unwrap().to_string(), "R:  0 G:127 B:  0");
//! assert!(parse_color("#5G5").is_err());
//! ```
//!
//! ## Core Concepts
//!
//! - **parse_color**: The single entry point from color string to triplet
//! - **Swatch**: Renders a parse result as one line of terminal output
//! - **Console**: Writes swatch lines with a detected or chosen color system

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod color;
pub mod console;
pub mod convert;
pub mod input;
pub mod logging;
pub mod named;
pub mod palette;
pub mod swatch;
pub mod sync;
pub mod terminal;

/// Re-exports for convenient usage
pub mod prelude {
    pub use crate::color::{ColorParseError, RgbTriplet, SyntaxKind, classify, parse_color};
    pub use crate::console::{Console, ConsoleBuilder};
    pub use crate::convert::{hex_pair_to_decimal, hsl_to_rgb};
    pub use crate::palette::ColorSystem;
    pub use crate::swatch::{Swatch, SwatchStyle};
}

// Re-export key types at crate root
pub use color::{ColorParseError, RgbTriplet, SyntaxKind, classify, parse_color};
pub use console::Console;
pub use palette::ColorSystem;
pub use swatch::Swatch;
