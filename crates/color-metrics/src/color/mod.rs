//! Color types and conversion utilities
//!
//! # Color Spaces
//!
//! - **RGB**: Raw 8-bit channel readings. Any type implementing [`Color`]
//!   can be measured; [`Rgb`] is the concrete value type.
//! - **HSB**: Hue, saturation and brightness, each normalized to `0.0..=1.0`.
//!
//! # Example
//!
//! ```
//! use color_metrics::{Hsb, Rgb};
//!
//! let orange: Rgb = "#ff8000".parse().unwrap();
//! let hsb = Hsb::from(&orange);
//! assert_eq!(hsb.b, 1.0);
//! ```

mod hsb;
mod rgb;

pub use hsb::Hsb;
pub use rgb::{Color, Rgb};
