#![allow(clippy::module_inception)]

//! color-metrics: interchangeable color distance functions
//!
//! Given two colors, each read as three 8-bit channels, compute a scalar
//! distance in either an RGB or an HSB basis. Every metric shares one
//! contract, so callers can pick a metric at runtime by its tag without
//! touching call sites.
//!
//! # Quick Start
//!
//! ```
//! use color_metrics::{Metric, Rgb};
//!
//! let a = Rgb::from_u8(255, 0, 0);
//! let b: Rgb = "#000000".parse().unwrap();
//!
//! for metric in Metric::ALL {
//!     let d = metric.distance(&a, &b);
//!     println!("{metric}: {d}");
//! }
//! ```
//!
//! # Metric Family
//!
//! | Tag | Basis | Formula |
//! |-----|-------|---------|
//! | `RGBChebychev` | RGB | signed `max(dr, dg, db)`, floored at 0 |
//! | `HSBChebychev` | HSB | signed `max(dh, ds, db)`, floored at 0 |
//! | `cosineSqRGBDist` | RGB | `(Σ\|a·b\|)² / (Σa² · Σb²)` |
//! | `cosineSqHSBDist` | HSB × 255 | same ratio |
//! | `sumRGBDist` | RGB | `\|dr + dg + db\|` |
//! | `sumSqRGBDist` | RGB | `dr² + dg² + db²` |
//! | `sumCubeRGBDist` | RGB | `\|dr³ + dg³ + db³\|` |
//! | `sumQrtRGBDist` | RGB | `dr⁴ + dg⁴ + db⁴` |
//! | `sumHSBDist` .. `sumQrtHSBDist` | HSB | the same four sums |
//!
//! ## Non-standard behavior
//!
//! These metrics are rankings, not perceptual distances, and several of them
//! are deliberately unusual:
//!
//! - **Signed Chebychev.** The maximum is taken over signed differences
//!   starting from zero, so the measure is not symmetric and negative
//!   differences never contribute.
//! - **Cancel-then-abs.** The linear and cube sums add signed terms before
//!   taking the absolute value. `sumRGBDist((10,0,0), (0,0,10))` is 0.
//!   See [`Metric::is_cancelling`].
//! - **Cosine similarity.** The cosine pair return 1.0 for parallel vectors
//!   and NaN when either input is black (0/0). Callers of these two must
//!   tolerate non-finite results. See [`Metric::may_be_non_finite`].
//! - **Unwrapped hue.** HSB differences subtract hue directly, so red hues
//!   on either side of 0° are far apart.
//!
//! ## HSB channel order
//!
//! `cosineSqHSBDist` historically converted `(r, b, g)` instead of
//! `(r, g, b)`. [`Metric::distance`] uses the natural order;
//! [`Metric::distance_with`] and [`HsbChannelOrder::Legacy`] reproduce the
//! swapped order for callers that must match stored results.
//!
//! # Numeric precision
//!
//! Channel differences and reductions are computed in `f32` and widened to
//! `f64` at the end. Results are deterministic: the same inputs always give
//! bit-identical outputs.

pub mod color;
pub mod metric;
pub mod palette;


pub use color::{Color, Hsb, Rgb};
pub use metric::{Basis, HsbChannelOrder, Metric, UnknownMetricError};
pub use palette::{Palette, PaletteError, ParseColorError};
