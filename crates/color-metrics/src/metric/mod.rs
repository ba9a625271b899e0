//! The color distance metric family.
//!
//! Each [`Metric`] variant is a pure reduction over a per-channel vector.
//! Callers select a metric at runtime by its stable tag:
//!
//! ```
//! use color_metrics::{Metric, Rgb};
//!
//! let metric: Metric = "sumSqRGBDist".parse().unwrap();
//! let d = metric.distance(&Rgb::from_u8(255, 0, 0), &Rgb::from_u8(0, 0, 0));
//! assert_eq!(d, 65025.0);
//! ```
//!
//! # Numeric semantics
//!
//! All arithmetic happens in `f32` and is widened to `f64` on return, so
//! results match the single-precision reference values exactly.
//!
//! Several metrics are intentionally unconventional:
//!
//! - The Chebychev pair take a *signed* maximum starting from zero. Negative
//!   differences are ignored, and if all three are negative the result is 0.
//! - `sumRGBDist`, `sumCubeRGBDist`, `sumHSBDist` and `sumCubeHSBDist` add
//!   signed terms before taking the absolute value, so opposite differences
//!   cancel. Distinct colors can have distance 0.
//! - The cosine pair return a similarity ratio (1.0 for parallel vectors)
//!   and produce NaN or infinity when either color is black.

mod vector;

use std::fmt;
use std::str::FromStr;

pub use vector::{hsb_components, hsb_difference, rgb_difference, ChannelVector, HsbChannelOrder};

use crate::color::Color;

/// Which basis a metric reads its channel vectors from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    /// Raw 8-bit channels, differences in `-255..=255`.
    Rgb,
    /// Normalized hue, saturation, brightness.
    Hsb,
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Basis::Rgb => write!(f, "RGB"),
            Basis::Hsb => write!(f, "HSB"),
        }
    }
}

/// A color distance metric.
///
/// Every variant exposes the same contract through [`Metric::distance`], so
/// call sites never change when the metric does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    /// Signed maximum of `(dr, dg, db)`, floored at 0.
    RgbChebychev,
    /// Signed maximum of `(dh, ds, db)`, floored at 0.
    HsbChebychev,
    /// `(Σ|a_i·b_i|)² / (Σa_i² · Σb_i²)` over raw RGB channels.
    ///
    /// NaN when either color is black.
    CosineSqRgb,
    /// Same ratio as [`Metric::CosineSqRgb`] over HSB components scaled by 255.
    ///
    /// NaN when either color is black.
    CosineSqHsb,
    /// `|dr + dg + db|`. Opposite differences cancel.
    SumRgb,
    /// `dr² + dg² + db²`.
    SumSqRgb,
    /// `|dr³ + dg³ + db³|`. Opposite differences cancel.
    SumCubeRgb,
    /// `dr⁴ + dg⁴ + db⁴`.
    SumQrtRgb,
    /// `|dh + ds + db|`. Opposite differences cancel.
    SumHsb,
    /// `dh² + ds² + db²`.
    SumSqHsb,
    /// `|dh³ + ds³ + db³|`. Opposite differences cancel.
    SumCubeHsb,
    /// `dh⁴ + ds⁴ + db⁴`.
    SumQrtHsb,
}

impl Metric {
    /// Every metric, in registry order.
    pub const ALL: [Metric; 12] = [
        Metric::RgbChebychev,
        Metric::HsbChebychev,
        Metric::CosineSqRgb,
        Metric::CosineSqHsb,
        Metric::SumRgb,
        Metric::SumSqRgb,
        Metric::SumCubeRgb,
        Metric::SumQrtRgb,
        Metric::SumHsb,
        Metric::SumSqHsb,
        Metric::SumCubeHsb,
        Metric::SumQrtHsb,
    ];

    /// The stable tag used to select this metric at runtime.
    pub const fn name(self) -> &'static str {
        match self {
            Metric::RgbChebychev => "RGBChebychev",
            Metric::HsbChebychev => "HSBChebychev",
            Metric::CosineSqRgb => "cosineSqRGBDist",
            Metric::CosineSqHsb => "cosineSqHSBDist",
            Metric::SumRgb => "sumRGBDist",
            Metric::SumSqRgb => "sumSqRGBDist",
            Metric::SumCubeRgb => "sumCubeRGBDist",
            Metric::SumQrtRgb => "sumQrtRGBDist",
            Metric::SumHsb => "sumHSBDist",
            Metric::SumSqHsb => "sumSqHSBDist",
            Metric::SumCubeHsb => "sumCubeHSBDist",
            Metric::SumQrtHsb => "sumQrtHSBDist",
        }
    }

    /// The basis the metric reads from.
    pub const fn basis(self) -> Basis {
        match self {
            Metric::RgbChebychev
            | Metric::CosineSqRgb
            | Metric::SumRgb
            | Metric::SumSqRgb
            | Metric::SumCubeRgb
            | Metric::SumQrtRgb => Basis::Rgb,
            Metric::HsbChebychev
            | Metric::CosineSqHsb
            | Metric::SumHsb
            | Metric::SumSqHsb
            | Metric::SumCubeHsb
            | Metric::SumQrtHsb => Basis::Hsb,
        }
    }

    /// True for metrics that divide and may return NaN or infinity.
    pub const fn may_be_non_finite(self) -> bool {
        matches!(self, Metric::CosineSqRgb | Metric::CosineSqHsb)
    }

    /// True for metrics that sum signed odd powers before taking the
    /// absolute value, and therefore map some distinct color pairs to 0.
    pub const fn is_cancelling(self) -> bool {
        matches!(
            self,
            Metric::SumRgb | Metric::SumCubeRgb | Metric::SumHsb | Metric::SumCubeHsb
        )
    }

    /// Distance between two colors.
    ///
    /// Equivalent to [`Metric::distance_with`] using
    /// [`HsbChannelOrder::Standard`].
    #[inline]
    pub fn distance<A, B>(self, c1: &A, c2: &B) -> f64
    where
        A: Color + ?Sized,
        B: Color + ?Sized,
    {
        self.distance_with(c1, c2, HsbChannelOrder::Standard)
    }

    /// Distance between two colors with an explicit HSB channel order.
    ///
    /// `order` only affects [`Metric::CosineSqHsb`]; see [`HsbChannelOrder`].
    pub fn distance_with<A, B>(self, c1: &A, c2: &B, order: HsbChannelOrder) -> f64
    where
        A: Color + ?Sized,
        B: Color + ?Sized,
    {
        let d = match self {
            Metric::RgbChebychev => signed_max(rgb_difference(c1, c2)),
            Metric::HsbChebychev => signed_max(hsb_difference(c1, c2)),
            Metric::CosineSqRgb => cosine_sq(rgb_components(c1), rgb_components(c2)),
            Metric::CosineSqHsb => cosine_sq(
                hsb_components(c1, order).scaled(255.0),
                hsb_components(c2, order).scaled(255.0),
            ),
            Metric::SumRgb => power_sum(rgb_difference(c1, c2), 1).abs(),
            Metric::SumSqRgb => power_sum(rgb_difference(c1, c2), 2),
            Metric::SumCubeRgb => power_sum(rgb_difference(c1, c2), 3).abs(),
            Metric::SumQrtRgb => power_sum(rgb_difference(c1, c2), 4),
            Metric::SumHsb => power_sum(hsb_difference(c1, c2), 1).abs(),
            Metric::SumSqHsb => power_sum(hsb_difference(c1, c2), 2),
            Metric::SumCubeHsb => power_sum(hsb_difference(c1, c2), 3).abs(),
            Metric::SumQrtHsb => power_sum(hsb_difference(c1, c2), 4),
        };
        d as f64
    }
}

fn rgb_components<C: Color + ?Sized>(color: &C) -> ChannelVector {
    [color.red() as f32, color.green() as f32, color.blue() as f32]
}

/// Largest signed component, never below 0.
fn signed_max(v: ChannelVector) -> f32 {
    let mut max = 0.0f32;
    for val in v {
        if val > max {
            max = val;
        }
    }
    max
}

fn cosine_sq(a: ChannelVector, b: ChannelVector) -> f32 {
    let denom = (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]) * (b[0] * b[0] + b[1] * b[1] + b[2] * b[2]);
    let mut numer = (a[0] * b[0]).abs() + (a[1] * b[1]).abs() + (a[2] * b[2]).abs();
    numer *= numer;
    numer / denom
}

/// Sum of each component raised to `exponent`, multiplied out left to right.
fn power_sum(v: ChannelVector, exponent: u32) -> f32 {
    let mut ret = 0.0f32;
    for val in v {
        let mut term = val;
        for _ in 1..exponent {
            term *= val;
        }
        ret += term;
    }
    ret
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = UnknownMetricError;

    /// Parse a metric tag.
    ///
    /// Exact tags match first; otherwise the comparison is ASCII
    /// case-insensitive, so `sumsqrgbdist` also selects `sumSqRGBDist`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Metric::ALL
            .iter()
            .find(|m| m.name() == s)
            .or_else(|| Metric::ALL.iter().find(|m| m.name().eq_ignore_ascii_case(s)))
            .copied()
            .ok_or_else(|| UnknownMetricError {
                name: s.to_string(),
            })
    }
}

/// Error returned when a metric tag does not name any [`Metric`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMetricError {
    /// The tag that failed to resolve
    pub name: String,
}

impl fmt::Display for UnknownMetricError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown distance metric: {:?}", self.name)
    }
}

impl std::error::Error for UnknownMetricError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use std::collections::HashSet;

    const BLACK: Rgb = Rgb::from_u8(0, 0, 0);
    const RED: Rgb = Rgb::from_u8(255, 0, 0);

    #[test]
    fn test_registry_tags_are_unique_and_round_trip() {
        let names: HashSet<&str> = Metric::ALL.iter().map(|m| m.name()).collect();
        assert_eq!(names.len(), 12);

        for metric in Metric::ALL {
            let parsed: Metric = metric.to_string().parse().unwrap();
            assert_eq!(parsed, metric);
        }
    }

    #[test]
    fn test_parse_is_case_insensitive_fallback() {
        assert_eq!("rgbchebychev".parse::<Metric>().unwrap(), Metric::RgbChebychev);
        assert_eq!(" SUMSQHSBDIST ".parse::<Metric>().unwrap(), Metric::SumSqHsb);
    }

    #[test]
    fn test_parse_unknown_metric() {
        let err = "euclidean".parse::<Metric>().unwrap_err();
        assert_eq!(err.name, "euclidean");
        assert_eq!(err.to_string(), "unknown distance metric: \"euclidean\"");
    }

    #[test]
    fn test_basis_split() {
        let rgb = Metric::ALL.iter().filter(|m| m.basis() == Basis::Rgb).count();
        let hsb = Metric::ALL.iter().filter(|m| m.basis() == Basis::Hsb).count();
        assert_eq!((rgb, hsb), (6, 6));
    }

    #[test]
    fn test_rgb_chebychev_signed_max() {
        let a = Rgb::from_u8(100, 50, 0);
        let b = Rgb::from_u8(40, 80, 0);
        // dr = 60, dg = -30, db = 0
        assert_eq!(Metric::RgbChebychev.distance(&a, &b), 60.0);
        // dr = -60, dg = 30, db = 0: the negative entry is ignored
        assert_eq!(Metric::RgbChebychev.distance(&b, &a), 30.0);
    }

    #[test]
    fn test_rgb_chebychev_all_negative_is_zero() {
        let dark = Rgb::from_u8(0, 0, 0);
        let light = Rgb::from_u8(10, 20, 30);
        assert_eq!(Metric::RgbChebychev.distance(&dark, &light), 0.0);
        assert_eq!(Metric::RgbChebychev.distance(&light, &dark), 30.0);
    }

    #[test]
    fn test_hsb_chebychev_uses_hsb_basis() {
        let grey = Rgb::from_u8(128, 128, 128);
        let white = Rgb::from_u8(255, 255, 255);
        assert_eq!(Metric::HsbChebychev.distance(&grey, &white), 0.0);
        let expected = (1.0f32 - 128.0 / 255.0) as f64;
        assert_eq!(Metric::HsbChebychev.distance(&white, &grey), expected);
    }

    #[test]
    fn test_sum_rgb_cancels() {
        let c1 = Rgb::from_u8(10, 0, 0);
        let c2 = Rgb::from_u8(0, 0, 10);
        assert_eq!(Metric::SumRgb.distance(&c1, &c2), 0.0);
        assert_eq!(Metric::SumCubeRgb.distance(&c1, &c2), 0.0);
        // Even powers see the difference
        assert_eq!(Metric::SumSqRgb.distance(&c1, &c2), 200.0);
        assert_eq!(Metric::SumQrtRgb.distance(&c1, &c2), 20000.0);
    }

    #[test]
    fn test_sum_rgb_takes_abs_after_summing() {
        let c1 = Rgb::from_u8(0, 0, 0);
        let c2 = Rgb::from_u8(3, 4, 0);
        assert_eq!(Metric::SumRgb.distance(&c1, &c2), 7.0);
        assert_eq!(Metric::SumCubeRgb.distance(&c1, &c2), 91.0);
    }

    #[test]
    fn test_power_sums_known_values() {
        assert_eq!(Metric::SumSqRgb.distance(&RED, &BLACK), 65025.0);
        assert_eq!(Metric::SumQrtRgb.distance(&RED, &BLACK), 4_228_250_625f32 as f64);
        assert_eq!(Metric::SumCubeRgb.distance(&BLACK, &RED), 16_581_375.0);
    }

    #[test]
    fn test_cosine_rgb_identical_is_one() {
        assert_eq!(Metric::CosineSqRgb.distance(&RED, &RED), 1.0);
    }

    #[test]
    fn test_cosine_rgb_orthogonal_is_zero() {
        let green = Rgb::from_u8(0, 255, 0);
        assert_eq!(Metric::CosineSqRgb.distance(&RED, &green), 0.0);
    }

    #[test]
    fn test_cosine_rgb_ignores_magnitude() {
        let dim = Rgb::from_u8(10, 20, 30);
        let bright = Rgb::from_u8(20, 40, 60);
        let d = Metric::CosineSqRgb.distance(&dim, &bright);
        assert!((d - 1.0).abs() < 1e-6, "got {d}");
    }

    #[test]
    fn test_cosine_black_is_non_finite() {
        assert!(!Metric::CosineSqRgb.distance(&BLACK, &BLACK).is_finite());
        assert!(!Metric::CosineSqRgb.distance(&BLACK, &RED).is_finite());
        assert!(!Metric::CosineSqHsb.distance(&BLACK, &BLACK).is_finite());
    }

    #[test]
    fn test_cosine_hsb_uses_scaled_components() {
        // Red: hue 0, sat 1, bri 1 -> (0, 255, 255); grey 128: (0, 0, 128)
        let grey = Rgb::from_u8(128, 128, 128);
        let d = Metric::CosineSqHsb.distance(&RED, &grey);
        let b = 128.0f32 / 255.0 * 255.0;
        let numer = (255.0 * b) * (255.0 * b);
        let denom = (255.0f32 * 255.0 + 255.0 * 255.0) * (b * b);
        assert_eq!(d, (numer / denom) as f64);
    }

    #[test]
    fn test_legacy_order_only_changes_cosine_hsb() {
        let a = Rgb::from_u8(200, 30, 90);
        let b = Rgb::from_u8(20, 180, 60);

        for metric in Metric::ALL {
            let standard = metric.distance_with(&a, &b, HsbChannelOrder::Standard);
            let legacy = metric.distance_with(&a, &b, HsbChannelOrder::Legacy);
            if metric == Metric::CosineSqHsb {
                assert_ne!(standard.to_bits(), legacy.to_bits());
            } else {
                assert_eq!(standard.to_bits(), legacy.to_bits(), "{metric}");
            }
        }
    }

    #[test]
    fn test_hsb_sums_on_grayscale() {
        let a = Rgb::from_u8(255, 255, 255);
        let b = Rgb::from_u8(0, 0, 0);
        assert_eq!(Metric::SumHsb.distance(&a, &b), 1.0);
        assert_eq!(Metric::SumSqHsb.distance(&a, &b), 1.0);
        assert_eq!(Metric::SumCubeHsb.distance(&b, &a), 1.0);
        assert_eq!(Metric::SumQrtHsb.distance(&b, &a), 1.0);
    }

    #[test]
    fn test_flags() {
        let cancelling: Vec<_> = Metric::ALL.iter().filter(|m| m.is_cancelling()).collect();
        assert_eq!(cancelling.len(), 4);
        let non_finite: Vec<_> = Metric::ALL
            .iter()
            .filter(|m| m.may_be_non_finite())
            .collect();
        assert_eq!(non_finite, [&Metric::CosineSqRgb, &Metric::CosineSqHsb]);
    }
}
