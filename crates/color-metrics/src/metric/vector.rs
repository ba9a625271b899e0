//! Per-channel difference vectors.
//!
//! Every metric reduces one of these vectors (or, for the cosine pair, the
//! raw component vectors of both colors) to a scalar. Vectors are rebuilt on
//! every call; nothing is cached.

use crate::color::{Color, Hsb};

/// Three per-channel values in either the RGB or the HSB basis.
pub type ChannelVector = [f32; 3];

/// Channel order fed into the HSB conversion of `cosineSqHSBDist`.
///
/// Earlier releases of this metric converted `(r, b, g)` instead of
/// `(r, g, b)`, unlike every other HSB metric. `Standard` uses the natural
/// order; `Legacy` reproduces the swapped order for callers that need
/// bit-exact parity with previously stored results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HsbChannelOrder {
    /// Convert `(red, green, blue)`.
    #[default]
    Standard,
    /// Convert `(red, blue, green)`.
    Legacy,
}

/// Signed RGB differences `c1 - c2`, each in `-255.0..=255.0`.
///
/// # Example
///
/// ```
/// use color_metrics::metric::rgb_difference;
///
/// assert_eq!(rgb_difference(&(10u8, 0u8, 0u8), &(0u8, 0u8, 10u8)), [10.0, 0.0, -10.0]);
/// ```
#[inline]
pub fn rgb_difference<A, B>(c1: &A, c2: &B) -> ChannelVector
where
    A: Color + ?Sized,
    B: Color + ?Sized,
{
    [
        c1.red() as f32 - c2.red() as f32,
        c1.green() as f32 - c2.green() as f32,
        c1.blue() as f32 - c2.blue() as f32,
    ]
}

/// HSB components of a single color, optionally with green and blue swapped
/// before conversion.
#[inline]
pub fn hsb_components<C: Color + ?Sized>(color: &C, order: HsbChannelOrder) -> Hsb {
    match order {
        HsbChannelOrder::Standard => Hsb::from_channels(color.red(), color.green(), color.blue()),
        HsbChannelOrder::Legacy => Hsb::from_channels(color.red(), color.blue(), color.green()),
    }
}

/// Signed HSB differences `c1 - c2`, each in `-1.0..=1.0`.
///
/// Hue is not wrapped: hues 0.99 and 0.01 are 0.98 apart, not 0.02.
#[inline]
pub fn hsb_difference<A, B>(c1: &A, c2: &B) -> ChannelVector
where
    A: Color + ?Sized,
    B: Color + ?Sized,
{
    let hsb1 = hsb_components(c1, HsbChannelOrder::Standard);
    let hsb2 = hsb_components(c2, HsbChannelOrder::Standard);
    [hsb1.h - hsb2.h, hsb1.s - hsb2.s, hsb1.b - hsb2.b]
}
