//! HSB (hue, saturation, brightness) color type
//!
//! The conversion follows the classic hexcone model with every component
//! normalized to the unit interval.

use super::rgb::Color;

/// A color in HSB space.
///
/// # Components
///
/// - `h`: Hue as a fraction of a full turn, in `0.0..1.0` (degrees / 360)
/// - `s`: Saturation, `0.0..=1.0`
/// - `b`: Brightness, `0.0..=1.0` (largest channel / 255)
///
/// Achromatic colors (R == G == B) have `h == 0.0` and `s == 0.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsb {
    /// Hue: 0.0 (red) through 1/3 (green) and 2/3 (blue), wrapping before 1.0
    pub h: f32,
    /// Saturation: 0.0 (grey) to 1.0 (fully saturated)
    pub s: f32,
    /// Brightness: 0.0 (black) to 1.0
    pub b: f32,
}

impl Hsb {
    /// Create a new Hsb color.
    #[inline]
    pub fn new(h: f32, s: f32, b: f32) -> Self {
        Self { h, s, b }
    }

    /// Convert raw 8-bit channels to HSB.
    ///
    /// All arithmetic is single precision so the metric family reproduces
    /// the same values bit for bit across platforms.
    ///
    /// # Example
    ///
    /// ```
    /// use color_metrics::Hsb;
    ///
    /// let red = Hsb::from_channels(255, 0, 0);
    /// assert_eq!((red.h, red.s, red.b), (0.0, 1.0, 1.0));
    ///
    /// let blue = Hsb::from_channels(0, 0, 255);
    /// assert!((blue.h - 2.0 / 3.0).abs() < 1e-6);
    /// ```
    pub fn from_channels(r: u8, g: u8, b: u8) -> Self {
        let cmax = r.max(g).max(b);
        let cmin = r.min(g).min(b);

        let brightness = cmax as f32 / 255.0;
        let saturation = if cmax != 0 {
            (cmax - cmin) as f32 / cmax as f32
        } else {
            0.0
        };

        let hue = if saturation == 0.0 {
            0.0
        } else {
            let span = (cmax - cmin) as f32;
            let redc = (cmax - r) as f32 / span;
            let greenc = (cmax - g) as f32 / span;
            let bluec = (cmax - b) as f32 / span;

            let sector = if r == cmax {
                bluec - greenc
            } else if g == cmax {
                2.0 + redc - bluec
            } else {
                4.0 + greenc - redc
            };

            let hue = sector / 6.0;
            if hue < 0.0 {
                hue + 1.0
            } else {
                hue
            }
        };

        Self {
            h: hue,
            s: saturation,
            b: brightness,
        }
    }

    /// Components as an `[h, s, b]` array.
    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.h, self.s, self.b]
    }

    /// Components multiplied by `factor`, as an `[h, s, b]` array.
    #[inline]
    pub fn scaled(self, factor: f32) -> [f32; 3] {
        [self.h * factor, self.s * factor, self.b * factor]
    }
}

impl<C: Color> From<&C> for Hsb {
    fn from(color: &C) -> Self {
        Self::from_channels(color.red(), color.green(), color.blue())
    }
}
