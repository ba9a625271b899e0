//! Palette struct with nearest-color matching under any metric.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::str::FromStr;

use super::error::PaletteError;
use crate::color::{Color, Rgb};
use crate::metric::{HsbChannelOrder, Metric};

/// An immutable, non-empty list of distinct colors.
///
/// Matching is a linear scan, which is optimal for the small palettes
/// (a handful to a few dozen entries) this is meant for.
///
/// # Example
///
/// ```
/// use color_metrics::{Metric, Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::from_u8(0, 0, 0), Rgb::from_u8(255, 255, 255)]).unwrap();
/// let (idx, _) = palette.find_nearest(&Rgb::from_u8(200, 200, 200), Metric::SumSqRgb);
/// assert_eq!(idx, 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a new palette.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` contains the same color twice ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Create a palette from hex color strings such as `"#FF0000"` or `"#F00"`.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any hex string is invalid,
    /// or other [`PaletteError`] variants for validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use color_metrics::Palette;
    ///
    /// let palette = Palette::from_hex(&["#000000", "#FFFFFF", "#F00"]).unwrap();
    /// assert_eq!(palette.len(), 3);
    /// ```
    pub fn from_hex<S: AsRef<str>>(hex: &[S]) -> Result<Self, PaletteError> {
        let colors = hex
            .iter()
            .enumerate()
            .map(|(index, s)| {
                Rgb::from_str(s.as_ref()).map_err(|source| PaletteError::ParseColor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&colors)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Always `false`; empty palettes are rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`, if in range.
    #[inline]
    pub fn get(&self, idx: usize) -> Option<Rgb> {
        self.colors.get(idx).copied()
    }

    /// Iterate over the palette colors in order.
    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// Find the palette entry with the smallest distance to `color`.
    ///
    /// Returns `(index, distance)`. Ties keep the earliest entry. Non-finite
    /// distances never win; if every distance is non-finite (for example a
    /// cosine metric against black), index 0 is returned with its distance.
    ///
    /// Cosine metrics measure similarity, so for those the "nearest" entry
    /// by this definition is the least aligned one. Use [`Palette::rank`]
    /// and read from the end when similarity is wanted.
    pub fn find_nearest<C: Color + ?Sized>(&self, color: &C, metric: Metric) -> (usize, f64) {
        self.find_nearest_with(color, metric, HsbChannelOrder::Standard)
    }

    /// [`Palette::find_nearest`] with an explicit HSB channel order.
    pub fn find_nearest_with<C: Color + ?Sized>(
        &self,
        color: &C,
        metric: Metric,
        order: HsbChannelOrder,
    ) -> (usize, f64) {
        let mut best: Option<(usize, f64)> = None;

        for (i, entry) in self.colors.iter().enumerate() {
            let dist = metric.distance_with(color, entry, order);
            if !dist.is_finite() {
                continue;
            }
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((i, dist)),
            }
        }

        best.unwrap_or_else(|| (0, metric.distance_with(color, &self.colors[0], order)))
    }

    /// All palette entries ordered by ascending distance to `color`.
    ///
    /// The sort is stable, so equal distances keep palette order.
    /// Non-finite distances are placed last.
    pub fn rank<C: Color + ?Sized>(&self, color: &C, metric: Metric) -> Vec<(usize, f64)> {
        self.rank_with(color, metric, HsbChannelOrder::Standard)
    }

    /// [`Palette::rank`] with an explicit HSB channel order.
    pub fn rank_with<C: Color + ?Sized>(
        &self,
        color: &C,
        metric: Metric,
        order: HsbChannelOrder,
    ) -> Vec<(usize, f64)> {
        let mut ranked: Vec<(usize, f64)> = self
            .colors
            .iter()
            .enumerate()
            .map(|(i, entry)| (i, metric.distance_with(color, entry, order)))
            .collect();

        ranked.sort_by(|a, b| compare_distance(a.1, b.1));
        ranked
    }
}

fn compare_distance(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, true) => a.total_cmp(&b),
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ParseColorError;

    fn bw() -> Palette {
        Palette::new(&[Rgb::from_u8(0, 0, 0), Rgb::from_u8(255, 255, 255)]).unwrap()
    }

    #[test]
    fn test_palette_basic_construction() {
        let colors = [
            Rgb::from_u8(0, 0, 0),
            Rgb::from_u8(255, 255, 255),
            Rgb::from_u8(255, 0, 0),
        ];
        let palette = Palette::new(&colors).unwrap();
        assert_eq!(palette.len(), 3);
        assert!(!palette.is_empty());
        assert_eq!(palette.get(2), Some(Rgb::from_u8(255, 0, 0)));
        assert_eq!(palette.get(3), None);
        assert_eq!(palette.iter().collect::<Vec<_>>(), colors);
    }

    #[test]
    fn test_palette_empty_error() {
        let result = Palette::new(&[]);
        assert!(matches!(result, Err(PaletteError::EmptyPalette)));
    }

    #[test]
    fn test_palette_duplicate_color() {
        let colors = [
            Rgb::from_u8(255, 0, 0),
            Rgb::from_u8(0, 255, 0),
            Rgb::from_u8(255, 0, 0),
        ];
        let result = Palette::new(&colors);
        assert_eq!(result, Err(PaletteError::DuplicateColor { index: 2 }));
    }

    #[test]
    fn test_from_hex_reports_index() {
        let result = Palette::from_hex(&["#000", "#12345"]);
        assert_eq!(
            result,
            Err(PaletteError::ParseColor {
                index: 1,
                source: ParseColorError::InvalidLength
            })
        );
    }

    #[test]
    fn test_from_hex_accepts_owned_strings() {
        let hex = vec!["#000000".to_string(), "#ffffff".to_string()];
        assert_eq!(Palette::from_hex(&hex[..]).unwrap(), bw());
    }

    #[test]
    fn test_find_nearest_exact_match() {
        let palette = bw();
        let (idx, dist) = palette.find_nearest(&Rgb::from_u8(0, 0, 0), Metric::SumSqRgb);
        assert_eq!(idx, 0);
        assert_eq!(dist, 0.0);
    }

    #[test]
    fn test_find_nearest_grey_levels() {
        let palette = bw();
        let (idx, _) = palette.find_nearest(&Rgb::from_u8(64, 64, 64), Metric::SumSqRgb);
        assert_eq!(idx, 0, "Dark gray should match black");
        let (idx, _) = palette.find_nearest(&Rgb::from_u8(192, 192, 192), Metric::SumSqRgb);
        assert_eq!(idx, 1, "Light gray should match white");
    }

    #[test]
    fn test_find_nearest_tie_keeps_first() {
        let palette = Palette::from_hex(&["#0a0000", "#00000a"]).unwrap();
        let (idx, dist) = palette.find_nearest(&Rgb::from_u8(0, 0, 0), Metric::SumSqRgb);
        assert_eq!((idx, dist), (0, 100.0));
    }

    /// A cancelling metric can report zero for a color that is not in the palette.
    #[test]
    fn test_find_nearest_sees_cancellation() {
        let palette = Palette::from_hex(&["#808080", "#0a0000"]).unwrap();
        let (idx, dist) = palette.find_nearest(&Rgb::from_u8(0, 0, 10), Metric::SumRgb);
        assert_eq!((idx, dist), (1, 0.0));
    }

    #[test]
    fn test_find_nearest_skips_non_finite() {
        let palette = Palette::from_hex(&["#000000", "#ff0000", "#00ff00"]).unwrap();
        // Black entry yields NaN, red is orthogonal (0.0), green too: first finite wins
        let (idx, dist) = palette.find_nearest(&Rgb::from_u8(0, 0, 255), Metric::CosineSqRgb);
        assert_eq!((idx, dist), (1, 0.0));
    }

    #[test]
    fn test_find_nearest_all_non_finite_returns_first() {
        let palette = bw();
        let (idx, dist) = palette.find_nearest(&Rgb::from_u8(0, 0, 0), Metric::CosineSqRgb);
        assert_eq!(idx, 0);
        assert!(dist.is_nan());
    }

    #[test]
    fn test_rank_orders_ascending_with_non_finite_last() {
        let palette = Palette::from_hex(&["#000000", "#ffffff", "#ff0000"]).unwrap();
        let ranked = palette.rank(&Rgb::from_u8(250, 0, 0), Metric::CosineSqRgb);
        let order: Vec<usize> = ranked.iter().map(|(i, _)| *i).collect();
        // white: 1/3, red: 1.0, black: NaN
        assert_eq!(order, [1, 2, 0]);
        assert!(ranked[2].1.is_nan());
    }

    #[test]
    fn test_rank_is_stable() {
        let palette = Palette::from_hex(&["#0a0000", "#00000a", "#000a00"]).unwrap();
        let ranked = palette.rank(&Rgb::from_u8(0, 0, 0), Metric::SumSqRgb);
        assert_eq!(ranked, [(0, 100.0), (1, 100.0), (2, 100.0)]);
    }

    #[test]
    fn test_legacy_order_reaches_metric() {
        let palette = Palette::from_hex(&["#c81e5a", "#14b43c"]).unwrap();
        let color = Rgb::from_u8(90, 40, 160);
        let standard = palette.rank_with(&color, Metric::CosineSqHsb, HsbChannelOrder::Standard);
        let legacy = palette.rank_with(&color, Metric::CosineSqHsb, HsbChannelOrder::Legacy);
        assert_ne!(standard, legacy);
    }
}
