use color_metrics::{HsbChannelOrder, Metric, Palette, Rgb};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::AppError;
use crate::models::AppConfig;

/// Distance between two colors under one metric
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    #[serde(serialize_with = "metric_tag")]
    pub metric: Metric,
    #[serde(serialize_with = "hex")]
    pub a: Rgb,
    #[serde(serialize_with = "hex")]
    pub b: Rgb,
    #[serde(serialize_with = "finite_or_null")]
    pub distance: f64,
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) = {}",
            self.metric, self.a, self.b, self.distance
        )
    }
}

/// A palette entry and its distance to a query color
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestMatch {
    pub palette: String,
    pub index: usize,
    #[serde(serialize_with = "hex")]
    pub color: Rgb,
    #[serde(serialize_with = "metric_tag")]
    pub metric: Metric,
    #[serde(serialize_with = "finite_or_null")]
    pub distance: f64,
}

impl fmt::Display for NearestMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}] {} {} = {}",
            self.palette, self.index, self.color, self.metric, self.distance
        )
    }
}

fn metric_tag<S: Serializer>(metric: &Metric, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(metric.name())
}

fn hex<S: Serializer>(color: &Rgb, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&color.to_hex())
}

fn finite_or_null<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.serialize_none()
    }
}

/// Resolves metric tags and palette names against the configuration and
/// runs comparisons
pub struct ComparisonService {
    config: AppConfig,
    default_metric: Metric,
    order: HsbChannelOrder,
}

impl ComparisonService {
    pub fn new(config: AppConfig) -> Result<Self, AppError> {
        let default_metric = config.metric()?;
        let order = HsbChannelOrder::from(config.hsb_channel_order);
        tracing::debug!(%default_metric, ?order, "Comparison service ready");
        Ok(Self {
            config,
            default_metric,
            order,
        })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn channel_order(&self) -> HsbChannelOrder {
        self.order
    }

    /// Resolve a metric tag, falling back to the configured default
    pub fn resolve_metric(&self, name: Option<&str>) -> Result<Metric, AppError> {
        match name {
            Some(name) => Ok(name.parse()?),
            None => Ok(self.default_metric),
        }
    }

    /// Parse a color argument
    pub fn parse_color(input: &str) -> Result<Rgb, AppError> {
        Rgb::from_str(input).map_err(|source| AppError::ParseColor {
            input: input.to_string(),
            source,
        })
    }

    /// Build a configured palette by name
    pub fn palette(&self, name: &str) -> Result<Palette, AppError> {
        let hex = self
            .config
            .palettes
            .get(name)
            .ok_or_else(|| AppError::UnknownPalette(name.to_string()))?;
        Palette::from_hex(hex.as_slice()).map_err(|source| AppError::Palette {
            name: name.to_string(),
            source,
        })
    }

    pub fn compare(&self, a: Rgb, b: Rgb, metric: Metric) -> Comparison {
        let distance = metric.distance_with(&a, &b, self.order);
        if !distance.is_finite() {
            tracing::warn!(%metric, %a, %b, distance, "Non-finite distance");
        }
        tracing::debug!(%metric, %a, %b, distance, "Compared colors");
        Comparison {
            metric,
            a,
            b,
            distance,
        }
    }

    /// Compare under every metric, in registry order
    pub fn compare_all(&self, a: Rgb, b: Rgb) -> Vec<Comparison> {
        Metric::ALL
            .iter()
            .map(|&metric| self.compare(a, b, metric))
            .collect()
    }

    pub fn nearest(
        &self,
        color: Rgb,
        palette_name: &str,
        metric: Metric,
    ) -> Result<NearestMatch, AppError> {
        let palette = self.palette(palette_name)?;
        let (index, distance) = palette.find_nearest_with(&color, metric, self.order);
        if !distance.is_finite() {
            tracing::warn!(%metric, %color, palette = palette_name, "No finite distance in palette");
        }
        tracing::debug!(%metric, %color, palette = palette_name, index, distance, "Nearest match");
        Ok(self.to_match(palette_name, &palette, index, metric, distance))
    }

    /// Every palette entry by ascending distance
    pub fn rank(
        &self,
        color: Rgb,
        palette_name: &str,
        metric: Metric,
    ) -> Result<Vec<NearestMatch>, AppError> {
        let palette = self.palette(palette_name)?;
        let ranked = palette.rank_with(&color, metric, self.order);
        tracing::debug!(%metric, %color, palette = palette_name, entries = ranked.len(), "Ranked palette");
        Ok(ranked
            .into_iter()
            .map(|(index, distance)| self.to_match(palette_name, &palette, index, metric, distance))
            .collect())
    }

    fn to_match(
        &self,
        palette_name: &str,
        palette: &Palette,
        index: usize,
        metric: Metric,
        distance: f64,
    ) -> NearestMatch {
        NearestMatch {
            palette: palette_name.to_string(),
            index,
            color: palette.get(index).unwrap_or_default(),
            metric,
            distance,
        }
    }
}
