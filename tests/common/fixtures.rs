//! Test fixtures and constants.

use color_metrics::Rgb;

pub const BLACK: Rgb = Rgb::from_u8(0, 0, 0);
pub const WHITE: Rgb = Rgb::from_u8(255, 255, 255);
pub const RED: Rgb = Rgb::from_u8(255, 0, 0);
pub const GREEN: Rgb = Rgb::from_u8(0, 255, 0);
pub const BLUE: Rgb = Rgb::from_u8(0, 0, 255);

/// A six-color e-ink style palette
pub const EINK6_YAML: &str = r##"
default_metric: sumSqRGBDist
palettes:
  eink6:
    - "#000000"
    - "#ffffff"
    - "#ff0000"
    - "#00ff00"
    - "#0000ff"
    - "#ffff00"
"##;

/// Same palette with the legacy HSB channel order and an HSB default
pub const LEGACY_YAML: &str = r##"
default_metric: cosineSqHSBDist
hsb_channel_order: legacy
palettes:
  primaries: ["#ff0000", "#00ff00", "#0000ff"]
"##;
