//! Palette types and utilities
//!
//! This module provides a validated color list with nearest-color search,
//! plus the error types for parsing and validation.

mod error;
mod palette;

pub use error::{PaletteError, ParseColorError};
pub use palette::Palette;
