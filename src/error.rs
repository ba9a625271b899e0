use std::path::PathBuf;

use color_metrics::{PaletteError, ParseColorError, UnknownMetricError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    UnknownMetric(#[from] UnknownMetricError),

    #[error("Unknown palette: {0}")]
    UnknownPalette(String),

    #[error("Invalid palette {name}: {source}")]
    Palette {
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Invalid color {input:?}: {source}")]
    ParseColor {
        input: String,
        #[source]
        source: ParseColorError,
    },

    #[error("Refusing to overwrite {} (use --force)", .0.display())]
    ConfigExists(PathBuf),
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Io {
            path: path.into(),
            source,
        }
    }
}
