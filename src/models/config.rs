use color_metrics::{HsbChannelOrder, Metric};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::AppError;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV: &str = "CHROMADIST_CONFIG";

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Metric tag used when a command does not name one
    #[serde(default = "default_metric")]
    pub default_metric: String,

    /// Channel order for the HSB cosine metric
    #[serde(default)]
    pub hsb_channel_order: ChannelOrder,

    /// Named palettes as lists of hex colors
    #[serde(default)]
    pub palettes: BTreeMap<String, Vec<String>>,
}

fn default_metric() -> String {
    Metric::SumSqRgb.name().to_string()
}

/// Serializable mirror of [`HsbChannelOrder`]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChannelOrder {
    #[default]
    Standard,
    Legacy,
}

impl From<ChannelOrder> for HsbChannelOrder {
    fn from(order: ChannelOrder) -> Self {
        match order {
            ChannelOrder::Standard => HsbChannelOrder::Standard,
            ChannelOrder::Legacy => HsbChannelOrder::Legacy,
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| AppError::io(path, e))?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            default_metric = %config.default_metric,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.metric()?;
        Ok(config)
    }

    /// Resolve the config location: explicit path, then `CHROMADIST_CONFIG`,
    /// then built-in defaults
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, AppError> {
        let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        match explicit.map(Path::to_path_buf).or(from_env) {
            Some(path) => Self::load(&path),
            None => {
                tracing::debug!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// The default metric, parsed
    pub fn metric(&self) -> Result<Metric, AppError> {
        Ok(self.default_metric.parse()?)
    }

    /// Render as YAML
    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Write the default configuration to `path`
    pub fn write_default(path: &Path, force: bool) -> Result<(), AppError> {
        if path.exists() && !force {
            return Err(AppError::ConfigExists(path.to_path_buf()));
        }
        let yaml = Self::default().to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| AppError::io(path, e))?;
        tracing::info!(path = %path.display(), "Wrote default configuration");
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        let mut palettes = BTreeMap::new();
        palettes.insert(
            "bw".to_string(),
            vec!["#000000".to_string(), "#ffffff".to_string()],
        );
        palettes.insert(
            "gray4".to_string(),
            ["#000000", "#555555", "#aaaaaa", "#ffffff"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        );

        Self {
            default_metric: default_metric(),
            hsb_channel_order: ChannelOrder::Standard,
            palettes,
        }
    }
}
