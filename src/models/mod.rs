pub mod config;

pub use config::{AppConfig, ChannelOrder, CONFIG_ENV};
