use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Unknown backend: {0}")]
    UnknownBackend(String),
}

#[derive(Debug, Error)]
pub enum GenError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Config error in file {path}: {source}")]
    Config { path: PathBuf, source: ConfigError },

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
