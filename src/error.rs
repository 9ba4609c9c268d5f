// src/error.rs
use filterpath_jpath::JPathError;
use filterpath_mapping::MappingError;
use thiserror::Error;

/// Everything the command-line front end can fail with.
#[derive(Error, Debug)]
pub enum FilterPathError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration is invalid: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Mapping document is invalid: {0}")]
    Mapping(#[from] MappingError),

    #[error("Invalid path: {0}")]
    Path(#[from] JPathError),
}
