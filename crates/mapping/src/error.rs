use thiserror::Error;

#[derive(Error, Debug)]
pub enum MappingError {
    #[error("Expected {expected} at '{location}', found {found}")]
    InvalidShape {
        location: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Field '{field}' maps to a {found}, not a path")]
    InvalidFieldPath { field: String, found: &'static str },

    #[error("Mapping document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
