//! Error taxonomy for scenario decoding and file I/O.

use thiserror::Error;

/// Errors surfaced by the scenario codec and its file wrappers.
///
/// Encoding a well-formed tree never fails; every variant here is a decode
/// or I/O failure. An unrecognized model discriminant is *not* an error
/// (the resolver falls back to a lossless generic record).
#[derive(Debug, Error)]
pub enum ScenarioError {
    /// The input is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Format(#[from] serde_json::Error),

    /// A required field is missing or a value has the wrong shape.
    #[error("schema error at {path}: {reason}")]
    Schema { path: String, reason: String },

    /// A value is present but of the wrong primitive kind.
    #[error("type mismatch at {path}: expected {expected}, found {found}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Reading or writing the scenario file failed.
    #[error("scenario file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ScenarioError {
    /// Build a schema error with a field path and a short reason.
    pub fn schema(path: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Build a type mismatch error with a field path.
    pub fn mismatch(path: impl Into<String>, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            path: path.into(),
            expected,
            found,
        }
    }
}
