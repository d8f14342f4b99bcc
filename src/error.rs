use thiserror::Error;

/// Application error types
///
/// Reference data that fails to load or validate is reported by the loader
/// in `config`; these cover the estimation path.
#[derive(Debug, Error)]
pub enum AppError {
    /// Profile field outside its valid domain
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Lookup key absent from the reference table (a data bug, not a user error)
    #[error("Missing reference entry: no '{key}' in '{section}'")]
    MissingReferenceEntry { section: String, key: String },
}

impl AppError {
    /// Stable machine-readable name, used in JSON error output
    pub fn type_name(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::MissingReferenceEntry { .. } => "missing_reference_entry",
        }
    }
}
