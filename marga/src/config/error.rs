//! Configuration loading errors.

use thiserror::Error;

use crate::terrain::CostTableError;

/// Config load error
#[derive(Error, Debug, Clone)]
pub enum ConfigLoadError {
    /// I/O error
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Terrain table violates the cost invariants
    #[error("Invalid terrain table: {0}")]
    CostTable(#[from] CostTableError),

    /// Any other out-of-range value
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
