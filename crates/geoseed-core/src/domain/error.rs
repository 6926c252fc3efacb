// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to carry across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// The fixed sample document failed to serialize. Should never happen for
    /// the canonical document; surfaced instead of panicking.
    #[error("sample document encoding failed: {reason}")]
    SampleEncoding { reason: String },

    /// A `.geojson` file's content could not be summarized.
    #[error("invalid GeoJSON content: {reason}")]
    InvalidGeoJson { reason: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::SampleEncoding { .. } => vec![
                "This appears to be a bug in geoseed".into(),
                "Please report it with the full error message".into(),
            ],
            Self::InvalidGeoJson { reason } => vec![
                format!("The file is not parseable GeoJSON: {reason}"),
                "Check the file with a JSON validator".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::SampleEncoding { .. } => ErrorCategory::Internal,
            Self::InvalidGeoJson { .. } => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
