//! Error types for projections and report generation

use thiserror::Error;

/// Failure raised by the projector or by input validation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Non-numeric or out-of-domain input
    #[error("invalid argument `{field}`: {reason}")]
    InvalidArgument { field: String, reason: String },
}

impl ProjectionError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ProjectionError::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &str {
        match self {
            ProjectionError::InvalidArgument { field, .. } => field,
        }
    }
}

/// Failure while assembling a consultant report
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    /// The text-generation collaborator could not produce a section
    #[error("failed to generate section `{title}`: {message}")]
    Generation { title: String, message: String },

    #[error("failed to write report table: {0}")]
    Table(#[from] csv::Error),
}
