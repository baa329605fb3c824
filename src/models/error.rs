use thiserror::Error;

/// Failures a caller is expected to tell apart. Everything else travels as a
/// plain `anyhow::Error`.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("no authenticated user (pass --user or set BODYMETRICS_USER)")]
    Unauthenticated,

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl Error {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }

    /// Machine-readable code used in the CLI error envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Unauthenticated => "unauthenticated",
            Self::InvalidInput { .. } => "invalid_input",
        }
    }
}
