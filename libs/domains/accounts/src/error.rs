use std::error::Error as StdError;

use thiserror::Error;

/// Client-facing validation failures.
///
/// These are returned as values by the validation composite, never as `Err`,
/// and always surface as a 400 response. The Display strings are the exact
/// messages the client sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing param: {0}")]
    MissingParam(String),

    #[error("Invalid param: {0}")]
    InvalidParam(String),
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingParam(field.into())
    }

    pub fn invalid(field: impl Into<String>) -> Self {
        Self::InvalidParam(field.into())
    }
}

/// Infrastructure failures: hashing, persistence, or a broken email checker.
///
/// Propagated with `?` through the use case and caught exactly once at the
/// controller boundary, where they become a 500 response. The client only
/// ever sees a generic message; the detail lives in [`AccountError::stack`]
/// for the log repository.
#[derive(Debug, Error)]
pub enum AccountError {
    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    #[error("Email check failed: {0}")]
    EmailCheck(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type AccountResult<T> = Result<T, AccountError>;

impl AccountError {
    /// Render the full source chain for error logging.
    ///
    /// The closest thing a Rust error has to the stack string the log
    /// repository stores: the top-level message followed by each source,
    /// one `caused by:` line per level.
    pub fn stack(&self) -> String {
        let mut rendered = self.to_string();
        let mut source = self.source();
        while let Some(cause) = source {
            rendered.push_str("\ncaused by: ");
            rendered.push_str(&cause.to_string());
            source = cause.source();
        }
        rendered
    }
}
