/// Core error types for Roster
use thiserror::Error;

use crate::types::UserId;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// A single failed shape check on an incoming request
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {reason}")]
pub struct ValidationError {
    /// JSON name of the offending field
    pub field: &'static str,

    /// Human readable reason
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for `field`
    pub fn new(field: &'static str, reason: impl Into<String>) -> Self {
        Self {
            field,
            reason: reason.into(),
        }
    }
}

/// Core error type for Roster
#[derive(Error, Debug)]
pub enum RosterError {
    /// Request failed shape validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Another live record already uses this email
    #[error("email already exists")]
    DuplicateEmail(String),

    /// Another live record already uses this username
    #[error("username already exists")]
    DuplicateUsername(String),

    /// User not found
    #[error("user not found")]
    UserNotFound(UserId),
}

impl RosterError {
    /// Whether this error is a uniqueness conflict
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::DuplicateEmail(_) | Self::DuplicateUsername(_))
    }
}
