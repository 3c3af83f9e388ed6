/// Storage-specific errors
use roster_core::{RosterError, UserId};
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// A live record already uses this email
    #[error("email already exists")]
    DuplicateEmail(String),

    /// A live record already uses this username
    #[error("username already exists")]
    DuplicateUsername(String),

    /// No live record with this identifier
    #[error("user not found")]
    UserNotFound(UserId),
}

impl From<StorageError> for RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::DuplicateEmail(email) => RosterError::DuplicateEmail(email),
            StorageError::DuplicateUsername(username) => RosterError::DuplicateUsername(username),
            StorageError::UserNotFound(id) => RosterError::UserNotFound(id),
        }
    }
}
