/// Core traits for Roster
use crate::error::Result;
use crate::types::{CreateUserRequest, User, UserId};

/// Storage for user records
///
/// Implementations own the record collection and the identifier counter and
/// must serialize every operation, so that the uniqueness check and the insert
/// in [`UserStore::create`] happen atomically.
///
/// All methods are synchronous. Returned records are copies; mutating them
/// never affects stored state.
pub trait UserStore: Send + Sync {
    /// Insert a new record built from an already validated request
    ///
    /// # Errors
    /// Returns `DuplicateEmail` or `DuplicateUsername` if a live record
    /// collides. Nothing is mutated on error.
    fn create(&self, request: CreateUserRequest) -> Result<User>;

    /// Get a record by identifier
    ///
    /// # Errors
    /// Returns `UserNotFound` if no live record has this identifier
    fn get(&self, id: UserId) -> Result<User>;

    /// Snapshot of all live records in insertion order
    fn list(&self) -> Vec<User>;

    /// Remove a record by identifier, keeping the order of the rest
    ///
    /// # Errors
    /// Returns `UserNotFound` if no live record has this identifier
    fn delete(&self, id: UserId) -> Result<()>;
}
