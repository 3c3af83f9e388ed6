/// User domain types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identifier, assigned by the store starting at 1
pub type UserId = i64;

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name, unique across live records
    pub username: String,

    /// Contact email, unique across live records
    pub email: String,

    /// Given name, never empty
    pub first_name: String,

    /// Family name, never empty
    pub last_name: String,

    /// Age in years, 1 to 120
    pub age: i32,

    /// Creation timestamp, never changes after insert
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Build a new record from a request, stamping both timestamps with `now`
    pub fn from_request(id: UserId, request: CreateUserRequest, now: DateTime<Utc>) -> Self {
        Self {
            id,
            username: request.username,
            email: request.email,
            first_name: request.first_name,
            last_name: request.last_name,
            age: request.age,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Payload for creating a user
///
/// Call [`CreateUserRequest::validate`] before handing it to a store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    /// 3 to 50 characters
    pub username: String,
    /// `local@domain` address
    pub email: String,
    /// 1 to 100 characters
    pub first_name: String,
    /// 1 to 100 characters
    pub last_name: String,
    /// Age in years, 1 to 120
    pub age: i32,
}
