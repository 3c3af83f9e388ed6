//! Roster Core
//!
//! Domain types, validation, and error handling for the Roster user service.
//!
//! This crate has no I/O of its own. It is shared by the storage layer and the
//! HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `CreateUserRequest`, `UserId`
//! - **Validation**: shape and format checks for incoming creation requests
//! - **Core Traits**: `UserStore`, the seam between handlers and storage
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::CreateUserRequest;
//!
//! let request = CreateUserRequest {
//!     username: "alice".to_string(),
//!     email: "alice@example.com".to_string(),
//!     first_name: "Alice".to_string(),
//!     last_name: "Liddell".to_string(),
//!     age: 30,
//! };
//!
//! assert!(request.validate().is_ok());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, RosterError, ValidationError};
pub use traits::UserStore;
pub use types::{CreateUserRequest, User, UserId};
