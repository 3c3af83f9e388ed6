//! Roster Storage
//!
//! Process-local, non-persistent storage for user records.
//!
//! Records live in memory behind a single mutex and vanish when the process
//! exits. Every operation is one critical section, so the uniqueness check
//! and the insert of a create can never interleave with another writer.
//!
//! # Example
//!
//! ```rust
//! use roster_core::CreateUserRequest;
//! use roster_storage::MemoryUserStore;
//!
//! let store = MemoryUserStore::new();
//! let user = store
//!     .create(CreateUserRequest {
//!         username: "alice".to_string(),
//!         email: "alice@x.com".to_string(),
//!         first_name: "Alice".to_string(),
//!         last_name: "Liddell".to_string(),
//!         age: 30,
//!     })
//!     .unwrap();
//!
//! assert_eq!(user.id, 1);
//! assert_eq!(store.list().len(), 1);
//! ```

mod error;

pub mod users;

pub use error::{Result, StorageError};
pub use users::MemoryUserStore;
