//! In-memory user records

use chrono::Utc;
use parking_lot::Mutex;
use roster_core::{CreateUserRequest, User, UserId, UserStore};

use crate::error::{Result, StorageError};

const FIRST_USER_ID: UserId = 1;

#[derive(Debug)]
struct Inner {
    /// Live records in insertion order
    users: Vec<User>,
    next_id: UserId,
}

impl Inner {
    fn new() -> Self {
        Self {
            users: Vec::new(),
            next_id: FIRST_USER_ID,
        }
    }

    /// Scan in insertion order, email before username for each record
    fn check_unique(&self, request: &CreateUserRequest) -> Result<()> {
        for user in &self.users {
            if user.email == request.email {
                return Err(StorageError::DuplicateEmail(request.email.clone()));
            }
            if user.username == request.username {
                return Err(StorageError::DuplicateUsername(request.username.clone()));
            }
        }
        Ok(())
    }

    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id == id)
    }
}

/// User store backed by a mutex-guarded `Vec`
///
/// Lookups are linear scans. Identifiers are handed out from a counter that
/// only ever grows, so an identifier is never reused after a delete.
#[derive(Debug)]
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl MemoryUserStore {
    /// Create an empty store whose first identifier will be 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::new()),
        }
    }

    /// Insert a record built from an already validated request
    ///
    /// Uniqueness is checked against live records only, so the email or
    /// username of a deleted record may be taken again.
    pub fn create(&self, request: CreateUserRequest) -> Result<User> {
        let mut inner = self.inner.lock();
        inner.check_unique(&request)?;

        let id = inner.next_id;
        let user = User::from_request(id, request, Utc::now());
        inner.users.push(user.clone());
        inner.next_id += 1;

        Ok(user)
    }

    /// Get a copy of the record with `id`
    pub fn get(&self, id: UserId) -> Result<User> {
        let inner = self.inner.lock();
        inner
            .users
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or(StorageError::UserNotFound(id))
    }

    /// Snapshot of all records in insertion order
    pub fn list(&self) -> Vec<User> {
        self.inner.lock().users.clone()
    }

    /// Remove the record with `id`, keeping the order of the rest
    pub fn delete(&self, id: UserId) -> Result<()> {
        let mut inner = self.inner.lock();
        let index = inner.position(id).ok_or(StorageError::UserNotFound(id))?;
        inner.users.remove(index);
        Ok(())
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.inner.lock().users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every record and restart identifiers at 1
    #[cfg(any(test, feature = "test-utils"))]
    pub fn reset(&self) {
        *self.inner.lock() = Inner::new();
    }
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for MemoryUserStore {
    fn create(&self, request: CreateUserRequest) -> roster_core::Result<User> {
        Ok(MemoryUserStore::create(self, request)?)
    }

    fn get(&self, id: UserId) -> roster_core::Result<User> {
        Ok(MemoryUserStore::get(self, id)?)
    }

    fn list(&self) -> Vec<User> {
        MemoryUserStore::list(self)
    }

    fn delete(&self, id: UserId) -> roster_core::Result<()> {
        Ok(MemoryUserStore::delete(self, id)?)
    }
}
