//! Shape and format checks for incoming requests
//!
//! Validation is purely structural. Uniqueness is enforced by the store at
//! write time, never here.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::CreateUserRequest;

/// Shortest accepted username, in characters
pub const USERNAME_MIN_LEN: usize = 3;
/// Longest accepted username, in characters
pub const USERNAME_MAX_LEN: usize = 50;
/// Longest accepted first or last name, in characters
pub const NAME_MAX_LEN: usize = 100;
/// Youngest accepted age
pub const AGE_MIN: i32 = 1;
/// Oldest accepted age
pub const AGE_MAX: i32 = 120;

/// Dot-joined atoms, `@`, then at least two dot-separated domain labels
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?",
        r"(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    ))
    .expect("email pattern is valid")
});

/// Check that `email` looks like `local@domain`
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

impl CreateUserRequest {
    /// Validate field shapes in declaration order
    ///
    /// Returns the first violation found. Lengths are counted in characters,
    /// not bytes.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let username_len = self.username.chars().count();
        if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username_len) {
            return Err(ValidationError::new(
                "username",
                format!(
                    "must be between {} and {} characters",
                    USERNAME_MIN_LEN, USERNAME_MAX_LEN
                ),
            ));
        }

        if self.email.is_empty() {
            return Err(ValidationError::new("email", "is required"));
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::new(
                "email",
                "must be a valid email address",
            ));
        }

        check_name("first_name", &self.first_name)?;
        check_name("last_name", &self.last_name)?;

        if !(AGE_MIN..=AGE_MAX).contains(&self.age) {
            return Err(ValidationError::new(
                "age",
                format!("must be between {} and {}", AGE_MIN, AGE_MAX),
            ));
        }

        Ok(())
    }
}

fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "is required"));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} characters", NAME_MAX_LEN),
        ));
    }
    Ok(())
}
