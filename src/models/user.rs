use serde::Deserialize;

use crate::error::{AppError, Result};

/// User row as stored in the `users` table
///
/// The password is kept in plain text and compared verbatim.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// Username/password pair submitted by the login and register forms
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Both fields must be non-empty before a registration is attempted
    pub fn require_filled(&self) -> Result<()> {
        if self.username.is_empty() || self.password.is_empty() {
            return Err(AppError::MissingCredentials);
        }
        Ok(())
    }
}
