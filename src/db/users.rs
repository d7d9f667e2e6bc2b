use sqlx::SqlitePool;

use crate::error::{AppError, Result};
use crate::models::User;

/// Insert a new user
///
/// Returns `AppError::UserAlreadyExists` if the username is taken; nothing is
/// written in that case.
pub async fn create_user(pool: &SqlitePool, username: &str, password: &str) -> Result<()> {
    let result = sqlx::query("INSERT INTO users (username, password) VALUES (?, ?)")
        .bind(username)
        .bind(password)
        .execute(pool)
        .await;

    match result {
        Ok(_) => {
            tracing::info!("New user registered: {}", username);
            Ok(())
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::info!("Username already exists: {}", username);
            Err(AppError::UserAlreadyExists)
        }
        Err(e) => Err(e.into()),
    }
}

/// Check an exact (username, password) match
pub async fn verify_user(pool: &SqlitePool, username: &str, password: &str) -> Result<bool> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, password FROM users WHERE username = ? AND password = ?",
    )
    .bind(username)
    .bind(password)
    .fetch_optional(pool)
    .await?;

    Ok(user.is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_duplicate_username_is_rejected() {
        let pool = test_pool().await;

        create_user(&pool, "alice", "secret").await.unwrap();
        let second = create_user(&pool, "alice", "other").await;
        assert!(matches!(second, Err(AppError::UserAlreadyExists)));

        // The first password still works, the rejected one does not
        assert!(verify_user(&pool, "alice", "secret").await.unwrap());
        assert!(!verify_user(&pool, "alice", "other").await.unwrap());
    }

    #[tokio::test]
    async fn test_verify_requires_exact_match() {
        let pool = test_pool().await;
        create_user(&pool, "alice", "secret").await.unwrap();

        assert!(verify_user(&pool, "alice", "secret").await.unwrap());
        assert!(!verify_user(&pool, "alice", "Secret").await.unwrap());
        assert!(!verify_user(&pool, "Alice", "secret").await.unwrap());
        assert!(!verify_user(&pool, "alice", "secret ").await.unwrap());
        assert!(!verify_user(&pool, "bob", "secret").await.unwrap());
    }
}
