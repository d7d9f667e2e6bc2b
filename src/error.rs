use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use thiserror::Error;

use crate::constants::{
    ERR_INCOMPLETE_PERIOD, ERR_INCORRECT_CREDENTIALS, ERR_MISSING_CREDENTIALS,
    ERR_USERNAME_EXISTS,
};
use crate::html;

/// Application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("{}", ERR_USERNAME_EXISTS)]
    UserAlreadyExists,

    #[error("{}", ERR_INCORRECT_CREDENTIALS)]
    InvalidCredentials,

    #[error("{}", ERR_MISSING_CREDENTIALS)]
    MissingCredentials,

    #[error("{}", ERR_INCOMPLETE_PERIOD)]
    IncompletePeriod,

    #[error("Unknown day: {0}")]
    InvalidDay(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Login required")]
    Unauthorized,
}

impl AppError {
    /// HTTP status reported for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Database(_) | AppError::Migration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UserAlreadyExists => StatusCode::CONFLICT,
            AppError::InvalidCredentials | AppError::Unauthorized => StatusCode::UNAUTHORIZED,
            AppError::MissingCredentials
            | AppError::IncompletePeriod
            | AppError::InvalidDay(_)
            | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Whether the message is safe and useful to show next to a form
    pub fn is_user_facing(&self) -> bool {
        !matches!(
            self,
            AppError::Database(_) | AppError::Migration(_) | AppError::Unauthorized
        )
    }
}

/// Implement IntoResponse to convert AppError into HTML responses
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match self {
            AppError::Unauthorized => return Redirect::to("/login").into_response(),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                "Internal server error".to_string()
            }
            AppError::Migration(ref e) => {
                tracing::error!("Migration error: {:?}", e);
                "Internal server error".to_string()
            }
            ref other => other.to_string(),
        };

        (self.status(), Html(html::error_page(&message))).into_response()
    }
}

/// Result type alias for application results
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::UserAlreadyExists.status(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::InvalidCredentials.status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::MissingCredentials.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::InvalidDay("sunday".to_string()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::Database(sqlx::Error::RowNotFound).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_redirects_to_login() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get("location").unwrap(),
            "/login"
        );
    }

    #[test]
    fn test_database_errors_are_not_user_facing() {
        assert!(!AppError::Database(sqlx::Error::RowNotFound).is_user_facing());
        assert!(AppError::UserAlreadyExists.is_user_facing());
        assert_eq!(
            AppError::UserAlreadyExists.to_string(),
            "Username already exists!"
        );
    }
}
