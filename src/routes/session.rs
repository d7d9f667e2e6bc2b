use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::constants::SESSION_COOKIE;
use crate::error::AppError;
use crate::security::{sign_session, verify_session};
use crate::AppState;

/// Username of the logged-in user, taken from the signed session cookie
///
/// Rejects with `AppError::Unauthorized`, which redirects to the login page.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub String);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar.get(SESSION_COOKIE).ok_or(AppError::Unauthorized)?;

        verify_session(token.value(), &state.config.session_secret)
            .map(CurrentUser)
            .ok_or(AppError::Unauthorized)
    }
}

/// Cookie that logs `username` in
pub fn session_cookie(username: &str, secret: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, sign_session(username, secret)))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Cookie that clears the session
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE).path("/").build()
}
