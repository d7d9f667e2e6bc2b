use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::cookie::CookieJar;

use crate::constants::MSG_REGISTERED;
use crate::db;
use crate::error::{AppError, Result};
use crate::html::{self, Notice};
use crate::models::Credentials;
use crate::routes::session::{removal_cookie, session_cookie};
use crate::AppState;

pub async fn login_form() -> Html<String> {
    Html(html::login_page(None, ""))
}

pub async fn register_form() -> Html<String> {
    Html(html::register_page(None, ""))
}

/// Log in with a username and password
///
/// On an exact match the signed session cookie is set and the browser is sent
/// home. Otherwise the form is shown again with an error and no cookie changes.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(credentials): Form<Credentials>,
) -> Result<Response> {
    if db::verify_user(&state.db, &credentials.username, &credentials.password).await? {
        tracing::info!("User logged in: {}", credentials.username);
        let cookie = session_cookie(&credentials.username, &state.config.session_secret);
        return Ok((jar.add(cookie), Redirect::to("/")).into_response());
    }

    tracing::warn!("Failed login attempt for {}", credentials.username);
    let error = AppError::InvalidCredentials;
    let notice = Notice::Error(error.to_string());
    Ok((
        error.status(),
        Html(html::login_page(Some(&notice), &credentials.username)),
    )
        .into_response())
}

/// Register a new user
///
/// Empty fields and taken usernames are reported on the form; neither writes
/// anything.
pub async fn register(
    State(state): State<AppState>,
    Form(credentials): Form<Credentials>,
) -> Result<Response> {
    let outcome = match credentials.require_filled() {
        Ok(()) => {
            db::create_user(&state.db, &credentials.username, &credentials.password).await
        }
        Err(e) => Err(e),
    };

    let notice = match outcome {
        Ok(()) => {
            let notice = Notice::Success(MSG_REGISTERED.to_string());
            return Ok(Html(html::register_page(Some(&notice), "")).into_response());
        }
        Err(e @ AppError::MissingCredentials) => (e.status(), Notice::Warning(e.to_string())),
        Err(e) if e.is_user_facing() => (e.status(), Notice::Error(e.to_string())),
        Err(e) => return Err(e),
    };

    let (status, notice) = notice;
    Ok((
        status,
        Html(html::register_page(Some(&notice), &credentials.username)),
    )
        .into_response())
}

/// Clear the session and return to the login page
pub async fn logout(jar: CookieJar) -> impl IntoResponse {
    (jar.remove(removal_cookie()), Redirect::to("/login"))
}
