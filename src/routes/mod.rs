pub mod auth;
pub mod health;
pub mod home;
pub mod session;
pub mod timetable;
pub mod validation;

pub use auth::{login, login_form, logout, register, register_form};
pub use health::health_check;
pub use home::home;
pub use session::CurrentUser;
pub use timetable::{edit_form, save_timetable, week_view};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::AppState;

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let log_requests = state.config.log_requests;

    let router = Router::new()
        .route("/", get(home))
        .route("/login", get(login_form).post(login))
        .route("/register", get(register_form).post(register))
        .route("/logout", post(logout))
        .route("/timetable", get(week_view))
        .route("/timetable/edit", get(edit_form).post(save_timetable))
        .route("/health", get(health_check))
        .with_state(state);

    if log_requests {
        router.layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
    } else {
        router
    }
}
