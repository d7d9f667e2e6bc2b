use axum::{extract::State, response::Html};
use chrono::{Datelike, Local};

use crate::db;
use crate::error::Result;
use crate::html;
use crate::models::{class_status, Day};
use crate::routes::session::CurrentUser;
use crate::AppState;

/// Home screen: current and next class for today, by server local time
pub async fn home(
    State(state): State<AppState>,
    CurrentUser(username): CurrentUser,
) -> Result<Html<String>> {
    let week = db::get_user_timetable(&state.db, &username).await?;

    let now = Local::now();
    let clock = now.format("%H:%M").to_string();

    let status = Day::from_weekday(now.weekday())
        .map(|day| week.day(day))
        .filter(|periods| !periods.is_empty())
        .map(|periods| class_status(periods, &clock));

    tracing::debug!("Home for {} at {}: {:?}", username, clock, status);

    Ok(Html(html::home_page(&username, status.as_ref())))
}
