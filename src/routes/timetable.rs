use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use std::collections::HashMap;

use crate::constants::MSG_TIMETABLE_SAVED;
use crate::db;
use crate::error::{AppError, Result};
use crate::html::{self, Notice};
use crate::models::Day;
use crate::routes::session::CurrentUser;
use crate::routes::validation::{clamp_periods, parse_period_count, EditSubmission};
use crate::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct EditQuery {
    pub day: Option<String>,
    /// Kept as text so a cleared number input (`periods=`) is not a rejection
    pub periods: Option<String>,
}

/// Edit form for one day
///
/// The form always shows every saved entry of the day; `periods` can only
/// add blank rows, since a row left off the form would be deleted on save.
pub async fn edit_form(
    State(state): State<AppState>,
    CurrentUser(username): CurrentUser,
    Query(query): Query<EditQuery>,
) -> Result<Html<String>> {
    let day = match query.day.as_deref() {
        Some(raw) => raw.parse::<Day>()?,
        None => Day::Monday,
    };

    let week = db::get_user_timetable(&state.db, &username).await?;
    let saved = week.day(day);
    let requested = parse_period_count(query.periods.as_deref())?.unwrap_or(0);
    let periods = clamp_periods(requested.max(saved.len()));

    Ok(Html(html::edit_page(&username, day, saved, periods, None)))
}

/// Replace the chosen day's entries with the submitted rows
pub async fn save_timetable(
    State(state): State<AppState>,
    CurrentUser(username): CurrentUser,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response> {
    let submission = EditSubmission::from_fields(&fields)?;

    let periods = match submission.complete_periods() {
        Ok(periods) => periods,
        Err(e @ AppError::IncompletePeriod) => {
            tracing::info!("Incomplete timetable submission from {}", username);
            let notice = Notice::Warning(e.to_string());
            let page = html::edit_page(
                &username,
                submission.day,
                &submission.rows,
                submission.periods,
                Some(&notice),
            );
            return Ok((e.status(), Html(page)).into_response());
        }
        Err(e) => return Err(e),
    };

    db::replace_day_timetable(&state.db, &username, submission.day, &periods).await?;

    let notice = Notice::Success(MSG_TIMETABLE_SAVED.to_string());
    let page = html::edit_page(
        &username,
        submission.day,
        &periods,
        submission.periods,
        Some(&notice),
    );
    Ok(Html(page).into_response())
}

/// Every day with entries, as tables
pub async fn week_view(
    State(state): State<AppState>,
    CurrentUser(username): CurrentUser,
) -> Result<Html<String>> {
    let week = db::get_user_timetable(&state.db, &username).await?;
    Ok(Html(html::week_page(&username, &week)))
}
