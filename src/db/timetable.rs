use sqlx::{Executor, Sqlite, SqlitePool};

use crate::error::Result;
use crate::models::{Day, Period, TimetableEntry, WeekTimetable};

/// Delete every entry of one user's day
pub async fn clear_day_timetable<'e, E>(executor: E, username: &str, day: Day) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query("DELETE FROM timetable WHERE username = ? AND day = ?")
        .bind(username)
        .bind(day.as_str())
        .execute(executor)
        .await?;
    Ok(())
}

/// Insert a single entry
pub async fn add_timetable_entry<'e, E>(
    executor: E,
    username: &str,
    day: Day,
    start: &str,
    end: &str,
    subject: &str,
) -> Result<()>
where
    E: Executor<'e, Database = Sqlite>,
{
    sqlx::query(
        "INSERT INTO timetable (username, day, start_time, end_time, subject) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(username)
    .bind(day.as_str())
    .bind(start)
    .bind(end)
    .bind(subject)
    .execute(executor)
    .await?;
    Ok(())
}

/// Replace a day's entries with `periods` in one transaction
pub async fn replace_day_timetable(
    pool: &SqlitePool,
    username: &str,
    day: Day,
    periods: &[Period],
) -> Result<()> {
    let mut tx = pool.begin().await?;

    clear_day_timetable(&mut *tx, username, day).await?;
    for period in periods {
        add_timetable_entry(
            &mut *tx,
            username,
            day,
            &period.start,
            &period.end,
            &period.subject,
        )
        .await?;
    }

    tx.commit().await?;

    tracing::info!(
        "Saved {} periods for {} on {}",
        periods.len(),
        username,
        day
    );
    Ok(())
}

/// Load a user's whole week
///
/// Entries are sorted by `start_time` as text, so `"9:00"` sorts after
/// `"10:00"`. Equal start times keep insertion order.
pub async fn get_user_timetable(pool: &SqlitePool, username: &str) -> Result<WeekTimetable> {
    let rows = sqlx::query_as::<_, TimetableEntry>(
        r#"
        SELECT id, username, day, start_time, end_time, subject
        FROM timetable
        WHERE username = ?
        ORDER BY start_time, id
        "#,
    )
    .bind(username)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().collect())
}
