pub mod pool;
pub mod timetable;
pub mod users;

pub use pool::{create_pool, ping, run_migrations};
pub use timetable::{
    add_timetable_entry, clear_day_timetable, get_user_timetable, replace_day_timetable,
};
pub use users::{create_user, verify_user};

/// Database handle shared across handlers
pub type Db = sqlx::SqlitePool;

/// Open a database and bring its schema up to date
pub async fn open_database(database_url: &str) -> crate::error::Result<Db> {
    tracing::info!("Opening database at: {}", database_url);

    let pool = create_pool(database_url).await?;
    run_migrations(&pool).await?;

    tracing::info!("Database initialized successfully");

    Ok(pool)
}

#[cfg(test)]
pub(crate) async fn test_pool() -> Db {
    open_database("sqlite::memory:").await.unwrap()
}
