use anyhow::Context;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use std::env;

pub async fn establish_connection() -> anyhow::Result<SqlitePool> {
    let database_url =
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://scores.db?mode=rwc".to_string());

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .with_context(|| format!("failed to create pool for {}", database_url))
}

/// Idempotent schema setup, run once at startup. Never touches existing rows.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // AUTOINCREMENT keeps ids monotonic and never reused.
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS scores (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            player_name TEXT NOT NULL,
            points INTEGER NOT NULL,
            level INTEGER,
            kills INTEGER,
            achievements TEXT NOT NULL DEFAULT '[]'
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scores_player_name ON scores(player_name)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scores_points ON scores(points DESC)")
        .execute(pool)
        .await?;

    Ok(())
}
