use anyhow::{Context, Result};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;
use tracing::info;

use crate::domain::models::{default_catalog, Achievement};

/// DbConnection owns the SQLite pool shared by every repository
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Open (creating if needed) the database at `url` and bootstrap it
    pub async fn new(url: &str) -> Result<Self> {
        // Create database if it doesn't exist
        if !Sqlite::database_exists(url).await.unwrap_or(false) {
            info!("Creating database at {}", url);
            Sqlite::create_database(url)
                .await
                .with_context(|| format!("Failed to create database {}", url))?;
        }

        let pool = SqlitePool::connect(url)
            .await
            .with_context(|| format!("Failed to connect to {}", url))?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, setting up schema and seed data
    pub async fn from_pool(pool: SqlitePool) -> Result<Self> {
        Self::setup_schema(&pool).await?;
        Self::seed_achievements(&pool, &default_catalog()).await?;
        Ok(Self { pool: Arc::new(pool) })
    }

    /// Initialize an isolated in-memory database for tests
    #[cfg(test)]
    pub async fn init_test() -> Result<Self> {
        use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
        use std::str::FromStr;

        // One connection that never idles out, so the in-memory database lives
        // as long as the pool
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Get a reference to the connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS families (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                created_at TEXT NOT NULL
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS children (
                id TEXT PRIMARY KEY,
                family_id TEXT NOT NULL,
                name TEXT NOT NULL,
                birth_date TEXT,
                avatar TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (family_id) REFERENCES families (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_children_family_id
            ON children(family_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id TEXT PRIMARY KEY,
                child_id TEXT NOT NULL,
                title TEXT NOT NULL,
                author TEXT NOT NULL DEFAULT '',
                genre TEXT NOT NULL,
                total_pages INTEGER,
                current_page INTEGER NOT NULL DEFAULT 0,
                status TEXT NOT NULL CHECK (status IN ('to_read', 'reading', 'finished')),
                rating INTEGER CHECK (rating IS NULL OR (rating >= 1 AND rating <= 5)),
                start_date TEXT,
                finish_date TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_books_child_id
            ON books(child_id);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS reading_sessions (
                id TEXT PRIMARY KEY,
                child_id TEXT NOT NULL,
                book_id TEXT NOT NULL,
                date TEXT NOT NULL,
                minutes INTEGER NOT NULL,
                pages_read INTEGER NOT NULL DEFAULT 0,
                created_at TEXT NOT NULL,
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE,
                FOREIGN KEY (book_id) REFERENCES books (id) ON DELETE CASCADE
            );
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_reading_sessions_child_date
            ON reading_sessions(child_id, date DESC);
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS achievements (
                id TEXT PRIMARY KEY,
                code TEXT NOT NULL UNIQUE,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                icon TEXT NOT NULL,
                requirement TEXT NOT NULL,
                sort_order INTEGER NOT NULL DEFAULT 0
            );
            "#,
        )
        .execute(pool)
        .await?;

        // The unique pair is what keeps concurrent awards from duplicating
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS child_achievements (
                child_id TEXT NOT NULL,
                achievement_id TEXT NOT NULL,
                earned_at TEXT NOT NULL,
                PRIMARY KEY (child_id, achievement_id),
                FOREIGN KEY (child_id) REFERENCES children (id) ON DELETE CASCADE,
                FOREIGN KEY (achievement_id) REFERENCES achievements (id)
            );
            "#,
        )
        .execute(pool)
        .await?;

        Ok(())
    }

    /// Insert catalog entries that aren't present yet. Existing rows are left alone.
    async fn seed_achievements(pool: &SqlitePool, catalog: &[Achievement]) -> Result<()> {
        let mut tx = pool.begin().await?;
        let mut inserted = 0;

        for achievement in catalog {
            let requirement = serde_json::to_string(&achievement.requirement)?;
            let result = sqlx::query(
                r#"
                INSERT OR IGNORE INTO achievements (id, code, name, description, icon, requirement, sort_order)
                VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&achievement.id)
            .bind(&achievement.code)
            .bind(&achievement.name)
            .bind(&achievement.description)
            .bind(&achievement.icon)
            .bind(requirement)
            .bind(achievement.sort_order)
            .execute(&mut *tx)
            .await?;
            inserted += result.rows_affected();
        }

        tx.commit().await?;

        if inserted > 0 {
            info!("Seeded {} achievements", inserted);
        }
        Ok(())
    }
}
