use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::{Book, ReadingSession, SessionTotals};
use crate::storage::connection::DbConnection;
use crate::storage::repositories::book_repository::{BookRepository, BOOK_COLUMNS};
use crate::storage::traits::ReadingSessionStorage;

/// Repository for reading session operations
#[derive(Clone)]
pub struct ReadingSessionRepository {
    db: DbConnection,
}

impl ReadingSessionRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    fn from_row(row: &SqliteRow) -> Result<ReadingSession> {
        Ok(ReadingSession {
            id: row.try_get("id")?,
            child_id: row.try_get("child_id")?,
            book_id: row.try_get("book_id")?,
            date: row.try_get("date")?,
            minutes: row.try_get::<i64, _>("minutes")? as u32,
            pages_read: row.try_get::<i64, _>("pages_read")? as u32,
            created_at: row.try_get("created_at")?,
        })
    }
}

#[async_trait]
impl ReadingSessionStorage for ReadingSessionRepository {
    async fn record_session(&self, session: &ReadingSession) -> Result<(Book, bool)> {
        let mut tx = self.db.pool().begin().await?;

        // Insert first so the write lock is held before the book is read
        sqlx::query(
            r#"
            INSERT INTO reading_sessions (id, child_id, book_id, date, minutes, pages_read, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&session.id)
        .bind(&session.child_id)
        .bind(&session.book_id)
        .bind(session.date)
        .bind(i64::from(session.minutes))
        .bind(i64::from(session.pages_read))
        .bind(session.created_at)
        .execute(&mut *tx)
        .await?;

        let row = sqlx::query(&format!(
            "SELECT {} FROM books WHERE id = ? AND child_id = ?",
            BOOK_COLUMNS
        ))
        .bind(&session.book_id)
        .bind(&session.child_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| anyhow!("Book {} not found for child {}", session.book_id, session.child_id))?;
        let mut book = BookRepository::from_row(&row)?;

        let finished = book.record_pages(session.pages_read, session.date);
        book.updated_at = Utc::now();

        sqlx::query(
            r#"
            UPDATE books
            SET current_page = ?, status = ?, start_date = ?, finish_date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(i64::from(book.current_page))
        .bind(book.status.as_str())
        .bind(book.start_date)
        .bind(book.finish_date)
        .bind(book.updated_at)
        .bind(&book.id)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok((book, finished))
    }

    async fn list_sessions(&self, child_id: &str, book_id: Option<&str>) -> Result<Vec<ReadingSession>> {
        let query = if let Some(book_id) = book_id {
            sqlx::query(
                r#"
                SELECT id, child_id, book_id, date, minutes, pages_read, created_at
                FROM reading_sessions
                WHERE child_id = ? AND book_id = ?
                ORDER BY date DESC, created_at DESC
                "#,
            )
            .bind(child_id)
            .bind(book_id)
        } else {
            sqlx::query(
                r#"
                SELECT id, child_id, book_id, date, minutes, pages_read, created_at
                FROM reading_sessions
                WHERE child_id = ?
                ORDER BY date DESC, created_at DESC
                "#,
            )
            .bind(child_id)
        };

        let rows = query.fetch_all(self.db.pool()).await?;
        rows.iter().map(Self::from_row).collect()
    }

    async fn session_totals(&self, child_id: &str) -> Result<SessionTotals> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS sessions,
                   COALESCE(SUM(minutes), 0) AS minutes,
                   COALESCE(SUM(pages_read), 0) AS pages
            FROM reading_sessions
            WHERE child_id = ?
            "#,
        )
        .bind(child_id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(SessionTotals {
            sessions: row.try_get::<i64, _>("sessions")? as u32,
            minutes: row.try_get::<i64, _>("minutes")? as u32,
            pages: row.try_get::<i64, _>("pages")? as u32,
        })
    }
}
