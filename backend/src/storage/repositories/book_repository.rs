use anyhow::{anyhow, Result};
use async_trait::async_trait;
use shared::{BookStatus, Genre};
use sqlx::{sqlite::SqliteRow, Row};

use crate::domain::models::Book;
use crate::storage::connection::DbConnection;
use crate::storage::traits::BookStorage;

pub(crate) const BOOK_COLUMNS: &str = "id, child_id, title, author, genre, total_pages, current_page, status, \
     rating, start_date, finish_date, created_at, updated_at";

/// Repository for book operations
#[derive(Clone)]
pub struct BookRepository {
    db: DbConnection,
}

impl BookRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    pub(crate) fn from_row(row: &SqliteRow) -> Result<Book> {
        let status: String = row.try_get("status")?;
        let status = BookStatus::parse(&status)
            .ok_or_else(|| anyhow!("Unknown book status in database: {}", status))?;
        let genre: String = row.try_get("genre")?;

        Ok(Book {
            id: row.try_get("id")?,
            child_id: row.try_get("child_id")?,
            title: row.try_get("title")?,
            author: row.try_get("author")?,
            genre: Genre::parse(&genre),
            total_pages: row.try_get::<Option<i64>, _>("total_pages")?.map(|pages| pages as u32),
            current_page: row.try_get::<i64, _>("current_page")? as u32,
            status,
            rating: row.try_get::<Option<i64>, _>("rating")?.map(|stars| stars as u8),
            start_date: row.try_get("start_date")?,
            finish_date: row.try_get("finish_date")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

#[async_trait]
impl BookStorage for BookRepository {
    async fn store_book(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO books (id, child_id, title, author, genre, total_pages, current_page, status,
                               rating, start_date, finish_date, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&book.id)
        .bind(&book.child_id)
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.genre.as_str())
        .bind(book.total_pages.map(i64::from))
        .bind(i64::from(book.current_page))
        .bind(book.status.as_str())
        .bind(book.rating.map(i64::from))
        .bind(book.start_date)
        .bind(book.finish_date)
        .bind(book.created_at)
        .bind(book.updated_at)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        let row = sqlx::query(&format!("SELECT {} FROM books WHERE id = ?", BOOK_COLUMNS))
            .bind(book_id)
            .fetch_optional(self.db.pool())
            .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    async fn list_books(&self, child_id: &str) -> Result<Vec<Book>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM books WHERE child_id = ? ORDER BY created_at DESC, id ASC",
            BOOK_COLUMNS
        ))
        .bind(child_id)
        .fetch_all(self.db.pool())
        .await?;

        rows.iter().map(Self::from_row).collect()
    }

    async fn update_book(&self, book: &Book) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE books
            SET title = ?, author = ?, genre = ?, total_pages = ?, current_page = ?, status = ?,
                rating = ?, start_date = ?, finish_date = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(book.genre.as_str())
        .bind(book.total_pages.map(i64::from))
        .bind(i64::from(book.current_page))
        .bind(book.status.as_str())
        .bind(book.rating.map(i64::from))
        .bind(book.start_date)
        .bind(book.finish_date)
        .bind(book.updated_at)
        .bind(&book.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    async fn delete_book(&self, book_id: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(book_id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn count_finished_books(&self, child_id: &str) -> Result<u32> {
        let row = sqlx::query(
            r#"
            SELECT COUNT(*) AS total
            FROM books
            WHERE child_id = ? AND status = 'finished'
            "#,
        )
        .bind(child_id)
        .fetch_one(self.db.pool())
        .await?;

        let total: i64 = row.try_get("total")?;
        Ok(total as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Child, Family};
    use crate::storage::repositories::{ChildRepository, FamilyRepository};
    use crate::storage::traits::{ChildStorage, FamilyStorage};
    use chrono::{NaiveDate, Utc};

    async fn setup_child(db: &DbConnection) -> String {
        let now = Utc::now();
        let family = Family { id: Family::generate_id(), name: "Souza".to_string(), created_at: now };
        FamilyRepository::new(db.clone()).store_family(&family).await.unwrap();

        let child = Child {
            id: Child::generate_id(),
            family_id: family.id,
            name: "Lia".to_string(),
            birth_date: NaiveDate::from_ymd_opt(2017, 4, 2),
            avatar: "🦊".to_string(),
            created_at: now,
            updated_at: now,
        };
        ChildRepository::new(db.clone()).store_child(&child).await.unwrap();
        child.id
    }

    fn new_book(child_id: &str, genre: Genre, status: BookStatus) -> Book {
        let now = Utc::now();
        Book {
            id: Book::generate_id(),
            child_id: child_id.to_string(),
            title: "Reinações de Narizinho".to_string(),
            author: "Monteiro Lobato".to_string(),
            genre,
            total_pages: Some(120),
            current_page: 0,
            status,
            rating: None,
            start_date: None,
            finish_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_book_round_trips_through_storage() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let child_id = setup_child(&db).await;
        let repo = BookRepository::new(db);

        let mut book = new_book(&child_id, Genre::ContosDeFadas, BookStatus::ToRead);
        repo.store_book(&book).await.unwrap();
        let stored = repo.get_book(&book.id).await.unwrap().unwrap();
        assert_eq!(stored.title, book.title);
        assert_eq!(stored.genre, Genre::ContosDeFadas);
        assert_eq!(stored.status, BookStatus::ToRead);
        assert_eq!(stored.total_pages, Some(120));
        assert_eq!(stored.rating, None);

        book.set_status(BookStatus::Finished, NaiveDate::from_ymd_opt(2025, 2, 14).unwrap());
        book.rating = Some(4);
        repo.update_book(&book).await.unwrap();

        let stored = repo.get_book(&book.id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookStatus::Finished);
        assert_eq!(stored.rating, Some(4));
        assert_eq!(stored.current_page, 120);
        assert_eq!(stored.finish_date, NaiveDate::from_ymd_opt(2025, 2, 14));
    }

    #[tokio::test]
    async fn test_count_finished_and_delete() {
        let db = DbConnection::init_test().await.expect("Failed to create test database");
        let child_id = setup_child(&db).await;
        let repo = BookRepository::new(db);

        let finished = new_book(&child_id, Genre::Humor, BookStatus::Finished);
        repo.store_book(&finished).await.unwrap();
        repo.store_book(&new_book(&child_id, Genre::Humor, BookStatus::Reading)).await.unwrap();
        repo.store_book(&new_book(&child_id, Genre::Poesia, BookStatus::Finished)).await.unwrap();

        assert_eq!(repo.list_books(&child_id).await.unwrap().len(), 3);
        assert_eq!(repo.count_finished_books(&child_id).await.unwrap(), 2);

        assert!(repo.delete_book(&finished.id).await.unwrap());
        assert!(!repo.delete_book(&finished.id).await.unwrap());
        assert_eq!(repo.count_finished_books(&child_id).await.unwrap(), 1);
    }
}
