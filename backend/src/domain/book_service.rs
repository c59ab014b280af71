use anyhow::Result;
use chrono::{NaiveDate, Utc};
use shared::BookStatus;
use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::achievement_service::AchievementService;
use crate::domain::child_service::require_child;
use crate::domain::commands::book::{AddBookCommand, BookListQuery, BookMutationResult, UpdateBookCommand};
use crate::domain::error::DomainError;
use crate::domain::models::{Book, MAX_RATING};
use crate::storage::traits::{BookStorage, ChildStorage};

const MAX_TITLE_CHARS: usize = 200;
const MAX_AUTHOR_CHARS: usize = 200;

/// Service for a child's book shelf.
///
/// Every mutation that can change what a child qualifies for runs the
/// achievement check before returning.
#[derive(Clone)]
pub struct BookService {
    books: Arc<dyn BookStorage>,
    children: Arc<dyn ChildStorage>,
    achievement_service: AchievementService,
}

impl BookService {
    pub fn new(
        books: Arc<dyn BookStorage>,
        children: Arc<dyn ChildStorage>,
        achievement_service: AchievementService,
    ) -> Self {
        Self { books, children, achievement_service }
    }

    pub async fn add_book(&self, command: AddBookCommand) -> Result<BookMutationResult> {
        info!("Adding book '{}' for child {}", command.title, command.child_id);

        require_child(self.children.as_ref(), &command.child_id).await?;

        let today = Utc::now().date_naive();
        let title = Self::validate_title(&command.title)?;
        let author = Self::validate_author(command.author.as_deref().unwrap_or(""))?;
        Self::validate_rating(command.rating)?;
        Self::validate_total_pages(command.total_pages)?;

        // A finish date on its own means the book is already read
        let status = match (command.status, command.finish_date) {
            (Some(status), Some(_)) if status != BookStatus::Finished => {
                return Err(DomainError::validation("Only finished books can have a finish date").into());
            }
            (Some(status), _) => status,
            (None, Some(_)) => BookStatus::Finished,
            (None, None) => BookStatus::ToRead,
        };
        if let Some(finish_date) = command.finish_date {
            Self::validate_not_future(finish_date, today)?;
        }

        let now = Utc::now();
        let mut book = Book {
            id: Book::generate_id(),
            child_id: command.child_id,
            title,
            author,
            genre: command.genre,
            total_pages: command.total_pages,
            current_page: 0,
            status: BookStatus::ToRead,
            rating: command.rating,
            start_date: None,
            finish_date: command.finish_date,
            created_at: now,
            updated_at: now,
        };
        book.set_status(status, today);

        self.books.store_book(&book).await?;
        info!("Added book {} ({}) with status {}", book.title, book.id, book.status);

        let new_achievements = self.achievement_service.check_and_award(&book.child_id).await?;
        Ok(BookMutationResult { book, new_achievements })
    }

    pub async fn get_book(&self, book_id: &str) -> Result<Option<Book>> {
        let book = self.books.get_book(book_id).await?;
        if book.is_none() {
            warn!("Book not found: {}", book_id);
        }
        Ok(book)
    }

    /// A child's books, newest first, optionally filtered by status
    pub async fn list_books(&self, child_id: &str, query: BookListQuery) -> Result<Vec<Book>> {
        require_child(self.children.as_ref(), child_id).await?;

        let books: Vec<Book> = self
            .books
            .list_books(child_id)
            .await?
            .into_iter()
            .filter(|book| query.status.map_or(true, |status| book.status == status))
            .collect();

        info!("Found {} books for child {} (status filter: {:?})", books.len(), child_id, query.status);
        Ok(books)
    }

    pub async fn update_book(&self, book_id: &str, command: UpdateBookCommand) -> Result<BookMutationResult> {
        info!("Updating book {}: {:?}", book_id, command);

        let mut book = self
            .books
            .get_book(book_id)
            .await?
            .ok_or_else(|| DomainError::not_found("Book", book_id))?;
        let today = Utc::now().date_naive();

        if let Some(title) = command.title {
            book.title = Self::validate_title(&title)?;
        }
        if let Some(author) = command.author {
            book.author = Self::validate_author(&author)?;
        }
        if let Some(genre) = command.genre {
            book.genre = genre;
        }
        if let Some(rating) = command.rating {
            Self::validate_rating(rating)?;
            book.rating = rating;
        }
        if command.total_pages.is_some() {
            Self::validate_total_pages(command.total_pages)?;
            book.total_pages = command.total_pages;
        }
        if let Some(current_page) = command.current_page {
            Self::validate_current_page(current_page, book.total_pages)?;
            if book.move_to_page(current_page, today) {
                info!("📖 Book {} finished by moving to its last page", book.id);
            }
        }

        let target_status = command.status.unwrap_or(book.status);
        if let Some(finish_date) = command.finish_date {
            if target_status != BookStatus::Finished {
                return Err(DomainError::validation("Only finished books can have a finish date").into());
            }
            Self::validate_not_future(finish_date, today)?;
            book.finish_date = Some(finish_date);
        }
        if target_status != book.status || target_status == BookStatus::Finished {
            book.set_status(target_status, today);
        }

        Self::validate_current_page(book.current_page, book.total_pages)?;

        book.updated_at = Utc::now();
        self.books.update_book(&book).await?;
        info!("Updated book {} ({}), status {}", book.title, book.id, book.status);

        let new_achievements = self.achievement_service.check_and_award(&book.child_id).await?;
        Ok(BookMutationResult { book, new_achievements })
    }

    /// Remove a book. Achievements it helped earn are kept.
    pub async fn delete_book(&self, book_id: &str) -> Result<()> {
        info!("Deleting book: {}", book_id);

        if !self.books.delete_book(book_id).await? {
            return Err(DomainError::not_found("Book", book_id).into());
        }
        Ok(())
    }

    fn validate_title(title: &str) -> Result<String> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DomainError::validation("Book title cannot be empty").into());
        }
        if title.chars().count() > MAX_TITLE_CHARS {
            return Err(DomainError::validation(format!(
                "Book title cannot exceed {} characters",
                MAX_TITLE_CHARS
            ))
            .into());
        }
        Ok(title.to_string())
    }

    fn validate_author(author: &str) -> Result<String> {
        let author = author.trim();
        if author.chars().count() > MAX_AUTHOR_CHARS {
            return Err(DomainError::validation(format!(
                "Author cannot exceed {} characters",
                MAX_AUTHOR_CHARS
            ))
            .into());
        }
        Ok(author.to_string())
    }

    fn validate_rating(rating: Option<u8>) -> Result<()> {
        match rating {
            Some(stars) if !(1..=MAX_RATING).contains(&stars) => Err(DomainError::validation(format!(
                "Rating must be between 1 and {}",
                MAX_RATING
            ))
            .into()),
            _ => Ok(()),
        }
    }

    fn validate_total_pages(total_pages: Option<u32>) -> Result<()> {
        if total_pages == Some(0) {
            return Err(DomainError::validation("Total pages must be positive").into());
        }
        Ok(())
    }

    fn validate_current_page(current_page: u32, total_pages: Option<u32>) -> Result<()> {
        match total_pages {
            Some(total) if current_page > total => Err(DomainError::validation(format!(
                "Current page ({}) cannot be past the last page ({})",
                current_page, total
            ))
            .into()),
            _ => Ok(()),
        }
    }

    fn validate_not_future(date: NaiveDate, today: NaiveDate) -> Result<()> {
        if date > today {
            return Err(DomainError::validation("Finish date cannot be in the future").into());
        }
        Ok(())
    }
}
