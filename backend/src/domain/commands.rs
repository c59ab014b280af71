//! Domain-level command and result types.
//!
//! Services take and return these; they never leave the backend. The REST
//! layer maps the public DTOs in the `shared` crate onto them.

pub mod family {
    #[derive(Debug, Clone)]
    pub struct CreateFamilyCommand {
        pub name: String,
    }
}

pub mod child {
    use chrono::NaiveDate;

    #[derive(Debug, Clone)]
    pub struct CreateChildCommand {
        pub family_id: String,
        pub name: String,
        pub birth_date: Option<NaiveDate>,
        pub avatar: Option<String>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct UpdateChildCommand {
        pub name: Option<String>,
        pub birth_date: Option<NaiveDate>,
        pub avatar: Option<String>,
    }
}

pub mod book {
    use chrono::NaiveDate;
    use shared::{BookStatus, Genre};

    use crate::domain::models::{Achievement, Book};

    #[derive(Debug, Clone)]
    pub struct AddBookCommand {
        pub child_id: String,
        pub title: String,
        pub author: Option<String>,
        pub genre: Genre,
        pub total_pages: Option<u32>,
        pub status: Option<BookStatus>,
        pub rating: Option<u8>,
        pub finish_date: Option<NaiveDate>,
    }

    #[derive(Debug, Clone, Default)]
    pub struct UpdateBookCommand {
        pub title: Option<String>,
        pub author: Option<String>,
        pub genre: Option<Genre>,
        pub total_pages: Option<u32>,
        pub current_page: Option<u32>,
        pub status: Option<BookStatus>,
        /// `Some(None)` clears the rating
        pub rating: Option<Option<u8>>,
        pub finish_date: Option<NaiveDate>,
    }

    /// Query for listing a child's books
    #[derive(Debug, Clone, Default)]
    pub struct BookListQuery {
        pub status: Option<BookStatus>,
    }

    /// A stored book plus whatever the change unlocked
    #[derive(Debug, Clone)]
    pub struct BookMutationResult {
        pub book: Book,
        pub new_achievements: Vec<Achievement>,
    }
}

pub mod session {
    use chrono::NaiveDate;

    use crate::domain::models::{Achievement, Book, ReadingSession};

    #[derive(Debug, Clone)]
    pub struct LogSessionCommand {
        pub child_id: String,
        pub book_id: String,
        pub date: Option<NaiveDate>,
        pub minutes: u32,
        pub pages_read: Option<u32>,
    }

    #[derive(Debug, Clone)]
    pub struct LogSessionResult {
        pub session: ReadingSession,
        pub book: Book,
        pub new_achievements: Vec<Achievement>,
    }
}

pub mod progress {
    use chrono::{DateTime, Utc};

    use crate::domain::models::{Achievement, Child, GenreProgress, LevelProgress};

    #[derive(Debug, Clone, Default, PartialEq, Eq)]
    pub struct ReadingSummary {
        pub child_id: String,
        pub total_books: u32,
        pub finished_books: u32,
        pub reading_books: u32,
        pub to_read_books: u32,
        pub rated_books: u32,
        pub sessions: u32,
        pub minutes_read: u32,
        pub pages_read: u32,
        pub achievements_earned: u32,
    }

    /// A catalog entry as the passport shows it
    #[derive(Debug, Clone)]
    pub struct PassportEntry {
        pub achievement: Achievement,
        pub earned_at: Option<DateTime<Utc>>,
    }

    #[derive(Debug, Clone)]
    pub struct Passport {
        pub child: Child,
        pub summary: ReadingSummary,
        pub level: LevelProgress,
        pub genres: Vec<GenreProgress>,
        pub achievements: Vec<PassportEntry>,
    }
}
