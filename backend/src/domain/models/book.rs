use chrono::{DateTime, NaiveDate, Utc};
use shared::{BookStatus, Genre};

/// Highest star rating a book can get
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: String,
    pub child_id: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub total_pages: Option<u32>,
    pub current_page: u32,
    pub status: BookStatus,
    pub rating: Option<u8>,
    pub start_date: Option<NaiveDate>,
    pub finish_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Book {
    pub fn generate_id() -> String {
        format!("book::{}", uuid::Uuid::new_v4())
    }

    pub fn is_finished(&self) -> bool {
        self.status == BookStatus::Finished
    }

    /// Move the book to `status`.
    ///
    /// Finishing keeps an explicit finish date if one is already set and
    /// otherwise stamps `today`. Leaving `finished` is a correction and clears
    /// the finish date. Transition legality is not checked here.
    pub fn set_status(&mut self, status: BookStatus, today: NaiveDate) {
        match status {
            BookStatus::ToRead => {
                self.start_date = None;
                self.finish_date = None;
            }
            BookStatus::Reading => {
                self.finish_date = None;
                if self.start_date.is_none() {
                    self.start_date = Some(today);
                }
            }
            BookStatus::Finished => {
                let finished_on = *self.finish_date.get_or_insert(today);
                if self.start_date.is_none() {
                    self.start_date = Some(finished_on);
                }
                if let Some(total) = self.total_pages {
                    self.current_page = total;
                }
            }
        }
        self.status = status;
    }

    /// Advance the page counter after a reading session on `day`.
    ///
    /// Returns `true` when the session carried the book to its last page.
    pub fn record_pages(&mut self, pages: u32, day: NaiveDate) -> bool {
        if self.status == BookStatus::ToRead {
            self.set_status(BookStatus::Reading, day);
        }
        self.move_to_page(self.current_page.saturating_add(pages), day)
    }

    /// Put the bookmark at `page`, capped at the last page.
    ///
    /// Any page past the first starts an unread book; reaching the last page
    /// finishes it. Returns `true` when this call finished the book.
    pub fn move_to_page(&mut self, page: u32, day: NaiveDate) -> bool {
        if page > 0 && self.status == BookStatus::ToRead {
            self.set_status(BookStatus::Reading, day);
        }

        match self.total_pages {
            Some(total) if page >= total => {
                self.current_page = total;
                if self.is_finished() {
                    false
                } else {
                    self.set_status(BookStatus::Finished, day);
                    true
                }
            }
            _ => {
                self.current_page = page;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_book(total_pages: Option<u32>) -> Book {
        let now = Utc::now();
        Book {
            id: Book::generate_id(),
            child_id: "child::1".to_string(),
            title: "O Pequeno Príncipe".to_string(),
            author: "Antoine de Saint-Exupéry".to_string(),
            genre: Genre::Fantasia,
            total_pages,
            current_page: 0,
            status: BookStatus::ToRead,
            rating: None,
            start_date: None,
            finish_date: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_finishing_stamps_date_and_fills_pages() {
        let mut book = sample_book(Some(96));
        book.set_status(BookStatus::Finished, date(2025, 3, 10));

        assert!(book.is_finished());
        assert_eq!(book.finish_date, Some(date(2025, 3, 10)));
        assert_eq!(book.start_date, Some(date(2025, 3, 10)));
        assert_eq!(book.current_page, 96);
    }

    #[test]
    fn test_finishing_keeps_explicit_finish_date() {
        let mut book = sample_book(None);
        book.finish_date = Some(date(2025, 1, 2));
        book.set_status(BookStatus::Finished, date(2025, 3, 10));
        assert_eq!(book.finish_date, Some(date(2025, 1, 2)));
    }

    #[test]
    fn test_reopening_clears_finish_date() {
        let mut book = sample_book(Some(50));
        book.set_status(BookStatus::Finished, date(2025, 3, 10));
        book.set_status(BookStatus::Reading, date(2025, 3, 11));

        assert_eq!(book.status, BookStatus::Reading);
        assert_eq!(book.finish_date, None);
        assert_eq!(book.start_date, Some(date(2025, 3, 10)));
    }

    #[test]
    fn test_record_pages_starts_and_finishes() {
        let mut book = sample_book(Some(40));

        assert!(!book.record_pages(15, date(2025, 5, 1)));
        assert_eq!(book.status, BookStatus::Reading);
        assert_eq!(book.start_date, Some(date(2025, 5, 1)));
        assert_eq!(book.current_page, 15);

        assert!(book.record_pages(30, date(2025, 5, 2)));
        assert_eq!(book.current_page, 40);
        assert_eq!(book.finish_date, Some(date(2025, 5, 2)));

        // Already finished, more pages change nothing
        assert!(!book.record_pages(5, date(2025, 5, 3)));
        assert_eq!(book.finish_date, Some(date(2025, 5, 2)));
    }

    #[test]
    fn test_record_pages_without_total_never_finishes() {
        let mut book = sample_book(None);
        assert!(!book.record_pages(500, date(2025, 5, 1)));
        assert_eq!(book.status, BookStatus::Reading);
        assert_eq!(book.current_page, 500);
    }

    #[test]
    fn test_move_to_last_page_finishes() {
        let mut book = sample_book(Some(60));

        assert!(!book.move_to_page(12, date(2025, 7, 1)));
        assert_eq!(book.status, BookStatus::Reading);

        assert!(book.move_to_page(60, date(2025, 7, 4)));
        assert!(book.is_finished());
        assert_eq!(book.finish_date, Some(date(2025, 7, 4)));
        assert_eq!(book.start_date, Some(date(2025, 7, 1)));
    }
}
