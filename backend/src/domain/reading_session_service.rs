use anyhow::Result;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

use crate::domain::achievement_service::AchievementService;
use crate::domain::child_service::require_child;
use crate::domain::commands::session::{LogSessionCommand, LogSessionResult};
use crate::domain::error::DomainError;
use crate::domain::models::ReadingSession;
use crate::storage::traits::{BookStorage, ChildStorage, ReadingSessionStorage};

const MAX_SESSION_MINUTES: u32 = 600;

/// Service for logging time spent reading.
///
/// A session moves its book along: pages advance, an unread book becomes
/// `reading`, and reaching the last page finishes it.
#[derive(Clone)]
pub struct ReadingSessionService {
    sessions: Arc<dyn ReadingSessionStorage>,
    books: Arc<dyn BookStorage>,
    children: Arc<dyn ChildStorage>,
    achievement_service: AchievementService,
}

impl ReadingSessionService {
    pub fn new(
        sessions: Arc<dyn ReadingSessionStorage>,
        books: Arc<dyn BookStorage>,
        children: Arc<dyn ChildStorage>,
        achievement_service: AchievementService,
    ) -> Self {
        Self { sessions, books, children, achievement_service }
    }

    pub async fn log_session(&self, command: LogSessionCommand) -> Result<LogSessionResult> {
        info!(
            "Logging session for child {} on book {}: {} min, {:?} pages",
            command.child_id, command.book_id, command.minutes, command.pages_read
        );

        if command.minutes == 0 || command.minutes > MAX_SESSION_MINUTES {
            return Err(DomainError::validation(format!(
                "Minutes must be between 1 and {}",
                MAX_SESSION_MINUTES
            ))
            .into());
        }

        let today = Utc::now().date_naive();
        let date = command.date.unwrap_or(today);
        if date > today {
            return Err(DomainError::validation("Session date cannot be in the future").into());
        }

        require_child(self.children.as_ref(), &command.child_id).await?;
        let book = self
            .books
            .get_book(&command.book_id)
            .await?
            .filter(|book| book.child_id == command.child_id)
            .ok_or_else(|| DomainError::not_found("Book", &command.book_id))?;

        let session = ReadingSession {
            id: ReadingSession::generate_id(),
            child_id: command.child_id,
            book_id: book.id,
            date,
            minutes: command.minutes,
            pages_read: command.pages_read.unwrap_or(0),
            created_at: Utc::now(),
        };

        // The book is re-read inside the write so concurrent sessions both count
        let (book, finished) = self.sessions.record_session(&session).await?;
        if finished {
            info!("📖 Book {} finished by reading session {}", book.id, session.id);
        }

        let new_achievements = self.achievement_service.check_and_award(&session.child_id).await?;
        Ok(LogSessionResult { session, book, new_achievements })
    }

    /// Sessions for a child, optionally narrowed to one book
    pub async fn list_sessions(&self, child_id: &str, book_id: Option<&str>) -> Result<Vec<ReadingSession>> {
        require_child(self.children.as_ref(), child_id).await?;

        let sessions = self.sessions.list_sessions(child_id, book_id).await?;
        info!("Found {} sessions for child {}", sessions.len(), child_id);
        Ok(sessions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::commands::book::AddBookCommand;
    use crate::test_utils::TestEnvironment;
    use chrono::Duration;
    use shared::{BookStatus, Genre};

    async fn add_book(env: &TestEnvironment, child_id: &str, total_pages: Option<u32>) -> String {
        env.state
            .book_service
            .add_book(AddBookCommand {
                child_id: child_id.to_string(),
                title: "Reinações de Narizinho".to_string(),
                author: Some("Monteiro Lobato".to_string()),
                genre: Genre::Fantasia,
                total_pages,
                status: None,
                rating: None,
                finish_date: None,
            })
            .await
            .unwrap()
            .book
            .id
    }

    fn session(child_id: &str, book_id: &str, minutes: u32, pages: Option<u32>) -> LogSessionCommand {
        LogSessionCommand {
            child_id: child_id.to_string(),
            book_id: book_id.to_string(),
            date: None,
            minutes,
            pages_read: pages,
        }
    }

    #[tokio::test]
    async fn test_session_starts_and_finishes_book() {
        let env = TestEnvironment::new().await.unwrap();
        let (_, child_id) = env.create_child("Lia").await;
        let book_id = add_book(&env, &child_id, Some(50)).await;
        let service = &env.state.reading_session_service;

        let first = service.log_session(session(&child_id, &book_id, 20, Some(30))).await.unwrap();
        assert_eq!(first.book.status, BookStatus::Reading);
        assert_eq!(first.book.current_page, 30);
        assert_eq!(first.book.start_date, Some(Utc::now().date_naive()));

        let second = service.log_session(session(&child_id, &book_id, 25, Some(40))).await.unwrap();
        assert_eq!(second.book.status, BookStatus::Finished);
        assert_eq!(second.book.current_page, 50);
        assert_eq!(second.book.finish_date, Some(Utc::now().date_naive()));

        let stored = env.state.book_service.get_book(&book_id).await.unwrap().unwrap();
        assert_eq!(stored.status, BookStatus::Finished);

        let sessions = service.list_sessions(&child_id, Some(&book_id)).await.unwrap();
        assert_eq!(sessions.len(), 2);
    }

    #[tokio::test]
    async fn test_session_validation() {
        let env = TestEnvironment::new().await.unwrap();
        let (_, child_id) = env.create_child("Lia").await;
        let book_id = add_book(&env, &child_id, None).await;
        let service = &env.state.reading_session_service;

        let mut future = session(&child_id, &book_id, 10, None);
        future.date = Some(Utc::now().date_naive() + Duration::days(2));

        for command in [session(&child_id, &book_id, 0, None), session(&child_id, &book_id, 601, None), future] {
            let err = service.log_session(command).await.unwrap_err();
            assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::Validation(_))));
        }
    }

    #[tokio::test]
    async fn test_book_must_belong_to_child() {
        let env = TestEnvironment::new().await.unwrap();
        let (family_id, owner) = env.create_child("Lia").await;
        let book_id = add_book(&env, &owner, None).await;
        let other = env.add_child(&family_id, "Téo").await;

        let err = env
            .state
            .reading_session_service
            .log_session(session(&other, &book_id, 15, Some(3)))
            .await
            .unwrap_err();
        assert!(matches!(err.downcast_ref::<DomainError>(), Some(DomainError::NotFound(_))));
        assert!(env.state.reading_session_service.list_sessions(&other, None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_sessions_both_advance_pages() {
        let env = TestEnvironment::new().await.unwrap();
        let (_, child_id) = env.create_child("Lia").await;
        let book_id = add_book(&env, &child_id, Some(100)).await;
        let service = &env.state.reading_session_service;

        let (first, second) = tokio::join!(
            service.log_session(session(&child_id, &book_id, 10, Some(10))),
            service.log_session(session(&child_id, &book_id, 10, Some(10))),
        );
        first.unwrap();
        second.unwrap();

        let stored = env.state.book_service.get_book(&book_id).await.unwrap().unwrap();
        assert_eq!(stored.current_page, 20);
        assert_eq!(stored.status, BookStatus::Reading);

        let sessions = service.list_sessions(&child_id, Some(&book_id)).await.unwrap();
        assert_eq!(sessions.iter().map(|s| s.pages_read).sum::<u32>(), 20);
    }
}
