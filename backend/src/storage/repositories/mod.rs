pub mod achievement_repository;
pub mod book_repository;
pub mod child_repository;
pub mod family_repository;
pub mod reading_session_repository;

pub use achievement_repository::AchievementRepository;
pub use book_repository::BookRepository;
pub use child_repository::ChildRepository;
pub use family_repository::FamilyRepository;
pub use reading_session_repository::ReadingSessionRepository;
