use chrono::{DateTime, NaiveDate, Utc};

#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSession {
    pub id: String,
    pub child_id: String,
    pub book_id: String,
    pub date: NaiveDate,
    pub minutes: u32,
    pub pages_read: u32,
    pub created_at: DateTime<Utc>,
}

impl ReadingSession {
    pub fn generate_id() -> String {
        format!("session::{}", uuid::Uuid::new_v4())
    }
}

/// Aggregate reading effort for one child
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionTotals {
    pub sessions: u32,
    pub minutes: u32,
    pub pages: u32,
}
