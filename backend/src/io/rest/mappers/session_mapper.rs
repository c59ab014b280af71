use anyhow::Result;
use shared::{LogSessionRequest, LogSessionResponse, ReadingSession as SharedSession, SessionListResponse};

use super::achievement_mapper::AchievementMapper;
use super::book_mapper::BookMapper;
use super::{format_date, parse_optional_date};
use crate::domain::commands::session::{LogSessionCommand, LogSessionResult};
use crate::domain::models::ReadingSession as DomainSession;

pub struct SessionMapper;

impl SessionMapper {
    pub fn to_log_command(child_id: String, request: LogSessionRequest) -> Result<LogSessionCommand> {
        Ok(LogSessionCommand {
            child_id,
            book_id: request.book_id,
            date: parse_optional_date("date", request.date.as_deref())?,
            minutes: request.minutes,
            pages_read: request.pages_read,
        })
    }

    pub fn to_dto(domain: DomainSession) -> SharedSession {
        SharedSession {
            id: domain.id,
            child_id: domain.child_id,
            book_id: domain.book_id,
            date: format_date(domain.date),
            minutes: domain.minutes,
            pages_read: domain.pages_read,
            created_at: domain.created_at.to_rfc3339(),
        }
    }

    pub fn to_log_response(result: LogSessionResult) -> LogSessionResponse {
        LogSessionResponse {
            session: Self::to_dto(result.session),
            book: BookMapper::to_dto(result.book),
            new_achievements: AchievementMapper::to_dto_list(result.new_achievements),
        }
    }

    pub fn to_list_response(sessions: Vec<DomainSession>) -> SessionListResponse {
        SessionListResponse {
            sessions: sessions.into_iter().map(Self::to_dto).collect(),
        }
    }
}
