use anyhow::Result;
use shared::{Book as SharedBook, BookListResponse, BookResponse, CreateBookRequest, UpdateBookRequest};

use super::achievement_mapper::AchievementMapper;
use super::{format_date, parse_optional_date};
use crate::domain::commands::book::{AddBookCommand, BookMutationResult, UpdateBookCommand};
use crate::domain::models::Book as DomainBook;

pub struct BookMapper;

impl BookMapper {
    pub fn to_add_command(child_id: String, request: CreateBookRequest) -> Result<AddBookCommand> {
        Ok(AddBookCommand {
            child_id,
            title: request.title,
            author: request.author,
            genre: request.genre,
            total_pages: request.total_pages,
            status: request.status,
            rating: request.rating,
            finish_date: parse_optional_date("finish_date", request.finish_date.as_deref())?,
        })
    }

    pub fn to_update_command(request: UpdateBookRequest) -> Result<UpdateBookCommand> {
        Ok(UpdateBookCommand {
            title: request.title,
            author: request.author,
            genre: request.genre,
            total_pages: request.total_pages,
            current_page: request.current_page,
            status: request.status,
            rating: request.rating,
            finish_date: parse_optional_date("finish_date", request.finish_date.as_deref())?,
        })
    }

    pub fn to_dto(domain: DomainBook) -> SharedBook {
        SharedBook {
            id: domain.id,
            child_id: domain.child_id,
            title: domain.title,
            author: domain.author,
            genre: domain.genre,
            total_pages: domain.total_pages,
            current_page: domain.current_page,
            status: domain.status,
            rating: domain.rating,
            start_date: domain.start_date.map(format_date),
            finish_date: domain.finish_date.map(format_date),
            created_at: domain.created_at.to_rfc3339(),
            updated_at: domain.updated_at.to_rfc3339(),
        }
    }

    pub fn to_book_response(result: BookMutationResult) -> BookResponse {
        BookResponse {
            book: Self::to_dto(result.book),
            new_achievements: AchievementMapper::to_dto_list(result.new_achievements),
        }
    }

    pub fn to_list_response(books: Vec<DomainBook>) -> BookListResponse {
        BookListResponse {
            books: books.into_iter().map(Self::to_dto).collect(),
        }
    }
}
