use shared::{
    GenreProgress as SharedGenreProgress, GenreProgressResponse, LevelProgress as SharedLevelProgress,
    MapLevel, PassportAchievement, PassportResponse, ReadingSummary as SharedReadingSummary,
};

use super::achievement_mapper::AchievementMapper;
use super::child_mapper::ChildMapper;
use crate::domain::commands::progress::{Passport, PassportEntry, ReadingSummary};
use crate::domain::genre_progress::discovered_count;
use crate::domain::models::{GenreProgress, LevelProgress, LevelThreshold};

pub struct ProgressMapper;

impl ProgressMapper {
    pub fn to_genre_dto(domain: GenreProgress) -> SharedGenreProgress {
        SharedGenreProgress {
            genre: domain.descriptor.genre,
            name: domain.descriptor.name.to_string(),
            icon: domain.descriptor.icon.to_string(),
            theme: domain.descriptor.theme.to_string(),
            count: domain.count,
            discovered: domain.discovered,
        }
    }

    pub fn to_genre_response(genres: Vec<GenreProgress>) -> GenreProgressResponse {
        GenreProgressResponse {
            discovered_count: discovered_count(&genres),
            total_genres: genres.len() as u32,
            genres: genres.into_iter().map(Self::to_genre_dto).collect(),
        }
    }

    fn to_map_level(threshold: LevelThreshold) -> MapLevel {
        MapLevel {
            level: threshold.level,
            min_value: threshold.min_value,
            name: threshold.name.to_string(),
            icon: threshold.icon.to_string(),
            description: threshold.description.to_string(),
        }
    }

    pub fn to_level_dto(domain: LevelProgress) -> SharedLevelProgress {
        SharedLevelProgress {
            value: domain.value,
            current_level: Self::to_map_level(domain.current),
            next_level: domain.next.map(Self::to_map_level),
            fraction: domain.fraction,
        }
    }

    pub fn to_summary_dto(domain: ReadingSummary) -> SharedReadingSummary {
        SharedReadingSummary {
            child_id: domain.child_id,
            total_books: domain.total_books,
            finished_books: domain.finished_books,
            reading_books: domain.reading_books,
            to_read_books: domain.to_read_books,
            rated_books: domain.rated_books,
            sessions: domain.sessions,
            minutes_read: domain.minutes_read,
            pages_read: domain.pages_read,
            achievements_earned: domain.achievements_earned,
        }
    }

    fn to_passport_achievement(entry: PassportEntry) -> PassportAchievement {
        PassportAchievement {
            earned: entry.earned_at.is_some(),
            earned_at: entry.earned_at.map(|at| at.to_rfc3339()),
            achievement: AchievementMapper::to_dto(entry.achievement),
        }
    }

    pub fn to_passport_response(passport: Passport) -> PassportResponse {
        PassportResponse {
            child: ChildMapper::to_dto(passport.child),
            summary: Self::to_summary_dto(passport.summary),
            level: Self::to_level_dto(passport.level),
            genres: passport.genres.into_iter().map(Self::to_genre_dto).collect(),
            achievements: passport
                .achievements
                .into_iter()
                .map(Self::to_passport_achievement)
                .collect(),
        }
    }
}
