//! Achievement rule evaluation.
//!
//! Given a child's books, the codes the child already holds and the catalog,
//! work out which achievements newly qualify. Requirements are always checked
//! against the whole current collection, so running this again after the
//! results are persisted returns nothing new. Persisting is the caller's job.

use chrono::{Datelike, NaiveDate, Utc};
use shared::AchievementRequirement;
use std::collections::HashSet;

use crate::domain::models::{Achievement, Book};

/// Evaluate the catalog using today's date (UTC) for monthly requirements.
pub fn evaluate(
    books: &[Book],
    already_earned: &HashSet<String>,
    catalog: &[Achievement],
) -> Vec<Achievement> {
    evaluate_on(books, already_earned, catalog, Utc::now().date_naive())
}

/// Evaluate the catalog as of `today`. Results keep catalog order.
pub fn evaluate_on(
    books: &[Book],
    already_earned: &HashSet<String>,
    catalog: &[Achievement],
    today: NaiveDate,
) -> Vec<Achievement> {
    catalog
        .iter()
        .filter(|achievement| !already_earned.contains(&achievement.code))
        .filter(|achievement| is_satisfied(&achievement.requirement, books, today))
        .cloned()
        .collect()
}

/// Whether `books` meet `requirement` as of `today`.
///
/// Unrecognised requirements are never satisfied.
pub fn is_satisfied(requirement: &AchievementRequirement, books: &[Book], today: NaiveDate) -> bool {
    match requirement {
        AchievementRequirement::BookCount { value } => reaches(books.len(), *value),
        AchievementRequirement::GenreCount { value } => {
            let distinct: HashSet<_> = books.iter().map(|book| book.genre).collect();
            reaches(distinct.len(), *value)
        }
        AchievementRequirement::GenreBooks { genre, value } => {
            let matching = books.iter().filter(|book| book.genre == *genre).count();
            reaches(matching, *value)
        }
        AchievementRequirement::RatedBooks { value } => {
            let rated = books.iter().filter(|book| book.rating.is_some()).count();
            reaches(rated, *value)
        }
        AchievementRequirement::MonthlyBooks { value } => {
            let this_month = books
                .iter()
                .filter_map(|book| book.finish_date)
                .filter(|finished| finished.year() == today.year() && finished.month() == today.month())
                .count();
            reaches(this_month, *value)
        }
        AchievementRequirement::Unknown => false,
    }
}

fn reaches(count: usize, threshold: u32) -> bool {
    count as u64 >= u64::from(threshold)
}
