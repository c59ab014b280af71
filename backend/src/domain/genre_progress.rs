//! Per-genre discovery counts for the reading map.

use std::collections::HashMap;

use shared::Genre;

use crate::domain::models::{Book, GenreDescriptor, GenreProgress};

/// One entry per catalog genre, in catalog order.
///
/// Books whose genre isn't in the catalog don't count towards any entry.
pub fn aggregate(books: &[Book], genre_catalog: &[GenreDescriptor]) -> Vec<GenreProgress> {
    let mut counts: HashMap<Genre, u32> = HashMap::new();
    for book in books {
        *counts.entry(book.genre).or_insert(0) += 1;
    }

    genre_catalog
        .iter()
        .map(|descriptor| {
            let count = counts.get(&descriptor.genre).copied().unwrap_or(0);
            GenreProgress {
                descriptor: *descriptor,
                count,
                discovered: count > 0,
            }
        })
        .collect()
}

/// Number of catalog genres with at least one book
pub fn discovered_count(progress: &[GenreProgress]) -> u32 {
    progress.iter().filter(|entry| entry.discovered).count() as u32
}
