use chrono::{DateTime, Utc};
use shared::{AchievementRequirement, Genre};

#[derive(Debug, Clone, PartialEq)]
pub struct Achievement {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement: AchievementRequirement,
    /// Position in the catalog; evaluation results follow this order
    pub sort_order: i64,
}

impl Achievement {
    pub fn id_for_code(code: &str) -> String {
        format!("achievement::{}", code)
    }
}

/// An achievement a child holds, with the moment it was awarded
#[derive(Debug, Clone, PartialEq)]
pub struct EarnedAchievement {
    pub achievement: Achievement,
    pub earned_at: DateTime<Utc>,
}

/// The catalog seeded into a fresh database.
pub fn default_catalog() -> Vec<Achievement> {
    use AchievementRequirement::*;

    let entries: [(&str, &str, &str, &str, AchievementRequirement); 12] = [
        ("primeiro_passo", "Primeiro Passo", "Registrou o primeiro livro no passaporte", "👣", BookCount { value: 1 }),
        ("leitor_curioso", "Leitor Curioso", "Chegou a 5 livros", "🔎", BookCount { value: 5 }),
        ("devorador_de_livros", "Devorador de Livros", "Chegou a 10 livros", "📚", BookCount { value: 10 }),
        ("biblioteca_viva", "Biblioteca Viva", "Chegou a 25 livros", "🏛️", BookCount { value: 25 }),
        ("explorador", "Explorador", "Leu livros de 3 gêneros diferentes", "🧭", GenreCount { value: 3 }),
        ("cartografo", "Cartógrafo", "Leu livros de 6 gêneros diferentes", "🗺️", GenreCount { value: 6 }),
        ("aventureiro", "Aventureiro", "Leu 3 livros de aventura", "⛵", GenreBooks { genre: Genre::Aventura, value: 3 }),
        ("sonhador", "Sonhador", "Leu 3 livros de fantasia", "🐉", GenreBooks { genre: Genre::Fantasia, value: 3 }),
        ("detetive", "Detetive", "Leu 3 livros de mistério", "🕵️", GenreBooks { genre: Genre::Misterio, value: 3 }),
        ("critico", "Crítico Literário", "Deu nota a 5 livros", "⭐", RatedBooks { value: 5 }),
        ("maratonista", "Maratonista do Mês", "Terminou 3 livros no mesmo mês", "🏃", MonthlyBooks { value: 3 }),
        ("super_maratonista", "Super Maratonista", "Terminou 6 livros no mesmo mês", "🚀", MonthlyBooks { value: 6 }),
    ];

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (code, name, description, icon, requirement))| Achievement {
            id: Achievement::id_for_code(code),
            code: code.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            icon: icon.to_string(),
            requirement,
            sort_order: index as i64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_catalog_codes_are_unique() {
        let catalog = default_catalog();
        let codes: HashSet<&str> = catalog.iter().map(|a| a.code.as_str()).collect();
        assert_eq!(codes.len(), catalog.len());
        assert_eq!(catalog[0].name, "Primeiro Passo");
        assert_eq!(catalog[0].requirement, AchievementRequirement::BookCount { value: 1 });
    }
}
