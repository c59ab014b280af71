//! Wire types shared between the Passaporte do Leitor API and its web client.
//!
//! Everything here is plain serde data: dates travel as `YYYY-MM-DD` strings
//! and timestamps as RFC 3339 strings. The backend maps these to its own
//! domain models.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;

/// Book genre. Strings the client sends that are not a known genre become
/// [`Genre::Outro`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Genre {
    Aventura,
    Fantasia,
    Misterio,
    Ciencia,
    Historia,
    Poesia,
    Humor,
    ContosDeFadas,
    Quadrinhos,
    Biografia,
    Outro,
}

impl Genre {
    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Aventura => "aventura",
            Genre::Fantasia => "fantasia",
            Genre::Misterio => "misterio",
            Genre::Ciencia => "ciencia",
            Genre::Historia => "historia",
            Genre::Poesia => "poesia",
            Genre::Humor => "humor",
            Genre::ContosDeFadas => "contos_de_fadas",
            Genre::Quadrinhos => "quadrinhos",
            Genre::Biografia => "biografia",
            Genre::Outro => "outro",
        }
    }

    /// Parse a stored or client-supplied genre name. Never fails.
    pub fn parse(value: &str) -> Self {
        Self::known(value).unwrap_or(Genre::Outro)
    }

    /// Parse a genre name, or `None` if this build doesn't know it.
    /// `"outro"` itself is known.
    pub fn known(value: &str) -> Option<Self> {
        let genre = match value.trim().to_lowercase().as_str() {
            "aventura" => Genre::Aventura,
            "fantasia" => Genre::Fantasia,
            "misterio" => Genre::Misterio,
            "ciencia" => Genre::Ciencia,
            "historia" => Genre::Historia,
            "poesia" => Genre::Poesia,
            "humor" => Genre::Humor,
            "contos_de_fadas" => Genre::ContosDeFadas,
            "quadrinhos" => Genre::Quadrinhos,
            "biografia" => Genre::Biografia,
            "outro" => Genre::Outro,
            _ => return None,
        };
        Some(genre)
    }
}

impl From<String> for Genre {
    fn from(value: String) -> Self {
        Genre::parse(&value)
    }
}

impl From<Genre> for String {
    fn from(genre: Genre) -> Self {
        genre.as_str().to_string()
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading status of a book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[serde(rename = "to_read", alias = "to-read")]
    ToRead,
    #[serde(rename = "reading")]
    Reading,
    #[serde(rename = "finished")]
    Finished,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::ToRead => "to_read",
            BookStatus::Reading => "reading",
            BookStatus::Finished => "finished",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "to_read" | "to-read" => Some(BookStatus::ToRead),
            "reading" => Some(BookStatus::Reading),
            "finished" => Some(BookStatus::Finished),
            _ => None,
        }
    }
}

impl fmt::Display for BookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a child has to do to earn an achievement.
///
/// Serialized as `{"type": "book_count", "value": 5}` and friends. Tags this
/// version does not know about deserialize to `Unknown`, which is never earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AchievementRequirement {
    BookCount { value: u32 },
    GenreCount { value: u32 },
    GenreBooks {
        #[serde(deserialize_with = "known_genre")]
        genre: Genre,
        value: u32,
    },
    RatedBooks { value: u32 },
    MonthlyBooks { value: u32 },
    #[serde(other)]
    Unknown,
}

/// Requirements name their genre strictly: a genre this build doesn't know
/// must fail the whole descriptor instead of collapsing into `Outro`.
fn known_genre<'de, D>(deserializer: D) -> Result<Genre, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Genre::known(&value).ok_or_else(|| de::Error::custom(format!("unknown genre: {}", value)))
}

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`)
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Family {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateFamilyRequest {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyListResponse {
    pub families: Vec<Family>,
}

// ---------------------------------------------------------------------------
// Children
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Child {
    pub id: String,
    pub family_id: String,
    pub name: String,
    /// Birth date (YYYY-MM-DD)
    pub birth_date: Option<String>,
    pub avatar: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateChildRequest {
    pub name: String,
    pub birth_date: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateChildRequest {
    pub name: Option<String>,
    pub birth_date: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChildListResponse {
    pub children: Vec<Child>,
}

// ---------------------------------------------------------------------------
// Books
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub child_id: String,
    pub title: String,
    pub author: String,
    pub genre: Genre,
    pub total_pages: Option<u32>,
    pub current_page: u32,
    pub status: BookStatus,
    /// 1 to 5 stars
    pub rating: Option<u8>,
    pub start_date: Option<String>,
    pub finish_date: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookRequest {
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub genre: Genre,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub status: Option<BookStatus>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub finish_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub genre: Option<Genre>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub status: Option<BookStatus>,
    /// Absent leaves the rating alone; `null` clears it
    #[serde(default, deserialize_with = "double_option", skip_serializing_if = "Option::is_none")]
    pub rating: Option<Option<u8>>,
    #[serde(default)]
    pub finish_date: Option<String>,
}

/// Returned by every book mutation, with whatever the change unlocked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookResponse {
    pub book: Book,
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookListResponse {
    pub books: Vec<Book>,
}

// ---------------------------------------------------------------------------
// Reading sessions
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSession {
    pub id: String,
    pub child_id: String,
    pub book_id: String,
    /// Day the reading happened (YYYY-MM-DD)
    pub date: String,
    pub minutes: u32,
    pub pages_read: u32,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSessionRequest {
    pub book_id: String,
    #[serde(default)]
    pub date: Option<String>,
    pub minutes: u32,
    #[serde(default)]
    pub pages_read: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogSessionResponse {
    pub session: ReadingSession,
    pub book: Book,
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionListResponse {
    pub sessions: Vec<ReadingSession>,
}

// ---------------------------------------------------------------------------
// Achievements
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub requirement: AchievementRequirement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedAchievement {
    pub achievement: Achievement,
    pub earned_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AchievementCatalogResponse {
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarnedAchievementsResponse {
    pub achievements: Vec<EarnedAchievement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckAchievementsResponse {
    pub new_achievements: Vec<Achievement>,
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreProgress {
    pub genre: Genre,
    pub name: String,
    pub icon: String,
    pub theme: String,
    pub count: u32,
    pub discovered: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreProgressResponse {
    pub genres: Vec<GenreProgress>,
    pub discovered_count: u32,
    pub total_genres: u32,
}

/// A stop on the reading map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLevel {
    pub level: u32,
    pub min_value: u32,
    pub name: String,
    pub icon: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelProgress {
    /// Finished books counted towards the map
    pub value: u32,
    pub current_level: MapLevel,
    pub next_level: Option<MapLevel>,
    /// Progress towards `next_level`, from 0.0 to 1.0
    pub fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingSummary {
    pub child_id: String,
    pub total_books: u32,
    pub finished_books: u32,
    pub reading_books: u32,
    pub to_read_books: u32,
    pub rated_books: u32,
    pub sessions: u32,
    pub minutes_read: u32,
    pub pages_read: u32,
    pub achievements_earned: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportAchievement {
    pub achievement: Achievement,
    pub earned: bool,
    pub earned_at: Option<String>,
}

/// Everything the passport screen needs in one response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassportResponse {
    pub child: Child,
    pub summary: ReadingSummary,
    pub level: LevelProgress,
    pub genres: Vec<GenreProgress>,
    pub achievements: Vec<PassportAchievement>,
}

// ---------------------------------------------------------------------------
// Misc
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
