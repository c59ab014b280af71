use shared::Genre;

/// A genre as shown on the reading map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenreDescriptor {
    pub genre: Genre,
    pub name: &'static str,
    pub icon: &'static str,
    /// Map region the genre is drawn as
    pub theme: &'static str,
}

/// Genres shown on the map, in display order. `Genre::Outro` is deliberately absent.
pub static GENRE_CATALOG: &[GenreDescriptor] = &[
    GenreDescriptor { genre: Genre::Aventura, name: "Aventura", icon: "⛵", theme: "Ilha da Aventura" },
    GenreDescriptor { genre: Genre::Fantasia, name: "Fantasia", icon: "🐉", theme: "Reino Encantado" },
    GenreDescriptor { genre: Genre::Misterio, name: "Mistério", icon: "🔍", theme: "Vale dos Enigmas" },
    GenreDescriptor { genre: Genre::Ciencia, name: "Ciência", icon: "🔬", theme: "Laboratório das Descobertas" },
    GenreDescriptor { genre: Genre::Historia, name: "História", icon: "🏺", theme: "Cidade Antiga" },
    GenreDescriptor { genre: Genre::Poesia, name: "Poesia", icon: "🌸", theme: "Jardim das Rimas" },
    GenreDescriptor { genre: Genre::Humor, name: "Humor", icon: "😂", theme: "Praça da Alegria" },
    GenreDescriptor { genre: Genre::ContosDeFadas, name: "Contos de Fadas", icon: "🏰", theme: "Castelo dos Contos" },
    GenreDescriptor { genre: Genre::Quadrinhos, name: "Quadrinhos", icon: "💬", theme: "Estúdio dos Quadrinhos" },
    GenreDescriptor { genre: Genre::Biografia, name: "Biografia", icon: "🧑‍🚀", theme: "Galeria dos Heróis" },
];

/// How far a child has explored one genre
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreProgress {
    pub descriptor: GenreDescriptor,
    pub count: u32,
    pub discovered: bool,
}
