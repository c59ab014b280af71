/// One stop on the reading map, reached once the progress value hits `min_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelThreshold {
    pub level: u32,
    pub min_value: u32,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Map stops, keyed by finished-book count
pub static MAP_LEVELS: &[LevelThreshold] = &[
    LevelThreshold { level: 1, min_value: 0, name: "Porto de Partida", icon: "⚓", description: "Toda viagem começa com uma página" },
    LevelThreshold { level: 2, min_value: 5, name: "Floresta das Histórias", icon: "🌳", description: "Cinco livros lidos, a trilha se abre" },
    LevelThreshold { level: 3, min_value: 10, name: "Montanha dos Contos", icon: "⛰️", description: "Dez livros e uma bela vista" },
    LevelThreshold { level: 4, min_value: 20, name: "Mar das Palavras", icon: "🌊", description: "Vinte livros navegados" },
    LevelThreshold { level: 5, min_value: 50, name: "Reino dos Leitores", icon: "👑", description: "Cinquenta livros, leitor de verdade" },
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelProgress {
    pub value: u32,
    pub current: LevelThreshold,
    pub next: Option<LevelThreshold>,
    /// Progress towards `next`, clamped to `[0, 1]`; `1.0` at the last stop
    pub fraction: f64,
}
