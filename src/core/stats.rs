/// Ceiling used to scale stat bars. Base stats above it are not clamped.
pub const MAX_BASE_STAT: u32 = 255;

/// Everything the view needs to draw one stat row.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar<'a> {
    pub label: &'a str,
    pub value: u32,
    /// Width of the fill as a percentage of the track. May exceed 100.
    pub percentage: f64,
}

impl StatBar<'_> {
    pub fn fill_fraction(&self) -> f64 {
        self.percentage / 100.0
    }
}

/// Short label for a PokeAPI stat name. Unknown names come back unchanged.
pub fn abbreviate(stat_name: &str) -> &str {
    match stat_name {
        "hp" => "HP",
        "attack" => "ATK",
        "defense" => "DEF",
        "special-attack" => "SATK",
        "special-defense" => "SDEF",
        "speed" => "SPD",
        other => other,
    }
}

pub fn stat_percentage(base_stat: u32) -> f64 {
    f64::from(base_stat) / f64::from(MAX_BASE_STAT) * 100.0
}

pub fn render_stat_bar(stat_name: &str, base_stat: u32) -> StatBar<'_> {
    StatBar {
        label: abbreviate(stat_name),
        value: base_stat,
        percentage: stat_percentage(base_stat),
    }
}
