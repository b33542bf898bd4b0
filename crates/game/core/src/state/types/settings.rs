/// Difficulty tier, controlling the population floor of eligible regions.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Difficulty {
    /// Only the most populous regions.
    Easy,
    #[default]
    Medium,
    /// Nearly every region in the dataset.
    Hard,
}

impl Difficulty {
    /// Minimum population (inclusive) for a region to be eligible.
    ///
    /// Hard is a low floor rather than "no filter" so that uninhabited or
    /// placeholder entries in the dataset stay out of the quiz.
    pub const fn population_threshold(self) -> u64 {
        match self {
            Difficulty::Easy => 50_000_000,
            Difficulty::Medium => 25_000_000,
            Difficulty::Hard => 10_000,
        }
    }
}

/// Region group filter. `World` accepts every record.
///
/// Serialized names match the display names stored by the leaderboard.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Continent {
    #[default]
    World,
    Africa,
    Asia,
    Europe,
    #[strum(
        to_string = "North America",
        serialize = "north_america",
        serialize = "north-america",
        serialize = "NorthAmerica"
    )]
    #[cfg_attr(
        feature = "serde",
        serde(rename = "North America", alias = "NorthAmerica")
    )]
    NorthAmerica,
    #[strum(
        to_string = "South America",
        serialize = "south_america",
        serialize = "south-america",
        serialize = "SouthAmerica"
    )]
    #[cfg_attr(
        feature = "serde",
        serde(rename = "South America", alias = "SouthAmerica")
    )]
    SouthAmerica,
    Oceania,
}

impl Continent {
    /// Returns true when a record tagged `tag` belongs to this filter.
    pub fn admits(self, tag: Continent) -> bool {
        self == Continent::World || self == tag
    }
}

/// Round-length policy.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum GameMode {
    /// Fixed-size random subset of the eligible regions.
    #[strum(to_string = "Quick Play", serialize = "quick")]
    #[cfg_attr(feature = "serde", serde(rename = "Quick Play", alias = "Quick"))]
    Quick,
    /// Every eligible region.
    #[default]
    #[strum(to_string = "Full Game", serialize = "full")]
    #[cfg_attr(feature = "serde", serde(rename = "Full Game", alias = "Full"))]
    Full,
}

/// The three knobs that define which catalog a round is played on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoundSettings {
    pub difficulty: Difficulty,
    pub continent: Continent,
    pub mode: GameMode,
}

impl RoundSettings {
    pub const fn new(difficulty: Difficulty, continent: Continent, mode: GameMode) -> Self {
        Self {
            difficulty,
            continent,
            mode,
        }
    }

    #[must_use]
    pub const fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    #[must_use]
    pub const fn with_continent(mut self, continent: Continent) -> Self {
        self.continent = continent;
        self
    }

    #[must_use]
    pub const fn with_mode(mut self, mode: GameMode) -> Self {
        self.mode = mode;
        self
    }
}
