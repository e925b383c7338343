use serde::Serialize;

/// Complexity score at or below which a game is labelled `easy`
pub const EASY_COMPLEXITY_MAX: f64 = 2.0;

/// Complexity score at or below which a game is labelled `medium`
pub const MEDIUM_COMPLEXITY_MAX: f64 = 3.5;

/// One board game parsed from the dataset
///
/// Numeric fields hold zero when the source column could not be parsed.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// Dataset identifier (uniqueness is not enforced)
    pub id: String,

    /// Display name
    pub name: String,

    pub year_published: i32,
    pub min_players: u32,
    pub max_players: u32,

    /// Play time in minutes
    pub play_time: u32,

    pub min_age: u32,
    pub users_rated: u64,
    pub rating_average: f64,
    pub bgg_rank: u32,
    pub complexity_average: f64,
    pub owned_users: u64,

    /// Mechanic tags, comma-joined as in the source file
    pub mechanics: String,

    /// Domain/category tags, comma-joined as in the source file
    pub domains: String,

    /// Derived text fed to the embedder, fixed at construction
    #[serde(skip)]
    searchable_text: String,
}

/// Raw column values of a record before the searchable text is derived
#[derive(Debug, Clone, Default)]
pub struct GameFields {
    pub id: String,
    pub name: String,
    pub year_published: i32,
    pub min_players: u32,
    pub max_players: u32,
    pub play_time: u32,
    pub min_age: u32,
    pub users_rated: u64,
    pub rating_average: f64,
    pub bgg_rank: u32,
    pub complexity_average: f64,
    pub owned_users: u64,
    pub mechanics: String,
    pub domains: String,
}

impl GameRecord {
    /// Build a record and derive its searchable text
    pub fn new(fields: GameFields) -> Self {
        let mut record = Self {
            id: fields.id,
            name: fields.name,
            year_published: fields.year_published,
            min_players: fields.min_players,
            max_players: fields.max_players,
            play_time: fields.play_time,
            min_age: fields.min_age,
            users_rated: fields.users_rated,
            rating_average: fields.rating_average,
            bgg_rank: fields.bgg_rank,
            complexity_average: fields.complexity_average,
            owned_users: fields.owned_users,
            mechanics: fields.mechanics,
            domains: fields.domains,
            searchable_text: String::new(),
        };
        record.searchable_text = record.build_searchable_text();
        record
    }

    /// Text used for embedding this record
    pub fn searchable_text(&self) -> &str {
        &self.searchable_text
    }

    /// `easy`, `medium` or `hard` from the average complexity
    pub fn complexity_label(&self) -> &'static str {
        if self.complexity_average <= EASY_COMPLEXITY_MAX {
            "easy"
        } else if self.complexity_average <= MEDIUM_COMPLEXITY_MAX {
            "medium"
        } else {
            "hard"
        }
    }

    /// "3 player" or "2-4 players"
    pub fn player_count_phrase(&self) -> String {
        if self.min_players == self.max_players {
            format!("{} player", self.min_players)
        } else {
            format!("{}-{} players", self.min_players, self.max_players)
        }
    }

    pub fn mechanic_tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.mechanics)
    }

    pub fn domain_tags(&self) -> impl Iterator<Item = &str> {
        split_tags(&self.domains)
    }

    /// Get display name (for logging/UI)
    pub fn display_name(&self) -> String {
        if self.year_published != 0 {
            format!("{} ({})", self.name, self.year_published)
        } else {
            self.name.clone()
        }
    }

    fn build_searchable_text(&self) -> String {
        [
            self.name.to_lowercase(),
            self.mechanics.to_lowercase(),
            self.domains.to_lowercase(),
            self.year_published.to_string(),
            self.player_count_phrase(),
            format!("{} minutes", self.play_time),
            format!("complexity {}", self.complexity_label()),
            format!("rating {:.1}", self.rating_average),
            format!("age {}+", self.min_age),
        ]
        .join(" ")
    }
}

fn split_tags(joined: &str) -> impl Iterator<Item = &str> {
    joined.split(',').map(str::trim).filter(|tag| !tag.is_empty())
}
