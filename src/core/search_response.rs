use serde::{Deserialize, Serialize};

use crate::core::{AllowListEntry, GameRecord};

/// One ranked game as handed to callers of the search entrypoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub name: String,
    pub year_published: i32,
    pub min_players: u32,
    pub max_players: u32,
    pub play_time: u32,
    pub complexity_average: f64,
    pub rating_average: f64,
    pub mechanics: String,
    pub domains: String,
    pub bgg_rank: u32,

    /// Cosine similarity formatted to three decimals
    pub similarity: String,
}

impl GameMatch {
    pub fn new(game: &GameRecord, score: f64) -> Self {
        Self {
            name: game.name.clone(),
            year_published: game.year_published,
            min_players: game.min_players,
            max_players: game.max_players,
            play_time: game.play_time,
            complexity_average: game.complexity_average,
            rating_average: game.rating_average,
            mechanics: game.mechanics.clone(),
            domains: game.domains.clone(),
            bgg_rank: game.bgg_rank,
            similarity: format!("{:.3}", score),
        }
    }
}

/// Search response with ranked games and metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Query as received
    pub query: String,

    /// Ranked games, best first
    pub games: Vec<GameMatch>,

    pub results_count: usize,

    /// Search latency in milliseconds
    pub latency_ms: f64,
}

impl SearchResponse {
    pub fn new(query: impl Into<String>, games: Vec<GameMatch>, latency_ms: f64) -> Self {
        Self {
            query: query.into(),
            results_count: games.len(),
            games,
            latency_ms,
        }
    }

    /// Best match, if any
    pub fn top(&self) -> Option<&GameMatch> {
        self.games.first()
    }

    /// Get display string for logging
    pub fn display(&self) -> String {
        match self.top() {
            Some(best) => format!(
                "\"{}\" → {} ({}) [{} results, {:.2}ms]",
                self.query, best.name, best.similarity, self.results_count, self.latency_ms
            ),
            None => format!("\"{}\" → no results", self.query),
        }
    }
}

/// Outcome of an allow-list lookup
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub exists: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persian_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
}

impl ValidationResponse {
    pub fn not_found() -> Self {
        Self {
            exists: false,
            persian_name: None,
            english_name: None,
        }
    }
}

impl From<Option<&AllowListEntry>> for ValidationResponse {
    fn from(entry: Option<&AllowListEntry>) -> Self {
        let Some(entry) = entry else {
            return Self::not_found();
        };

        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            exists: true,
            persian_name: non_empty(&entry.persian_name),
            english_name: non_empty(&entry.english_name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameFields;

    #[test]
    fn test_game_match_formats_similarity() {
        let game = GameRecord::new(GameFields {
            name: "Azul".to_string(),
            ..Default::default()
        });
        let matched = GameMatch::new(&game, 0.98765);
        assert_eq!(matched.similarity, "0.988");
        assert_eq!(GameMatch::new(&game, 0.0).similarity, "0.000");
    }

    #[test]
    fn test_search_response_counts_games() {
        let game = GameRecord::new(GameFields {
            name: "Azul".to_string(),
            ..Default::default()
        });
        let response = SearchResponse::new("tile", vec![GameMatch::new(&game, 0.5)], 1.0);
        assert_eq!(response.results_count, 1);
        assert_eq!(response.top().map(|g| g.name.as_str()), Some("Azul"));

        let empty = SearchResponse::new("tile", Vec::new(), 1.0);
        assert!(empty.top().is_none());
        assert_eq!(empty.display(), "\"tile\" → no results");
    }

    #[test]
    fn test_game_match_json_keys() {
        let game = GameRecord::new(GameFields::default());
        let json = serde_json::to_value(GameMatch::new(&game, 1.0)).unwrap();
        for key in ["yearPublished", "minPlayers", "complexityAverage", "bggRank", "similarity"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }

    #[test]
    fn test_validation_response_omits_empty_names() {
        let entry = AllowListEntry::new("", "Azul").unwrap();
        let response = ValidationResponse::from(Some(&entry));
        assert!(response.exists);
        assert_eq!(response.english_name.as_deref(), Some("Azul"));
        assert_eq!(response.persian_name, None);

        let json = serde_json::to_string(&ValidationResponse::not_found()).unwrap();
        assert_eq!(json, r#"{"exists":false}"#);
    }
}
