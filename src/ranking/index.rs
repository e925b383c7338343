use std::cmp::Ordering;

use crate::core::GameRecord;
use crate::ranking::embedding::{embed, Embedding};
use crate::ranking::RankedCandidate;

/// Brute-force cosine index over one embedding per game
///
/// Records keep dataset order; that order breaks score ties.
#[derive(Debug, Clone, Default)]
pub struct SimilarityIndex {
    games: Vec<GameRecord>,
    vectors: Vec<Embedding>,
}

impl SimilarityIndex {
    /// Embed every record's searchable text once
    pub fn build(games: Vec<GameRecord>) -> Self {
        let vectors = games.iter().map(|g| embed(g.searchable_text())).collect();
        Self { games, vectors }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn games(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn vector(&self, position: usize) -> Option<&Embedding> {
        self.vectors.get(position)
    }

    /// Top `top_k` records by cosine similarity to `query`, best first
    pub fn search(&self, query: &str, top_k: usize) -> Vec<RankedCandidate<'_>> {
        if top_k == 0 {
            return Vec::new();
        }

        let query_vector = embed(query);
        self.rank_vector(&query_vector, top_k)
    }

    /// Rank against an already embedded query
    pub fn rank_vector(&self, query: &Embedding, top_k: usize) -> Vec<RankedCandidate<'_>> {
        let mut ranked: Vec<RankedCandidate<'_>> = self
            .games
            .iter()
            .zip(&self.vectors)
            .enumerate()
            .map(|(position, (game, vector))| {
                RankedCandidate::new(game, query.cosine_similarity(vector), position)
            })
            .collect();

        // Stable: equal scores keep dataset order
        ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        ranked.truncate(top_k);

        tracing::debug!("Ranked {} games, returning {}", self.games.len(), ranked.len());
        ranked
    }
}
