pub mod embedding;
pub mod index;

use crate::core::GameRecord;

pub use embedding::{cosine_similarity, embed, Embedding, EMBEDDING_DIM, KEYWORDS};
pub use index::SimilarityIndex;

/// Record with its similarity to a query
#[derive(Debug, Clone, Copy)]
pub struct RankedCandidate<'a> {
    pub game: &'a GameRecord,
    pub score: f64,

    /// Position of the record in the loaded dataset
    pub position: usize,
}

impl<'a> RankedCandidate<'a> {
    pub fn new(game: &'a GameRecord, score: f64, position: usize) -> Self {
        Self { game, score, position }
    }
}
