//! # Boardgame Engine
//!
//! Board game search over a local dataset:
//! - Lexical feature embeddings (letter, word and keyword counts)
//! - Brute-force cosine ranking with stable tie-breaks
//! - Allow-list validation of candidate names
//! - Load-once, concurrency-safe catalog cache
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use boardgame_engine::{BoardGameEngine, EngineConfig, SearchQuery};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let engine = BoardGameEngine::new(EngineConfig::from_env()?);
//!
//!     let results = engine.search(SearchQuery::new("cooperative family game", 5)).await?;
//!     for game in &results.games {
//!         println!("{} - {}", game.name, game.similarity);
//!     }
//!
//!     let check = engine.validate("Catan").await?;
//!     println!("allowed: {}", check.exists);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod loader;
pub mod ranking;
pub mod validation;

// Re-export primary types
pub use cache::{CacheStats, Catalog, CatalogCache};
pub use config::EngineConfig;
pub use crate::core::{AllowListEntry, GameMatch, GameRecord, SearchResponse, ValidationResponse};
pub use engine::{BoardGameEngine, SearchQuery};
pub use error::{EngineError, Result};
pub use ranking::{embed, Embedding, SimilarityIndex};
pub use validation::AllowList;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
