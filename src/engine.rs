use crate::cache::{CacheStats, CatalogCache};
use crate::config::EngineConfig;
use crate::core::{GameMatch, SearchResponse, ValidationResponse};
use crate::error::Result;
use std::sync::Arc;
use std::time::Instant;

/// Board game search and allow-list validation over a shared cache
#[derive(Debug, Clone)]
pub struct BoardGameEngine {
    cache: Arc<CatalogCache>,
}

/// Search query parameters
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub query: String,

    /// Maximum results; zero or negative returns nothing
    pub top_k: i64,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>, top_k: i64) -> Self {
        Self {
            query: query.into(),
            top_k,
        }
    }
}

impl BoardGameEngine {
    /// Create engine with its own cache; nothing is loaded until first use
    pub fn new(config: EngineConfig) -> Self {
        Self::with_cache(Arc::new(CatalogCache::new(config)))
    }

    /// Create engine over an existing, possibly shared, cache
    pub fn with_cache(cache: Arc<CatalogCache>) -> Self {
        Self { cache }
    }

    pub fn cache(&self) -> &Arc<CatalogCache> {
        &self.cache
    }

    /// Load the catalog and the allow-list now instead of on first call
    pub async fn warm_up(&self) -> Result<()> {
        self.cache.catalog().await?;
        self.cache.allow_list().await?;
        Ok(())
    }

    /// Rank games against a free-text query
    pub async fn search(&self, query: SearchQuery) -> Result<SearchResponse> {
        let start = Instant::now();
        tracing::debug!("🔍 Searching for: \"{}\" (top {})", query.query, query.top_k);

        let catalog = self.cache.catalog().await?;
        let top_k = usize::try_from(query.top_k).unwrap_or(0);

        let games: Vec<GameMatch> = catalog
            .index
            .search(&query.query, top_k)
            .into_iter()
            .map(|ranked| GameMatch::new(ranked.game, ranked.score))
            .collect();

        let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
        let response = SearchResponse::new(query.query, games, latency_ms);
        tracing::debug!("📊 {}", response.display());

        Ok(response)
    }

    /// Search with the configured default result count
    pub async fn search_default(&self, query: impl Into<String>) -> Result<SearchResponse> {
        let top_k = i64::try_from(self.cache.config().default_top_k).unwrap_or(i64::MAX);
        self.search(SearchQuery::new(query, top_k)).await
    }

    /// Check a candidate name against the allow-list
    pub async fn validate(&self, candidate_name: &str) -> Result<ValidationResponse> {
        let allow_list = self.cache.allow_list().await?;
        Ok(allow_list.validate(candidate_name))
    }

    /// Get cache statistics
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
