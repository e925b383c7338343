//! Load-once cache for the game catalog and the allow-list
//!
//! Each table sits behind a `tokio::sync::OnceCell`: concurrent first callers
//! wait on a single load, and once populated the table is never reloaded.
//! A failed load leaves the cell empty, so the next caller retries it.

use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use tokio::sync::OnceCell;

use crate::config::EngineConfig;
use crate::error::{EngineError, Result};
use crate::loader;
use crate::ranking::SimilarityIndex;
use crate::validation::AllowList;

/// Loaded games with their embeddings
#[derive(Debug)]
pub struct Catalog {
    pub index: SimilarityIndex,

    /// File the games were read from
    pub source: PathBuf,

    /// Rows dropped during parsing
    pub skipped_rows: usize,
}

/// Process-lifetime cache, shared by reference or `Arc`
#[derive(Debug)]
pub struct CatalogCache {
    config: EngineConfig,
    catalog: OnceCell<Catalog>,
    allow_list: OnceCell<AllowList>,
    dataset_loads: AtomicUsize,
    allow_list_loads: AtomicUsize,
}

/// Cache statistics
#[derive(Debug, Clone, PartialEq)]
pub struct CacheStats {
    pub games_loaded: Option<usize>,
    pub allow_list_entries: Option<usize>,
    pub dataset_path: Option<PathBuf>,
    pub skipped_rows: Option<usize>,
    pub dataset_loads: usize,
    pub allow_list_loads: usize,
}

impl CatalogCache {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: OnceCell::new(),
            allow_list: OnceCell::new(),
            dataset_loads: AtomicUsize::new(0),
            allow_list_loads: AtomicUsize::new(0),
        }
    }

    /// Cache that starts populated, skipping file loading
    pub fn preloaded(catalog: Catalog, allow_list: AllowList) -> Self {
        Self {
            config: EngineConfig::default(),
            catalog: OnceCell::new_with(Some(catalog)),
            allow_list: OnceCell::new_with(Some(allow_list)),
            dataset_loads: AtomicUsize::new(0),
            allow_list_loads: AtomicUsize::new(0),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Game catalog, loading and embedding it on first use
    pub async fn catalog(&self) -> Result<&Catalog> {
        self.catalog
            .get_or_try_init(|| async {
                tracing::info!("📥 Loading board games dataset...");
                let source = loader::resolve_dataset_path(&self.config.dataset_candidates()).await?;
                let parsed = loader::load_dataset(&source).await?;

                let index = SimilarityIndex::build(parsed.games);
                self.dataset_loads.fetch_add(1, Ordering::SeqCst);
                tracing::info!("✅ Loaded and embedded {} board games", index.len());

                Ok::<_, EngineError>(Catalog {
                    index,
                    source,
                    skipped_rows: parsed.skipped_rows,
                })
            })
            .await
    }

    /// Allow-list, loading it on first use
    pub async fn allow_list(&self) -> Result<&AllowList> {
        self.allow_list
            .get_or_try_init(|| async {
                let entries = loader::load_allow_list(&self.config.allow_list_path()).await?;
                self.allow_list_loads.fetch_add(1, Ordering::SeqCst);
                Ok::<_, EngineError>(AllowList::new(entries))
            })
            .await
    }

    pub fn is_populated(&self) -> bool {
        self.catalog.initialized() && self.allow_list.initialized()
    }

    pub fn stats(&self) -> CacheStats {
        let catalog = self.catalog.get();
        CacheStats {
            games_loaded: catalog.map(|c| c.index.len()),
            allow_list_entries: self.allow_list.get().map(AllowList::len),
            dataset_path: catalog.map(|c| c.source.clone()),
            skipped_rows: catalog.map(|c| c.skipped_rows),
            dataset_loads: self.dataset_loads.load(Ordering::SeqCst),
            allow_list_loads: self.allow_list_loads.load(Ordering::SeqCst),
        }
    }
}
