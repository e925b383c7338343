use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

pub const ENV_BASE_DIR: &str = "BOARDGAME_BASE_DIR";
pub const ENV_DATASET_FILE: &str = "BOARDGAME_DATASET_FILE";
pub const ENV_ALLOW_LIST: &str = "BOARDGAME_ALLOW_LIST";
pub const ENV_TOP_K: &str = "BOARDGAME_TOP_K";

pub const DEFAULT_DATASET_FILE: &str = "bgg_dataset.csv";
pub const DEFAULT_ALLOW_LIST_FILE: &str = "boardgame-template.csv";
pub const DEFAULT_TOP_K: usize = 5;

/// Engine configuration with defaults for a project checkout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Directory the dataset candidates are resolved against
    pub base_dir: PathBuf,

    /// Dataset file name looked up in each candidate directory
    pub dataset_file: String,

    /// Allow-list location; `<base_dir>/data/boardgame-template.csv` when unset
    pub allow_list_path: Option<PathBuf>,

    /// Result count when a caller does not specify one
    pub default_top_k: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            dataset_file: DEFAULT_DATASET_FILE.to_string(),
            allow_list_path: None,
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

impl EngineConfig {
    /// Defaults rooted at `base_dir`
    pub fn with_base_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ..Self::default()
        }
    }

    /// Defaults overlaid with `BOARDGAME_*` environment variables
    pub fn from_env() -> Result<Self> {
        let vars: HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with("BOARDGAME_"))
            .collect();
        Self::from_vars(&vars)
    }

    /// Defaults overlaid with the given variables
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(dir) = vars.get(ENV_BASE_DIR) {
            config.base_dir = PathBuf::from(dir);
        }
        if let Some(file) = vars.get(ENV_DATASET_FILE) {
            config.dataset_file = file.clone();
        }
        if let Some(path) = vars.get(ENV_ALLOW_LIST) {
            config.allow_list_path = Some(PathBuf::from(path));
        }
        if let Some(top_k) = vars.get(ENV_TOP_K) {
            config.default_top_k = top_k.trim().parse().map_err(|_| {
                EngineError::Config(format!("{ENV_TOP_K} must be a non-negative integer, got '{top_k}'"))
            })?;
        }

        Ok(config)
    }

    /// Dataset locations in lookup order: data dir, parent-relative, source-relative
    pub fn dataset_candidates(&self) -> Vec<PathBuf> {
        vec![
            self.base_dir.join("data").join(&self.dataset_file),
            self.base_dir
                .join("..")
                .join("..")
                .join("data")
                .join(&self.dataset_file),
            self.base_dir
                .join("src")
                .join("data")
                .join(&self.dataset_file),
        ]
    }

    pub fn allow_list_path(&self) -> PathBuf {
        self.allow_list_path
            .clone()
            .unwrap_or_else(|| self.base_dir.join("data").join(DEFAULT_ALLOW_LIST_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::with_base_dir("/srv/games");
        assert_eq!(config.default_top_k, 5);
        assert_eq!(
            config.allow_list_path(),
            PathBuf::from("/srv/games/data/boardgame-template.csv")
        );
    }

    #[test]
    fn test_dataset_candidate_order() {
        let config = EngineConfig::with_base_dir("/srv/games");
        assert_eq!(
            config.dataset_candidates(),
            vec![
                PathBuf::from("/srv/games/data/bgg_dataset.csv"),
                PathBuf::from("/srv/games/../../data/bgg_dataset.csv"),
                PathBuf::from("/srv/games/src/data/bgg_dataset.csv"),
            ]
        );
    }

    #[test]
    fn test_from_vars_overrides() {
        let mut vars = HashMap::new();
        vars.insert(ENV_BASE_DIR.to_string(), "/opt/bg".to_string());
        vars.insert(ENV_DATASET_FILE.to_string(), "games.csv".to_string());
        vars.insert(ENV_ALLOW_LIST.to_string(), "/etc/allowed.csv".to_string());
        vars.insert(ENV_TOP_K.to_string(), "10".to_string());

        let config = EngineConfig::from_vars(&vars).unwrap();
        assert_eq!(config.dataset_candidates()[0], PathBuf::from("/opt/bg/data/games.csv"));
        assert_eq!(config.allow_list_path(), PathBuf::from("/etc/allowed.csv"));
        assert_eq!(config.default_top_k, 10);
    }

    #[test]
    fn test_from_vars_rejects_bad_top_k() {
        let mut vars = HashMap::new();
        vars.insert(ENV_TOP_K.to_string(), "many".to_string());
        assert!(matches!(
            EngineConfig::from_vars(&vars),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"base_dir": "/data/bg", "default_top_k": 3}"#).unwrap();
        assert_eq!(config.base_dir, PathBuf::from("/data/bg"));
        assert_eq!(config.dataset_file, DEFAULT_DATASET_FILE);
        assert_eq!(config.default_top_k, 3);
    }
}
