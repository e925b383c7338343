pub mod allow_list;
pub mod dataset;

use std::path::{Path, PathBuf};

use crate::error::{EngineError, Result};

pub use allow_list::{load_allow_list, parse_allow_list};
pub use dataset::{load_dataset, parse_dataset, ParsedDataset, REQUIRED_COLUMNS};

/// First candidate that exists as a file, in priority order
pub async fn resolve_dataset_path(candidates: &[PathBuf]) -> Result<PathBuf> {
    for candidate in candidates {
        if is_file(candidate).await {
            return Ok(candidate.clone());
        }
        tracing::debug!("Dataset candidate missing: {}", candidate.display());
    }

    Err(EngineError::DatasetNotFound {
        searched: candidates.to_vec(),
    })
}

pub(crate) async fn is_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

/// Read a text file, replacing invalid UTF-8 sequences with U+FFFD
pub(crate) async fn read_text_lossy(path: &Path) -> Result<String> {
    let bytes = tokio::fs::read(path).await?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            tracing::warn!(
                "⚠️ {} is not valid UTF-8 (first bad byte at {}), decoding lossily",
                path.display(),
                err.utf8_error().valid_up_to()
            );
            Ok(String::from_utf8_lossy(err.as_bytes()).into_owned())
        }
    }
}

/// Shorten a row for log output
pub(crate) fn preview(line: &str) -> String {
    const MAX_CHARS: usize = 100;
    if line.chars().count() > MAX_CHARS {
        format!("{}...", line.chars().take(MAX_CHARS).collect::<String>())
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_resolve_picks_first_existing() {
        let dir = tempfile::tempdir().unwrap();
        let second = dir.path().join("second.csv");
        let third = dir.path().join("third.csv");
        std::fs::write(&second, "header").unwrap();
        std::fs::write(&third, "header").unwrap();

        let candidates = vec![dir.path().join("missing.csv"), second.clone(), third];
        assert_eq!(resolve_dataset_path(&candidates).await.unwrap(), second);
    }

    #[tokio::test]
    async fn test_resolve_fails_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().join("a.csv"), dir.path().join("b.csv")];

        match resolve_dataset_path(&candidates).await {
            Err(EngineError::DatasetNotFound { searched }) => assert_eq!(searched, candidates),
            other => panic!("expected DatasetNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_resolve_ignores_directories() {
        let dir = tempfile::tempdir().unwrap();
        let candidates = vec![dir.path().to_path_buf()];
        assert!(resolve_dataset_path(&candidates).await.is_err());
    }

    #[tokio::test]
    async fn test_read_text_lossy_replaces_bad_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.csv");
        std::fs::write(&path, b"name\nCaf\xe9\n").unwrap();

        let text = read_text_lossy(&path).await.unwrap();
        assert_eq!(text, "name\nCaf\u{FFFD}\n");
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("short"), "short");
        let long = "x".repeat(150);
        assert_eq!(preview(&long).len(), 103);
    }
}
