use std::path::Path;

use crate::core::AllowListEntry;
use crate::error::{EngineError, Result};
use crate::loader::{is_file, read_text_lossy};

/// Read and parse the allow-list at `path`
pub async fn load_allow_list(path: &Path) -> Result<Vec<AllowListEntry>> {
    if !is_file(path).await {
        return Err(EngineError::AllowListNotFound(path.to_path_buf()));
    }

    tracing::info!("📁 Loading allow-list from: {}", path.display());
    let content = read_text_lossy(path).await?;
    let entries = parse_allow_list(&content)?;
    tracing::info!("✅ Loaded {} allow-list entries", entries.len());
    Ok(entries)
}

/// Parse `persianName,englishName` rows after a header
///
/// Rows where both names are blank are dropped; extra columns are ignored.
pub fn parse_allow_list(content: &str) -> Result<Vec<AllowListEntry>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row?;
        let persian = row.get(0).unwrap_or_default();
        let english = row.get(1).unwrap_or_default();

        if let Some(entry) = AllowListEntry::new(persian, english) {
            entries.push(entry);
        }
    }

    Ok(entries)
}
