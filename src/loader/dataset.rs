//! Semicolon-delimited game dataset
//!
//! Column order: id, name, year, minPlayers, maxPlayers, playTime, minAge,
//! usersRated, ratingAverage, bggRank, complexityAverage, ownedUsers,
//! mechanics, domains. Decimal columns may use a comma separator.

use std::path::Path;

use crate::core::{GameFields, GameRecord};
use crate::error::Result;
use crate::loader::{preview, read_text_lossy};

/// Columns a row needs to be kept
pub const REQUIRED_COLUMNS: usize = 14;

/// Records parsed from a dataset, in file order
#[derive(Debug, Clone, Default)]
pub struct ParsedDataset {
    pub games: Vec<GameRecord>,

    /// Rows dropped for having too few columns
    pub skipped_rows: usize,
}

/// Read and parse the dataset at `path`
pub async fn load_dataset(path: &Path) -> Result<ParsedDataset> {
    tracing::info!("📁 Loading dataset from: {}", path.display());
    let content = read_text_lossy(path).await?;
    let parsed = parse_dataset(&content)?;
    tracing::info!(
        "✅ Parsed {} board games ({} rows skipped)",
        parsed.games.len(),
        parsed.skipped_rows
    );
    Ok(parsed)
}

/// Parse dataset text; the first row is a header
pub fn parse_dataset(content: &str) -> Result<ParsedDataset> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut parsed = ParsedDataset::default();

    for row in reader.records() {
        let row = row?;
        // Whitespace-only line; a row of empty fields is still a record
        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }

        if row.len() < REQUIRED_COLUMNS {
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            let raw = row.iter().collect::<Vec<_>>().join(";");
            tracing::warn!(
                "⚠️ Skipping line {}: {} of {} columns: {}",
                line,
                row.len(),
                REQUIRED_COLUMNS,
                preview(&raw)
            );
            parsed.skipped_rows += 1;
            continue;
        }

        parsed.games.push(GameRecord::new(GameFields {
            id: row[0].to_string(),
            name: row[1].to_string(),
            year_published: parse_integer(&row[2]),
            min_players: parse_integer(&row[3]),
            max_players: parse_integer(&row[4]),
            play_time: parse_integer(&row[5]),
            min_age: parse_integer(&row[6]),
            users_rated: parse_integer(&row[7]),
            rating_average: parse_decimal(&row[8]),
            bgg_rank: parse_integer(&row[9]),
            complexity_average: parse_decimal(&row[10]),
            owned_users: parse_integer(&row[11]),
            mechanics: row[12].to_string(),
            domains: row[13].to_string(),
        }));
    }

    Ok(parsed)
}

/// Decimal with `,` or `.` separator; zero when unparsable
fn parse_decimal(raw: &str) -> f64 {
    raw.trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Integer, truncating decimals; zero when unparsable or out of range
fn parse_integer<T>(raw: &str) -> T
where
    T: TryFrom<i64> + Default,
{
    let trimmed = raw.trim();
    let value = match trimmed.parse::<i64>() {
        Ok(v) => Some(v),
        Err(_) => {
            let decimal = parse_decimal(trimmed);
            (decimal != 0.0 && decimal.abs() < i64::MAX as f64).then(|| decimal.trunc() as i64)
        }
    };

    value.and_then(|v| T::try_from(v).ok()).unwrap_or_default()
}
