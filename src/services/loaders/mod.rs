//! Dataset loaders
//!
//! A loader produces the three flat datasets (games, packages, offers) the
//! ranking engine indexes. Sources are pluggable: a local directory of CSV
//! files or the same files served over HTTP.

use std::sync::Arc;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;

use crate::{error::AppResult, models::Datasets};

pub mod directory;
pub mod http;

pub use directory::CsvDirectoryLoader;
pub use http::HttpCsvLoader;

pub const GAMES_FILE: &str = "bc_game.csv";
pub const PACKAGES_FILE: &str = "bc_streaming_package.csv";
pub const OFFERS_FILE: &str = "bc_streaming_offer.csv";

/// Source of the game, package and offer datasets
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DatasetLoader: Send + Sync {
    /// Loads all three datasets
    async fn load(&self) -> AppResult<Datasets>;

    /// Human-readable description of where the data comes from
    fn source(&self) -> String;
}

/// Picks the loader for a configured data source: http(s) URLs are fetched,
/// anything else is treated as a directory path.
pub fn loader_for_source(source: &str) -> Arc<dyn DatasetLoader> {
    if source.starts_with("http://") || source.starts_with("https://") {
        Arc::new(HttpCsvLoader::new(source))
    } else {
        Arc::new(CsvDirectoryLoader::new(source))
    }
}

/// Parses one CSV dataset with a header row.
///
/// Rows shorter than the header are padded with empty fields and columns
/// missing from the file fall back to their defaults. Rows that still fail
/// to parse are skipped and logged.
pub fn parse_csv<T: DeserializeOwned>(file: &str, bytes: &[u8]) -> AppResult<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(bytes);

    let headers = reader.headers()?.clone();
    let mut rows = Vec::new();
    let mut skipped = 0usize;

    for result in reader.records() {
        let parsed = result.and_then(|record| {
            let record = pad_record(record, headers.len());
            record.deserialize::<T>(Some(&headers))
        });

        match parsed {
            Ok(row) => rows.push(row),
            Err(e) => {
                skipped += 1;
                tracing::warn!(file = %file, error = %e, "Skipping unreadable CSV row");
            }
        }
    }

    tracing::debug!(file = %file, rows = rows.len(), skipped, "Parsed CSV dataset");

    Ok(rows)
}

fn pad_record(mut record: StringRecord, width: usize) -> StringRecord {
    while record.len() < width {
        record.push_field("");
    }
    record
}

/// Parses the three dataset files once their bytes are available
pub(crate) fn parse_datasets(games: &[u8], packages: &[u8], offers: &[u8]) -> AppResult<Datasets> {
    Ok(Datasets {
        games: parse_csv(GAMES_FILE, games)?,
        packages: parse_csv(PACKAGES_FILE, packages)?,
        offers: parse_csv(OFFERS_FILE, offers)?,
    })
}
