use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::{
    error::AppResult,
    models::{DatasetSummary, Datasets},
    services::{indexer::DataIndex, loaders::DatasetLoader, ranking::RankingConfig},
};

/// Indexed datasets as of one load
#[derive(Debug)]
pub struct DatasetSnapshot {
    pub index: DataIndex,
    pub source: String,
    pub loaded_at: DateTime<Utc>,
}

impl DatasetSnapshot {
    pub fn build(datasets: &Datasets, source: String) -> Self {
        let index = DataIndex::build(datasets);

        if index.malformed_fields > 0 {
            tracing::warn!(
                source = %source,
                malformed_fields = index.malformed_fields,
                "Some id or price fields could not be parsed and were read as 0"
            );
        }

        Self {
            index,
            source,
            loaded_at: Utc::now(),
        }
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            source: self.source.clone(),
            games: self.index.games.len(),
            packages: self.index.packages.len(),
            offers: self.index.offer_count,
            teams: self.index.team_count(),
            malformed_fields: self.index.malformed_fields,
            loaded_at: self.loaded_at,
        }
    }
}

/// Shared application state
///
/// Handlers take one `Arc` of the current snapshot and work only on it, so a
/// reload swapping the snapshot never mixes old and new data in a response.
pub struct AppState {
    loader: Arc<dyn DatasetLoader>,
    snapshot: RwLock<Arc<DatasetSnapshot>>,
    pub ranking: RankingConfig,
}

impl AppState {
    /// Loads the datasets once and builds the initial index
    pub async fn load(loader: Arc<dyn DatasetLoader>, ranking: RankingConfig) -> AppResult<Self> {
        let datasets = loader.load().await?;
        let snapshot = DatasetSnapshot::build(&datasets, loader.source());

        tracing::info!(
            source = %snapshot.source,
            games = snapshot.index.games.len(),
            packages = snapshot.index.packages.len(),
            offers = snapshot.index.offer_count,
            "Datasets indexed"
        );

        Ok(Self {
            loader,
            snapshot: RwLock::new(Arc::new(snapshot)),
            ranking,
        })
    }

    /// The snapshot requests should compute against
    pub async fn snapshot(&self) -> Arc<DatasetSnapshot> {
        self.snapshot.read().await.clone()
    }

    /// Reloads the datasets and swaps in a fresh index. On failure the
    /// current snapshot stays in place.
    pub async fn reload(&self) -> AppResult<DatasetSummary> {
        let datasets = self.loader.load().await.map_err(|e| {
            tracing::error!(error = %e, "Dataset reload failed, keeping current snapshot");
            e
        })?;

        let snapshot = Arc::new(DatasetSnapshot::build(&datasets, self.loader.source()));
        let summary = snapshot.summary();

        *self.snapshot.write().await = snapshot;

        tracing::info!(
            games = summary.games,
            packages = summary.packages,
            offers = summary.offers,
            "Datasets reloaded"
        );

        Ok(summary)
    }
}
