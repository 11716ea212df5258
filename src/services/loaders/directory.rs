use std::path::{Path, PathBuf};

use crate::{
    error::{AppError, AppResult},
    models::Datasets,
    services::loaders::{parse_datasets, DatasetLoader, GAMES_FILE, OFFERS_FILE, PACKAGES_FILE},
};

/// Reads the datasets from CSV files in a local directory
#[derive(Debug, Clone)]
pub struct CsvDirectoryLoader {
    dir: PathBuf,
}

impl CsvDirectoryLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    async fn read(&self, file: &str) -> AppResult<Vec<u8>> {
        let path = self.dir.join(file);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("dataset file {}", display(&path)))
            }
            _ => AppError::Io(e),
        })
    }
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

#[async_trait::async_trait]
impl DatasetLoader for CsvDirectoryLoader {
    async fn load(&self) -> AppResult<Datasets> {
        let (games, packages, offers) = tokio::try_join!(
            self.read(GAMES_FILE),
            self.read(PACKAGES_FILE),
            self.read(OFFERS_FILE),
        )?;

        let datasets = parse_datasets(&games, &packages, &offers)?;

        tracing::info!(
            source = %self.source(),
            games = datasets.games.len(),
            packages = datasets.packages.len(),
            offers = datasets.offers.len(),
            "Loaded datasets from directory"
        );

        Ok(datasets)
    }

    fn source(&self) -> String {
        display(&self.dir)
    }
}
