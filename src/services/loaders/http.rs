use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::Datasets,
    services::loaders::{parse_datasets, DatasetLoader, GAMES_FILE, OFFERS_FILE, PACKAGES_FILE},
};

/// Fetches the CSV datasets from a web server, e.g. a static file host
#[derive(Debug, Clone)]
pub struct HttpCsvLoader {
    http_client: HttpClient,
    base_url: String,
}

impl HttpCsvLoader {
    pub fn new(base_url: &str) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, file: &str) -> String {
        format!("{}/{}", self.base_url, file)
    }

    async fn fetch(&self, file: &str) -> AppResult<Vec<u8>> {
        let url = self.url_for(file);

        tracing::debug!(url = %url, "Fetching dataset");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(url = %url, status = %status, "Dataset request failed");
            return Err(AppError::ExternalApi(format!(
                "Dataset {} returned status {}",
                url, status
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }
}

#[async_trait::async_trait]
impl DatasetLoader for HttpCsvLoader {
    async fn load(&self) -> AppResult<Datasets> {
        let (games, packages, offers) = tokio::try_join!(
            self.fetch(GAMES_FILE),
            self.fetch(PACKAGES_FILE),
            self.fetch(OFFERS_FILE),
        )?;

        let datasets = parse_datasets(&games, &packages, &offers)?;

        tracing::info!(
            source = %self.base_url,
            games = datasets.games.len(),
            packages = datasets.packages.len(),
            offers = datasets.offers.len(),
            "Fetched datasets over HTTP"
        );

        Ok(datasets)
    }

    fn source(&self) -> String {
        self.base_url.clone()
    }
}
