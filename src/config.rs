use serde::Deserialize;

use crate::services::ranking::RankingConfig;

/// Largest combination size accepted from configuration. The search is
/// C(n, k) per size, so this keeps a misconfiguration from stalling requests.
pub const MAX_COMBINATION_SIZE_LIMIT: usize = 6;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the CSV datasets, or an http(s) base URL serving them
    #[serde(default = "default_data_source")]
    pub data_source: String,

    /// Largest number of packages combined in one recommendation
    #[serde(default = "default_max_combination_size")]
    pub max_combination_size: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_data_source() -> String {
    "data".to_string()
}

fn default_max_combination_size() -> usize {
    RankingConfig::default().max_combination_size
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.data_source.trim().is_empty() {
            anyhow::bail!("DATA_SOURCE must not be empty");
        }
        if !(1..=MAX_COMBINATION_SIZE_LIMIT).contains(&self.max_combination_size) {
            anyhow::bail!(
                "MAX_COMBINATION_SIZE must be between 1 and {}",
                MAX_COMBINATION_SIZE_LIMIT
            );
        }
        Ok(())
    }

    /// Address the HTTP server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ranking(&self) -> RankingConfig {
        RankingConfig {
            max_combination_size: self.max_combination_size,
        }
    }
}
