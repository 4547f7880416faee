use serde::Deserialize;

use crate::services::recommendations::{FilterMode, MAX_RECOMMENDATIONS};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the course CSV loaded once at startup
    #[serde(default = "default_dataset_path")]
    pub dataset_path: String,

    /// Number of courses returned per recommendation, 1 to 5
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,

    /// How candidate courses are filtered by fuzzy bucket
    #[serde(default)]
    pub filter_mode: FilterMode,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_dataset_path() -> String {
    "udemy_courses.csv".to_string()
}

fn default_recommendation_limit() -> usize {
    MAX_RECOMMENDATIONS
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(std::env::vars())
    }

    /// Load configuration from an explicit set of key/value pairs
    pub fn from_vars<I>(vars: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config = envy::from_iter::<_, Config>(vars)
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

        if !(1..=MAX_RECOMMENDATIONS).contains(&config.recommendation_limit) {
            anyhow::bail!(
                "RECOMMENDATION_LIMIT must be between 1 and {}",
                MAX_RECOMMENDATIONS
            );
        }

        Ok(config)
    }

    /// Socket address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
