use anyhow::Context;

use crate::api::DEFAULT_API_URL;

pub const API_URL_ENV: &str = "RAMEN_API_URL";
pub const LOG_ENV: &str = "RAMEN_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub log_level: tracing::Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            log_level: tracing::Level::INFO,
        }
    }
}

impl Config {
    /// Read the config from the process environment. Call `dotenvy::dotenv()` first to pick up
    /// a `.env` file.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();
        if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.is_empty()) {
            config.api_url = url;
        }
        if let Some(level) = lookup(LOG_ENV).filter(|level| !level.is_empty()) {
            config.log_level = level
                .parse()
                .with_context(|| format!("{LOG_ENV} has unknown log level {level:?}"))?;
        }
        Ok(config)
    }
}
