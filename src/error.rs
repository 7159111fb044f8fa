use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no ramen is selected")]
    NoSelection,
    #[error("invalid api url {url}: {source}")]
    InvalidUrl {
        url: String,
        source: url::ParseError,
    },
    #[error("{method} {url} failed: {source}")]
    Transport {
        method: &'static str,
        url: String,
        source: reqwest::Error,
    },
    #[error("{method} {url} returned {status}")]
    Status {
        method: &'static str,
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("fail to decode response of {method} {url}: {source}")]
    Decode {
        method: &'static str,
        url: String,
        source: reqwest::Error,
    },
}

pub type Result<T> = std::result::Result<T, CatalogError>;
