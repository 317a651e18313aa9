use thiserror::Error;

#[derive(Debug, Error)]
pub enum StatsSourceError {
    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Upstream returned {status} for {url}")]
    Status { status: u16, url: String },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },
}
