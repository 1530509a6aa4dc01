use thiserror::Error;

/// A network retrieval failed (connection, timeout, non-success status)
#[derive(Debug, Error)]
pub enum FetchError {
    /// The href could not be turned into an absolute URL
    #[error("invalid URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Transport-level failure, including timeouts and unsupported schemes
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status code
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
}

/// Fetched bytes could not be parsed as the declared content kind
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid PDF document: {0}")]
    Pdf(#[from] lopdf::Error),
}

/// Crate-level error type
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] FetchError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("CSV export failed: {0}")]
    Export(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
