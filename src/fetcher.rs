use crate::config::ScraperConfig;
use crate::error::{Error, FetchError};
use async_trait::async_trait;
use url::Url;

/// Retrieves the raw bytes behind a URL
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// Fetch `url`, failing on connection errors, timeouts and non-success statuses.
    /// No retries are attempted.
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

/// Resolves an href against the base origin.
///
/// Hrefs that already carry an `http`/`https` scheme are used as-is, anything
/// else is joined onto `base_origin` with URL reference resolution: both
/// `/ausschreibung/123` and `ausschreibung/123` become
/// `<base_origin>/ausschreibung/123`, and `//host/x` takes the base's scheme.
pub fn resolve_href(href: &str, base_origin: &str) -> Result<Url, FetchError> {
    let href = href.trim();
    let invalid = |source| FetchError::InvalidUrl {
        url: href.to_string(),
        source,
    };

    if href.starts_with("http://") || href.starts_with("https://") {
        return Url::parse(href).map_err(invalid);
    }

    let base = Url::parse(base_origin).map_err(|source| FetchError::InvalidUrl {
        url: base_origin.to_string(),
        source,
    })?;
    base.join(href).map_err(invalid)
}

/// `Fetcher` backed by a shared reqwest client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Builds a client from the configured user agent and optional timeout
    pub fn new(config: &ScraperConfig) -> Result<Self, Error> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<Vec<u8>, FetchError> {
        ::log::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        ::log::trace!("Fetched {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.bbk-bundesverband.de";

    #[test]
    fn test_relative_href_joins_base_origin() {
        let url = resolve_href("/ausschreibung/123", BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.bbk-bundesverband.de/ausschreibung/123"
        );
    }

    #[test]
    fn test_absolute_href_is_kept() {
        let url = resolve_href("https://example.org/docs/call.pdf", BASE).unwrap();
        assert_eq!(url.as_str(), "https://example.org/docs/call.pdf");

        let url = resolve_href("http://example.org/page", BASE).unwrap();
        assert_eq!(url.as_str(), "http://example.org/page");
    }

    #[test]
    fn test_href_without_leading_slash_joins_base_origin() {
        let url = resolve_href("ausschreibung/123", BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "https://www.bbk-bundesverband.de/ausschreibung/123"
        );
    }

    #[test]
    fn test_protocol_relative_href_takes_base_scheme() {
        let url = resolve_href("//cdn.example.org/call.pdf", BASE).unwrap();
        assert_eq!(url.as_str(), "https://cdn.example.org/call.pdf");
    }

    #[test]
    fn test_base_origin_path_is_replaced_by_absolute_path() {
        let url = resolve_href("/ausschreibung/123", "https://example.org/portal/").unwrap();
        assert_eq!(url.as_str(), "https://example.org/ausschreibung/123");

        let url = resolve_href("ausschreibung/123", "https://example.org/portal/").unwrap();
        assert_eq!(url.as_str(), "https://example.org/portal/ausschreibung/123");
    }

    #[test]
    fn test_href_is_trimmed() {
        let url = resolve_href("  /kontakt  ", BASE).unwrap();
        assert_eq!(url.as_str(), "https://www.bbk-bundesverband.de/kontakt");
    }

    #[test]
    fn test_invalid_base_origin_is_reported() {
        let err = resolve_href("/x", "not a url").unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }

    #[test]
    fn test_client_builds_with_timeout() {
        let config = ScraperConfig {
            request_timeout_secs: Some(5),
            ..ScraperConfig::default()
        };
        assert!(HttpFetcher::new(&config).is_ok());
    }
}
