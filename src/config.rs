use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

/// Listing page enumerating the current tender announcements
pub const DEFAULT_LISTING_URL: &str =
    "https://www.bbk-bundesverband.de/ausschreibungen/aktuelle-ausschreibungen";

/// Scheme and host prepended to relative hrefs
pub const DEFAULT_BASE_ORIGIN: &str = "https://www.bbk-bundesverband.de";

/// Environment variable overriding `listing_url`
pub const LISTING_URL_ENV: &str = "TENDER_LISTING_URL";

/// Environment variable overriding `base_origin`
pub const BASE_ORIGIN_ENV: &str = "TENDER_BASE_ORIGIN";

/// Configuration for a tender search run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScraperConfig {
    /// URL of the listing page to discover links on
    #[serde(default = "default_listing_url")]
    pub listing_url: String,

    /// Origin used to resolve relative links
    #[serde(default = "default_base_origin")]
    pub base_origin: String,

    /// Per-request timeout in seconds. `None` waits indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Default value for listing_url
fn default_listing_url() -> String {
    DEFAULT_LISTING_URL.to_string()
}

/// Default value for base_origin
fn default_base_origin() -> String {
    DEFAULT_BASE_ORIGIN.to_string()
}

/// Default value for user_agent
fn default_user_agent() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            listing_url: default_listing_url(),
            base_origin: default_base_origin(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

impl ScraperConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply `TENDER_LISTING_URL` / `TENDER_BASE_ORIGIN` if they are set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(
            std::env::var(LISTING_URL_ENV).ok(),
            std::env::var(BASE_ORIGIN_ENV).ok(),
        )
    }

    fn with_overrides(mut self, listing_url: Option<String>, base_origin: Option<String>) -> Self {
        if let Some(url) = listing_url.filter(|u| !u.is_empty()) {
            ::log::debug!("Listing URL overridden to {}", url);
            self.listing_url = url;
        }
        if let Some(origin) = base_origin.filter(|o| !o.is_empty()) {
            ::log::debug!("Base origin overridden to {}", origin);
            self.base_origin = origin;
        }
        self
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
