//! Finds Kunst-am-Bau tender announcements on a listing page.
//!
//! Every link of the listing page is fetched (HTML or PDF), reduced to plain
//! text, kept only if it mentions one of the relevance keywords, and mined
//! for a deadline and a location.

pub mod config;
pub mod error;
pub mod export;
pub mod fetcher;
pub mod fields;
pub mod filter;
pub mod parsers;
pub mod pipeline;
pub mod results;

// Re-export commonly used types for convenience
pub use config::ScraperConfig;
pub use error::{Error, FetchError, ParseError, Result};
pub use fetcher::{Fetcher, HttpFetcher};
pub use fields::{TenderFields, extract_fields};
pub use filter::{KEYWORDS, RelevanceFilter, is_relevant};
pub use parsers::{ContentKind, extract_text};
pub use pipeline::Pipeline;
pub use results::{FailureKind, FetchFailure, Link, Progress, RunReport, TenderRecord};

