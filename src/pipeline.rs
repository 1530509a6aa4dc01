use crate::config::ScraperConfig;
use crate::error::{FetchError, Result};
use crate::fetcher::{Fetcher, resolve_href};
use crate::fields::FieldExtractor;
use crate::filter::RelevanceFilter;
use crate::parsers::{self, ContentKind};
use crate::results::{
    FailureKind, FetchFailure, FetchedContent, Link, Progress, RunReport, TenderRecord,
};
use url::Url;

/// Drives every link of a listing page through fetch, text extraction,
/// relevance filtering and field extraction.
///
/// Links are processed strictly one after another. A failing link is
/// recorded and skipped; only a failure to load the listing page aborts
/// the run.
pub struct Pipeline<F: Fetcher> {
    fetcher: F,
    listing_url: String,
    base_origin: String,
    relevance: RelevanceFilter,
    fields: FieldExtractor,
    cached: Option<RunReport>,
}

impl<F: Fetcher> Pipeline<F> {
    pub fn new(fetcher: F, config: &ScraperConfig) -> Self {
        Self {
            fetcher,
            listing_url: config.listing_url.clone(),
            base_origin: config.base_origin.clone(),
            relevance: RelevanceFilter::default(),
            fields: FieldExtractor::default(),
            cached: None,
        }
    }

    /// Replace the keyword filter
    pub fn with_relevance_filter(mut self, relevance: RelevanceFilter) -> Self {
        self.relevance = relevance;
        self
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }

    /// Fetch the listing page and return its anchors in document order
    pub async fn discover_links(&self, listing_url: &str) -> Result<Vec<Link>> {
        let url = Url::parse(listing_url).map_err(|source| FetchError::InvalidUrl {
            url: listing_url.to_string(),
            source,
        })?;

        let body = self.fetcher.fetch(&url).await?;
        let links = parsers::html::extract_links(&String::from_utf8_lossy(&body));
        ::log::info!("Found {} links in {}", links.len(), listing_url);

        Ok(links)
    }

    /// Runs one link through the whole chain.
    ///
    /// `Ok(None)` means the document was retrieved but is not relevant.
    pub async fn process_link(
        &self,
        index: usize,
        link: &Link,
    ) -> std::result::Result<Option<TenderRecord>, FetchFailure> {
        let failure = |kind: FailureKind, url: &str, message: String| FetchFailure {
            index,
            url: url.to_string(),
            kind,
            message,
        };

        let url = resolve_href(&link.href, &self.base_origin)
            .map_err(|e| failure(FailureKind::Network, &link.href, e.to_string()))?;

        let body = self
            .fetcher
            .fetch(&url)
            .await
            .map_err(|e| failure(FailureKind::Network, url.as_str(), e.to_string()))?;

        let content = FetchedContent {
            kind: ContentKind::from_url(url.as_str()),
            url: url.to_string(),
            body,
        };

        let text = parsers::extract_text(&content.body, content.kind)
            .map_err(|e| failure(FailureKind::Parse, &content.url, e.to_string()))?;

        if !self.relevance.is_relevant(&text) {
            ::log::debug!("Not relevant: {}", content.url);
            return Ok(None);
        }

        let fields = self.fields.extract(&text);
        ::log::info!(
            "Relevant: {} (deadline {}, location {})",
            content.url,
            fields.deadline,
            fields.location
        );

        Ok(Some(TenderRecord {
            title: link.label.clone(),
            deadline: fields.deadline,
            location: fields.location,
            url: content.url,
        }))
    }

    /// One full pass over the listing page, without progress reporting
    pub async fn run(&self, listing_url: &str) -> Result<RunReport> {
        self.run_with_progress(listing_url, |_| {}).await
    }

    /// One full pass over the listing page. `on_progress` is called after
    /// every link, whatever its outcome.
    pub async fn run_with_progress<P>(&self, listing_url: &str, mut on_progress: P) -> Result<RunReport>
    where
        P: FnMut(Progress),
    {
        let start_time = std::time::Instant::now();
        let links = self.discover_links(listing_url).await?;
        let total = links.len();

        let mut report = RunReport {
            links_found: total,
            ..RunReport::default()
        };

        for (index, link) in links.iter().enumerate() {
            match self.process_link(index, link).await {
                Ok(Some(record)) => report.records.push(record),
                Ok(None) => {}
                Err(failure) => {
                    ::log::warn!(
                        "Failed link {}/{}: {}. Error: {}",
                        index + 1,
                        total,
                        failure.url,
                        failure.message
                    );
                    report.failures.push(failure);
                }
            }

            on_progress(Progress {
                processed: index + 1,
                total,
            });
        }

        ::log::info!(
            "Run complete - {} links, {} relevant, {} failed in {:.2} seconds",
            total,
            report.records.len(),
            report.failures.len(),
            start_time.elapsed().as_secs_f64()
        );

        Ok(report)
    }

    /// Like `search_with_progress` without a progress callback
    pub async fn search(&mut self, force_refresh: bool) -> Result<&RunReport> {
        self.search_with_progress(force_refresh, |_| {}).await
    }

    /// Returns the last report of this pipeline, running the configured
    /// listing page only when nothing is cached or `force_refresh` is set.
    /// A failed refresh keeps the previous report.
    pub async fn search_with_progress<P>(
        &mut self,
        force_refresh: bool,
        on_progress: P,
    ) -> Result<&RunReport>
    where
        P: FnMut(Progress),
    {
        let report = match self.cached.take() {
            Some(report) if !force_refresh => {
                ::log::debug!("Serving cached report for {}", self.listing_url);
                report
            }
            stale => {
                let result = self.run_with_progress(&self.listing_url, on_progress).await;
                match result {
                    Ok(fresh) => fresh,
                    Err(e) => {
                        self.cached = stale;
                        return Err(e);
                    }
                }
            }
        };

        Ok(self.cached.insert(report))
    }

    /// Drop the cached report
    pub fn clear_cache(&mut self) {
        self.cached = None;
    }
}
