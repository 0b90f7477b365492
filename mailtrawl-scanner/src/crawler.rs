use crate::error::{HarvestError, Result};
use crate::extract::{extract_emails, extract_links};
use crate::frontier::CrawlState;
use crate::normalize::resolve_href;
use crate::result::HarvestReport;
use reqwest::Client;
use scraper::Html;
use std::sync::Arc;
use tracing::{debug, info};
use url::Url;

/// Called once per fetched page with the running visit count and the URL
/// being processed.
pub type ProgressCallback = Arc<dyn Fn(usize, String) + Send + Sync>;

pub const DEFAULT_MAX_PAGES: usize = 10;

// Fixed desktop browser string; some hosts reject obvious bot agents.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
    AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Sequential breadth-first harvester. One fetch is in flight at a time;
/// the frontier, visited set and email accumulator live in a [`CrawlState`]
/// owned by the loop, so independent harvests never share state.
///
/// A transport failure or an undecodable body aborts the whole harvest and
/// discards everything accumulated so far. Non-HTML responses and hrefs
/// that fail to resolve are skipped silently.
pub struct Crawler {
    client: Client,
    max_pages: usize,
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new() -> Self {
        Self::with_timeout(10)
    }

    pub fn with_timeout(timeout_secs: u64) -> Self {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(timeout_secs.div_ceil(2)))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            max_pages: DEFAULT_MAX_PAGES,
            progress_callback: None,
        }
    }

    pub fn with_max_pages(mut self, max_pages: usize) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    pub async fn harvest(&self, start_url: &str) -> Result<HarvestReport> {
        let seed = Url::parse(start_url)
            .map_err(|e| HarvestError::InvalidUrl(format!("{start_url}: {e}")))?;
        if seed.host_str().is_none() {
            return Err(HarvestError::InvalidUrl(format!(
                "{start_url} has no host to scope the crawl to"
            )));
        }

        info!(
            "Starting harvest of {} (page ceiling {})",
            seed, self.max_pages
        );
        let mut state = CrawlState::new(seed, self.max_pages);

        while let Some(url) = state.next_target() {
            if let Some(ref callback) = self.progress_callback {
                callback(state.pages_visited(), url.to_string());
            }
            debug!("Processing {}", url);

            let response = self.client.get(url.clone()).send().await?;

            let content_type = response
                .headers()
                .get(reqwest::header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("")
                .to_string();
            if !content_type.starts_with("text/html") {
                debug!("Skipping {} (content-type {:?})", url, content_type);
                continue;
            }

            let bytes = response.bytes().await?;
            let body = std::str::from_utf8(&bytes)
                .map_err(|e| HarvestError::Parse(format!("{url}: body is not UTF-8: {e}")))?;
            let document = Html::parse_document(body);

            let emails = extract_emails(&document);
            if !emails.is_empty() {
                info!("Found {} address(es) on {}", emails.len(), url);
            }
            state.merge_emails(emails);

            let hrefs = extract_links(&document);
            let candidates: Vec<Url> = hrefs
                .iter()
                .filter_map(|href| resolve_href(href, state.seed()))
                .collect();
            let queued = state.merge_links(candidates);
            debug!(
                "{}: queued {} new URL(s), frontier at {}",
                url,
                queued,
                state.frontier_len()
            );
        }

        info!(
            "Harvest complete. Visited {} page(s), {} unique address(es)",
            state.pages_visited(),
            state.email_count()
        );
        Ok(state.into_report())
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}
