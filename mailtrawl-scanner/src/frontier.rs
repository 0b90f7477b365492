use std::collections::{HashSet, VecDeque};
use url::Url;

use crate::result::HarvestReport;

/// FIFO queue of URLs awaiting a fetch, with a parallel membership set so
/// duplicate discoveries collapse in O(1). Popping follows insertion order,
/// which keeps the crawl breadth-first and deterministic.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    members: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a URL unless it is already waiting. Returns whether the URL
    /// was actually added.
    pub fn push(&mut self, url: Url) -> bool {
        if !self.members.insert(url.to_string()) {
            return false;
        }
        self.queue.push_back(url);
        true
    }

    pub fn pop(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.members.remove(url.as_str());
        Some(url)
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.members.contains(url.as_str())
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

/// All mutable state of one crawl: the frontier, the visited set, the
/// accumulated email addresses, the immutable seed and the page ceiling.
///
/// Invariants upheld here:
/// - frontier and visited are disjoint
/// - visited never grows past `max_pages`
/// - every frontier entry shares the seed's host
/// - a visited URL never re-enters the frontier
#[derive(Debug)]
pub struct CrawlState {
    seed: Url,
    host: String,
    max_pages: usize,
    frontier: Frontier,
    visited: HashSet<String>,
    emails: HashSet<String>,
}

impl CrawlState {
    /// `seed` must carry a host, checked by the caller.
    pub fn new(seed: Url, max_pages: usize) -> Self {
        let host = seed.host_str().unwrap_or_default().to_string();
        let mut frontier = Frontier::new();
        frontier.push(seed.clone());
        Self {
            seed,
            host,
            max_pages,
            frontier,
            visited: HashSet::new(),
            emails: HashSet::new(),
        }
    }

    pub fn seed(&self) -> &Url {
        &self.seed
    }

    /// Pop the next URL to fetch and mark it visited, or `None` once the
    /// ceiling is hit or the frontier runs dry.
    pub fn next_target(&mut self) -> Option<Url> {
        if self.visited.len() >= self.max_pages {
            return None;
        }
        let url = self.frontier.pop()?;
        self.visited.insert(url.to_string());
        Some(url)
    }

    /// Merge resolved link candidates into the frontier, enforcing
    /// same-host scope, dedup, and visited exclusion. Returns how many
    /// URLs were actually enqueued.
    pub fn merge_links(&mut self, candidates: impl IntoIterator<Item = Url>) -> usize {
        let mut added = 0;
        for url in candidates {
            if url.host_str() != Some(self.host.as_str()) {
                continue;
            }
            if self.visited.contains(url.as_str()) {
                continue;
            }
            if self.frontier.push(url) {
                added += 1;
            }
        }
        added
    }

    /// Union the page's emails into the running accumulator. Addresses
    /// from earlier pages are kept.
    pub fn merge_emails(&mut self, emails: impl IntoIterator<Item = String>) {
        self.emails.extend(emails);
    }

    pub fn pages_visited(&self) -> usize {
        self.visited.len()
    }

    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn email_count(&self) -> usize {
        self.emails.len()
    }

    pub fn into_report(self) -> HarvestReport {
        HarvestReport::new(self.seed.to_string(), self.visited.len(), self.emails)
    }
}
