use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Outcome of a completed harvest. `emails` is sorted so the JSON output
/// is stable across runs regardless of crawl order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestReport {
    pub seed: String,
    pub pages_visited: usize,
    pub emails: Vec<String>,
}

impl HarvestReport {
    pub fn new(seed: String, pages_visited: usize, emails: HashSet<String>) -> Self {
        let mut emails: Vec<String> = emails.into_iter().collect();
        emails.sort();
        Self {
            seed,
            pages_visited,
            emails,
        }
    }
}
