use linkedin_client::JobPosting;
use serde::{Deserialize, Serialize};

use crate::common::utils::search_text;

/// A single scraped listing.
///
/// `id` is the dedup key and is never empty once a job reaches the filter
/// pipeline; the scrape source drops cards it cannot identify.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub posted: String,
    #[serde(default)]
    pub description: String,
}

impl Job {
    /// Title and description as one case-folded string.
    pub fn search_text(&self) -> String {
        search_text(&[self.title.as_str(), self.description.as_str()])
    }

    /// Title shortened for log lines.
    pub fn short_title(&self, max_chars: usize) -> String {
        self.title.chars().take(max_chars).collect()
    }
}

impl From<JobPosting> for Job {
    fn from(posting: JobPosting) -> Self {
        Self {
            id: posting.id,
            title: posting.title,
            company: posting.company,
            location: posting.location,
            url: posting.url,
            posted: posting.posted,
            description: posting.description,
        }
    }
}
