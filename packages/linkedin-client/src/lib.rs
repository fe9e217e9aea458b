//! LinkedIn guest job search scraper.
//!
//! Talks to the unauthenticated `jobs-guest` endpoints: one for paginated
//! search result cards and one for a single posting's description. No login,
//! no JavaScript rendering.
//!
//! # Example
//!
//! ```rust,ignore
//! use linkedin_client::{LinkedInClient, SearchQuery};
//!
//! let client = LinkedInClient::new()?;
//! let query = SearchQuery::new(vec!["rust".into()], "Canada").with_max_results(30);
//! for job in client.fetch_jobs(&query).await? {
//!     println!("{} at {}", job.title, job.company);
//! }
//! ```

pub mod error;
pub mod parse;
pub mod types;

pub use error::{LinkedInError, Result};
pub use parse::{job_id_from_url, parse_description, parse_search_results};
pub use types::{geo_id, JobPosting, SearchQuery, PAGE_SIZE};

use std::time::Duration;

use reqwest::header;
use url::Url;

const SEARCH_URL: &str = "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";
const JOB_POSTING_URL: &str = "https://www.linkedin.com/jobs-guest/jobs/api/jobPosting";
const REFERER: &str = "https://www.linkedin.com/jobs/search/";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Delay between search result pages.
const PAGE_DELAY: Duration = Duration::from_millis(1500);

/// Delay between description fetches.
const DESCRIPTION_DELAY: Duration = Duration::from_secs(1);

/// Build the guest search URL for one page of results.
pub fn search_url(query: &SearchQuery, start: usize) -> Result<Url> {
    let keywords = query.keywords.join(" OR ");
    let start = start.to_string();
    let mut params = vec![
        ("keywords", keywords.as_str()),
        ("location", query.country.as_str()),
        ("start", start.as_str()),
        // newest first, posted in the past 24 hours
        ("sortBy", "DD"),
        ("f_TPR", "r86400"),
    ];
    if let Some(geo) = geo_id(&query.country) {
        params.push(("geoId", geo));
    }

    Ok(Url::parse_with_params(SEARCH_URL, &params)?)
}

pub struct LinkedInClient {
    client: reqwest::Client,
}

impl LinkedInClient {
    pub fn new() -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static(
                "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
            ),
        );
        headers.insert(
            header::ACCEPT_LANGUAGE,
            header::HeaderValue::from_static("en-US,en;q=0.9"),
        );
        headers.insert(header::REFERER, header::HeaderValue::from_static(REFERER));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self { client })
    }

    async fn get_html(&self, url: &str) -> Result<String> {
        let resp = self.client.get(url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(LinkedInError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.text().await?)
    }

    /// Fetch one page of search results. Returns the parsed postings and the
    /// raw number of cards on the page (used to detect the last page).
    pub async fn fetch_search_page(
        &self,
        query: &SearchQuery,
        start: usize,
    ) -> Result<(Vec<JobPosting>, usize)> {
        let url = search_url(query, start)?;
        tracing::debug!(url = %url, start, "Fetching search page");

        let html = self.get_html(url.as_str()).await?;
        Ok((parse_search_results(&html), parse::count_cards(&html)))
    }

    /// Fetch the plain-text description of a single posting.
    pub async fn fetch_description(&self, job_id: &str) -> Result<String> {
        let url = format!("{}/{}", JOB_POSTING_URL, job_id);
        let html = self.get_html(&url).await?;
        Ok(parse_description(&html))
    }

    /// Search end-to-end: paginate result cards, then fill in descriptions.
    ///
    /// Pagination stops on an empty or short page, on the first request
    /// error, or once `max_results` postings are collected. A failed
    /// description fetch leaves that posting's description empty.
    pub async fn fetch_jobs(&self, query: &SearchQuery) -> Result<Vec<JobPosting>> {
        tracing::info!(
            keywords = %query.keywords.join(", "),
            country = %query.country,
            max_results = query.max_results,
            "Fetching jobs"
        );

        let mut jobs: Vec<JobPosting> = Vec::new();
        let mut start = 0;

        while jobs.len() < query.max_results {
            let (page, card_count) = match self.fetch_search_page(query, start).await {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!(start, error = %e, "Search request failed, stopping pagination");
                    break;
                }
            };

            if card_count == 0 {
                break;
            }

            jobs.extend(page);
            tracing::info!(cards = card_count, total = jobs.len(), "Fetched search page");

            if card_count < PAGE_SIZE {
                break;
            }

            start += PAGE_SIZE;
            tokio::time::sleep(PAGE_DELAY).await;
        }

        jobs.truncate(query.max_results);

        tracing::info!(count = jobs.len(), "Fetching descriptions");
        let total = jobs.len();
        for (i, job) in jobs.iter_mut().enumerate() {
            match self.fetch_description(&job.id).await {
                Ok(description) => job.description = description,
                Err(e) => {
                    tracing::warn!(job_id = %job.id, error = %e, "Failed to fetch description");
                }
            }

            let title: String = job.title.chars().take(50).collect();
            if job.description.is_empty() {
                tracing::debug!(progress = %format!("{}/{}", i + 1, total), title = %title, "No description");
            } else {
                tracing::debug!(progress = %format!("{}/{}", i + 1, total), title = %title, "Got description");
            }

            tokio::time::sleep(DESCRIPTION_DELAY).await;
        }

        Ok(jobs)
    }
}
