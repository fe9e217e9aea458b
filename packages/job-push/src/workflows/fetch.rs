use anyhow::Result;
use linkedin_client::SearchQuery;
use tracing::info;

use crate::config::Config;
use crate::domains::jobs::Job;
use crate::kernel::BaseJobSource;

/// Search query derived from the filter section of the config.
///
/// Keywords are trimmed and blank ones dropped so they never reach the URL.
pub fn search_query(config: &Config) -> SearchQuery {
    let keywords = config
        .filters
        .keywords
        .iter()
        .map(|k| k.trim())
        .filter(|k| !k.is_empty())
        .map(str::to_string)
        .collect();
    SearchQuery::new(keywords, config.filters.country.clone())
        .with_max_results(config.filters.max_results)
}

/// Scrape listings for the configured keywords and country.
///
/// Fails before any network call when no keywords are configured. Jobs
/// without an id are dropped here so nothing downstream has to check.
pub async fn run_fetch(config: &Config, source: &dyn BaseJobSource) -> Result<Vec<Job>> {
    config.validate_for_fetch()?;

    let query = search_query(config);
    let fetched = source.fetch_jobs(&query).await?;
    let total = fetched.len();

    let jobs: Vec<Job> = fetched
        .into_iter()
        .filter(|job| !job.id.trim().is_empty())
        .take(query.max_results)
        .collect();

    info!(kept = jobs.len(), fetched = total, "Fetch complete");
    Ok(jobs)
}
