//! The four filter stages.
//!
//! Each stage takes a slice and returns a new, order-preserving `Vec`. Inputs
//! are never mutated.

use tracing::{debug, info};

use super::experience::extract_min_experience;
use crate::domains::jobs::{Job, RunState};

/// Characters of a title shown when logging an exclusion.
const LOG_TITLE_CHARS: usize = 60;

fn lowered(terms: &[String]) -> Vec<String> {
    terms.iter().map(|t| t.to_lowercase()).collect()
}

/// Keep jobs whose title or description mentions at least one keyword.
///
/// With no keywords configured every job passes. An empty keyword string is
/// a substring of everything, so it also lets every job through.
pub fn filter_by_keywords(jobs: &[Job], keywords: &[String]) -> Vec<Job> {
    let keywords = lowered(keywords);
    if keywords.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .filter(|job| {
            let text = job.search_text();
            keywords.iter().any(|kw| text.contains(kw.as_str()))
        })
        .cloned()
        .collect()
}

/// Drop jobs whose location mentions an excluded province or location keyword.
///
/// An empty exclusion string matches every location.
pub fn filter_by_location(
    jobs: &[Job],
    exclude_provinces: &[String],
    exclude_keywords: &[String],
) -> Vec<Job> {
    let excluded: Vec<String> = lowered(exclude_provinces)
        .into_iter()
        .chain(lowered(exclude_keywords))
        .collect();
    if excluded.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .filter(|job| {
            let location = job.location.to_lowercase();
            match excluded.iter().find(|term| location.contains(term.as_str())) {
                Some(term) => {
                    debug!(job_id = %job.id, location = %job.location, term = %term, "Excluded by location");
                    false
                }
                None => true,
            }
        })
        .cloned()
        .collect()
}

/// Drop jobs that ask for more than `max_years` of experience.
///
/// Jobs with no detectable requirement always pass. `None` disables the stage.
pub fn filter_by_experience(jobs: &[Job], max_years: Option<u32>) -> Vec<Job> {
    let Some(max_years) = max_years else {
        return jobs.to_vec();
    };

    jobs.iter()
        .filter(|job| match extract_min_experience(&job.search_text()) {
            Some(required) if required > max_years => {
                info!(
                    required_years = required,
                    title = %job.short_title(LOG_TITLE_CHARS),
                    "Excluded by experience"
                );
                false
            }
            _ => true,
        })
        .cloned()
        .collect()
}

/// Drop jobs already recorded in the run state.
pub fn deduplicate(jobs: &[Job], state: &RunState) -> Vec<Job> {
    jobs.iter()
        .filter(|job| !state.has_seen(&job.id))
        .cloned()
        .collect()
}
