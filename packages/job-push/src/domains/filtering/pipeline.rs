use tracing::info;

use super::stages::{deduplicate, filter_by_experience, filter_by_keywords, filter_by_location};
use crate::config::FilterConfig;
use crate::domains::jobs::{Job, RunState};

/// Job counts after each stage, for logging and run summaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StageCounts {
    pub input: usize,
    pub after_keywords: usize,
    pub after_location: usize,
    pub after_experience: usize,
    pub after_dedup: usize,
}

#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Jobs that passed every stage and were not seen before, in input order
    pub new_jobs: Vec<Job>,
    pub counts: StageCounts,
}

/// Keyword -> location -> experience -> dedup.
///
/// Dedup runs last so jobs rejected by an earlier stage are never treated as
/// new and so never end up in the seen set.
#[derive(Debug, Clone)]
pub struct FilterPipeline<'a> {
    config: &'a FilterConfig,
}

impl<'a> FilterPipeline<'a> {
    pub fn new(config: &'a FilterConfig) -> Self {
        Self { config }
    }

    pub fn run(&self, jobs: &[Job], state: &RunState) -> PipelineOutcome {
        let input = jobs.len();

        let jobs = filter_by_keywords(jobs, &self.config.keywords);
        info!(remaining = jobs.len(), total = input, "After keyword filter");
        let after_keywords = jobs.len();

        let jobs = filter_by_location(
            &jobs,
            &self.config.exclude_provinces,
            &self.config.exclude_location_keywords,
        );
        info!(remaining = jobs.len(), total = input, "After location filter");
        let after_location = jobs.len();

        let jobs = filter_by_experience(&jobs, self.config.max_experience_years);
        if let Some(max_years) = self.config.max_experience_years {
            info!(remaining = jobs.len(), max_years, "After experience filter");
        }
        let after_experience = jobs.len();

        let new_jobs = deduplicate(&jobs, state);
        info!(new_jobs = new_jobs.len(), "After deduplication");

        PipelineOutcome {
            counts: StageCounts {
                input,
                after_keywords,
                after_location,
                after_experience,
                after_dedup: new_jobs.len(),
            },
            new_jobs,
        }
    }
}
