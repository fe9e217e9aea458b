use std::collections::BTreeSet;
use std::path::Path;

use chrono::DateTime;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::common::utils::{read_json, write_json_pretty};
use crate::error::Result;

/// Memory carried between runs: which job ids have already been handled.
///
/// `seen_job_ids` only ever grows. It is a sorted set so the state file
/// diffs cleanly between runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    #[serde(default)]
    pub seen_job_ids: BTreeSet<String>,
    #[serde(default)]
    pub last_run: Option<String>,
}

impl RunState {
    /// Load state from disk, falling back to an empty state when the file
    /// does not exist yet.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "No state file, starting fresh");
            return Ok(Self::default());
        }
        read_json(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        write_json_pretty(path, self)
    }

    pub fn has_seen(&self, id: &str) -> bool {
        self.seen_job_ids.contains(id)
    }

    /// Merge ids into the seen set. Returns how many were new.
    pub fn mark_seen<'a, I>(&mut self, ids: I) -> usize
    where
        I: IntoIterator<Item = &'a str>,
    {
        ids.into_iter()
            .filter(|id| self.seen_job_ids.insert((*id).to_string()))
            .count()
    }

    /// Stamp the run time as ISO 8601 in the given zone.
    pub fn touch(&mut self, now: DateTime<Tz>) {
        self.last_run = Some(now.to_rfc3339());
    }
}
