//! Filter, format, deliver, and record one push run.
//!
//! The run is split so the pure parts can be tested on their own:
//! [`plan_push`] decides what goes out, [`deliver`] sends it, and
//! [`record_run`] updates the run state. [`run_push`] ties them together.

use chrono::DateTime;
use chrono_tz::Tz;
use tracing::{error, info};

use crate::common::utils::strip_markup;
use crate::config::{Config, SeenPolicy};
use crate::domains::filtering::{FilterPipeline, PipelineOutcome};
use crate::domains::jobs::{Job, RunState};
use crate::domains::notifications::{render, split_message};
use crate::error::JobPushError;
use crate::kernel::BaseMessageSender;

/// Everything decided before any side effect.
#[derive(Debug, Clone)]
pub struct PushPlan {
    pub outcome: PipelineOutcome,
    /// New jobs capped at `maxSend`
    pub batch: Vec<Job>,
    pub message: String,
    pub chunks: Vec<String>,
}

impl PushPlan {
    /// New jobs left out of this run by `maxSend`.
    pub fn held_back(&self) -> &[Job] {
        &self.outcome.new_jobs[self.batch.len()..]
    }
}

pub fn plan_push(jobs: &[Job], config: &Config, state: &RunState, now: DateTime<Tz>) -> PushPlan {
    let outcome = FilterPipeline::new(&config.filters).run(jobs, state);

    let batch: Vec<Job> = outcome
        .new_jobs
        .iter()
        .take(config.filters.max_send)
        .cloned()
        .collect();
    if batch.len() < outcome.new_jobs.len() {
        info!(
            sending = batch.len(),
            held_back = outcome.new_jobs.len() - batch.len(),
            max_send = config.filters.max_send,
            "Capped by maxSend"
        );
    }

    let message = render(&batch, &config.keyword_label(), now);
    let chunks = split_message(&message, config.delivery.max_message_length);

    PushPlan {
        outcome,
        batch,
        message,
        chunks,
    }
}

/// Send chunks in order, stopping at the first failure.
///
/// Returns the number of chunks delivered.
pub async fn deliver(
    chunks: &[String],
    sender: &dyn BaseMessageSender,
) -> Result<usize, JobPushError> {
    let total = chunks.len();
    for (i, chunk) in chunks.iter().enumerate() {
        if let Err(e) = sender.send(chunk).await {
            error!(chunk = i + 1, total, error = %e, "Delivery failed, not sending remaining chunks");
            return Err(JobPushError::Delivery {
                chunk: i + 1,
                total,
                reason: e.to_string(),
            });
        }
    }
    info!(chunks = total, "Message delivered");
    Ok(total)
}

/// Merge this run's ids into the state and stamp `last_run`.
///
/// Under [`SeenPolicy::Consider`] every new job is marked, delivered or not.
/// Under [`SeenPolicy::Deliver`] only the batch is marked, and only when it
/// was actually delivered. Returns how many ids were added.
pub fn record_run(
    state: &mut RunState,
    plan: &PushPlan,
    policy: SeenPolicy,
    delivered: bool,
    now: DateTime<Tz>,
) -> usize {
    let added = match policy {
        SeenPolicy::Consider => state.mark_seen(plan.outcome.new_jobs.iter().map(|j| j.id.as_str())),
        SeenPolicy::Deliver if delivered => {
            state.mark_seen(plan.batch.iter().map(|j| j.id.as_str()))
        }
        SeenPolicy::Deliver => 0,
    };
    state.touch(now);

    info!(added, total_seen = state.seen_job_ids.len(), "State updated");
    added
}

/// How a run hands off its message.
pub enum PushMode<'a> {
    Send(&'a dyn BaseMessageSender),
    DryRun,
}

#[derive(Debug)]
pub struct PushReport {
    pub plan: PushPlan,
    /// Plain-text preview, dry runs only
    pub preview: Option<String>,
    pub delivered_chunks: usize,
    pub newly_seen: usize,
    /// Set when a send failed. State has still been updated.
    pub delivery_error: Option<JobPushError>,
}

/// Run the whole push flow against an in-memory state.
///
/// The caller persists `state` afterwards, including when
/// `delivery_error` is set.
pub async fn run_push(
    jobs: &[Job],
    config: &Config,
    state: &mut RunState,
    mode: PushMode<'_>,
    now: DateTime<Tz>,
) -> PushReport {
    let plan = plan_push(jobs, config, state, now);

    let (preview, delivered_chunks, delivery_error) = match mode {
        PushMode::DryRun => (Some(strip_markup(&plan.message)), 0, None),
        PushMode::Send(sender) => match deliver(&plan.chunks, sender).await {
            Ok(n) => (None, n, None),
            Err(e) => {
                let sent = match &e {
                    JobPushError::Delivery { chunk, .. } => chunk - 1,
                    _ => 0,
                };
                (None, sent, Some(e))
            }
        },
    };

    let delivered = preview.is_none() && delivery_error.is_none();
    let newly_seen = record_run(state, &plan, config.delivery.mark_seen, delivered, now);

    PushReport {
        plan,
        preview,
        delivered_chunks,
        newly_seen,
        delivery_error,
    }
}
