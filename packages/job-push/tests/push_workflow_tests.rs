//! Push runs against mock delivery, covering state updates and failures.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use job_push_core::config::{Config, SeenPolicy};
use job_push_core::domains::jobs::{Job, RunState};
use job_push_core::kernel::MockMessageSender;
use job_push_core::workflows::{plan_push, run_push, PushMode};
use job_push_core::JobPushError;

fn now() -> DateTime<Tz> {
    chrono_tz::America::Toronto
        .with_ymd_and_hms(2024, 3, 1, 9, 0, 0)
        .unwrap()
}

fn job(id: &str) -> Job {
    Job {
        id: id.to_string(),
        title: format!("Rust Developer {}", id),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        url: format!("https://www.linkedin.com/jobs/view/{}", id),
        posted: "2024-02-29".to_string(),
        description: String::new(),
    }
}

fn config(json: &str) -> Config {
    let config: Config = serde_json::from_str(json).unwrap();
    config.validate().unwrap();
    config
}

#[tokio::test]
async fn send_marks_every_new_job_by_default() {
    let config = config(r#"{"filters":{"keywords":["rust"],"maxSend":2}}"#);
    let jobs = vec![job("1"), job("2"), job("3")];
    let mut state = RunState::default();
    let sender = MockMessageSender::new();

    let report = run_push(&jobs, &config, &mut state, PushMode::Send(&sender), now()).await;

    assert!(report.delivery_error.is_none());
    assert_eq!(report.plan.batch.len(), 2);
    assert_eq!(report.plan.held_back().len(), 1);
    assert_eq!(sender.sent().len(), 1);
    assert!(sender.sent()[0].contains("New jobs found: 2"));

    // job 3 was never sent but is still marked seen
    assert_eq!(report.newly_seen, 3);
    assert!(state.has_seen("3"));
    assert_eq!(state.last_run.as_deref(), Some("2024-03-01T09:00:00-05:00"));
}

#[tokio::test]
async fn deliver_policy_leaves_held_back_jobs_eligible() {
    let config = config(
        r#"{"filters":{"keywords":["rust"],"maxSend":2},"delivery":{"markSeen":"deliver"}}"#,
    );
    let jobs = vec![job("1"), job("2"), job("3")];
    let mut state = RunState::default();
    let sender = MockMessageSender::new();

    run_push(&jobs, &config, &mut state, PushMode::Send(&sender), now()).await;
    assert!(state.has_seen("1") && state.has_seen("2"));
    assert!(!state.has_seen("3"));

    // next run picks up the job that was held back
    let second = MockMessageSender::new();
    let report = run_push(&jobs, &config, &mut state, PushMode::Send(&second), now()).await;
    assert_eq!(report.plan.batch.len(), 1);
    assert_eq!(report.plan.batch[0].id, "3");
    assert!(state.has_seen("3"));
}

#[tokio::test]
async fn delivery_failure_stops_and_still_updates_state() {
    let config = config(
        r#"{"filters":{"keywords":["rust"],"maxSend":50},"delivery":{"maxMessageLength":300}}"#,
    );
    let jobs: Vec<Job> = (1..=10).map(|i| job(&i.to_string())).collect();
    let mut state = RunState::default();
    let sender = MockMessageSender::new().failing_on(1);

    let report = run_push(&jobs, &config, &mut state, PushMode::Send(&sender), now()).await;

    assert!(report.plan.chunks.len() > 2);
    assert_eq!(sender.call_count(), 2);
    assert_eq!(sender.sent().len(), 1);
    assert_eq!(report.delivered_chunks, 1);
    assert!(matches!(
        report.delivery_error,
        Some(JobPushError::Delivery { chunk: 2, .. })
    ));
    assert_eq!(state.seen_job_ids.len(), 10);
    assert!(state.last_run.is_some());
}

#[tokio::test]
async fn deliver_policy_marks_nothing_on_failure() {
    let config = config(r#"{"delivery":{"markSeen":"deliver"}}"#);
    let mut state = RunState::default();
    let sender = MockMessageSender::new().failing_on(0);

    let report = run_push(&[job("1")], &config, &mut state, PushMode::Send(&sender), now()).await;

    assert!(report.delivery_error.is_some());
    assert_eq!(report.newly_seen, 0);
    assert!(state.seen_job_ids.is_empty());
    assert!(state.last_run.is_some());
}

#[tokio::test]
async fn dry_run_previews_without_markup() {
    let config = config(r#"{"filters":{"keywords":["rust"]}}"#);
    let mut state = RunState::default();

    let mut rnd = job("2");
    rnd.title = "Rust R&D Engineer".to_string();

    let report = run_push(&[job("1"), rnd], &config, &mut state, PushMode::DryRun, now()).await;

    let preview = report.preview.expect("dry run has a preview");
    assert!(preview.starts_with("LinkedIn Jobs Daily Push\n"));
    assert!(preview.contains("1. Rust Developer 1"));
    assert!(preview.contains("2. Rust R&D Engineer"));
    assert!(!preview.contains("&amp;"));
    assert!(!preview.contains('<'));
    assert_eq!(report.delivered_chunks, 0);
    // default policy marks considered jobs even on a dry run
    assert!(state.has_seen("1"));
}

#[tokio::test]
async fn seen_jobs_produce_no_jobs_message() {
    let config = config("{}");
    let mut state = RunState::default();
    state.mark_seen(["1"]);
    let sender = MockMessageSender::new();

    let report = run_push(&[job("1")], &config, &mut state, PushMode::Send(&sender), now()).await;

    assert!(report.plan.batch.is_empty());
    assert_eq!(sender.sent().len(), 1);
    assert!(sender.sent()[0].contains("No new jobs matching your filters today."));
    assert_eq!(report.newly_seen, 0);
}

#[test]
fn seen_ids_only_grow() {
    let config = config("{}");
    let mut state = RunState::default();
    state.mark_seen(["old-1", "old-2"]);

    let plan = plan_push(&[job("new")], &config, &state, now());
    job_push_core::workflows::record_run(&mut state, &plan, SeenPolicy::Consider, true, now());

    for id in ["old-1", "old-2", "new"] {
        assert!(state.has_seen(id));
    }
}
