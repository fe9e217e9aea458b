//! Rendering and chunking of the outgoing message.

use chrono::{DateTime, TimeZone};
use chrono_tz::Tz;
use job_push_core::domains::jobs::Job;
use job_push_core::domains::notifications::{
    render, split_message, DEFAULT_MAX_LENGTH, NO_JOBS_NOTICE,
};

fn now() -> DateTime<Tz> {
    chrono_tz::America::Toronto
        .with_ymd_and_hms(2024, 12, 3, 18, 45, 0)
        .unwrap()
}

fn jobs(n: usize) -> Vec<Job> {
    (1..=n)
        .map(|i| Job {
            id: i.to_string(),
            title: format!("Backend Engineer #{}", i),
            company: "Northwind".to_string(),
            location: "Vancouver, BC".to_string(),
            url: format!("https://www.linkedin.com/jobs/view/{}", 3_900_000_000u64 + i as u64),
            posted: if i % 2 == 0 { "2024-12-02".to_string() } else { String::new() },
            description: "5 years".to_string(),
        })
        .collect()
}

#[test]
fn single_chunk_round_trip() {
    let text = render(&jobs(5), "x", now());
    let chunks = split_message(&text, DEFAULT_MAX_LENGTH);
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks.join("\n"), text);
}

#[test]
fn empty_list_renders_notice_in_one_chunk() {
    let text = render(&[], "rust", now());
    assert!(text.contains(NO_JOBS_NOTICE));
    assert!(text.contains("New jobs found: 0"));
    assert_eq!(split_message(&text, DEFAULT_MAX_LENGTH).len(), 1);
}

#[test]
fn header_uses_zone_abbreviation() {
    let text = render(&[], "rust", now());
    assert!(text.contains("<i>2024-12-03 18:45 EST</i>"));
}

#[test]
fn numbering_and_posted_lines() {
    let text = render(&jobs(2), "rust", now());
    assert!(text.contains("1. <a href=\"https://www.linkedin.com/jobs/view/3900000001\">Backend Engineer #1</a>"));
    assert!(text.contains("   Northwind | Vancouver, BC"));
    assert_eq!(text.matches("Posted:").count(), 1);
    assert!(text.contains("   Posted: 2024-12-02"));
    assert!(!text.contains(NO_JOBS_NOTICE));
}

#[test]
fn long_message_splits_within_limit_and_rejoins() {
    let text = render(&jobs(200), "rust, backend", now());
    assert!(text.chars().count() > DEFAULT_MAX_LENGTH);

    let chunks = split_message(&text, DEFAULT_MAX_LENGTH);
    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= DEFAULT_MAX_LENGTH));
    assert_eq!(chunks.join("\n"), text);
}
