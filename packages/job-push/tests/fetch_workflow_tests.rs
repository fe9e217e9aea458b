//! Fetch runs against a mock job source.

use job_push_core::config::Config;
use job_push_core::domains::jobs::Job;
use job_push_core::kernel::MockJobSource;
use job_push_core::workflows::run_fetch;

fn job(id: &str) -> Job {
    Job {
        id: id.to_string(),
        title: "Rust Developer".to_string(),
        company: "Acme".to_string(),
        location: "Remote".to_string(),
        url: format!("https://www.linkedin.com/jobs/view/{}", id),
        posted: String::new(),
        description: String::new(),
    }
}

#[tokio::test]
async fn fetch_requires_keywords_before_any_request() {
    let config: Config = serde_json::from_str("{}").unwrap();
    let source = MockJobSource::new().with_jobs(vec![job("1")]);

    assert!(run_fetch(&config, &source).await.is_err());
    assert!(source.queries().is_empty());
}

#[tokio::test]
async fn fetch_builds_query_from_filters() {
    let config: Config = serde_json::from_str(
        r#"{"filters":{"keywords":["rust","backend"],"country":"Germany","maxResults":5}}"#,
    )
    .unwrap();
    let source = MockJobSource::new().with_jobs(vec![job("1")]);

    run_fetch(&config, &source).await.unwrap();

    let queries = source.queries();
    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].keywords, vec!["rust", "backend"]);
    assert_eq!(queries[0].country, "Germany");
    assert_eq!(queries[0].max_results, 5);
}

#[tokio::test]
async fn fetch_drops_jobs_without_id_and_caps_results() {
    let config: Config =
        serde_json::from_str(r#"{"filters":{"keywords":["rust"],"maxResults":2}}"#).unwrap();
    let source = MockJobSource::new().with_jobs(vec![job(""), job("1"), job(" "), job("2"), job("3")]);

    let jobs = run_fetch(&config, &source).await.unwrap();

    let ids: Vec<&str> = jobs.iter().map(|j| j.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[tokio::test]
async fn fetch_query_skips_blank_keywords() {
    let config: Config =
        serde_json::from_str(r#"{"filters":{"keywords":[" rust ","   ",""]}}"#).unwrap();
    let source = MockJobSource::new().with_jobs(vec![job("1")]);

    run_fetch(&config, &source).await.unwrap();

    assert_eq!(source.queries()[0].keywords, vec!["rust"]);
}
