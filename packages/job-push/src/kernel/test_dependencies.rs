// TestDependencies - mock collaborators for testing workflows
//
// Both mocks record every call so tests can assert on what was fetched or sent.

use anyhow::Result;
use async_trait::async_trait;
use linkedin_client::SearchQuery;
use std::sync::{Arc, Mutex};

use super::{BaseJobSource, BaseMessageSender};
use crate::domains::jobs::Job;

// =============================================================================
// Mock Job Source
// =============================================================================

#[derive(Default)]
pub struct MockJobSource {
    jobs: Vec<Job>,
    queries: Arc<Mutex<Vec<SearchQuery>>>,
}

impl MockJobSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_jobs(mut self, jobs: Vec<Job>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseJobSource for MockJobSource {
    async fn fetch_jobs(&self, query: &SearchQuery) -> Result<Vec<Job>> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.jobs.clone())
    }
}

// =============================================================================
// Mock Message Sender
// =============================================================================

#[derive(Default)]
pub struct MockMessageSender {
    sent: Arc<Mutex<Vec<String>>>,
    /// Zero-based index of the call that fails, if any
    fail_on: Option<usize>,
    calls: Arc<Mutex<usize>>,
}

impl MockMessageSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the nth send (zero-based) return an error.
    pub fn failing_on(mut self, call: usize) -> Self {
        self.fail_on = Some(call);
        self
    }

    /// Chunks that were accepted, in order.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl BaseMessageSender for MockMessageSender {
    async fn send(&self, text: &str) -> Result<()> {
        let call = {
            let mut calls = self.calls.lock().unwrap();
            let call = *calls;
            *calls += 1;
            call
        };

        if self.fail_on == Some(call) {
            anyhow::bail!("mock delivery failure on call {}", call);
        }

        self.sent.lock().unwrap().push(text.to_string());
        Ok(())
    }
}
