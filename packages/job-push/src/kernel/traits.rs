// Trait definitions for the two network collaborators
//
// These are INFRASTRUCTURE traits only. Filtering and formatting never see
// them; workflows take them as parameters so tests can swap in mocks.
//
// Naming convention: Base* for trait names

use anyhow::Result;
use async_trait::async_trait;
use linkedin_client::{LinkedInClient, SearchQuery};
use telegram::TelegramService;

use crate::domains::jobs::Job;

// =============================================================================
// Job source (scraping)
// =============================================================================

#[async_trait]
pub trait BaseJobSource: Send + Sync {
    /// Fetch listings for a query. Jobs without an id must already be dropped.
    async fn fetch_jobs(&self, query: &SearchQuery) -> Result<Vec<Job>>;
}

#[async_trait]
impl BaseJobSource for LinkedInClient {
    async fn fetch_jobs(&self, query: &SearchQuery) -> Result<Vec<Job>> {
        let postings = LinkedInClient::fetch_jobs(self, query).await?;
        Ok(postings.into_iter().map(Job::from).collect())
    }
}

// =============================================================================
// Message sender (delivery)
// =============================================================================

#[async_trait]
pub trait BaseMessageSender: Send + Sync {
    /// Deliver one chunk. Chunks arrive in order.
    async fn send(&self, text: &str) -> Result<()>;
}

#[async_trait]
impl BaseMessageSender for TelegramService {
    async fn send(&self, text: &str) -> Result<()> {
        self.send_message(text).await?;
        Ok(())
    }
}
