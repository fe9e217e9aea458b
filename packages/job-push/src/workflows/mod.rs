// Workflows wire the pure domains to the network collaborators.

pub mod fetch;
pub mod push;

pub use fetch::{run_fetch, search_query};
pub use push::{deliver, plan_push, record_run, run_push, PushMode, PushPlan, PushReport};
