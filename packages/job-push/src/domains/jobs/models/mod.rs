pub mod job;
pub mod run_state;

pub use job::*;
pub use run_state::*;
