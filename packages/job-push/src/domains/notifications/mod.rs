pub mod chunking;
pub mod message;

pub use chunking::{split_message, DEFAULT_MAX_LENGTH};
pub use message::{render, render_now, MESSAGE_TITLE, NO_JOBS_NOTICE};
