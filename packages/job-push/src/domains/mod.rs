pub mod filtering;
pub mod jobs;
pub mod notifications;
