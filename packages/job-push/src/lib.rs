// LinkedIn Job Push - core
//
// Scrapes LinkedIn guest job listings, filters them (keywords, location,
// experience ceiling, seen ids), and pushes new matches to a Telegram chat.
//
// domains/ holds the pure logic, kernel/ the collaborator traits, and
// workflows/ the runs that combine the two.

pub mod common;
pub mod config;
pub mod domains;
pub mod error;
pub mod kernel;
pub mod workflows;

pub use config::*;
pub use error::{JobPushError, Result};
