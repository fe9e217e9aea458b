pub mod schedule;
pub mod test_dependencies;
pub mod traits;

pub use schedule::*;
pub use test_dependencies::*;
pub use traits::*;
