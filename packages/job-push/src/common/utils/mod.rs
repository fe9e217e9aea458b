pub mod files;
pub mod markup;
pub mod search_text;

pub use files::*;
pub use markup::*;
pub use search_text::*;
