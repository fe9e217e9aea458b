pub mod experience;
pub mod pipeline;
pub mod stages;

pub use experience::{extract_min_experience, word_to_number};
pub use pipeline::{FilterPipeline, PipelineOutcome, StageCounts};
pub use stages::{deduplicate, filter_by_experience, filter_by_keywords, filter_by_location};
