//! Report projections of extraction results

mod markdown;

pub use markdown::qa_json_to_markdown;
