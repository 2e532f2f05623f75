//! LLM provider adapters

mod openai;

pub use openai::OpenAiExtractor;
