//! Interview Insights - structured Q&A extraction from interview transcripts
//!
//! This crate turns an interview transcript (plus optional resume context)
//! into a validated, schema-conformant record of interviewer questions and
//! candidate answers, using OpenAI structured outputs, and projects the
//! result to markdown.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Schema types, prompt building, usage accounting, text
//!   decoding, markdown projection, and errors
//! - **Application**: Use cases and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (OpenAI, ingestion, config)
//! - **CLI**: Command-line interface and argument parsing

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
