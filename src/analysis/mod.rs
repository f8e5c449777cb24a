// file: src/analysis/mod.rs
// description: segmentation and frequency ranking module exports
// reference: internal module structure

pub mod aggregator;
pub mod stopwords;
pub mod tokenizer;

pub use aggregator::Aggregator;
pub use stopwords::{DEFAULT_STOPWORDS, StopwordSet};
pub use tokenizer::Tokenizer;
