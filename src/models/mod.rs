// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod frequency;
pub mod report;

pub use document::{CleanedText, RawDocument, TokenList};
pub use frequency::{FrequencyTable, RankedWord, TieBreak, TopN, WordCount};
pub use report::{AnalysisReport, RunStats};
