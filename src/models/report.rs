// file: src/models/report.rs
// description: analysis result and run statistics for one pipeline invocation
// reference: internal data structures

use crate::models::{RankedWord, TopN};
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub bytes_fetched: u64,
    pub cleaned_chars: usize,
    pub token_count: usize,
    pub distinct_tokens: usize,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub source: String,
    pub content_hash: String,
    pub generated_at: String,
    pub stats: RunStats,
    pub top: TopN,
}

impl AnalysisReport {
    pub fn new(source: String, content_hash: String, stats: RunStats, top: TopN) -> Self {
        Self {
            source,
            content_hash,
            generated_at: Utc::now().to_rfc3339(),
            stats,
            top,
        }
    }

    pub fn ranked(&self) -> Vec<RankedWord> {
        self.top.ranked()
    }
}
