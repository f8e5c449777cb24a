// file: src/analysis/aggregator.rs
// description: frequency counting and top-n selection
// reference: ordered counting with stable tie-breaking

use crate::config::AnalysisConfig;
use crate::models::{FrequencyTable, TieBreak, TokenList, TopN};
use tracing::debug;

pub struct Aggregator {
    top_n: usize,
    tie_break: TieBreak,
}

impl Aggregator {
    pub fn new(top_n: usize, tie_break: TieBreak) -> Self {
        Self { top_n, tie_break }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(config.top_n, config.tie_break)
    }

    pub fn count(&self, tokens: &TokenList) -> FrequencyTable {
        FrequencyTable::from_tokens(tokens)
    }

    pub fn select(&self, table: &FrequencyTable) -> TopN {
        let top = table.top_n(self.top_n, self.tie_break);
        debug!(
            "Selected {} of {} distinct tokens ({:?} tie-break)",
            top.len(),
            table.len(),
            self.tie_break
        );
        top
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(20, TieBreak::FirstSeen)
    }
}
