// file: src/analysis/tokenizer.rs
// description: dictionary-based Chinese segmentation with stopword filtering
// reference: https://docs.rs/jieba-rs

use crate::analysis::stopwords::StopwordSet;
use crate::config::AnalysisConfig;
use crate::models::TokenList;
use jieba_rs::Jieba;
use tracing::debug;

pub struct Tokenizer {
    jieba: Jieba,
    stopwords: StopwordSet,
    hmm: bool,
}

impl Tokenizer {
    pub fn new(stopwords: StopwordSet) -> Self {
        Self {
            jieba: Jieba::new(),
            stopwords,
            hmm: true,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        let mut tokenizer = Self::new(StopwordSet::from_config(config)).with_hmm(config.hmm);
        for word in &config.user_words {
            tokenizer = tokenizer.with_word(word);
        }
        tokenizer
    }

    /// Unknown-word discovery for sequences missing from the dictionary.
    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }

    /// Adds a dictionary entry so the word is kept whole.
    pub fn with_word(mut self, word: &str) -> Self {
        if !word.is_empty() {
            self.jieba.add_word(word, None, None);
        }
        self
    }

    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    pub fn tokenize(&self, text: &str) -> TokenList {
        let segments = self.jieba.cut(text, self.hmm);
        let total = segments.len();

        let tokens: Vec<String> = segments
            .into_iter()
            .filter(|token| !token.is_empty() && !self.stopwords.contains(token))
            .map(str::to_string)
            .collect();

        debug!(
            "Segmented {} tokens, {} kept after stopword filtering",
            total,
            tokens.len()
        );

        TokenList::new(tokens)
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(StopwordSet::default())
    }
}
