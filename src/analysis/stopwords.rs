// file: src/analysis/stopwords.rs
// description: stopword policy applied after segmentation
// reference: https://docs.rs/jieba-rs

use crate::config::AnalysisConfig;
use std::collections::HashSet;

/// Common pronouns and particles excluded from counting by default.
pub const DEFAULT_STOPWORDS: [&str; 16] = [
    "的", "了", "在", "是", "我", "你", "他", "她", "它", "们", "这", "那", "之", "与", "和", "或",
];

/// A fixed set of tokens that are never counted.
#[derive(Debug, Clone)]
pub struct StopwordSet {
    ordered: Vec<String>,
    lookup: HashSet<String>,
}

impl Default for StopwordSet {
    fn default() -> Self {
        Self::from_list(DEFAULT_STOPWORDS)
    }
}

impl StopwordSet {
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self {
            ordered: Vec::new(),
            lookup: HashSet::new(),
        };
        set.extend(words);
        set
    }

    /// Base list followed by the extra entries.
    pub fn from_config(config: &AnalysisConfig) -> Self {
        let mut set = Self::from_list(&config.stopwords);
        set.extend(&config.extra_stopwords);
        set
    }

    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref();
            if !word.is_empty() && self.lookup.insert(word.to_string()) {
                self.ordered.push(word.to_string());
            }
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.lookup.contains(token)
    }

    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    /// Entries in the order they were configured.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}
