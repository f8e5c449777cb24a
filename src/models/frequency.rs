// file: src/models/frequency.rs
// description: token frequency table and ranked top-n selection
// reference: ordered counting with stable tie-breaking

use crate::models::TokenList;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tabled::Tabled;

/// How tokens with equal counts are ordered in a [`TopN`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// The token seen first in the text ranks higher.
    #[default]
    FirstSeen,
    /// Equal counts are ordered by the token's string value.
    Lexicographic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

/// One table row; columns follow field order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Tabled)]
pub struct RankedWord {
    #[tabled(rename = "词语")]
    pub word: String,
    #[tabled(rename = "词频")]
    pub count: u64,
    #[tabled(rename = "序号")]
    pub rank: usize,
}

/// Occurrence counts keyed by token, remembering first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<WordCount>,
    index: HashMap<String, usize>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: &TokenList) -> Self {
        let mut table = Self::new();
        for token in tokens.iter() {
            table.add(token);
        }
        table
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&slot) => self.entries[slot].count += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push(WordCount {
                    word: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    pub fn get(&self, token: &str) -> u64 {
        self.index
            .get(token)
            .map(|&slot| self.entries[slot].count)
            .unwrap_or(0)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[WordCount] {
        &self.entries
    }

    pub fn top_n(&self, n: usize, tie_break: TieBreak) -> TopN {
        let mut ranked = self.entries.clone();

        // sort_by is stable, so equal counts keep first-seen order
        match tie_break {
            TieBreak::FirstSeen => ranked.sort_by(|a, b| b.count.cmp(&a.count)),
            TieBreak::Lexicographic => {
                ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)))
            }
        }

        ranked.truncate(n);
        TopN::new(ranked)
    }
}

/// The highest-frequency tokens, counts non-increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopN {
    words: Vec<WordCount>,
}

impl TopN {
    fn new(words: Vec<WordCount>) -> Self {
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> &[WordCount] {
        &self.words
    }

    pub fn max_count(&self) -> u64 {
        self.words.first().map(|w| w.count).unwrap_or(0)
    }

    /// Keeps only the first `n` entries.
    pub fn limited(&self, n: usize) -> TopN {
        TopN::new(self.words.iter().take(n).cloned().collect())
    }

    pub fn ranked(&self) -> Vec<RankedWord> {
        self.words
            .iter()
            .enumerate()
            .map(|(i, w)| RankedWord {
                rank: i + 1,
                word: w.word.clone(),
                count: w.count,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokens(words: &[&str]) -> TokenList {
        TokenList::new(words.iter().map(|w| w.to_string()).collect())
    }

    #[test]
    fn test_counts_exact_matches() {
        let table = FrequencyTable::from_tokens(&tokens(&["北京", "天安门", "北京", "北京"]));

        assert_eq!(table.get("北京"), 3);
        assert_eq!(table.get("天安门"), 1);
        assert_eq!(table.get("上海"), 0);
        assert_eq!(table.len(), 2);
        assert_eq!(table.total(), 4);
    }

    #[test]
    fn test_top_n_ties_follow_first_seen_order() {
        let table = FrequencyTable::from_tokens(&tokens(&["丙", "甲", "乙", "甲", "丁", "乙"]));
        let top = table.top_n(10, TieBreak::FirstSeen);
        let order: Vec<&str> = top.words().iter().map(|w| w.word.as_str()).collect();

        assert_eq!(order, vec!["甲", "乙", "丙", "丁"]);
    }

    #[test]
    fn test_top_n_lexicographic_ties() {
        let table = FrequencyTable::from_tokens(&tokens(&["c", "b", "a", "b"]));
        let top = table.top_n(10, TieBreak::Lexicographic);
        let order: Vec<&str> = top.words().iter().map(|w| w.word.as_str()).collect();

        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_top_n_truncates_and_stays_sorted() {
        let words: Vec<String> = (0..30)
            .flat_map(|i| std::iter::repeat_n(format!("w{}", i), i % 7 + 1))
            .collect();
        let table = FrequencyTable::from_tokens(&TokenList::new(words));
        let top = table.top_n(20, TieBreak::FirstSeen);

        assert_eq!(top.len(), 20);
        assert!(top.words().windows(2).all(|p| p[0].count >= p[1].count));
    }

    #[test]
    fn test_top_n_returns_all_when_fewer_distinct() {
        let table = FrequencyTable::from_tokens(&tokens(&["一", "二"]));
        assert_eq!(table.top_n(20, TieBreak::FirstSeen).len(), 2);
        assert!(FrequencyTable::new().top_n(20, TieBreak::FirstSeen).is_empty());
    }

    #[test]
    fn test_ranked_is_one_based() {
        let table = FrequencyTable::from_tokens(&tokens(&["爱", "北京", "北京"]));
        let ranked = table.top_n(20, TieBreak::FirstSeen).ranked();

        assert_eq!(
            ranked,
            vec![
                RankedWord {
                    rank: 1,
                    word: "北京".to_string(),
                    count: 2
                },
                RankedWord {
                    rank: 2,
                    word: "爱".to_string(),
                    count: 1
                },
            ]
        );
    }
}
