// file: src/parser/normalizer.rs
// description: punctuation and digit removal ahead of segmentation
// reference: https://docs.rs/regex

use crate::models::CleanedText;
use crate::parser::patterns::{DIGIT_RUN, NON_WORD};

pub struct TextNormalizer;

impl TextNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Both passes always run, punctuation first.
    pub fn normalize(&self, text: &CleanedText) -> String {
        let without_punctuation = self.remove_punctuation(text.as_str());
        self.remove_digits(&without_punctuation)
    }

    fn remove_punctuation(&self, text: &str) -> String {
        NON_WORD.replace_all(text, "").into_owned()
    }

    fn remove_digits(&self, text: &str) -> String {
        DIGIT_RUN.replace_all(text, "").into_owned()
    }
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
