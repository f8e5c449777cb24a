// file: src/parser/patterns.rs
// description: compiled regex patterns for text cleaning
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").expect("WHITESPACE_RUN regex is valid");

    // word characters are letters, any numeric character and underscore;
    // combining marks and connector punctuation other than `_` are removed
    pub static ref NON_WORD: Regex = Regex::new(r"[^\p{L}\p{N}_\s]").expect("NON_WORD regex is valid");

    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d+").expect("DIGIT_RUN regex is valid");
}
