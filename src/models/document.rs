// file: src/models/document.rs
// description: fetched page and the text artifacts derived from it
// reference: internal data structures

use serde::Serialize;
use sha2::{Digest, Sha256};

/// A fetched page body, decoded as UTF-8 regardless of the declared charset.
#[derive(Debug, Clone, Serialize)]
pub struct RawDocument {
    pub source: String,
    pub status: Option<u16>,
    pub body: String,
    pub byte_len: u64,
    pub content_hash: String,
}

impl RawDocument {
    pub fn new(source: impl Into<String>, status: Option<u16>, body: String) -> Self {
        let content_hash = Self::compute_hash(body.as_bytes());
        let byte_len = body.len() as u64;

        Self {
            source: source.into(),
            status,
            body,
            byte_len,
            content_hash,
        }
    }

    /// Invalid UTF-8 sequences become U+FFFD instead of failing the run.
    pub fn from_bytes(source: impl Into<String>, status: Option<u16>, bytes: &[u8]) -> Self {
        let body = String::from_utf8_lossy(bytes).into_owned();
        let mut document = Self::new(source, status, body);
        document.byte_len = bytes.len() as u64;
        document.content_hash = Self::compute_hash(bytes);
        document
    }

    fn compute_hash(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }
}

/// Plain text with every whitespace run removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedText(String);

impl CleanedText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn char_count(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Tokens in order of appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList(Vec<String>);

impl TokenList {
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_document_creation() {
        let doc = RawDocument::new("https://example.com", Some(200), "<p>你好</p>".to_string());

        assert_eq!(doc.source, "https://example.com");
        assert_eq!(doc.status, Some(200));
        assert_eq!(doc.byte_len, 13);
        assert_eq!(doc.content_hash.len(), 64);
    }

    #[test]
    fn test_from_bytes_replaces_invalid_utf8() {
        let doc = RawDocument::from_bytes("page", None, &[0xe4, 0xbd, 0xa0, 0xff]);

        assert_eq!(doc.body, "你\u{fffd}");
        assert_eq!(doc.byte_len, 4);
    }

    #[test]
    fn test_hash_consistency() {
        let a = RawDocument::from_bytes("a", None, "同一内容".as_bytes());
        let b = RawDocument::new("b", Some(404), "同一内容".to_string());
        assert_eq!(a.content_hash, b.content_hash);
    }

    #[test]
    fn test_cleaned_text_counts_chars() {
        let text = CleanedText::new("天安门".to_string());
        assert_eq!(text.char_count(), 3);
        assert!(!text.is_empty());
        assert!(CleanedText::default().is_empty());
    }
}
