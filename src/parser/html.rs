// file: src/parser/html.rs
// description: HTML to plain text extraction with whitespace removal
// reference: https://docs.rs/scraper

use crate::models::{CleanedText, RawDocument};
use crate::parser::patterns::WHITESPACE_RUN;
use scraper::Html;
use tracing::debug;

/// Elements whose text is code or markup data rather than page content.
const NON_CONTENT_ELEMENTS: [&str; 3] = ["script", "style", "template"];

pub struct HtmlCleaner;

impl HtmlCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, document: &RawDocument) -> CleanedText {
        self.clean_str(&document.body)
    }

    /// Extracts the visible text nodes in document order, then drops all whitespace.
    ///
    /// Text inside `script`, `style` and `template` is skipped, including
    /// template contents the parser moves into a document fragment.
    pub fn clean_str(&self, html: &str) -> CleanedText {
        let text = Self::extract_text(html);
        let collapsed = WHITESPACE_RUN.replace_all(&text, "").into_owned();

        debug!(
            "Cleaned {} bytes of markup into {} chars",
            html.len(),
            collapsed.chars().count()
        );

        CleanedText::new(collapsed)
    }

    fn extract_text(html: &str) -> String {
        let parsed = Html::parse_document(html);

        parsed
            .tree
            .root()
            .descendants()
            .filter_map(|node| {
                let text = node.value().as_text()?;
                let hidden = node
                    .ancestors()
                    .filter_map(|ancestor| ancestor.value().as_element())
                    .any(|element| NON_CONTENT_ELEMENTS.contains(&element.name()));
                (!hidden).then_some(&**text)
            })
            .collect()
    }
}

impl Default for HtmlCleaner {
    fn default() -> Self {
        Self::new()
    }
}
