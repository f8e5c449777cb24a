// file: src/parser/mod.rs
// description: markup cleaning and text normalization module exports
// reference: internal module structure

pub mod html;
pub mod normalizer;
pub mod patterns;

pub use html::HtmlCleaner;
pub use normalizer::TextNormalizer;
