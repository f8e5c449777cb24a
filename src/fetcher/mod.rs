// file: src/fetcher/mod.rs
// description: page retrieval module exports
// reference: internal module structure

pub mod http;

pub use http::PageFetcher;
