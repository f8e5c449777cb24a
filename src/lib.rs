// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod analysis;
pub mod config;
pub mod error;
pub mod exporter;
pub mod fetcher;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod render;
pub mod utils;

pub use analysis::{Aggregator, DEFAULT_STOPWORDS, StopwordSet, Tokenizer};
pub use config::{AnalysisConfig, Config, FetchConfig, RenderConfig};
pub use error::{PipelineError, RenderError, Result};
pub use exporter::{ExportedReport, JsonExporter};
pub use fetcher::PageFetcher;
pub use models::{
    AnalysisReport, CleanedText, FrequencyTable, RankedWord, RawDocument, RunStats, TieBreak,
    TokenList, TopN, WordCount,
};
pub use parser::{HtmlCleaner, TextNormalizer};
pub use pipeline::{ProgressTracker, Stage, WordFrequencyPipeline};
pub use render::{Presentation, Presenter, TABLE_CAPTION};
pub use utils::OperationTimer;
