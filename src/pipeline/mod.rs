// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod progress;
mod runner;

pub use progress::{ProgressTracker, Stage};
pub use runner::WordFrequencyPipeline;
