// file: src/pipeline/progress.rs
// description: stage-by-stage progress reporting for one pipeline run
// reference: uses indicatif for progress bars

use indicatif::{ProgressBar, ProgressStyle};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetch,
    Clean,
    Normalize,
    Tokenize,
    Aggregate,
    Render,
}

impl Stage {
    pub const ALL: [Stage; 6] = [
        Stage::Fetch,
        Stage::Clean,
        Stage::Normalize,
        Stage::Tokenize,
        Stage::Aggregate,
        Stage::Render,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Stage::Fetch => "fetching page",
            Stage::Clean => "stripping markup",
            Stage::Normalize => "removing punctuation and digits",
            Stage::Tokenize => "segmenting words",
            Stage::Aggregate => "counting frequencies",
            Stage::Render => "rendering",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub struct ProgressTracker {
    bar: ProgressBar,
    stages_done: AtomicUsize,
    start_time: Instant,
}

impl ProgressTracker {
    pub fn new(total_stages: usize) -> Self {
        Self::with_color(total_stages, true)
    }

    pub fn with_color(total_stages: usize, colored: bool) -> Self {
        let bar = ProgressBar::new(total_stages as u64);
        bar.set_style(create_style(colored));
        bar.enable_steady_tick(Duration::from_millis(120));

        Self {
            bar,
            stages_done: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    /// A tracker that draws nothing, for quiet runs and tests.
    pub fn hidden(total_stages: usize) -> Self {
        let bar = ProgressBar::hidden();
        bar.set_length(total_stages as u64);

        Self {
            bar,
            stages_done: AtomicUsize::new(0),
            start_time: Instant::now(),
        }
    }

    pub fn start_stage(&self, stage: Stage) {
        self.bar.set_message(stage.label());
    }

    pub fn complete_stage(&self) {
        self.stages_done.fetch_add(1, Ordering::SeqCst);
        self.bar.inc(1);
    }

    pub fn stages_done(&self) -> usize {
        self.stages_done.load(Ordering::SeqCst)
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn finish(&self) {
        if !self.bar.is_finished() {
            self.bar.finish_and_clear();
        }
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_style(colored: bool) -> ProgressStyle {
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:20.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:20}] {pos}/{len} {msg}"
    };

    ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(if colored { "█▓▒░" } else { "=>-" })
}
