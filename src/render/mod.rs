// file: src/render/mod.rs
// description: word cloud, bar chart and table presentation of the top words
// reference: internal module structure

pub mod chart;
pub mod cloud;
pub mod table;

pub use chart::BarChartRenderer;
pub use cloud::WordCloudRenderer;
pub use table::{TABLE_CAPTION, TableRenderer};

use crate::config::RenderConfig;
use crate::error::{PipelineError, RenderError, Result};
use crate::models::TopN;
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub const CLOUD_FILE: &str = "wordcloud.png";
pub const CHART_FILE: &str = "barchart.svg";

/// Everything produced for one set of top words.
#[derive(Debug, Clone)]
pub struct Presentation {
    pub cloud_path: PathBuf,
    pub chart_path: PathBuf,
    pub cloud_words: usize,
    pub table: String,
}

pub struct Presenter {
    output_dir: PathBuf,
    cloud: WordCloudRenderer,
    chart: BarChartRenderer,
    table: TableRenderer,
}

impl Presenter {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            cloud: WordCloudRenderer::new(config),
            chart: BarChartRenderer::new(config),
            table: TableRenderer::new(),
        }
    }

    pub fn output_dir(&self) -> &PathBuf {
        &self.output_dir
    }

    pub fn present(&self, top: &TopN) -> Result<Presentation> {
        if top.is_empty() {
            return Err(RenderError::EmptyWordSet.into());
        }

        let font = self.cloud.load_font()?;

        fs::create_dir_all(&self.output_dir).map_err(|source| PipelineError::FileOperation {
            path: self.output_dir.clone(),
            source,
        })?;

        let cloud_path = self.output_dir.join(CLOUD_FILE);
        let cloud_words = self.cloud.render_with_font(top, font, &cloud_path)?;
        info!("Word cloud written to {}", cloud_path.display());

        let chart_path = self.output_dir.join(CHART_FILE);
        self.chart.render(top, &chart_path)?;
        info!("Bar chart written to {}", chart_path.display());

        Ok(Presentation {
            cloud_path,
            chart_path,
            cloud_words,
            table: self.table.render(top),
        })
    }
}
