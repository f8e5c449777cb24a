// file: src/render/cloud.rs
// description: word cloud image generation from ranked word counts
// reference: https://docs.rs/wcloud

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::models::TopN;
use ab_glyph::FontVec;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use wcloud::{Tokenizer, WordCloud, WordCloudSize};

pub struct WordCloudRenderer {
    width: u32,
    height: u32,
    max_words: usize,
    font_path: PathBuf,
}

impl WordCloudRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            width: config.cloud_width,
            height: config.cloud_height,
            max_words: config.max_words,
            font_path: config.font_path.clone(),
        }
    }

    /// Reads and parses the configured font file.
    pub fn load_font(&self) -> Result<FontVec> {
        let bytes = fs::read(&self.font_path).map_err(|e| RenderError::font(&self.font_path, e))?;
        let font =
            FontVec::try_from_vec(bytes).map_err(|e| RenderError::font(&self.font_path, e))?;

        debug!("Loaded word cloud font {}", self.font_path.display());
        Ok(font)
    }

    /// Renders at most `max_words` words and returns how many went in.
    pub fn render(&self, top: &TopN, path: &Path) -> Result<usize> {
        if top.is_empty() {
            return Err(RenderError::EmptyWordSet.into());
        }

        let font = self.load_font()?;
        self.render_with_font(top, font, path)
    }

    pub fn render_with_font(&self, top: &TopN, font: FontVec, path: &Path) -> Result<usize> {
        if top.is_empty() {
            return Err(RenderError::EmptyWordSet.into());
        }

        let words = top.limited(self.max_words);

        let tokenizer = Tokenizer::default().with_max_words(words.len() as u32);
        let cloud = WordCloud::default()
            .with_tokenizer(tokenizer)
            .with_font(font);

        let size = WordCloudSize::FromDimensions {
            width: self.width,
            height: self.height,
        };
        let image = cloud.generate_from_text(&frequency_text(&words), size, 1.0);

        image
            .save(path)
            .map_err(|e| RenderError::drawing("word cloud", e))?;

        debug!("Wrote word cloud of {} words to {}", words.len(), path.display());
        Ok(words.len())
    }
}

/// Space-separated text in which every word occurs exactly `count` times,
/// so the cloud's own counting reproduces the ranked frequencies.
fn frequency_text(top: &TopN) -> String {
    top.words()
        .iter()
        .flat_map(|w| std::iter::repeat_n(w.word.as_str(), w.count as usize))
        .collect::<Vec<_>>()
        .join(" ")
}
