// file: src/render/chart.rs
// description: vertical bar chart of top word frequencies rendered to SVG
// reference: https://docs.rs/plotters

use crate::config::RenderConfig;
use crate::error::{RenderError, Result};
use crate::models::TopN;
use plotters::prelude::*;
use std::path::Path;
use tracing::debug;

const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
const X_DESC: &str = "词语";
const Y_DESC: &str = "词频";

pub struct BarChartRenderer {
    width: u32,
    height: u32,
    title: String,
    font_family: String,
}

impl BarChartRenderer {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            width: config.chart_width,
            height: config.chart_height,
            title: config.chart_title.clone(),
            font_family: config.font_family.clone(),
        }
    }

    pub fn render(&self, top: &TopN, path: &Path) -> Result<()> {
        if top.is_empty() {
            return Err(RenderError::EmptyWordSet.into());
        }

        let words = top.words();
        let bars = words.len() as u32;
        let y_max = top.max_count() + top.max_count() / 10 + 1;
        let font = self.font_family.as_str();
        let draw_err = |e: &dyn std::fmt::Display| RenderError::drawing("bar chart", e);

        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(|e| draw_err(&e))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(self.title.as_str(), (font, 24.0).into_font())
            .margin(20)
            .x_label_area_size(90)
            .y_label_area_size(60)
            .build_cartesian_2d((0u32..bars).into_segmented(), 0u64..y_max)
            .map_err(|e| draw_err(&e))?;

        let label = |v: &SegmentValue<u32>| match v {
            SegmentValue::CenterOf(i) => words
                .get(*i as usize)
                .map(|w| w.word.clone())
                .unwrap_or_default(),
            _ => String::new(),
        };

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(words.len())
            .x_label_formatter(&label)
            .x_label_style(
                TextStyle::from((font, 14.0).into_font()).transform(FontTransform::Rotate270),
            )
            .y_label_style((font, 14.0).into_font())
            .x_desc(X_DESC)
            .y_desc(Y_DESC)
            .axis_desc_style((font, 16.0).into_font())
            .draw()
            .map_err(|e| draw_err(&e))?;

        chart
            .draw_series(
                Histogram::vertical(&chart)
                    .style(SKY_BLUE.filled())
                    .margin(6)
                    .data(words.iter().enumerate().map(|(i, w)| (i as u32, w.count))),
            )
            .map_err(|e| draw_err(&e))?;

        root.present().map_err(|e| draw_err(&e))?;

        debug!("Wrote bar chart with {} bars to {}", bars, path.display());
        Ok(())
    }
}
