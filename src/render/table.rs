// file: src/render/table.rs
// description: ranked frequency table for terminal output
// reference: https://docs.rs/tabled

use crate::models::{RankedWord, TopN};
use tabled::Table;
use tabled::settings::Style;

pub const TABLE_CAPTION: &str = "以下是前20个词频统计表格：";

pub struct TableRenderer;

impl TableRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, top: &TopN) -> String {
        self.render_rows(&top.ranked())
    }

    pub fn render_rows(&self, rows: &[RankedWord]) -> String {
        let mut table = Table::new(rows);
        table.with(Style::psql());
        format!("{}\n", table)
    }
}

impl Default for TableRenderer {
    fn default() -> Self {
        Self::new()
    }
}
