// file: src/exporter/json.rs
// description: json export of an analysis report

use crate::error::{PipelineError, Result};
use crate::models::{AnalysisReport, RankedWord, RunStats};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const REPORT_FILE: &str = "report.json";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

#[derive(Debug, Serialize)]
pub struct ExportedReport<'a> {
    pub source: &'a str,
    pub content_hash: &'a str,
    pub generated_at: &'a str,
    pub stats: &'a RunStats,
    pub words: Vec<RankedWord>,
}

impl<'a> From<&'a AnalysisReport> for ExportedReport<'a> {
    fn from(report: &'a AnalysisReport) -> Self {
        Self {
            source: &report.source,
            content_hash: &report.content_hash,
            generated_at: &report.generated_at,
            stats: &report.stats,
            words: report.ranked(),
        }
    }
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir)?;
        Ok(Self { output_dir })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn to_json(report: &AnalysisReport, pretty: bool) -> Result<String> {
        let exported = ExportedReport::from(report);
        let json = if pretty {
            serde_json::to_string_pretty(&exported)
        } else {
            serde_json::to_string(&exported)
        };
        json.map_err(|e| PipelineError::Serialization(e.to_string()))
    }

    pub fn export(&self, report: &AnalysisReport, pretty: bool) -> Result<PathBuf> {
        let path = self.output_dir.join(REPORT_FILE);
        let json = Self::to_json(report, pretty)?;

        fs::write(&path, json).map_err(|source| PipelineError::FileOperation {
            path: path.clone(),
            source,
        })?;

        info!(
            "Exported {} words from {} to {}",
            report.top.len(),
            report.source,
            path.display()
        );
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FrequencyTable, TieBreak, TokenList};
    use tempfile::tempdir;

    fn sample_report() -> AnalysisReport {
        let tokens = TokenList::new(vec!["天安门".to_string(), "天安门".to_string(), "北京".to_string()]);
        let table = FrequencyTable::from_tokens(&tokens);
        let stats = RunStats {
            bytes_fetched: 42,
            cleaned_chars: 8,
            token_count: 3,
            distinct_tokens: table.len(),
            elapsed_ms: 1,
        };
        AnalysisReport::new(
            "https://example.com".to_string(),
            "abc".to_string(),
            stats,
            table.top_n(20, TieBreak::FirstSeen),
        )
    }

    #[test]
    fn test_exporter_creation() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path().join("exports"));
        assert!(exporter.is_ok());
        assert!(dir.path().join("exports").is_dir());
    }

    #[test]
    fn test_export_writes_ranked_words() {
        let dir = tempdir().unwrap();
        let exporter = JsonExporter::new(dir.path()).unwrap();

        let path = exporter.export(&sample_report(), true).unwrap();
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();

        assert_eq!(value["source"], "https://example.com");
        assert_eq!(value["stats"]["distinct_tokens"], 2);
        assert_eq!(value["words"][0]["rank"], 1);
        assert_eq!(value["words"][0]["word"], "天安门");
        assert_eq!(value["words"][0]["count"], 2);
        assert_eq!(value["words"][1]["word"], "北京");
    }

    #[test]
    fn test_compact_json_is_single_line() {
        let json = JsonExporter::to_json(&sample_report(), false).unwrap();
        assert!(!json.contains('\n'));
    }
}
