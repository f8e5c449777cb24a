// file: src/pipeline/runner.rs
// description: fetch, clean, normalize, segment and rank one page
// reference: linear single-document pipeline

use crate::analysis::{Aggregator, Tokenizer};
use crate::config::Config;
use crate::error::Result;
use crate::fetcher::PageFetcher;
use crate::models::{AnalysisReport, CleanedText, RawDocument, RunStats, TokenList};
use crate::parser::{HtmlCleaner, TextNormalizer};
use crate::pipeline::progress::{ProgressTracker, Stage};
use crate::utils::telemetry::OperationTimer;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

const SLOW_FETCH: Duration = Duration::from_secs(10);

pub struct WordFrequencyPipeline {
    fetcher: PageFetcher,
    cleaner: HtmlCleaner,
    normalizer: TextNormalizer,
    tokenizer: Tokenizer,
    aggregator: Aggregator,
}

impl WordFrequencyPipeline {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: PageFetcher::new(&config.fetch)?,
            cleaner: HtmlCleaner::new(),
            normalizer: TextNormalizer::new(),
            tokenizer: Tokenizer::from_config(&config.analysis),
            aggregator: Aggregator::from_config(&config.analysis),
        })
    }

    pub fn tokenizer(&self) -> &Tokenizer {
        &self.tokenizer
    }

    pub async fn run(&self, url: &str, progress: &ProgressTracker) -> Result<AnalysisReport> {
        let timer = OperationTimer::new("analyze url");

        progress.start_stage(Stage::Fetch);
        let document = self.fetcher.fetch(url).await?;
        progress.complete_stage();
        timer.warn_if_slow(SLOW_FETCH, "page fetch");
        timer.checkpoint("page fetched");

        let report = self.analyze(&document, progress);
        timer.finish_with_count(report.stats.token_count);
        Ok(report)
    }

    pub fn run_file(&self, path: &Path, progress: &ProgressTracker) -> Result<AnalysisReport> {
        let timer = OperationTimer::new("analyze file");

        progress.start_stage(Stage::Fetch);
        let document = PageFetcher::read_file(path)?;
        progress.complete_stage();

        let report = self.analyze(&document, progress);
        timer.finish_with_count(report.stats.token_count);
        Ok(report)
    }

    /// Everything after retrieval; identical bodies give identical rankings.
    pub fn analyze(&self, document: &RawDocument, progress: &ProgressTracker) -> AnalysisReport {
        let started = progress.elapsed();

        progress.start_stage(Stage::Clean);
        let cleaned = self.clean(document);
        progress.complete_stage();

        progress.start_stage(Stage::Normalize);
        let normalized = self.normalize(&cleaned);
        progress.complete_stage();

        progress.start_stage(Stage::Tokenize);
        let tokens = self.tokenize(&normalized);
        progress.complete_stage();

        progress.start_stage(Stage::Aggregate);
        let table = self.aggregator.count(&tokens);
        let top = self.aggregator.select(&table);
        progress.complete_stage();

        let stats = RunStats {
            bytes_fetched: document.byte_len,
            cleaned_chars: cleaned.char_count(),
            token_count: tokens.len(),
            distinct_tokens: table.len(),
            elapsed_ms: progress.elapsed().saturating_sub(started).as_millis() as u64,
        };

        info!(
            "{}: {} tokens, {} distinct, top {} selected",
            document.source,
            stats.token_count,
            stats.distinct_tokens,
            top.len()
        );

        AnalysisReport::new(
            document.source.clone(),
            document.content_hash.clone(),
            stats,
            top,
        )
    }

    pub fn clean(&self, document: &RawDocument) -> CleanedText {
        self.cleaner.clean(document)
    }

    pub fn normalize(&self, cleaned: &CleanedText) -> String {
        let normalized = self.normalizer.normalize(cleaned);
        debug!(
            "Normalized {} chars down to {}",
            cleaned.char_count(),
            normalized.chars().count()
        );
        normalized
    }

    pub fn tokenize(&self, normalized: &str) -> TokenList {
        self.tokenizer.tokenize(normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn pipeline() -> WordFrequencyPipeline {
        WordFrequencyPipeline::new(&Config::default_config()).unwrap()
    }

    #[test]
    fn test_stages_on_reference_sentence() {
        let pipeline = pipeline();
        let doc = RawDocument::new(
            "inline",
            None,
            "<p>我爱北京天安门，天安门上太阳升。</p>".to_string(),
        );

        let cleaned = pipeline.clean(&doc);
        assert_eq!(cleaned.as_str(), "我爱北京天安门，天安门上太阳升。");

        let normalized = pipeline.normalize(&cleaned);
        assert_eq!(normalized, "我爱北京天安门天安门上太阳升");

        let tokens = pipeline.tokenize(&normalized);
        assert!(tokens.iter().all(|t| t != "我"));
        assert_eq!(tokens.iter().filter(|t| *t == "天安门").count(), 2);
    }

    #[test]
    fn test_analyze_ranks_repeated_word_first() {
        let pipeline = pipeline();
        let progress = ProgressTracker::hidden(Stage::ALL.len());
        let doc = RawDocument::new(
            "inline",
            Some(200),
            "<p>我爱北京天安门，天安门上太阳升。</p>".to_string(),
        );

        let report = pipeline.analyze(&doc, &progress);
        let words = report.top.words();

        assert_eq!(words[0].word, "天安门");
        assert_eq!(words[0].count, 2);
        assert!(words.iter().skip(1).all(|w| w.count == 1));
        assert_eq!(progress.stages_done(), 4);
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let pipeline = pipeline();
        let body = "<html><head><title>新闻</title></head><body>\
                    <p>经济发展，经济增长2024年。</p><p>发展是硬道理！</p></body></html>";
        let doc = RawDocument::new("inline", None, body.to_string());

        let first = pipeline.analyze(&doc, &ProgressTracker::hidden(6));
        let second = pipeline.analyze(&doc, &ProgressTracker::hidden(6));

        assert_eq!(first.top, second.top);
        assert_eq!(first.content_hash, second.content_hash);
        assert!(first.top.len() <= 20);
        assert!(first.top.words().windows(2).all(|p| p[0].count >= p[1].count));
    }

    #[test]
    fn test_script_and_style_do_not_reach_the_ranking() {
        let pipeline = pipeline();
        let body = "<html><head><style>body{color:red}</style>\
                    <script>var total=1;function track(){}</script></head>\
                    <body><p>春天春天</p></body></html>";
        let doc = RawDocument::new("inline", Some(200), body.to_string());

        let report = pipeline.analyze(&doc, &ProgressTracker::hidden(6));
        let words: Vec<&str> = report.top.words().iter().map(|w| w.word.as_str()).collect();

        assert_eq!(words, vec!["春天"]);
        assert_eq!(report.top.words()[0].count, 2);
    }

    #[test]
    fn test_empty_body_gives_empty_ranking() {
        let pipeline = pipeline();
        let doc = RawDocument::new("empty", Some(200), String::new());

        let report = pipeline.analyze(&doc, &ProgressTracker::hidden(6));

        assert!(report.top.is_empty());
        assert_eq!(report.stats, RunStats {
            elapsed_ms: report.stats.elapsed_ms,
            ..RunStats::default()
        });
    }

    #[test]
    fn test_run_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("page.html");
        fs::write(&path, "<body>春天春天春天，花开了。</body>").unwrap();

        let report = pipeline()
            .run_file(&path, &ProgressTracker::hidden(6))
            .unwrap();

        assert_eq!(report.top.words()[0].word, "春天");
        assert_eq!(report.top.words()[0].count, 3);
        assert!(report.top.words().iter().all(|w| w.word != "了"));
    }

    #[tokio::test]
    async fn test_run_propagates_fetch_errors() {
        let result = pipeline()
            .run("not a url", &ProgressTracker::hidden(6))
            .await;
        assert!(result.is_err());
    }
}
