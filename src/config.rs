// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::analysis::stopwords::DEFAULT_STOPWORDS;
use crate::error::{PipelineError, Result};
use crate::models::TieBreak;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "PAGE_WORDFREQ";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub fetch: FetchConfig,
    pub analysis: AnalysisConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FetchConfig {
    /// Absent means the request waits as long as the server keeps the socket open.
    pub timeout_secs: Option<u64>,
    pub user_agent: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AnalysisConfig {
    pub top_n: usize,
    #[serde(default = "default_stopwords")]
    pub stopwords: Vec<String>,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default)]
    pub user_words: Vec<String>,
    #[serde(default)]
    pub tie_break: TieBreak,
    #[serde(default = "default_hmm")]
    pub hmm: bool,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RenderConfig {
    pub output_dir: PathBuf,
    /// TrueType/OpenType file the word cloud is drawn with; needs CJK glyphs.
    pub font_path: PathBuf,
    /// Font family named in the bar chart's SVG text.
    pub font_family: String,
    pub max_words: usize,
    pub cloud_width: u32,
    pub cloud_height: u32,
    pub chart_width: u32,
    pub chart_height: u32,
    pub chart_title: String,
}

fn default_stopwords() -> Vec<String> {
    DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect()
}

fn default_hmm() -> bool {
    true
}

impl Config {
    /// Built-in defaults, then the TOML file when given, then
    /// `PAGE_WORDFREQ__<SECTION>__<KEY>` environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();
        Self::load_with_env(path, None)
    }

    fn load_with_env(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self> {
        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            fetch: FetchConfig {
                timeout_secs: None,
                user_agent: format!("page_wordfreq/{}", env!("CARGO_PKG_VERSION")),
            },
            analysis: AnalysisConfig {
                top_n: 20,
                stopwords: default_stopwords(),
                extra_stopwords: vec![],
                user_words: vec![],
                tie_break: TieBreak::FirstSeen,
                hmm: true,
            },
            render: RenderConfig {
                output_dir: PathBuf::from("./output"),
                font_path: PathBuf::from("SimHei.ttf"),
                font_family: "SimHei".to_string(),
                max_words: 20,
                cloud_width: 800,
                cloud_height: 640,
                chart_width: 1200,
                chart_height: 600,
                chart_title: "前20个词频统计条形图".to_string(),
            },
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis.top_n == 0 {
            return Err(PipelineError::Config(
                "top_n must be greater than 0".to_string(),
            ));
        }

        if self.render.max_words == 0 {
            return Err(PipelineError::Config(
                "max_words must be greater than 0".to_string(),
            ));
        }

        if self.render.cloud_width == 0
            || self.render.cloud_height == 0
            || self.render.chart_width == 0
            || self.render.chart_height == 0
        {
            return Err(PipelineError::Config(
                "canvas dimensions must be greater than 0".to_string(),
            ));
        }

        if self.render.font_path.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "font_path must not be empty".to_string(),
            ));
        }

        if self.render.font_family.trim().is_empty() {
            return Err(PipelineError::Config(
                "font_family must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.analysis.top_n, 20);
        assert_eq!(config.analysis.stopwords.len(), 16);
        assert_eq!(config.analysis.tie_break, TieBreak::FirstSeen);
        assert!(config.fetch.timeout_secs.is_none());
    }

    #[test]
    fn test_validate_rejects_zero_top_n() {
        let mut config = Config::default_config();
        config.analysis.top_n = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_missing_fonts() {
        let mut config = Config::default_config();
        config.render.font_path = PathBuf::new();
        assert!(config.validate().is_err());

        let mut config = Config::default_config();
        config.render.font_family = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_toml_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(
            &path,
            r#"
[fetch]
timeout_secs = 15
user_agent = "test-agent"

[analysis]
top_n = 5
extra_stopwords = ["上"]
tie_break = "lexicographic"

[render]
output_dir = "out"
font_path = "fonts/NotoSansSC-Regular.otf"
font_family = "Noto Sans CJK SC"
max_words = 5
cloud_width = 400
cloud_height = 300
chart_width = 600
chart_height = 300
chart_title = "title"
"#,
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.fetch.timeout_secs, Some(15));
        assert_eq!(config.analysis.top_n, 5);
        assert_eq!(config.analysis.stopwords.len(), 16);
        assert_eq!(config.analysis.extra_stopwords, vec!["上".to_string()]);
        assert_eq!(config.analysis.tie_break, TieBreak::Lexicographic);
        assert!(config.analysis.hmm);
        assert_eq!(config.render.font_family, "Noto Sans CJK SC");
        assert_eq!(
            config.render.font_path,
            PathBuf::from("fonts/NotoSansSC-Regular.otf")
        );
    }

    fn env(pairs: &[(&str, &str)]) -> Option<config::Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_env_overrides_without_file() {
        let config = Config::load_with_env(
            None,
            env(&[
                ("PAGE_WORDFREQ__ANALYSIS__TOP_N", "7"),
                ("PAGE_WORDFREQ__RENDER__FONT_PATH", "/fonts/NotoSansSC.ttf"),
            ]),
        )
        .unwrap();

        assert_eq!(config.analysis.top_n, 7);
        assert_eq!(config.render.font_path, PathBuf::from("/fonts/NotoSansSC.ttf"));
        assert_eq!(config.analysis.stopwords.len(), 16);
        assert_eq!(config.render.chart_title, "前20个词频统计条形图");
    }

    #[test]
    fn test_env_overrides_file_values() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("settings.toml");
        fs::write(&path, "[analysis]\ntop_n = 5\n").unwrap();

        let from_file = Config::load_with_env(Some(path.as_path()), env(&[])).unwrap();
        assert_eq!(from_file.analysis.top_n, 5);

        let overridden = Config::load_with_env(
            Some(path.as_path()),
            env(&[("PAGE_WORDFREQ__ANALYSIS__TOP_N", "3")]),
        )
        .unwrap();
        assert_eq!(overridden.analysis.top_n, 3);
    }

    #[test]
    fn test_invalid_env_value_is_rejected() {
        let result = Config::load_with_env(None, env(&[("PAGE_WORDFREQ__ANALYSIS__TOP_N", "0")]));
        assert!(matches!(result, Err(PipelineError::Config(_))));
    }
}
