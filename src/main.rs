// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use page_wordfreq::utils::logging::{format_heading, format_output, format_success};
use page_wordfreq::{
    AnalysisReport, Config, JsonExporter, Presenter, ProgressTracker, Stage, StopwordSet,
    TABLE_CAPTION, WordFrequencyPipeline,
};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "page_wordfreq")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Word frequency, word cloud and bar chart for one Chinese web page", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Hide the progress spinner
    #[arg(short, long, action = ArgAction::SetTrue)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch a page and analyze it
    Analyze {
        url: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Analyze a saved HTML file instead of fetching
    File {
        path: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the active stopword list
    Stopwords,
}

#[derive(Args)]
struct OutputArgs {
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    #[arg(short, long, value_name = "NUM")]
    top: Option<usize>,

    /// Also write report.json
    #[arg(long)]
    json: bool,

    #[arg(short, long)]
    pretty: bool,
}

enum Source {
    Url(String),
    File(PathBuf),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    page_wordfreq::utils::logging::init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using built-in defaults with environment overrides",
            cli.config.display()
        );
        Config::load(None).context("Failed to load configuration")?
    };

    match cli.command {
        Commands::Analyze { url, output } => {
            cmd_analyze(config, Source::Url(url), output, cli.quiet).await
        }
        Commands::File { path, output } => {
            cmd_analyze(config, Source::File(path), output, cli.quiet).await
        }
        Commands::Stopwords => cmd_stopwords(&config),
    }
}

async fn cmd_analyze(
    mut config: Config,
    source: Source,
    args: OutputArgs,
    quiet: bool,
) -> Result<()> {
    if let Some(dir) = args.output {
        config.render.output_dir = dir;
    }
    if let Some(top) = args.top {
        config.analysis.top_n = top;
    }
    config.validate().context("Invalid configuration")?;

    let pipeline =
        WordFrequencyPipeline::new(&config).context("Failed to initialize pipeline")?;

    let progress = if quiet {
        ProgressTracker::hidden(Stage::ALL.len())
    } else {
        ProgressTracker::new(Stage::ALL.len())
    };

    let report = match &source {
        Source::Url(url) => pipeline
            .run(url, &progress)
            .await
            .with_context(|| format!("Failed to analyze {}", url))?,
        Source::File(path) => pipeline
            .run_file(path, &progress)
            .with_context(|| format!("Failed to analyze {}", path.display()))?,
    };

    progress.start_stage(Stage::Render);
    let presenter = Presenter::new(&config.render);
    let presentation = presenter
        .present(&report.top)
        .with_context(|| format!("Failed to render results for {}", report.source))?;
    progress.complete_stage();
    progress.finish();

    print_summary(&report);
    println!("{}", TABLE_CAPTION);
    print!("{}", presentation.table);
    println!();
    println!("{}", format_output("cloud", &presentation.cloud_path));
    println!("{}", format_output("chart", &presentation.chart_path));

    if args.json {
        let exporter = JsonExporter::new(presenter.output_dir().clone())?;
        let path = exporter.export(&report, args.pretty)?;
        println!("{}", format_output("report", &path));
    }

    println!(
        "{}",
        format_success(&format!(
            "{} words ranked, {} drawn in the cloud",
            report.top.len(),
            presentation.cloud_words
        ))
    );

    Ok(())
}

fn print_summary(report: &AnalysisReport) {
    println!("{}", format_heading(&report.source));
    println!(
        "  {} bytes, {} chars of text, {} tokens ({} distinct)",
        report.stats.bytes_fetched,
        report.stats.cleaned_chars,
        report.stats.token_count,
        report.stats.distinct_tokens
    );
    println!();
}

fn cmd_stopwords(config: &Config) -> Result<()> {
    let stopwords = StopwordSet::from_config(&config.analysis);

    println!("{}", format_heading(&format!("{} stopwords", stopwords.len())));
    println!("{}", stopwords.iter().collect::<Vec<_>>().join(" "));

    Ok(())
}
