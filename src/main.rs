//! Reframe - problem-focused guide scaffolding
//!
//! Analyzes command-focused documentation and generates problem guide
//! templates from it.

use clap::Parser;
use colored::Colorize;
use reframe::report::banner_rule;
use reframe::{
    render_report, AnalysisReport, ContentAnalyzer, GuideGenerator, GuideStatus, ReframeConfig,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reframe")]
#[command(version = "0.1.0")]
#[command(about = "Transform command-focused content into problem-focused guides", long_about = None)]
struct Cli {
    /// Analyze existing content and show what problems it addresses
    #[arg(long)]
    analyze: bool,

    /// Generate problem guide templates from existing content
    #[arg(long)]
    generate: bool,

    /// Source directory to analyze [default: topics]
    #[arg(long, env = "REFRAME_SOURCE", value_name = "DIR")]
    source: Option<PathBuf>,

    /// Output directory for generated guides [default: problems]
    #[arg(long, env = "REFRAME_OUTPUT", value_name = "DIR")]
    output: Option<PathBuf>,

    /// Load settings from a TOML file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the analysis report as JSON
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Analysis is the default when no mode is requested.
    fn modes(&self) -> (bool, bool) {
        if !self.analyze && !self.generate {
            (true, false)
        } else {
            (self.analyze, self.generate)
        }
    }

    fn resolve_config(&self) -> anyhow::Result<ReframeConfig> {
        let mut config = match &self.config {
            Some(path) => ReframeConfig::load(path)?,
            None => ReframeConfig::default(),
        };
        if let Some(source) = &self.source {
            config = config.with_source_dir(source);
        }
        if let Some(output) = &self.output {
            config = config.with_output_dir(output);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the report.
    let default_filter = if cli.verbose {
        "reframe=debug,info"
    } else {
        "reframe=error,warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.resolve_config()?;
    let (analyze, generate) = cli.modes();

    let analysis = ContentAnalyzer::new(config.clone()).analyze()?;

    // Keep stdout parseable when it carries JSON.
    let notice = |line: String| {
        if cli.json {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
    };

    if analysis.source_missing {
        notice(format!(
            "{} Source directory '{}' does not exist",
            "Warning:".yellow().bold(),
            config.source_dir.display()
        ));
    }
    for failure in &analysis.failures {
        notice(format!(
            "{} analyzing {}: {}",
            "Error".red().bold(),
            failure.path.display(),
            failure.error
        ));
    }

    if analysis.is_empty() {
        notice(format!(
            "No content found in '{}' directory",
            config.source_dir.display()
        ));
        return Ok(());
    }

    if analyze {
        if cli.json {
            println!("{}", AnalysisReport::new(&analysis).to_json()?);
        } else {
            print!("{}", render_report(&analysis.domains));
        }
    }

    if generate {
        println!("\n{}", banner_rule());
        println!("GENERATING PROBLEM GUIDES");
        println!("{}\n", banner_rule());

        let generator = GuideGenerator::new(&config.output_dir);
        generator.generate_with(&analysis.domains, |status| match status {
            GuideStatus::Written(path) => {
                println!("{} {}", "Generated:".green().bold(), path.display())
            }
            GuideStatus::Skipped(key) => {
                println!("{} {} - guide already exists", "Skipping".yellow(), key)
            }
        })?;

        println!(
            "\nGuides generated in '{}/' directory",
            generator.output_dir().display()
        );
        println!("Please review and enhance the generated guides with:");
        println!("  • More specific real-world scenarios");
        println!("  • Better decision guidance");
        println!("  • Additional examples with explanations");
        println!("  • Clearer AI prompt templates");
    }

    Ok(())
}
