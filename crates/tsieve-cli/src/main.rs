//! tsieve CLI — temporal link sieves over annotated corpora
//!
//! Commands: annotate, check, sieves

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::{info, Level};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};
use tsieve_core::{Corpus, TLink};
use tsieve_sieves::{sieve_by_name, SieveConfig, SIEVE_NAMES};

#[derive(Parser)]
#[command(name = "tsieve")]
#[command(version)]
#[command(about = "Rule-based temporal link sieves over annotated corpora")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run a sieve and print the links it proposes
    #[command(alias = "a")]
    Annotate {
        /// Corpus JSON file
        #[arg(short, long)]
        input: PathBuf,
        /// Only annotate this document (default: every document)
        #[arg(short, long)]
        doc: Option<String>,
        /// Sieve to run
        #[arg(short, long, default_value = "QuarterSieveReporting")]
        sieve: String,
        /// Sieve configuration TOML file
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Validate a corpus and print per-document counts
    Check {
        /// Corpus JSON file
        #[arg(short, long)]
        input: PathBuf,
    },
    /// List available sieves
    Sieves,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

#[derive(Serialize)]
struct DocLinks<'a> {
    doc: &'a str,
    links: Vec<TLink>,
}

fn init_tracing(verbose: u8, json: bool) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    let layer = fmt::layer().with_target(false).with_writer(std::io::stderr);
    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer.json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(layer)
            .try_init()
            .ok();
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    Corpus::load(path).with_context(|| format!("failed to load corpus {}", path.display()))
}

fn annotate(
    input: &Path,
    doc: Option<&str>,
    sieve_name: &str,
    config: Option<&Path>,
    format: Format,
) -> Result<()> {
    let config = match config {
        Some(path) => SieveConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => SieveConfig::default(),
    };
    let sieve = sieve_by_name(sieve_name, &config)?;
    let corpus = load_corpus(input)?;

    let names: Vec<&str> = match doc {
        Some(name) => vec![name],
        None => corpus.document_names().collect(),
    };

    let mut results = Vec::with_capacity(names.len());
    for name in names {
        let current = corpus.document(name)?.tlinks();
        let links = sieve
            .annotate(&corpus, name, current)
            .with_context(|| format!("{} failed on {name}", sieve.name()))?;
        info!(doc = name, sieve = sieve.name(), count = links.len(), "annotated");
        results.push(DocLinks { doc: name, links });
    }

    match format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&results)?),
        Format::Text => {
            for result in &results {
                for link in &result.links {
                    println!(
                        "{}\t{}\t{}\t{}",
                        result.doc, link.source, link.target, link.relation
                    );
                }
            }
        }
    }
    Ok(())
}

fn check(input: &Path) -> Result<()> {
    let corpus = load_corpus(input)?;
    for doc in corpus.documents() {
        println!(
            "{}: {} sentences, {} events, {} timexes, {} tlinks",
            doc.name(),
            doc.sentences().len(),
            doc.event_count(),
            doc.timex_count(),
            doc.tlinks().len()
        );
    }
    println!("OK: {} documents", corpus.len());
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.log_json);

    match cli.command {
        Commands::Annotate {
            input,
            doc,
            sieve,
            config,
            format,
        } => annotate(&input, doc.as_deref(), &sieve, config.as_deref(), format),
        Commands::Check { input } => check(&input),
        Commands::Sieves => {
            for name in SIEVE_NAMES {
                println!("{name}");
            }
            Ok(())
        }
    }
}
