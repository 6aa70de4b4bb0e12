use std::path::PathBuf;

use clap::Parser;
use hindo_config::log::LogConfig;
use hindo_core::{FrequencyProvider, MetaStore};
use hindo_lang_japanese::FrequencyLookup;
use tracing_subscriber::EnvFilter;

mod output;
mod profile;

/// Look up word frequencies in installed dictionaries
#[derive(Debug, Parser)]
#[command(name = "hindo", version)]
struct Cli {
    /// Unpacked dictionary directory, may be repeated
    #[arg(short, long = "dict")]
    dicts: Vec<PathBuf>,

    /// JSON config profile, defaults to environment variables
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Print JSON instead of tab separated lines
    #[arg(long)]
    json: bool,

    /// Terms to look up
    #[arg(required = true)]
    terms: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let (config, source) = profile::load_config(cli.profile.as_deref())?;
    init_tracing(&config.log);
    profile::report(&source, &config);

    let mut paths = cli.dicts.clone();
    paths.extend(config.dictionary.additional_paths.iter().cloned());
    if paths.is_empty() {
        tracing::warn!("No dictionaries given, use --dict or HINDO_DICT_PATHS");
    }

    let mut lookup = FrequencyLookup::with_dictionaries(&paths);
    for info in lookup.store().dictionaries() {
        if config.dictionary.is_disabled(&info.title) {
            tracing::info!("Dictionary {} disabled by config", info.title);
            lookup.store_mut().set_enabled(&info.id, false)?;
        }
    }

    for term in &cli.terms {
        let observations = lookup.frequencies(term);
        if cli.json {
            println!("{}", output::render_json(term, &observations)?);
        } else {
            for line in output::render_lines(term, &observations) {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn init_tracing(log: &LogConfig) {
    let filter = EnvFilter::try_new(&log.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let result = if log.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("failed to initialize logging: {e}");
    }
}
