mod config;
mod errors;
mod extract;
mod models;
mod pipeline;
mod report;
mod scoring;
mod skills;
mod text;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;

const BANNER: &str = r"
   ___  ________ ___    ___   _____
  / _ |/_  __/ // / |  / / | / / _ \
 / __ | / / / _  /| | / /| |/ / ___/
/_/ |_|/_/ /_//_/ |_|/_/ |___/_/

Automated Talent Locator and Assessor System
";

fn main() -> Result<()> {
    // Configuration first: the log level comes from it.
    let config = Config::from_args()?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("{BANNER}");
    info!("Starting ATLAS v{}", env!("CARGO_PKG_VERSION"));
    info!("Base directory: {}", config.base_dir.display());

    let lexicon = config.load_lexicon()?;
    info!(
        "Skill lexicon: {} categories, {} skills",
        lexicon.categories.len(),
        lexicon.len()
    );

    // Missing folders and write failures surface here as a non-zero exit.
    let summary = pipeline::run(&config, &lexicon)?;
    info!(
        "{} matches across {} job descriptions ({} resumes skipped)",
        summary.matches, summary.job_descriptions, summary.resumes_skipped
    );

    Ok(())
}
