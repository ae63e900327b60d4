use std::path::PathBuf;

use anyhow::{ensure, Context, Result};
use clap::Parser;

use crate::errors::AtlasError;
use crate::report::ReportFormat;
use crate::scoring::similarity::ScoringStrategy;
use crate::skills::SkillLexicon;

/// Command-line surface. Every flag can also come from an `ATLAS_*` variable
/// (a `.env` file is loaded first, if present).
#[derive(Debug, Parser)]
#[command(
    name = "atlas",
    version,
    about = "ATLAS: Automated Talent Locator and Assessor System"
)]
pub struct Cli {
    /// Folder containing job description files
    #[arg(long = "jd_folder", env = "ATLAS_JD_FOLDER", default_value = "job_descriptions")]
    pub jd_folder: PathBuf,

    /// Folder containing resumes
    #[arg(long = "resume_folder", env = "ATLAS_RESUME_FOLDER", default_value = "resumes")]
    pub resume_folder: PathBuf,

    /// Matching threshold score (0-100, inclusive)
    #[arg(long, env = "ATLAS_THRESHOLD", default_value_t = 50.0)]
    pub threshold: f64,

    /// Output file name, relative to the base directory
    #[arg(long, env = "ATLAS_OUTPUT", default_value = "atlas_talent_report.txt")]
    pub output: PathBuf,

    /// Base directory holding both folders (defaults to the current directory)
    #[arg(long = "base_dir", env = "ATLAS_BASE_DIR")]
    pub base_dir: Option<PathBuf>,

    /// Content similarity backend
    #[arg(long, env = "ATLAS_STRATEGY", value_enum, default_value = "tfidf")]
    pub strategy: ScoringStrategy,

    /// Report format
    #[arg(long, env = "ATLAS_FORMAT", value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// JSON skill lexicon replacing the built-in catalog
    #[arg(long, env = "ATLAS_LEXICON")]
    pub lexicon: Option<PathBuf>,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log_level", env = "ATLAS_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

/// Resolved run configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_dir: PathBuf,
    pub jd_dir: PathBuf,
    pub resume_dir: PathBuf,
    pub output_path: PathBuf,
    pub threshold: f64,
    pub strategy: ScoringStrategy,
    pub format: ReportFormat,
    pub lexicon_path: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    /// Loads `.env` (ignored if missing), then parses the process arguments.
    pub fn from_args() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_cli(Cli::parse())
    }

    pub fn from_cli(cli: Cli) -> Result<Self> {
        ensure!(
            cli.threshold.is_finite() && (0.0..=100.0).contains(&cli.threshold),
            "threshold must be between 0 and 100, got {}",
            cli.threshold
        );

        let base_dir = match cli.base_dir {
            Some(dir) => dir,
            None => std::env::current_dir().context("Cannot determine current directory")?,
        };

        Ok(Config {
            jd_dir: base_dir.join(&cli.jd_folder),
            resume_dir: base_dir.join(&cli.resume_folder),
            output_path: base_dir.join(&cli.output),
            base_dir,
            threshold: cli.threshold,
            strategy: cli.strategy,
            format: cli.format,
            lexicon_path: cli.lexicon,
            rust_log: cli.log_level,
        })
    }

    /// The built-in lexicon, or the one at `lexicon_path`.
    pub fn load_lexicon(&self) -> Result<SkillLexicon, AtlasError> {
        match &self.lexicon_path {
            Some(path) => SkillLexicon::from_file(path),
            None => Ok(SkillLexicon::default()),
        }
    }
}
