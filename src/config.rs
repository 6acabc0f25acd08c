//! Configuration management for the tag balance checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config file (project-local, then user-global)
//!
//! Command-line flags take priority over the config file.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::report::OutputFormat;
use crate::validation::MismatchPolicy;

/// File checked when no path is given
pub const DEFAULT_TARGET: &str = "components/AdminView.tsx";

/// Project-local config file name
pub const PROJECT_CONFIG_FILE: &str = ".tag-balance.toml";

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Command-line arguments for the tag balance checker
#[derive(Debug, Parser)]
#[command(name = "tag-balance")]
#[command(about = "Check that markup tags in a source file are balanced")]
#[command(version)]
pub struct Args {
    /// File to check
    #[arg(default_value = DEFAULT_TARGET)]
    pub path: PathBuf,

    /// Output format
    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    /// Report every closing-tag name mismatch, not only those involving `div`
    #[arg(long)]
    pub all_mismatches: bool,

    /// Config file to use instead of the discovered one
    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,
}

/// Settings read from a TOML config file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub format: Option<OutputFormat>,
    pub mismatch_policy: Option<MismatchPolicy>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File to check
    pub path: PathBuf,
    pub format: OutputFormat,
    pub mismatch_policy: MismatchPolicy,
    pub log_level: String,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args_and_env() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    /// Create configuration from explicit arguments, discovering a config
    /// file if none was given
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => discover_config_file(&default_search_paths()),
        };

        let file = match &config_file {
            Some(path) => {
                log::debug!("loading config from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file, config_file))
    }

    /// Merge arguments over file settings
    pub fn merge(args: Args, file: FileConfig, config_file: Option<PathBuf>) -> Self {
        let mismatch_policy = if args.all_mismatches {
            MismatchPolicy::All
        } else {
            file.mismatch_policy.unwrap_or_default()
        };

        Config {
            path: args.path,
            format: args.format.or(file.format).unwrap_or_default(),
            mismatch_policy,
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            config_file,
        }
    }
}

/// Config file locations in priority order: project, then user-global
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(PROJECT_CONFIG_FILE)];

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("tag-balance").join("config.toml"));
    }

    paths
}

/// First existing file among `candidates`
pub fn discover_config_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|path| path.is_file()).cloned()
}
