//! Tests for config file loading and merging with command-line flags
use std::fs;

use clap::Parser;
use tag_balance::config::{Args, Config, FileConfig, discover_config_file};
use tag_balance::{MismatchPolicy, OutputFormat};

#[test]
fn test_explicit_config_file_is_loaded() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config_path = dir.path().join("tag-balance.toml");
    fs::write(
        &config_path,
        "format = \"json\"\nmismatch_policy = \"all\"\nlog_level = \"info\"\n",
    )
    .expect("write config");

    let args = Args::parse_from([
        "tag-balance",
        "src/App.tsx",
        "--config",
        config_path.to_str().expect("utf-8 path"),
    ]);
    let config = Config::from_args(args).expect("create config");

    assert_eq!(config.config_file.as_deref(), Some(config_path.as_path()));
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.mismatch_policy, MismatchPolicy::All);
    assert_eq!(config.log_level, "info");
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("absent.toml");

    let args = Args::parse_from([
        "tag-balance",
        "--config",
        missing.to_str().expect("utf-8 path"),
    ]);
    let err = Config::from_args(args).unwrap_err();

    assert!(format!("{:#}", err).contains("failed to read config"));
}

#[test]
fn test_malformed_config_reports_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "format = \"yaml\"\n").expect("write config");

    let err = FileConfig::load(&config_path).unwrap_err();

    assert!(format!("{:#}", err).contains("failed to parse config"));
}

#[test]
fn test_discovery_prefers_first_existing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let project = dir.path().join(".tag-balance.toml");
    let global = dir.path().join("config.toml");
    fs::write(&global, "").expect("write global config");

    let candidates = vec![project.clone(), global.clone()];
    assert_eq!(discover_config_file(&candidates), Some(global.clone()));

    fs::write(&project, "").expect("write project config");
    assert_eq!(discover_config_file(&candidates), Some(project));
}
