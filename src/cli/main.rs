//! Command-line interface entry point for `gradesheet`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use gradesheet::core::config::Config;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::level_filters::LevelFilter;
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| parse_level(&config.logging.level))
        .unwrap_or(Level::WARN);
    if args.debug_flag {
        level = Level::DEBUG;
    }

    let verbose = args.verbose || config.logging.verbose;

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };
    let log_path = args.log_file.clone().or(config_log_path);
    init_logging(level, log_path.as_deref(), verbose);

    let result = match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &config, &defaults);
            Ok(())
        }
        Command::Session { script, load } => {
            commands::session::run(script.as_deref(), load.as_deref(), &config, verbose)
        }
        Command::Report {
            input_file,
            output,
            format,
        } => commands::report::run(&input_file, output.as_deref(), &format, &config, verbose),
        Command::Grade { score } => {
            commands::grade::run(score, config.grading_scale());
            Ok(())
        }
    };

    if let Err(message) = result {
        eprintln!("{message}");
        std::process::exit(1);
    }
}

/// Install the global `tracing` subscriber, writing to `log_path` when it can be opened
fn init_logging(level: Level, log_path: Option<&Path>, verbose: bool) {
    let filter = || {
        EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy()
    };

    let Some(path) = log_path else {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
        return;
    };

    let display_path = path.display();
    match open_log_file(path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
            eprintln!("✗ Failed to initialize file logging at: {display_path} ({e})");
        }
    }
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn parse_level(val: &str) -> Option<Level> {
    match val.to_ascii_lowercase().as_str() {
        "error" => Some(Level::ERROR),
        "warn" => Some(Level::WARN),
        "info" => Some(Level::INFO),
        "debug" => Some(Level::DEBUG),
        _ => None,
    }
}
