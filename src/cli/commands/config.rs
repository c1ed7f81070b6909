//! Config command handler
//!
//! `get` shows the effective configuration for this run (file plus CLI
//! overrides). `set` and `unset` edit the file as stored on disk, so
//! one-off overrides are never persisted.

use crate::args::ConfigSubcommand;
use gradesheet::core::config::Config;
use std::io::{self, Write};
use tracing::{debug, error};

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, effective: &Config, defaults: &Config) {
    match subcommand {
        None => show(effective, None),
        Some(ConfigSubcommand::Get { key }) => show(effective, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => {
            persist(&key, |stored| stored.set(&key, &value));
            println!("✓ Set {key} = {value}");
        }
        Some(ConfigSubcommand::Unset { key }) => {
            persist(&key, |stored| stored.unset(&key, defaults));
            println!("✓ Reset {key} to default");
        }
        Some(ConfigSubcommand::Reset) => reset(),
    }
}

fn show(config: &Config, key: Option<&str>) {
    match key {
        Some(k) => match config.get(k) {
            Some(value) => println!("{value}"),
            None => eprintln!("Unknown config key: '{k}'"),
        },
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
}

/// Apply `edit` to the stored config and save it, exiting on failure
fn persist(key: &str, edit: impl FnOnce(&mut Config) -> Result<(), String>) {
    let mut stored = Config::load();

    if let Err(e) = edit(&mut stored) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    if let Err(e) = stored.save() {
        error!("Saving config after editing '{key}' failed: {e}");
        eprintln!("Failed to save config: {e}");
        std::process::exit(1);
    }
    debug!(key, path = %Config::get_config_file_path().display(), "config saved");
}

fn reset() {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return;
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        if let Err(e) = Config::reset() {
            eprintln!("Failed to remove config file: {e}");
            std::process::exit(1);
        }
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
}
