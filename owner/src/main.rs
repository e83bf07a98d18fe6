//! Command-line surface for the default-owner store.
//!
//! `owner show` prints the configured default owner; `owner scenario` assigns
//! it to a spaceship, applies later owner changes, and prints the spaceship.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use owner::PersonData;
use owner::exit_codes;
use owner::io::config::{DEFAULT_CONFIG_PATH, load_config};
use owner::logging;
use owner::spaceship::{default_updates, run_scenario};

#[derive(Parser)]
#[command(
    name = "owner",
    version,
    about = "Encapsulated default-owner record demo"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the configured default owner as JSON.
    Show,
    /// Give a spaceship the default owner, then change the default.
    Scenario {
        /// Spaceship name (defaults to `ship_name` from config).
        #[arg(long)]
        name: Option<String>,
        /// Owner field-bag to apply afterwards, e.g. `{"firstName":"Neo"}`. Repeatable.
        #[arg(long = "set", value_name = "JSON")]
        updates: Vec<String>,
    },
}

/// Parse `--set` values into field-bags, in order.
fn parse_field_bags(raw: &[String]) -> Result<Vec<PersonData>> {
    raw.iter()
        .map(|bag| PersonData::from_json(bag).with_context(|| format!("parse --set {bag}")))
        .collect()
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Show => cmd_show(&cli.config),
        Command::Scenario { name, updates } => cmd_scenario(&cli.config, name, updates),
    }
}

fn cmd_show(config: &Path) -> Result<()> {
    let cfg = load_config(config).context("load config")?;
    let store = cfg.build_store();
    print_json(&store.get())
}

fn cmd_scenario(
    config: &Path,
    name: Option<String>,
    updates: Vec<String>,
) -> Result<()> {
    let updates = parse_field_bags(&updates)?;
    let cfg = load_config(config).context("load config")?;
    let store = cfg.build_store();
    let updates = if updates.is_empty() {
        default_updates()
    } else {
        updates
    };
    let name = name.unwrap_or(cfg.ship_name);
    let ship = run_scenario(&store, &name, &updates);
    info!(owner = %store.get(), "final default owner");
    print_json(&ship)
}

/// Print `value` as pretty-printed JSON to stdout.
fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let payload = serde_json::to_string_pretty(value).context("serialize json")?;
    println!("{}", payload);
    Ok(())
}
