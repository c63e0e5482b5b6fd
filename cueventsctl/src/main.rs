//! `cueventsctl`: print the event lists in any sort order.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cuevents_core::{ContextKind, EventsConfig, SortController, SortKey};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod render;

#[derive(Parser)]
#[command(
    name = "cueventsctl",
    about = "Browse the on-campus and off-campus event lists"
)]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print a list after applying sort selections in order
    List {
        /// on-campus or off-campus
        list: ContextKind,
        /// Sort selection (date, name, interested, location); repeat a key to
        /// flip its direction
        #[arg(long = "sort", value_name = "KEY")]
        sorts: Vec<SortKey>,
        /// Print the ordered records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the sort menu of a list
    Keys {
        /// on-campus or off-campus
        list: ContextKind,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EventsConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => EventsConfig::default(),
    };

    match cli.command {
        Command::List { list, sorts, json } => {
            let controller = build_list(&config, list, &sorts)?;
            if json {
                println!("{}", render::list_json(list, &controller)?);
            } else {
                print!("{}", render::list_table(&controller));
            }
        }
        Command::Keys { list } => {
            let controller = config.controller(list)?;
            print!("{}", render::menu(&controller));
        }
    }

    Ok(())
}

fn build_list(
    config: &EventsConfig,
    list: ContextKind,
    sorts: &[SortKey],
) -> Result<SortController> {
    let mut controller = config
        .controller(list)
        .with_context(|| format!("failed to build the {list} list"))?;
    for &key in sorts {
        controller.try_select_key(key)?;
    }
    tracing::debug!(list = %list, state = ?controller.state(), "List ready");
    Ok(controller)
}
