//! mailblocks - headless driver for the email block builder core.
//!
//! Replays a JSON script of editor actions against a fresh session and
//! prints the resulting document.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use mailblocks_core::{BlockKind, Template};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod replay;

#[derive(Parser)]
#[command(name = "mailblocks")]
#[command(about = "Drive the email block builder from the command line", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a JSON array of actions and print the resulting document
    Replay {
        /// Script file (JSON array of actions)
        script: PathBuf,

        /// Starting template
        #[arg(short, long, default_value = "blank")]
        template: Template,

        /// TOML file with builder settings
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Stop at the first rejected action
        #[arg(long)]
        strict: bool,

        /// Print single-line JSON
        #[arg(long)]
        compact: bool,
    },

    /// List built-in templates
    Templates,

    /// Print the default content and style of every block kind
    Kinds,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Replay {
            script,
            template,
            config,
            strict,
            compact,
        } => {
            let config = config::load(config.as_deref())?;
            let source = std::fs::read_to_string(&script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let actions = replay::parse_script(&source)
                .with_context(|| format!("failed to parse script {}", script.display()))?;

            let report = replay::run(template, config, actions, strict)?;
            tracing::info!(
                applied = report.applied,
                unchanged = report.unchanged,
                rejected = report.rejected,
                can_undo = report.state.can_undo(),
                can_redo = report.state.can_redo(),
                "replay finished"
            );

            let value = report.value();
            let json = if compact {
                value.to_json()?
            } else {
                value.to_json_pretty()?
            };
            println!("{json}");
        }
        Commands::Templates => {
            for template in Template::ALL {
                let kinds: Vec<&str> = template
                    .blocks()
                    .iter()
                    .map(|b| b.kind.as_str())
                    .collect();
                println!("{:<14}{}", template.as_str(), template.description());
                if !kinds.is_empty() {
                    println!("{:<14}[{}]", "", kinds.join(", "));
                }
            }
        }
        Commands::Kinds => {
            let kinds: serde_json::Map<String, serde_json::Value> = BlockKind::ALL
                .into_iter()
                .map(|kind| {
                    let entry = serde_json::json!({
                        "label": kind.label(),
                        "content": kind.default_content(),
                        "style": kind.default_style(),
                    });
                    (kind.as_str().to_string(), entry)
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&kinds)?);
        }
    }
    Ok(())
}
