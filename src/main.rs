// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `entity-scaffold` command line.
//!
//! ```text
//! entity-scaffold generate -c models.json -o out/
//! entity-scaffold print -c models.toml --entity score
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use entity_scaffold::{Document, Formatting, generate_entity, write_document};
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "entity-scaffold")]
#[command(about = "Generate MySQL data-access code from a schema document", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands
}

#[derive(Subcommand)]
enum Commands {
    /// Write one `<entity>_model.generated.rs` file per entity
    Generate {
        /// Schema document (.json or .toml)
        #[arg(short, long)]
        config: PathBuf,

        /// Output directory, created if missing
        #[arg(short, long)]
        output: PathBuf,

        /// Skip rustfmt
        #[arg(long)]
        raw: bool
    },

    /// Print generated code to stdout
    Print {
        /// Schema document (.json or .toml)
        #[arg(short, long)]
        config: PathBuf,

        /// Only this entity
        #[arg(short, long)]
        entity: Option<String>,

        /// Skip rustfmt
        #[arg(long)]
        raw: bool
    }
}

fn formatting(raw: bool) -> Formatting {
    if raw { Formatting::Raw } else { Formatting::Rustfmt }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("entity_scaffold=info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            config,
            output,
            raw
        } => generate(&config, &output, formatting(raw)),
        Commands::Print {
            config,
            entity,
            raw
        } => print(&config, entity.as_deref(), formatting(raw))
    }
}

fn load(config: &Path) -> anyhow::Result<Document> {
    Document::load(config).with_context(|| format!("loading {}", config.display()))
}

fn generate(config: &Path, output: &Path, formatting: Formatting) -> anyhow::Result<()> {
    let document = load(config)?;
    if document.entities.is_empty() {
        bail!("{} declares no entities", config.display());
    }

    let results = write_document(&document, output, formatting)
        .with_context(|| format!("preparing {}", output.display()))?;

    let failed = results
        .iter()
        .filter_map(|result| result.as_ref().err())
        .inspect(|err| error!("{err}"))
        .count();
    if failed > 0 {
        bail!("{failed} of {} entities failed", results.len());
    }

    Ok(())
}

fn print(config: &Path, only: Option<&str>, formatting: Formatting) -> anyhow::Result<()> {
    let document = load(config)?;
    let selected: Vec<_> = document
        .entities
        .iter()
        .filter(|entity| only.is_none_or(|name| entity.name == name))
        .collect();

    if selected.is_empty() {
        match only {
            Some(name) => bail!("no entity named '{name}' in {}", config.display()),
            None => bail!("{} declares no entities", config.display())
        }
    }

    for entity in selected {
        let generated = generate_entity(entity, &document, formatting)
            .with_context(|| format!("generating entity '{}'", entity.name))?;
        print!("{}", generated.source);
    }

    Ok(())
}
