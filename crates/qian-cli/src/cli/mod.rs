//! CLI for the qian slip lookup.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use qian_core::config;
use qian_core::Resolver;
use std::path::PathBuf;

use commands::{run_categories, run_parse, run_query};

/// Top-level CLI for the qian slip lookup.
#[derive(Debug, Parser)]
#[command(name = "qian")]
#[command(about = "qian: look up slip images by number and category", long_about = None)]
pub struct Cli {
    /// Directory holding slip images; overrides `asset_root` from config.toml.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve a query such as "23 家宅运气" to its slip image.
    Query {
        /// Query words; joined and stripped of whitespace before parsing.
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Show how a query splits into numeral and category without touching storage.
    Parse {
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List the accepted category phrases in matching order.
    Categories,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(root) = cli.root {
            cfg.asset_root = root;
        }
        tracing::debug!("loaded config: {:?}", cfg);
        let resolver = Resolver::from_config(&cfg)?;

        match cli.command {
            CliCommand::Query { text } => run_query(&resolver, &cfg, &text.join(" "))?,
            CliCommand::Parse { text } => run_parse(&resolver, &text.join(" ")),
            CliCommand::Categories => run_categories(&resolver),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
