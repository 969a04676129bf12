//! CLI administration tool for the link registry.
//!
//! Operates on the links file through the same [`LinkRegistry`] the server
//! uses, so writes are validated and replaced atomically. A running server
//! picks the changes up on its next write or on `SIGHUP`.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- list
//!
//! # Add a link (code generated unless --code is given)
//! cargo run --bin admin -- add https://example.com --code docs
//!
//! # Remove a link
//! cargo run --bin admin -- remove docs
//!
//! # Validate the links file
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! - `LINKS_FILE` (default `links.json`): path of the links file; `--file` overrides it

use link_registry::LinkRegistry;
use link_registry::domain::entities::LinkEntry;
use link_registry::infrastructure::persistence::JsonFileStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;
use std::sync::Arc;

/// CLI tool for managing short links offline.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Links file (defaults to $LINKS_FILE or links.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// List all links
    List,

    /// Add a link
    Add {
        /// Target URL
        url: String,

        /// Requested short code (generated if omitted)
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Remove a link
    Remove {
        /// Short code to remove
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Load the links file and report its state
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = match cli.file {
        Some(path) => path,
        None => std::env::var("LINKS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("links.json")),
    };

    let registry = LinkRegistry::new(Arc::new(JsonFileStore::new(&path)));

    match cli.command {
        Commands::List => list_links(&registry).await?,
        Commands::Add { url, code } => add_link(&registry, url, code).await?,
        Commands::Remove { code, yes } => remove_link(&registry, code, yes).await?,
        Commands::Check => check_file(&registry).await?,
    }

    Ok(())
}

/// Prints every link as an aligned table.
async fn list_links(registry: &LinkRegistry) -> Result<()> {
    let links = registry.list_all().await.context("Failed to load links")?;

    if links.is_empty() {
        println!("{}", "No links registered".yellow());
        return Ok(());
    }

    let entries = LinkEntry::from_map(&links);
    let width = entries.iter().map(|e| e.code.len()).max().unwrap_or(0);

    println!("{}", format!("{} links", entries.len()).bright_blue().bold());
    for entry in entries {
        println!(
            "  {:width$}  {}",
            entry.code.cyan(),
            entry.target,
            width = width
        );
    }

    Ok(())
}

/// Creates a link and prints its code.
async fn add_link(registry: &LinkRegistry, url: String, code: Option<String>) -> Result<()> {
    let code = registry
        .create(code, &url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to add link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  {} → {}", code.bright_yellow().bold(), url.trim());

    Ok(())
}

/// Removes a link after confirmation.
async fn remove_link(registry: &LinkRegistry, code: String, skip_confirm: bool) -> Result<()> {
    let Some(target) = registry.lookup(&code).await.context("Failed to load links")? else {
        anyhow::bail!("Link '{}' not found", code);
    };

    println!("  {} → {}", code.cyan(), target);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Remove this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    registry
        .delete(&code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to remove link: {}", e))?;

    println!("{}", "✅ Link removed".green().bold());
    Ok(())
}

/// Loads the file (creating or resetting it if needed) and prints a summary.
async fn check_file(registry: &LinkRegistry) -> Result<()> {
    println!(
        "{} {}",
        "Links file:".bright_white().bold(),
        registry.store_description()
    );

    let count = registry
        .reload()
        .await
        .context("Links file is not usable")?;

    println!("{} {} links", "✅ OK:".green().bold(), count);
    Ok(())
}
