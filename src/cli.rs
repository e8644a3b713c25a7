// CLI module - command-line argument parsing and handlers
//
// With no subcommand the TUI starts. Subcommands:
// - config --show | --path | --reset: inspect or regenerate configuration
// - search <ingredient>: print matching recipes without the TUI
// - show <id>: print one recipe without the TUI

use crate::api::{MealDbClient, RecipeId, RecipeSummary};
use crate::config::{Config, VERSION};
use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;

/// Recipe Finder - search TheMealDB by ingredient from your terminal
#[derive(Parser, Debug)]
#[command(name = "recipe-finder")]
#[command(version = VERSION)]
#[command(about = "Find recipes by ingredient using TheMealDB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },

    /// Search recipes by ingredient and print one line per match
    Search {
        /// Ingredient, e.g. `chicken` or `chicken breast`
        #[arg(required = true, num_args = 1..)]
        ingredient: Vec<String>,
    },

    /// Print the full recipe for an id
    Show {
        /// TheMealDB recipe id, e.g. 52772
        id: String,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// config
// ─────────────────────────────────────────────────────────────────────────────

pub fn handle_config(show: bool, reset: bool, path: bool) -> Result<()> {
    if path {
        let path = Config::config_path().context("Could not determine config path")?;
        println!("{}", path.display());
    } else if show {
        handle_config_show();
    } else if reset {
        handle_config_reset()?;
    } else {
        println!("Usage: recipe-finder config [--show|--reset|--path]");
        println!();
        println!("Options:");
        println!("  --show    Display effective configuration");
        println!("  --reset   Reset config file to defaults");
        println!("  --path    Show config file path");
    }
    Ok(())
}

fn handle_config_show() {
    let config = Config::from_env();

    println!("# Effective configuration (env > file > defaults)");
    match Config::config_path() {
        Some(path) if path.exists() => println!("# Source: {}", path.display()),
        _ => println!("# Source: defaults (no config file)"),
    }
    println!();
    print!("{}", config.to_toml());
}

fn handle_config_reset() -> Result<()> {
    let path = Config::config_path().context("Could not determine config path")?;

    if path.exists() {
        eprint!("Config file exists at {}. Overwrite? [y/N] ", path.display());
        std::io::stderr().flush().context("Failed to flush stderr")?;

        let mut input = String::new();
        std::io::stdin()
            .read_line(&mut input)
            .context("Failed to read confirmation")?;

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&path, Config::default().to_toml())
        .with_context(|| format!("Failed to write {}", path.display()))?;

    println!("Config reset to defaults: {}", path.display());
    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// search / show
// ─────────────────────────────────────────────────────────────────────────────

pub async fn run_search(client: &MealDbClient, ingredient: &str) -> Result<()> {
    if ingredient.trim().is_empty() {
        bail!("Ingredient must not be blank");
    }

    let recipes = client
        .search_by_ingredient(ingredient)
        .await
        .with_context(|| format!("Search for {:?} failed", ingredient.trim()))?;

    if recipes.is_empty() {
        println!("No recipes found for {:?}.", ingredient.trim());
    } else {
        print!("{}", format_summaries(&recipes));
    }
    Ok(())
}

pub async fn run_show(client: &MealDbClient, id: &RecipeId) -> Result<()> {
    let detail = client
        .lookup(id)
        .await
        .with_context(|| format!("Lookup of recipe {} failed", id))?;
    print!("{}", detail.to_plain_text());
    Ok(())
}

/// `id  name` per line, ids padded to a common width
fn format_summaries(recipes: &[RecipeSummary]) -> String {
    let width = recipes
        .iter()
        .map(|r| r.id.as_str().len())
        .max()
        .unwrap_or(0);

    recipes
        .iter()
        .map(|r| format!("{:<width$}  {}\n", r.id.as_str(), r.name, width = width))
        .collect()
}
