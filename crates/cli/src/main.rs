//! 1000 Decors CLI - Catalog management tools.
//!
//! # Usage
//!
//! ```bash
//! # Preview the slug generated for a product name
//! decors-cli slug Table basse sculptée
//!
//! # List products (optionally one category)
//! decors-cli products list --category Tables
//!
//! # Check the bundled sample catalog without touching the backend
//! decors-cli seed --dry-run
//!
//! # Insert products from another file
//! decors-cli seed --file my-products.yaml
//! ```
//!
//! # Commands
//!
//! - `slug` - Print the slug for a name
//! - `products list` - List products from the configured backend
//! - `seed` - Insert products from a YAML file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

/// Sample catalog shipped with the CLI.
const DEFAULT_SEED_FILE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/products.yaml");

#[derive(Parser)]
#[command(name = "decors-cli")]
#[command(author, version, about = "1000 Decors CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the slug generated for a product name
    Slug {
        /// Product name; words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        name: Vec<String>,
    },
    /// Inspect the catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Insert products from a YAML file
    Seed {
        /// Path to the YAML file
        #[arg(long, default_value = DEFAULT_SEED_FILE)]
        file: String,

        /// Validate the file and stop
        #[arg(long)]
        dry_run: bool,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, newest first
    List {
        /// Only this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "decors_cli=info,decors_storefront=warn".into()),
        )
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Slug { name } => commands::slug::preview(&name.join(" "))?,
        Commands::Products { action } => match action {
            ProductsAction::List { category } => {
                commands::products::list(category.as_deref()).await?;
            }
        },
        Commands::Seed { file, dry_run } => commands::seed::products(&file, dry_run).await?,
    }
    Ok(())
}
