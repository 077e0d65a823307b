//! Jazzkeys Admin CLI
//!
//! Maintenance tool for the content database.
//!
//! # Usage
//!
//! ```bash
//! jazzkeys-admin seed
//! jazzkeys-admin collections
//! jazzkeys-admin list chord --limit 5
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: SQLite connection URL (same default as the server)

use clap::{Parser, Subcommand};
use jazzkeys::config::Config;
use jazzkeys::db::{init_db, DocumentStore, Filter};
use jazzkeys::models::{Chord, Collection, Favorite, Lesson, Progression, Record};
use std::path::PathBuf;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

// ============================================================================
// CLI Structure
// ============================================================================

#[derive(Parser)]
#[command(name = "jazzkeys-admin")]
#[command(version)]
#[command(about = "Jazzkeys content database administration tool")]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Insert starter content into empty collections
    Seed,
    /// List collections that hold documents
    Collections,
    /// Print the documents of a collection as JSON
    List {
        /// Collection name: chord, progression, lesson or favorite
        collection: Collection,
        /// Maximum number of documents (0 = all)
        #[arg(long, short, default_value_t = 0)]
        limit: usize,
    },
}

// ============================================================================
// Commands
// ============================================================================

async fn seed(store: &DocumentStore) -> CmdResult {
    let report = jazzkeys::seed::seed(store).await?;

    if report.total() == 0 {
        println!("Nothing to seed, all collections already have content.");
        return Ok(());
    }

    println!("Seeded:");
    println!("  Chords: {}", report.chords);
    println!("  Progressions: {}", report.progressions);
    println!("  Lessons: {}", report.lessons);
    Ok(())
}

async fn list_collections(store: &DocumentStore) -> CmdResult {
    let names = store.list_collections(0).await?;

    if names.is_empty() {
        println!("No collections.");
        return Ok(());
    }

    for name in &names {
        println!("{}", name);
    }
    Ok(())
}

async fn print_documents<T: Record>(store: &DocumentStore, limit: usize) -> CmdResult {
    let docs = store.get_documents::<T>(&Filter::All, limit).await?;
    println!("{}", serde_json::to_string_pretty(&docs)?);
    eprintln!("Total: {} document(s) in '{}'", docs.len(), T::COLLECTION);
    Ok(())
}

async fn list_documents(store: &DocumentStore, collection: Collection, limit: usize) -> CmdResult {
    match collection {
        Collection::Chord => print_documents::<Chord>(store, limit).await,
        Collection::Progression => print_documents::<Progression>(store, limit).await,
        Collection::Lesson => print_documents::<Lesson>(store, limit).await,
        Collection::Favorite => print_documents::<Favorite>(store, limit).await,
    }
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CmdResult {
    let config = Config::load(cli.config)?;
    let store = init_db(&config.database_url).await?;

    let result = match cli.command {
        Commands::Seed => seed(&store).await,
        Commands::Collections => list_collections(&store).await,
        Commands::List { collection, limit } => list_documents(&store, collection, limit).await,
    };

    store.close().await;
    result
}
