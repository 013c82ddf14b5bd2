//! # Storefront Library
//!
//! Session host for the Tech Store cart.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Load Catalog ─────────────────────────────────────────────────────► │
//! │     • --catalog <file>: JSON product records, validated before use      │
//! │     • otherwise: the built-in six-product demo catalog                  │
//! │                                                                         │
//! │  3. Initialize State Objects ─────────────────────────────────────────► │
//! │     • CatalogState: read-only catalog handle                            │
//! │     • CartState: empty cart with Mutex for single-writer updates        │
//! │                                                                         │
//! │  4. Run Interactive Shell ────────────────────────────────────────────► │
//! │     • dispatches intents until EOF or 'quit'                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The cart itself is never persisted: a session starts empty and its state
//! is discarded at teardown.

pub mod commands;
pub mod error;
pub mod shell;
pub mod state;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use state::{CartState, CatalogState};
use techstore_core::{Catalog, Product};

/// Tech Store - a small catalog-and-cart session in the terminal.
#[derive(Debug, Parser)]
#[command(name = "storefront", version, about)]
pub struct Cli {
    /// Path to a JSON catalog file (array of product records, prices in
    /// integer cents). Defaults to the built-in demo catalog.
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

/// Runs the storefront session.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing (logging)
    init_tracing();

    info!("Starting Tech Store storefront");

    let catalog = match &cli.catalog {
        Some(path) => load_catalog(path)?,
        None => Catalog::demo(),
    };
    info!(products = catalog.len(), "Catalog ready");

    let catalog_state = CatalogState::new(catalog);
    let cart_state = CartState::new();

    shell::run(&catalog_state, &cart_state)
}

/// Loads and validates a catalog file.
///
/// The file is the input boundary from the catalog collaborator: a JSON
/// array of product records. Validation failures abort startup - a session
/// never begins against a malformed catalog.
pub fn load_catalog(path: &Path) -> anyhow::Result<Catalog> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading catalog file {}", path.display()))?;

    let products: Vec<Product> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing catalog file {}", path.display()))?;

    let catalog = Catalog::new(products)
        .with_context(|| format!("validating catalog file {}", path.display()))?;

    Ok(catalog)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=storefront_lib=trace` - Show trace for the command layer only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,storefront_lib=debug,techstore_core=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_catalog_round_trip() {
        let dir = std::env::temp_dir();
        let path = dir.join("techstore-test-catalog.json");
        let json = r#"[
            {"id": "p-1", "name": "Wireless Mouse", "priceCents": 2999, "stock": 15, "glyph": "🖱️"},
            {"id": "p-2", "name": "USB-C Cable", "priceCents": 1299, "stock": 25, "glyph": "🔌"}
        ]"#;
        fs::write(&path, json).unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("p-1").unwrap().price_cents, 2999);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_load_catalog_rejects_invalid_records() {
        let dir = std::env::temp_dir();
        let path = dir.join("techstore-test-catalog-bad.json");
        let json = r#"[
            {"id": "p-1", "name": "Wireless Mouse", "priceCents": -1, "stock": 15, "glyph": "🖱️"}
        ]"#;
        fs::write(&path, json).unwrap();

        assert!(load_catalog(&path).is_err());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_missing_catalog_file_is_an_error() {
        assert!(load_catalog(Path::new("/no/such/catalog.json")).is_err());
    }
}
