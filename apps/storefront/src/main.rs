//! # Storefront Entry Point
//!
//! Thin binary wrapper - the actual setup is in lib.rs for better
//! testability.

fn main() {
    if let Err(err) = storefront_lib::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
