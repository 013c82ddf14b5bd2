//! # State Module
//!
//! Manages session state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Commands can be exercised with just the state they need
//! 3. **Clearer Command Signatures**: Commands declare exactly what state they take
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┐        ┌──────────────────┐              │
//! │          │   CartState      │        │  CatalogState    │              │
//! │          │                  │        │                  │              │
//! │          │  Arc<Mutex<      │        │  Arc<Catalog>    │              │
//! │          │    Cart          │        │  read-only after │              │
//! │          │  >>              │        │  initialization  │              │
//! │          └──────────────────┘        └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartState: Protected by Arc<Mutex<T>> - exactly one writer          │
//! │  • CatalogState: Immutable after startup, shared freely                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;

pub use cart::CartState;
pub use catalog::CatalogState;
