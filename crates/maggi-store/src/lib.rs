//! # maggi-store - Persistence
//!
//! Stores profiles and their details in a two-table SQLite database.
//!
//! - [`ProfileStore`] / [`DetailStore`] - the CRUD contract the workflows use
//! - [`SqliteStore`] - rusqlite implementation, with the cascading profile
//!   delete wrapped in one transaction
//! - `MemoryStore` (feature `test-helpers`) - in-memory fake with failure
//!   injection

mod repository;
mod schema;
mod sqlite;

#[cfg(any(test, feature = "test-helpers"))]
pub mod memory;

pub use repository::{DetailStore, ProfileStore, Store};
pub use sqlite::{SqliteStore, DATABASE_FILENAME};

#[cfg(any(test, feature = "test-helpers"))]
pub use memory::MemoryStore;
