//! maggi-app - Workflow engine for maggi
//!
//! This crate implements the TEA (The Elm Architecture) pattern: a single
//! `update(state, message) -> UpdateResult` transition function drives the
//! page router and the profile/detail workflows, while store calls run as
//! background actions that post their results back as messages.

pub mod actions;
pub mod banner;
pub mod config;
pub mod detail;
pub mod engine;
pub mod handler;
pub mod input_key;
pub mod issue;
pub mod list;
pub mod message;
pub mod process;
pub mod profile;
pub mod signals;
pub mod state;
pub mod text_input;

// Re-export primary types
pub use actions::SharedStore;
pub use engine::Engine;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, PageTransition};
pub use state::{AppPhase, AppState, Page, PageId};
