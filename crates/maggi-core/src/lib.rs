//! # maggi-core - Core Domain Types
//!
//! Foundation crate for maggi. Provides the profile/detail domain types,
//! error handling, logging setup, shell statement generation, and
//! terminal-multiplexer session discovery.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Profile`] - A named group of aliases and environment variables
//! - [`Detail`] - A single alias or env var owned by one profile
//! - [`DetailType`] - Alias or Env
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by concern
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ### Generation (`generate`)
//! - [`generate()`] - Format details into `eval`-able shell statements
//!
//! ### Session Discovery (`session`)
//! - [`detect_session()`] - Name of the active tmux session, if any
//!
//! ## Prelude
//!
//! ```rust
//! use maggi_core::prelude::*;
//! ```

pub mod error;
pub mod generate;
pub mod logging;
pub mod paths;
pub mod session;
pub mod types;

/// Prelude for common imports used throughout all maggi crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use generate::generate;
pub use paths::maggi_home;
pub use session::{detect_session, parse_session_name};
pub use types::{Detail, DetailType, Profile};
