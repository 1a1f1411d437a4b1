//! Application-level utilities for the Notepad CLI.
//!
//! This module provides:
//! - Path and backend resolution from flags, config, and XDG defaults
//! - The per-invocation context that opens the store and notepad
//! - Passphrase handling with retry logic

mod context;
mod passphrase;
mod resolver;

pub use context::AppContext;
pub use passphrase::{decrypt_with_retry, read_passphrase};
pub use resolver::resolve_config_path;
