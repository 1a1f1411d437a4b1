//! UI primitives for the Notepad CLI.
//!
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and styles
//! - **Render**: Key-value lines, receipts, hints, tables, errors
//! - **Progress**: Spinner shown while persistence is in flight
//! - **Format**: Timestamp and identifier formatting

mod context;
pub mod format;
mod mode;
pub mod progress;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, hint, kv_table, print_error, receipt};

pub use progress::Spinner;

pub use format::{format_timestamp, short_id};
