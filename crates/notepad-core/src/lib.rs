//! # Notepad Core
//!
//! Core library for Notepad - a passphrase-encrypted note with a single
//! saved slot per wallet identity.
//!
//! This crate provides the encryption boundary, the stored record model, the
//! storage abstractions, and the persistence flow independent of the CLI.
//!
//! ## Architecture
//!
//! - **crypto**: Envelope encryption/decryption and the content hash
//! - **identity**: Simulated wallet session (connected flag + address)
//! - **storage**: Key-value store trait, backends, and the stored record
//! - **persistence**: Asynchronous slot persistence over a store
//! - **notepad**: The encrypt / decrypt / save / load / wipe service
//!
//! Plaintext and passphrases never cross into storage; only envelopes and
//! their hashes do.

pub mod crypto;
pub mod error;
pub mod fs;
pub mod identity;
pub mod notepad;
pub mod persistence;
pub mod storage;

pub use crypto::{content_hash, decrypt, encrypt, Envelope};
pub use error::{FailureKind, NotepadError, Result};
pub use identity::{Session, WalletAddress, DEMO_WALLET_ADDRESS};
pub use notepad::Notepad;
pub use persistence::{Latency, NotePersistence, SlotPersistence};
pub use storage::{KeyValueStore, NoteRecord};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
