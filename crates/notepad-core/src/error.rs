//! Error types for Notepad core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps them to
//! exit codes and user-facing notices via [`NotepadError::kind`].

use thiserror::Error;

/// Result type alias for Notepad operations.
pub type Result<T> = std::result::Result<T, NotepadError>;

/// Core error type for Notepad operations.
#[derive(Debug, Error)]
pub enum NotepadError {
    /// Empty plaintext, passphrase, or envelope
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// Decryption did not yield readable text (wrong passphrase or corrupted envelope)
    #[error("Invalid encryption key or corrupted data")]
    CryptoMismatch,

    /// Save/load/wipe attempted without a connected wallet
    #[error("Wallet not connected")]
    NotAuthenticated,

    /// Malformed wallet address
    #[error("Invalid wallet address: {0}")]
    InvalidAddress(String),

    /// Encryption machinery failure (not a passphrase problem)
    #[error("Encryption error: {0}")]
    Crypto(String),

    /// Stored record hash does not match its content
    #[error("Integrity check failed: {0}")]
    Integrity(String),

    /// The persistence collaborator reported a failed outcome
    #[error("Persistence failed: {0}")]
    Persistence(String),

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// SQLite-specific storage error
    #[error("SQLite error: {source}")]
    Sqlite {
        #[from]
        source: rusqlite::Error,
    },

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

/// User-visible classification of a failure.
///
/// The first three are transient and user-correctable; everything else is
/// reported as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    MissingInput,
    CryptoMismatch,
    NotAuthenticated,
    Other,
}

impl NotepadError {
    /// Classify this error for user-facing reporting.
    pub fn kind(&self) -> FailureKind {
        match self {
            NotepadError::MissingInput(_) => FailureKind::MissingInput,
            NotepadError::CryptoMismatch => FailureKind::CryptoMismatch,
            NotepadError::NotAuthenticated => FailureKind::NotAuthenticated,
            _ => FailureKind::Other,
        }
    }

    /// Whether the user can fix this by changing their input or connecting.
    pub fn is_user_correctable(&self) -> bool {
        !matches!(self.kind(), FailureKind::Other)
    }
}
