//! CLI error types for structured error handling.
//!
//! `CliError` carries errors raised by the CLI itself. Errors from
//! `notepad-core` travel through `anyhow` untouched and are classified here
//! when the process exits.

use std::fmt;

use notepad_core::NotepadError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, saved note)
    NotFound { message: String, hint: String },

    /// Decryption failed after every allowed attempt
    AuthFailed {
        message: String,
        hint: Option<String>,
    },

    /// Missing or invalid user input
    InvalidInput(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, hint } => {
                write!(f, "{}\n{}", message, hint)
            }
            CliError::AuthFailed { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
            CliError::InvalidInput(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    pub fn auth_failed_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::AuthFailed {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::AuthFailed { .. } => exit_codes::AUTH_FAILED,
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for a core error.
pub fn core_exit_code(err: &NotepadError) -> i32 {
    match err {
        NotepadError::MissingInput(_) | NotepadError::InvalidAddress(_) => {
            exit_codes::INVALID_INPUT
        }
        NotepadError::CryptoMismatch => exit_codes::AUTH_FAILED,
        NotepadError::Integrity(_) => exit_codes::INTEGRITY_FAILED,
        NotepadError::NotAuthenticated => exit_codes::NOT_AUTHENTICATED,
        NotepadError::NotFound(_) => exit_codes::NOT_FOUND,
        _ => 1,
    }
}

/// Exit code for any error reaching `main`.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(cli) = err.downcast_ref::<CliError>() {
        return cli.exit_code();
    }
    if let Some(core) = err.downcast_ref::<NotepadError>() {
        return core_exit_code(core);
    }
    1
}

/// Contextual hint for a core error, if one helps.
pub fn core_hint(err: &NotepadError) -> Option<&'static str> {
    match err {
        NotepadError::NotAuthenticated => {
            Some("Hint: Run `notepad connect` to connect a wallet first.")
        }
        NotepadError::CryptoMismatch => {
            Some("Hint: Check your passphrase. Set NOTEPAD_PASSPHRASE or enter it at the prompt.")
        }
        NotepadError::Integrity(_) => Some(
            "Hint: The stored note was modified outside notepad. Run `notepad wipe` and save it again.",
        ),
        NotepadError::InvalidAddress(_) => Some(
            "Hint: Addresses look like 0x followed by 40 hex characters. `notepad connect` replaces a stored one.",
        ),
        _ => None,
    }
}
