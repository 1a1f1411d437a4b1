//! Input presence checks shared by encrypt, decrypt, and save.

use crate::error::{NotepadError, Result};

/// Reject a value that is empty or only whitespace.
///
/// `what` names the input in the error message (e.g. "passphrase").
///
/// # Examples
///
/// ```
/// use notepad_core::crypto::require_present;
///
/// assert!(require_present("note", "hello").is_ok());
/// assert!(require_present("note", "  \n").is_err());
/// ```
pub fn require_present(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NotepadError::MissingInput(format!("{} cannot be empty", what)));
    }
    Ok(())
}
