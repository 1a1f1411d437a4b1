//! Passphrase encryption into self-contained text envelopes.
//!
//! An envelope is an ASCII-armored age file. The armor header, the scrypt
//! salt and work factor, and the payload nonce all live inside it, so the
//! passphrase is the only thing needed to open it again.

use std::fmt;
use std::io::{Read, Write};
use std::iter;
use std::str::FromStr;

use age::armor::{ArmoredReader, ArmoredWriter, Format};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use super::input::require_present;
use crate::error::{NotepadError, Result};

/// Ciphertext envelope produced by [`encrypt`].
///
/// Stored in canonical form: surrounding whitespace removed and a single
/// trailing newline, so the content hash is stable across copy/paste.
/// Deserializing goes through [`Envelope::parse`], so a stored record with
/// blank content is rejected like blank user input.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Envelope(String);

impl Envelope {
    /// Parse an envelope from user input (argument, stdin, or stored record).
    ///
    /// Only presence is checked here; a malformed envelope fails in [`decrypt`].
    pub fn parse(input: &str) -> Result<Self> {
        require_present("encrypted content", input)?;
        Ok(Self::canonical(input))
    }

    fn canonical(raw: &str) -> Self {
        Self(format!("{}\n", raw.trim()))
    }

    /// The canonical envelope text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end())
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Envelope")
            .field(&format_args!("{} bytes", self.0.len()))
            .finish()
    }
}

impl FromStr for Envelope {
    type Err = NotepadError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Envelope {
    type Error = NotepadError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Envelope> for String {
    fn from(envelope: Envelope) -> Self {
        envelope.0
    }
}

impl AsRef<str> for Envelope {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Encrypt a note under a passphrase.
///
/// # Errors
///
/// Returns `NotepadError::MissingInput` if the note or passphrase is blank,
/// and `NotepadError::Crypto` if the age writer fails.
///
/// # Examples
///
/// ```no_run
/// use notepad_core::crypto::{decrypt, encrypt};
///
/// let envelope = encrypt("hello world", "k1").unwrap();
/// assert_eq!(decrypt(&envelope, "k1").unwrap(), "hello world");
/// ```
pub fn encrypt(plaintext: &str, passphrase: &str) -> Result<Envelope> {
    require_present("note", plaintext)?;
    require_present("passphrase", passphrase)?;

    let encryptor =
        age::Encryptor::with_user_passphrase(SecretString::from(passphrase.to_string()));

    let mut output = Vec::new();
    let armor = ArmoredWriter::wrap_output(&mut output, Format::AsciiArmor)
        .map_err(|e| NotepadError::Crypto(format!("Failed to create armor writer: {}", e)))?;
    let mut writer = encryptor
        .wrap_output(armor)
        .map_err(|e| NotepadError::Crypto(format!("Failed to create encryptor: {}", e)))?;

    writer
        .write_all(plaintext.as_bytes())
        .map_err(|e| NotepadError::Crypto(format!("Encryption write failed: {}", e)))?;

    writer
        .finish()
        .and_then(|armor| armor.finish())
        .map_err(|e| NotepadError::Crypto(format!("Encryption finish failed: {}", e)))?;

    let armored = String::from_utf8(output)
        .map_err(|e| NotepadError::Crypto(format!("Armor produced non-UTF-8 output: {}", e)))?;

    Ok(Envelope::canonical(&armored))
}

/// Decrypt an envelope back into the note text.
///
/// # Errors
///
/// Returns `NotepadError::MissingInput` for a blank passphrase, and
/// `NotepadError::CryptoMismatch` if the passphrase is wrong, the envelope is
/// corrupted, or the payload is not non-empty UTF-8 text.
pub fn decrypt(envelope: &Envelope, passphrase: &str) -> Result<String> {
    require_present("encrypted content", envelope.as_str())?;
    require_present("passphrase", passphrase)?;

    let decryptor = age::Decryptor::new(ArmoredReader::new(envelope.as_str().as_bytes()))
        .map_err(|e| match e {
            age::DecryptError::ExcessiveWork { .. } => {
                NotepadError::Crypto(format!("Decryption refused: {}", e))
            }
            other => {
                tracing::debug!(error = %other, "envelope header rejected");
                NotepadError::CryptoMismatch
            }
        })?;

    let identity = age::scrypt::Identity::new(SecretString::from(passphrase.to_string()));
    let mut reader = decryptor
        .decrypt(iter::once(&identity as &dyn age::Identity))
        .map_err(|e| match e {
            age::DecryptError::ExcessiveWork { .. } => {
                NotepadError::Crypto(format!("Decryption refused: {}", e))
            }
            other => {
                tracing::debug!(error = %other, "envelope key unwrap failed");
                NotepadError::CryptoMismatch
            }
        })?;

    let mut decrypted = Zeroizing::new(Vec::new());
    reader.read_to_end(&mut decrypted).map_err(|e| {
        tracing::debug!(error = %e, "envelope payload failed to decrypt");
        NotepadError::CryptoMismatch
    })?;

    let text = std::str::from_utf8(&decrypted).map_err(|_| NotepadError::CryptoMismatch)?;
    if text.is_empty() {
        return Err(NotepadError::CryptoMismatch);
    }

    Ok(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_round_trip() {
        let envelope = encrypt("hello world", "k1").unwrap();
        assert_eq!(decrypt(&envelope, "k1").unwrap(), "hello world");
    }

    #[test]
    fn test_wrong_passphrase_is_mismatch() {
        let envelope = encrypt("hello world", "k1").unwrap();
        let result = decrypt(&envelope, "k2");
        assert!(matches!(result, Err(NotepadError::CryptoMismatch)));
    }

    #[test]
    fn test_envelope_is_armored_text() {
        let envelope = encrypt("secret data", "passphrase").unwrap();

        assert!(envelope
            .as_str()
            .starts_with("-----BEGIN AGE ENCRYPTED FILE-----"));
        assert!(envelope.as_str().ends_with("-----END AGE ENCRYPTED FILE-----\n"));
        assert!(!envelope.as_str().contains("secret data"));
    }

    #[test]
    fn test_same_input_different_envelopes() {
        // Fresh salt and nonce per envelope
        let first = encrypt("same plaintext", "same-passphrase").unwrap();
        let second = encrypt("same plaintext", "same-passphrase").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_unicode_and_whitespace_preserved() {
        let note = "  line one\nłódź 🔐\n\n";
        let envelope = encrypt(note, "k1").unwrap();
        assert_eq!(decrypt(&envelope, "k1").unwrap(), note);
    }

    #[test]
    fn test_blank_inputs_rejected() {
        assert!(matches!(
            encrypt("", "k1"),
            Err(NotepadError::MissingInput(_))
        ));
        assert!(matches!(
            encrypt("   ", "k1"),
            Err(NotepadError::MissingInput(_))
        ));
        assert!(matches!(
            encrypt("note", ""),
            Err(NotepadError::MissingInput(_))
        ));
        assert!(matches!(
            Envelope::parse("  \n"),
            Err(NotepadError::MissingInput(_))
        ));
    }

    #[test]
    fn test_decrypt_blank_passphrase_rejected() {
        let envelope = Envelope::parse("-----BEGIN AGE ENCRYPTED FILE-----").unwrap();
        assert!(matches!(
            decrypt(&envelope, " "),
            Err(NotepadError::MissingInput(_))
        ));
    }

    #[test]
    fn test_garbage_envelope_is_mismatch() {
        let envelope = Envelope::parse("U2FsdGVkX1+not-an-age-file").unwrap();
        assert!(matches!(
            decrypt(&envelope, "k1"),
            Err(NotepadError::CryptoMismatch)
        ));
    }

    #[test]
    fn test_corrupted_payload_is_mismatch() {
        let envelope = encrypt("a note long enough to corrupt", "k1").unwrap();

        // Flip one character inside the base64 body (second to last body line)
        let mut lines: Vec<String> = envelope.as_str().lines().map(String::from).collect();
        let target = lines.len() - 2;
        let mut chars: Vec<char> = lines[target].chars().collect();
        let idx = chars.len() / 2;
        chars[idx] = if chars[idx] == 'A' { 'B' } else { 'A' };
        lines[target] = chars.into_iter().collect();
        let corrupted = Envelope::parse(&lines.join("\n")).unwrap();

        assert!(decrypt(&corrupted, "k1").is_err());
    }

    #[test]
    fn test_parse_canonicalizes_whitespace() {
        let envelope = encrypt("note", "k1").unwrap();
        let pasted = format!("\n\n  {}  \n\n", envelope.as_str());

        let reparsed = Envelope::parse(&pasted).unwrap();
        assert_eq!(reparsed, envelope);
        assert_eq!(decrypt(&reparsed, "k1").unwrap(), "note");
    }

    #[test]
    fn test_deserialize_applies_presence_check() {
        assert!(serde_json::from_str::<Envelope>(r#""   ""#).is_err());

        let envelope: Envelope = serde_json::from_str(r#""  body  ""#).unwrap();
        assert_eq!(envelope.as_str(), "body\n");
        assert_eq!(serde_json::to_string(&envelope).unwrap(), r#""body\n""#);
    }

    #[test]
    fn test_debug_does_not_print_content() {
        let envelope = Envelope::parse("opaque-envelope-body").unwrap();
        let debug = format!("{:?}", envelope);
        assert!(!debug.contains("opaque"));
        assert!(debug.contains("bytes"));
    }
}
