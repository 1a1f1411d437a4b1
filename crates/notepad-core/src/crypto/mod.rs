//! Cryptographic operations for Notepad.
//!
//! Encryption uses **age** (https://age-encryption.org/) with a passphrase
//! recipient. The output is ASCII-armored so an envelope is a plain string
//! that can be pasted, stored in JSON, and hashed.
//!
//! ## Security Model
//!
//! - The passphrase is the only secret; it is never stored
//! - age derives the file key with scrypt and a random salt per envelope
//! - The payload is ChaCha20-Poly1305, so tampering fails decryption
//! - Decrypted bytes are zeroized once converted to text
//!
//! ## Threat Model
//!
//! We defend against:
//! - Theft of the stored record
//! - Offline brute-force attacks on the passphrase (scrypt work factor)
//!
//! We do NOT defend against:
//! - Compromised OS / keylogger
//! - A weak passphrase (any non-empty passphrase is accepted)

pub mod digest;
pub mod envelope;
pub mod input;

pub use digest::content_hash;
pub use envelope::{decrypt, encrypt, Envelope};
pub use input::require_present;
