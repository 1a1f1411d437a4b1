//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// Resource not found (config, saved note).
    pub const NOT_FOUND: i32 = 3;

    /// Missing or invalid user input (empty note, passphrase, envelope, bad address).
    pub const INVALID_INPUT: i32 = 4;

    /// Decryption failed (wrong passphrase, unreadable envelope).
    pub const AUTH_FAILED: i32 = 5;

    /// Stored record hash does not match its content.
    pub const INTEGRITY_FAILED: i32 = 6;

    /// No wallet connected.
    pub const NOT_AUTHENTICATED: i32 = 7;
}

/// Environment variables read by the CLI.
pub mod env {
    pub const PASSPHRASE: &str = "NOTEPAD_PASSPHRASE";
    pub const CONFIG: &str = "NOTEPAD_CONFIG";
    pub const LOG: &str = "NOTEPAD_LOG";
    #[cfg(feature = "test-support")]
    pub const TEST_PASSPHRASE_ATTEMPTS: &str = "NOTEPAD_TEST_PASSPHRASE_ATTEMPTS";
}

/// How many passphrases an interactive decrypt accepts before giving up.
pub const MAX_PASSPHRASE_ATTEMPTS: u32 = 3;

/// Label shown next to the connected wallet.
pub const NETWORK_LABEL: &str = "Polygon Mumbai (simulated)";
