//! Passphrase handling and decryption with retry logic.
//!
//! The passphrase comes from NOTEPAD_PASSPHRASE or a hidden prompt. It is
//! held in `Zeroizing` buffers and never written anywhere.

use dialoguer::Password;
use zeroize::Zeroizing;

use notepad_core::NotepadError;

use crate::constants::{env, MAX_PASSPHRASE_ATTEMPTS};
use crate::errors::CliError;

/// Read the passphrase from the environment, or prompt for it.
///
/// With `confirm`, the prompt asks twice (used when encrypting).
pub fn read_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if let Some(passphrase) = env_passphrase() {
        return Ok(passphrase);
    }
    prompt_passphrase(interactive, confirm)
}

fn env_passphrase() -> Option<Zeroizing<String>> {
    std::env::var(env::PASSPHRASE)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(Zeroizing::new)
}

fn prompt_passphrase(interactive: bool, confirm: bool) -> anyhow::Result<Zeroizing<String>> {
    if !interactive {
        return Err(CliError::invalid_input(format!(
            "No passphrase provided and no TTY available. Set {}.",
            env::PASSPHRASE
        ))
        .into());
    }
    let mut prompt = Password::new().with_prompt("Passphrase");
    if confirm {
        prompt = prompt.with_confirmation("Confirm passphrase", "Passphrases do not match");
    }
    prompt
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read passphrase: {}", e))
}

enum Source {
    Env(Zeroizing<String>),
    #[cfg(feature = "test-support")]
    Scripted(Vec<Zeroizing<String>>),
    Prompt,
}

impl Source {
    #[cfg_attr(not(feature = "test-support"), allow(unused_variables))]
    fn detect(interactive: bool) -> Self {
        #[cfg(feature = "test-support")]
        if !interactive {
            if let Ok(value) = std::env::var(env::TEST_PASSPHRASE_ATTEMPTS) {
                return Source::Scripted(
                    value
                        .split(',')
                        .map(|item| item.trim().to_string())
                        .filter(|item| !item.is_empty())
                        .map(Zeroizing::new)
                        .collect(),
                );
            }
        }
        match env_passphrase() {
            Some(passphrase) => Source::Env(passphrase),
            None => Source::Prompt,
        }
    }

    fn max_attempts(&self, interactive: bool) -> u32 {
        match self {
            Source::Env(_) => 1,
            #[cfg(feature = "test-support")]
            Source::Scripted(_) => MAX_PASSPHRASE_ATTEMPTS,
            Source::Prompt if interactive => MAX_PASSPHRASE_ATTEMPTS,
            Source::Prompt => 1,
        }
    }

    #[cfg_attr(not(feature = "test-support"), allow(unused_variables))]
    fn next(&self, attempt: u32, interactive: bool) -> anyhow::Result<Zeroizing<String>> {
        match self {
            Source::Env(passphrase) => Ok(passphrase.clone()),
            #[cfg(feature = "test-support")]
            Source::Scripted(values) => values
                .get((attempt - 1) as usize)
                .cloned()
                .ok_or_else(|| anyhow::anyhow!("No passphrase attempts remaining")),
            Source::Prompt => prompt_passphrase(interactive, false),
        }
    }
}

/// Run `decrypt` with passphrases until one works.
///
/// A prompted passphrase gets up to three tries; a passphrase from the
/// environment gets one. Errors other than a mismatch end the loop at once.
pub fn decrypt_with_retry<F>(interactive: bool, decrypt: F) -> anyhow::Result<String>
where
    F: Fn(&str) -> notepad_core::Result<String>,
{
    let source = Source::detect(interactive);
    let max_attempts = source.max_attempts(interactive);
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        let passphrase = source.next(attempts, interactive)?;
        match decrypt(passphrase.as_str()) {
            Ok(plaintext) => return Ok(plaintext),
            Err(NotepadError::CryptoMismatch) => {
                let remaining = max_attempts.saturating_sub(attempts);
                tracing::debug!(attempts, remaining, "passphrase rejected");
                if remaining == 0 {
                    if max_attempts == 1 {
                        return Err(NotepadError::CryptoMismatch.into());
                    }
                    return Err(CliError::auth_failed_with_hint(
                        "Too many failed passphrase attempts.",
                        "Hint: Notes cannot be recovered without the passphrase used to encrypt them.",
                    )
                    .into());
                }
                eprintln!(
                    "Incorrect passphrase. {} attempt{} remaining.",
                    remaining,
                    if remaining == 1 { "" } else { "s" }
                );
            }
            Err(err) => return Err(err.into()),
        }
    }
}
