//! Input helpers for the CLI.

use std::io::{self, IsTerminal, Read};

use dialoguer::Input;

use crate::errors::CliError;

/// Take `value` if given; otherwise read from stdin, prompting for a single
/// line when stdin is a terminal.
pub fn read_input(value: Option<&str>, prompt: &str) -> anyhow::Result<String> {
    if let Some(value) = value {
        return Ok(value.to_string());
    }

    if io::stdin().is_terminal() {
        return Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", prompt.to_lowercase(), e));
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    Ok(strip_trailing_newline(buffer))
}

/// Take the envelope from `value`, or read it from piped stdin.
///
/// Envelopes span several lines, so there is no interactive prompt.
pub fn read_envelope(value: Option<&str>) -> anyhow::Result<String> {
    if value.is_none() && io::stdin().is_terminal() {
        return Err(CliError::invalid_input(
            "No envelope given. Pass --envelope or pipe it on stdin.",
        )
        .into());
    }
    read_input(value, "Envelope")
}

/// Drop one trailing line ending, the way `echo` and here-strings add it.
fn strip_trailing_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
