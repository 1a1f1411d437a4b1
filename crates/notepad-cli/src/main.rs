//! Notepad CLI - encrypt notes with a passphrase and keep them in a
//! wallet-bound slot.
//!
//! This is the command-line interface for Notepad. It wires the core library
//! to config files, passphrase prompts and terminal output.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod ui;

use clap::Parser;
use notepad_core::{NotepadError, VERSION};
use tracing_subscriber::EnvFilter;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{init, misc, notes, status, wallet};
use crate::constants::env;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, !cli.no_color);
    let ctx = AppContext::new(&cli);

    let result = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(anyhow::Error::from)
        .and_then(|runtime| runtime.block_on(run(&ctx, &cli)));

    if let Err(e) = result {
        let ui_ctx = ctx.ui_context(false);
        let (message, hint) = split_hint(&e);
        let notice = e
            .downcast_ref::<NotepadError>()
            .is_some_and(NotepadError::is_user_correctable);
        print_error(&ui_ctx, &message, hint.as_deref(), notice);
        std::process::exit(errors::exit_code(&e));
    }
}

/// Log to stderr. NOTEPAD_LOG takes an `EnvFilter` directive; otherwise each
/// `-v` raises the level from the default of warnings only.
fn init_tracing(verbose: u8, ansi: bool) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_env(env::LOG).unwrap_or_else(|_| level.into()))
        .with_writer(std::io::stderr)
        .with_ansi(ansi)
        .with_target(false)
        .init();
}

/// Separate the message from a trailing "Hint:" line, or supply a hint for
/// well-known core errors.
fn split_hint(error: &anyhow::Error) -> (String, Option<String>) {
    let text = format!("{:#}", error);
    if let Some(idx) = text.find("\nHint:") {
        return (text[..idx].to_string(), Some(text[idx + 1..].to_string()));
    }
    let hint = error
        .downcast_ref::<NotepadError>()
        .and_then(errors::core_hint)
        .map(str::to_string);
    (text, hint)
}

async fn run(ctx: &AppContext<'_>, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args)?,
        Some(Commands::Connect(args)) => wallet::handle_connect(ctx, args)?,
        Some(Commands::Disconnect) => wallet::handle_disconnect(ctx)?,
        Some(Commands::Encrypt(args)) => notes::handle_encrypt(ctx, args)?,
        Some(Commands::Decrypt(args)) => notes::handle_decrypt(ctx, args)?,
        Some(Commands::Save(args)) => notes::handle_save(ctx, args).await?,
        Some(Commands::Load(args)) => notes::handle_load(ctx, args).await?,
        Some(Commands::Wipe) => notes::handle_wipe(ctx).await?,
        Some(Commands::Status(args)) => status::handle_status(ctx, args).await?,
        Some(Commands::Completions(args)) => misc::handle_completions(args)?,
        None => {
            println!("Notepad v{}", VERSION);
            println!("\nQuickstart:");
            println!("  notepad connect");
            println!("  notepad save --text \"Hello\"");
            println!("  notepad load --decrypt");
            println!("\nRun `notepad --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CliError;

    #[test]
    fn test_split_hint_from_message() {
        let err = anyhow::Error::new(CliError::not_found("No saved note", "Hint: save one"));
        let (message, hint) = split_hint(&err);
        assert_eq!(message, "No saved note");
        assert_eq!(hint.as_deref(), Some("Hint: save one"));
    }

    #[test]
    fn test_split_hint_for_core_error() {
        let err = anyhow::Error::new(NotepadError::NotAuthenticated);
        let (_, hint) = split_hint(&err);
        assert!(hint.unwrap().contains("notepad connect"));
    }

    #[test]
    fn test_cli_parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["notepad", "save", "--text", "hi", "-q", "-vv"]).unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Some(Commands::Save(_))));
    }

    #[test]
    fn test_save_rejects_both_inputs() {
        let parsed = Cli::try_parse_from(["notepad", "save", "--text", "a", "--envelope", "b"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
