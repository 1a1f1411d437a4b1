//! Encrypt, decrypt, save, load and wipe.

use serde_json::json;

use notepad_core::crypto::require_present;
use notepad_core::{Envelope, NoteRecord};

use crate::app::{decrypt_with_retry, read_passphrase, AppContext};
use crate::cli::{DecryptArgs, EncryptArgs, LoadArgs, SaveArgs};
use crate::errors::CliError;
use crate::helpers::{read_envelope, read_input};
use crate::ui::{format_timestamp, receipt, short_id, Spinner, UiContext};

pub fn handle_encrypt(ctx: &AppContext, args: &EncryptArgs) -> anyhow::Result<()> {
    let text = read_input(args.text.as_deref(), "Note")?;
    require_present("note", &text)?;
    let passphrase = read_passphrase(ctx.interactive(), true)?;
    let envelope = notepad_core::encrypt(&text, &passphrase)?;

    if args.json {
        println!("{}", json!({ "envelope": envelope.as_str() }));
    } else {
        println!("{}", envelope);
    }
    Ok(())
}

pub fn handle_decrypt(ctx: &AppContext, args: &DecryptArgs) -> anyhow::Result<()> {
    let envelope = Envelope::parse(&read_envelope(args.envelope.as_deref())?)?;
    let plaintext = decrypt_with_retry(ctx.interactive(), |passphrase| {
        notepad_core::decrypt(&envelope, passphrase)
    })?;

    if args.json {
        println!("{}", json!({ "plaintext": plaintext }));
    } else {
        println!("{}", plaintext);
    }
    Ok(())
}

pub async fn handle_save(ctx: &AppContext<'_>, args: &SaveArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let mut notepad = ctx.open_notepad()?;
    let address = notepad.session().require()?.clone();

    let envelope = match (&args.envelope, &args.text) {
        (_, Some(text)) => {
            require_present("note", text)?;
            let passphrase = read_passphrase(ctx.interactive(), true)?;
            notepad.encrypt_note(text, &passphrase)?
        }
        (Some(envelope), None) => Envelope::parse(envelope)?,
        (None, None) => Envelope::parse(&read_envelope(None)?)?,
    };

    let spinner = Spinner::start(&ui, "Saving note");
    let saved = notepad.save(&envelope).await;
    spinner.finish();
    let record = saved?;

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else if !ctx.quiet() {
        println!(
            "{}",
            receipt(&ui, "Note saved", &record_items(&ui, &record, address.short()))
        );
    }
    Ok(())
}

pub async fn handle_load(ctx: &AppContext<'_>, args: &LoadArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let notepad = ctx.open_notepad()?;
    let address = notepad.session().require()?.clone();

    let spinner = Spinner::start(&ui, "Loading note");
    let loaded = notepad.load().await;
    spinner.finish();
    let record = loaded?.ok_or_else(|| {
        CliError::not_found(
            format!("No saved note for {}", address.short()),
            "Hint: Run `notepad save` to save one.",
        )
    })?;

    if args.decrypt {
        let plaintext = decrypt_with_retry(ctx.interactive(), |passphrase| {
            notepad.decrypt_note(&record.content, passphrase)
        })?;
        if ui.mode.is_json() {
            println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "id": record.id,
                    "timestamp": record.timestamp_iso(),
                    "hash": record.hash,
                    "plaintext": plaintext,
                }))?
            );
        } else {
            println!("{}", plaintext);
        }
    } else if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", record.content);
    }
    Ok(())
}

pub async fn handle_wipe(ctx: &AppContext<'_>) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let mut notepad = ctx.open_notepad()?;
    let address = notepad.session().require()?.clone();

    let spinner = Spinner::start(&ui, "Wiping note");
    let wiped = notepad.wipe().await;
    spinner.finish();
    let removed = wiped?;

    if !ctx.quiet() {
        let title = if removed {
            "Note wiped"
        } else {
            "No saved note to wipe"
        };
        println!(
            "{}",
            receipt(
                &ui,
                title,
                &[
                    ("Address", address.short()),
                    ("Removed", removed.to_string()),
                ],
            )
        );
    }
    Ok(())
}

fn record_items(
    ui: &UiContext,
    record: &NoteRecord,
    address: String,
) -> Vec<(&'static str, String)> {
    let id = if ui.mode.is_pretty() {
        short_id(&record.id).to_string()
    } else {
        record.id.clone()
    };
    vec![
        ("Id", id),
        (
            "Saved At",
            format_timestamp(&record.timestamp, ui.mode.is_pretty()),
        ),
        ("Hash", record.hash.clone()),
        ("Address", address),
    ]
}
