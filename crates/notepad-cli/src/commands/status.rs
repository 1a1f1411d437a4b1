use serde_json::json;

use notepad_core::{NoteRecord, NotepadError};

use crate::app::AppContext;
use crate::cli::StatusArgs;
use crate::constants::NETWORK_LABEL;
use crate::ui::{format_timestamp, kv_table, short_id};

/// What the connected wallet's slot holds.
enum NoteState {
    NoWallet,
    Empty,
    Saved(NoteRecord),
    Corrupt,
}

pub async fn handle_status(ctx: &AppContext<'_>, args: &StatusArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(args.json);
    let settings = ctx.settings()?;
    let notepad = ctx.open_notepad()?;
    let session = notepad.session();

    let note = if session.is_connected() {
        match notepad.load().await {
            Ok(Some(record)) => NoteState::Saved(record),
            Ok(None) => NoteState::Empty,
            Err(NotepadError::Integrity(reason)) => {
                tracing::warn!(%reason, "stored note failed its integrity check");
                NoteState::Corrupt
            }
            Err(err) => return Err(err.into()),
        }
    } else {
        NoteState::NoWallet
    };

    let address = session.address().map(|address| address.to_string());
    let latency = settings.persistence;

    if ui.mode.is_json() {
        let note_json = match &note {
            NoteState::NoWallet | NoteState::Empty => json!(null),
            NoteState::Saved(record) => json!({
                "id": record.id,
                "timestamp": record.timestamp_iso(),
                "hash": record.hash,
            }),
            NoteState::Corrupt => json!({ "integrity": "failed" }),
        };
        let out = json!({
            "connected": session.is_connected(),
            "address": address,
            "network": NETWORK_LABEL,
            "backend": settings.backend.as_str(),
            "store": settings.store_path.display().to_string(),
            "config": settings.config_path.display().to_string(),
            "config_found": settings.from_config,
            "write_delay_ms": latency.write_delay_ms,
            "read_delay_ms": latency.read_delay_ms,
            "note": note_json,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    let config = if settings.from_config {
        settings.config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", settings.config_path.display())
    };
    let note_summary = match &note {
        NoteState::NoWallet => "-".to_string(),
        NoteState::Empty => "none".to_string(),
        NoteState::Saved(record) => format!(
            "{} at {}",
            short_id(&record.id),
            format_timestamp(&record.timestamp, ui.mode.is_pretty())
        ),
        NoteState::Corrupt => "integrity check failed".to_string(),
    };

    let rows = [
        (
            "Wallet",
            if session.is_connected() {
                "connected".to_string()
            } else {
                "disconnected".to_string()
            },
        ),
        ("Address", address.unwrap_or_else(|| "-".to_string())),
        ("Network", NETWORK_LABEL.to_string()),
        ("Backend", settings.backend.as_str().to_string()),
        ("Store", settings.store_path.display().to_string()),
        ("Config", config),
        (
            "Delays",
            format!(
                "write {}ms, read {}ms",
                latency.write_delay_ms, latency.read_delay_ms
            ),
        ),
        ("Note", note_summary),
    ];
    println!("{}", kv_table(&ui, "Notepad status", &rows));
    Ok(())
}
