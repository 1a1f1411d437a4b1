//! Simulated wallet connect and disconnect.

use notepad_core::{WalletAddress, DEMO_WALLET_ADDRESS};

use crate::app::AppContext;
use crate::cli::ConnectArgs;
use crate::constants::NETWORK_LABEL;
use crate::ui::{badge, receipt, Badge};

pub fn handle_connect(ctx: &AppContext, args: &ConnectArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let address = WalletAddress::parse(args.address.as_deref().unwrap_or(DEMO_WALLET_ADDRESS))?;

    let mut notepad = ctx.open_notepad_for_wallet()?;
    notepad.connect(address.clone());
    ctx.persist_session(notepad)?;

    if !ctx.quiet() {
        println!(
            "{}",
            receipt(
                &ui,
                "Wallet connected",
                &[
                    ("Address", address.to_string()),
                    ("Short", address.short()),
                    ("Network", NETWORK_LABEL.to_string()),
                ],
            )
        );
    }
    Ok(())
}

pub fn handle_disconnect(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let mut notepad = ctx.open_notepad_for_wallet()?;
    let previous = notepad.session().address().cloned();
    notepad.disconnect();
    ctx.persist_session(notepad)?;

    if ctx.quiet() {
        return Ok(());
    }
    match previous {
        Some(address) => println!(
            "{}",
            receipt(&ui, "Wallet disconnected", &[("Address", address.short())])
        ),
        None => println!("{}", badge(&ui, Badge::Info, "No wallet was connected")),
    }
    Ok(())
}
