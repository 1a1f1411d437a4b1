use std::path::PathBuf;

use notepad_core::storage::SqliteStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{
    default_store_path, write_config, Backend, NotepadConfig, PersistenceSection,
};
use crate::ui::{hint, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: Pass --force to overwrite it.",
            config_path.display()
        ));
    }

    let store_path = match ctx.cli().store.as_deref() {
        Some(path) => PathBuf::from(path),
        None => default_store_path(args.backend)?,
    };
    let persistence = PersistenceSection {
        write_delay_ms: args.write_delay_ms,
        read_delay_ms: args.read_delay_ms,
    };
    let config = NotepadConfig::new(args.backend, store_path.clone(), persistence);
    write_config(&config_path, &config)?;

    // Create the database and its table now so a bad path fails here.
    if args.backend == Backend::Sqlite {
        SqliteStore::open(&store_path)?;
    }

    tracing::info!(
        config = %config_path.display(),
        backend = args.backend.as_str(),
        store = %store_path.display(),
        "config written"
    );

    if !ctx.quiet() {
        println!(
            "{}",
            receipt(
                &ui,
                "Notepad initialized",
                &[
                    ("Config", config_path.display().to_string()),
                    ("Backend", args.backend.as_str().to_string()),
                    ("Store", store_path.display().to_string()),
                    (
                        "Delays",
                        format!(
                            "write {}ms, read {}ms",
                            persistence.write_delay_ms, persistence.read_delay_ms
                        ),
                    ),
                ],
            )
        );
        println!("{}", hint(&ui, "notepad connect"));
    }
    Ok(())
}
