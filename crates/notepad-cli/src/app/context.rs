//! Application context for the Notepad CLI.
//!
//! Bundles the parsed CLI arguments with lazily resolved settings, and opens
//! the store and notepad service for a command.

use std::io::IsTerminal;

use once_cell::unsync::OnceCell;

use notepad_core::storage::{JsonFileStore, SqliteStore};
use notepad_core::{KeyValueStore, Notepad, NotepadError, Session, SlotPersistence};

use crate::cli::Cli;
use crate::config::Backend;
use crate::ui::UiContext;

use super::resolver::{resolve_settings, Settings};

/// The notepad service as the CLI builds it: slot persistence over whichever
/// backend the settings name.
pub type CliNotepad = Notepad<SlotPersistence<Box<dyn KeyValueStore>>>;

pub struct AppContext<'a> {
    cli: &'a Cli,
    settings: OnceCell<Settings>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            settings: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Whether prompts can be shown.
    pub fn interactive(&self) -> bool {
        std::io::stdin().is_terminal()
    }

    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json, self.cli.no_color)
    }

    /// Get the resolved settings, loading config lazily if needed.
    pub fn settings(&self) -> anyhow::Result<&Settings> {
        self.settings.get_or_try_init(|| resolve_settings(self.cli))
    }

    /// Open the configured key-value store.
    pub fn open_store(&self) -> anyhow::Result<Box<dyn KeyValueStore>> {
        let settings = self.settings()?;
        let store: Box<dyn KeyValueStore> = match settings.backend {
            Backend::File => Box::new(JsonFileStore::open(&settings.store_path)),
            Backend::Sqlite => Box::new(SqliteStore::open(&settings.store_path)?),
        };
        Ok(store)
    }

    /// Open the notepad with the persisted wallet session restored.
    ///
    /// An unreadable stored session is an error here; only the wallet
    /// commands may replace it (see [`AppContext::open_notepad_for_wallet`]).
    pub fn open_notepad(&self) -> anyhow::Result<CliNotepad> {
        let store = self.open_store()?;
        let session = Session::restore(&store)?;
        self.build_notepad(store, session)
    }

    /// Open the notepad for `connect` and `disconnect`, which overwrite the
    /// session. An unreadable stored session counts as disconnected.
    pub fn open_notepad_for_wallet(&self) -> anyhow::Result<CliNotepad> {
        let store = self.open_store()?;
        let session = match Session::restore(&store) {
            Ok(session) => session,
            Err(NotepadError::InvalidAddress(value)) => {
                tracing::warn!(%value, "discarding unreadable wallet session");
                Session::disconnected()
            }
            Err(err) => return Err(err.into()),
        };
        self.build_notepad(store, session)
    }

    fn build_notepad(
        &self,
        store: Box<dyn KeyValueStore>,
        session: Session,
    ) -> anyhow::Result<CliNotepad> {
        let settings = self.settings()?;
        let persistence =
            SlotPersistence::new(store).with_latency(settings.persistence.latency());
        Ok(Notepad::new(persistence, session))
    }

    /// Write the notepad's session back to its store.
    pub fn persist_session(&self, notepad: CliNotepad) -> anyhow::Result<()> {
        let (mut persistence, session) = notepad.into_parts();
        session.persist(persistence.store_mut())?;
        Ok(())
    }
}
