//! Path resolution for the config file and the store.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{
    default_config_path, default_store_path, read_config, Backend, NotepadConfig,
    PersistenceSection,
};
use crate::constants::env;

/// Where notes live and how slow persistence pretends to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub config_path: PathBuf,
    /// Whether `config_path` existed and was read
    pub from_config: bool,
    pub backend: Backend,
    pub store_path: PathBuf,
    pub persistence: PersistenceSection,
}

/// Resolve the config file path, checking NOTEPAD_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(env::CONFIG) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

pub(crate) fn resolve_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let config_path = resolve_config_path()?;
    let config = if config_path.exists() {
        Some(read_config(&config_path)?)
    } else {
        None
    };
    let settings = settings_from(cli.store.as_deref(), config_path, config)?;
    tracing::debug!(
        backend = settings.backend.as_str(),
        store = %settings.store_path.display(),
        from_config = settings.from_config,
        "settings resolved"
    );
    Ok(settings)
}

/// `--store` wins over the config file, and the config file over the XDG
/// default. A `--store` path picks its backend from its extension.
fn settings_from(
    store_flag: Option<&str>,
    config_path: PathBuf,
    config: Option<NotepadConfig>,
) -> anyhow::Result<Settings> {
    let from_config = config.is_some();
    let persistence = config
        .as_ref()
        .map(|config| config.persistence)
        .unwrap_or_default();

    let (backend, store_path) = match (store_flag, config) {
        (Some(flag), _) => {
            let path = PathBuf::from(flag);
            (Backend::infer(&path), path)
        }
        (None, Some(config)) => (config.storage.backend, PathBuf::from(config.storage.path)),
        (None, None) => (Backend::File, default_store_path(Backend::File)?),
    };

    Ok(Settings {
        config_path,
        from_config,
        backend,
        store_path,
        persistence,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sqlite_config() -> NotepadConfig {
        NotepadConfig::new(
            Backend::Sqlite,
            PathBuf::from("/data/notepad.db"),
            PersistenceSection {
                write_delay_ms: 2000,
                read_delay_ms: 1500,
            },
        )
    }

    #[test]
    fn test_config_used_without_flag() {
        let settings =
            settings_from(None, PathBuf::from("/c/config.toml"), Some(sqlite_config())).unwrap();
        assert!(settings.from_config);
        assert_eq!(settings.backend, Backend::Sqlite);
        assert_eq!(settings.store_path, PathBuf::from("/data/notepad.db"));
        assert_eq!(settings.persistence.write_delay_ms, 2000);
    }

    #[test]
    fn test_store_flag_overrides_config_path() {
        let settings = settings_from(
            Some("/tmp/other.json"),
            PathBuf::from("/c/config.toml"),
            Some(sqlite_config()),
        )
        .unwrap();
        assert_eq!(settings.backend, Backend::File);
        assert_eq!(settings.store_path, PathBuf::from("/tmp/other.json"));
        assert_eq!(settings.persistence.read_delay_ms, 1500);
    }

    #[test]
    fn test_store_flag_without_config() {
        let settings =
            settings_from(Some("/tmp/notes.db"), PathBuf::from("/c/config.toml"), None).unwrap();
        assert!(!settings.from_config);
        assert_eq!(settings.backend, Backend::Sqlite);
        assert_eq!(settings.persistence, PersistenceSection::default());
    }
}
