use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use notepad_core::Latency;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotepadConfig {
    pub storage: StorageSection,
    #[serde(default)]
    pub persistence: PersistenceSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSection {
    pub backend: Backend,
    pub path: String,
}

/// Simulated network delay, in milliseconds, for each persistence call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PersistenceSection {
    #[serde(default)]
    pub write_delay_ms: u64,
    #[serde(default)]
    pub read_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    File,
    Sqlite,
}

impl Backend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::File => "file",
            Backend::Sqlite => "sqlite",
        }
    }

    /// Guess the backend from a store path: `.db`, `.sqlite` and `.sqlite3` are SQLite.
    pub fn infer(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("db") | Some("sqlite") | Some("sqlite3") => Backend::Sqlite,
            _ => Backend::File,
        }
    }

    fn default_file_name(&self) -> &'static str {
        match self {
            Backend::File => "notepad.json",
            Backend::Sqlite => "notepad.db",
        }
    }
}

impl NotepadConfig {
    pub fn new(backend: Backend, store_path: PathBuf, persistence: PersistenceSection) -> Self {
        Self {
            storage: StorageSection {
                backend,
                path: store_path.to_string_lossy().to_string(),
            },
            persistence,
        }
    }
}

impl PersistenceSection {
    pub fn latency(&self) -> Latency {
        Latency::from_millis(self.write_delay_ms, self.read_delay_ms)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_path(backend: Backend) -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join(backend.default_file_name()))
}

pub fn read_config(path: &Path) -> anyhow::Result<NotepadConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &NotepadConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(var: &str, fallback: &[&str]) -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(var) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("notepad"));
        }
    }
    let mut path = home_dir()?;
    path.extend(fallback);
    Ok(path.join("notepad"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notepad").join("config.toml");
        let config = NotepadConfig::new(
            Backend::Sqlite,
            dir.path().join("notepad.db"),
            PersistenceSection {
                write_delay_ms: 2000,
                read_delay_ms: 1500,
            },
        );

        write_config(&path, &config).unwrap();
        assert_eq!(read_config(&path).unwrap(), config);
    }

    #[test]
    fn test_persistence_section_is_optional() {
        let config: NotepadConfig =
            toml::from_str("[storage]\nbackend = \"file\"\npath = \"/tmp/n.json\"\n").unwrap();
        assert_eq!(config.persistence, PersistenceSection::default());
        assert_eq!(config.persistence.latency(), Latency::NONE);
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        let parsed: Result<NotepadConfig, _> =
            toml::from_str("[storage]\nbackend = \"redis\"\npath = \"/tmp/n\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_backend_inferred_from_extension() {
        assert_eq!(Backend::infer(Path::new("/tmp/notes.db")), Backend::Sqlite);
        assert_eq!(Backend::infer(Path::new("/tmp/notes.sqlite3")), Backend::Sqlite);
        assert_eq!(Backend::infer(Path::new("/tmp/notes.json")), Backend::File);
        assert_eq!(Backend::infer(Path::new("/tmp/notes")), Backend::File);
    }
}
