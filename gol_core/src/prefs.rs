// prefs.rs - Persisted client preferences (only the theme flag today)

use crate::theme::Theme;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Key the theme flag is stored under.
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("preference file {path}: {source}")]
    Io { path: String, source: std::io::Error },
    #[error("preference file is not valid TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not encode preferences: {0}")]
    Encode(#[from] toml::ser::Error),
}

/// String key/value store that outlives the process.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

/// Process-lifetime store, for tests and hosts without a disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Keeps all preferences as one flat TOML table in a single file.
///
/// The file is re-read on every `get`, and `set` writes a sibling temp file
/// then renames it over the original.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_table(&self) -> Result<BTreeMap<String, String>, PreferenceError> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(toml::from_str(&text)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(self.io_error(source)),
        }
    }

    fn io_error(&self, source: std::io::Error) -> PreferenceError {
        PreferenceError::Io { path: self.path.display().to_string(), source }
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        Ok(self.read_table()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut table = self.read_table()?;
        table.insert(key.to_owned(), value.to_owned());
        let text = toml::to_string(&table)?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, text).map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))
    }
}

/// Stored theme, falling back to [`Theme::Dark`] when nothing usable is stored.
pub fn load_theme(store: &impl PreferenceStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(Some(raw)) => raw.parse::<Theme>().unwrap_or_else(|err| {
            warn!(%err, "ignoring stored theme");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(err) => {
            warn!(%err, "could not read stored theme");
            Theme::default()
        }
    }
}

/// Flips `current`, persists the result and returns it.
pub fn toggle_theme(store: &mut impl PreferenceStore, current: Theme) -> Result<Theme, PreferenceError> {
    let next = current.toggled();
    store.set(THEME_KEY, next.as_str())?;
    Ok(next)
}
