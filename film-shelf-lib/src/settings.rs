//! Persisted user preferences (last directory used for renaming).
//!
//! Stored in `~/.config/film-shelf/settings.toml`:
//!
//! ```toml
//! [rename]
//! last_directory = "/media/movies/incoming"
//! ```
//!
//! A missing or unreadable file simply means "no preference".

use std::io;
use std::path::{Path, PathBuf};

/// Canonical path to the settings file: `~/.config/film-shelf/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("film-shelf").join("settings.toml")
}

/// The last directory chosen for renaming, or an empty string.
pub fn load_last_directory() -> String {
    load_last_directory_from(&settings_path())
}

/// Read `rename.last_directory` from a settings file.
///
/// Absence or corruption falls back to an empty string.
pub fn load_last_directory_from(settings: &Path) -> String {
    let contents = match std::fs::read_to_string(settings) {
        Ok(c) => c,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return String::new(),
        Err(e) => {
            log::warn!("Unable to read {}: {}", settings.display(), e);
            return String::new();
        }
    };
    let doc: toml::Value = match contents.parse() {
        Ok(doc) => doc,
        Err(e) => {
            log::warn!("Ignoring corrupt settings file {}: {}", settings.display(), e);
            return String::new();
        }
    };
    doc.get("rename")
        .and_then(|r| r.get("last_directory"))
        .and_then(|d| d.as_str())
        .unwrap_or_default()
        .to_string()
}

/// Remember `directory` as the last one used.
pub fn save_last_directory(directory: &str) -> io::Result<()> {
    save_last_directory_to(&settings_path(), directory)
}

/// Write `rename.last_directory` into a settings file.
///
/// Uses `toml::Value` for a surgical update so any other tables in the file
/// are preserved. A corrupt existing file is replaced.
pub fn save_last_directory_to(settings: &Path, directory: &str) -> io::Result<()> {
    let mut doc: toml::Value = if let Ok(contents) = std::fs::read_to_string(settings) {
        contents
            .parse()
            .unwrap_or_else(|_| toml::Value::Table(Default::default()))
    } else {
        toml::Value::Table(Default::default())
    };

    let table = doc
        .as_table_mut()
        .ok_or_else(|| io::Error::other("settings.toml root is not a table"))?;
    let rename = table
        .entry("rename")
        .or_insert_with(|| toml::Value::Table(Default::default()));
    let rename_table = rename
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[rename] is not a table"))?;
    rename_table.insert(
        "last_directory".to_string(),
        toml::Value::String(directory.to_string()),
    );

    // Write atomically
    if let Some(parent) = settings.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    let tmp = settings.with_extension("toml.tmp");
    std::fs::write(&tmp, &serialized)?;
    std::fs::rename(&tmp, settings)?;

    Ok(())
}
