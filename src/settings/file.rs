//! Settings file persistence.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid settings file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Serialize(#[from] toml::ser::Error),
}

/// `$PASSGAUGE_CONFIG`, else `$HOME/.config/passgauge/settings.toml`.
pub fn default_path() -> PathBuf {
    if let Ok(path) = env::var("PASSGAUGE_CONFIG")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passgauge/settings.toml")
}

/// Missing file means defaults.
pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(SettingsError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&data).map_err(|source| SettingsError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    let io_err = |source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let data = toml::to_string_pretty(settings)?;
    fs::write(path, data).map_err(io_err)?;
    tracing::debug!(path = %path.display(), "settings saved");
    Ok(())
}
