use crate::api::RofiWebApi;
use crate::config::{RofiWebConfig, CONFIG_FILENAME, FG_COLOR_ENV};
use crate::error::{RofiWebError, Result};
use crate::store::fs::{FileStore, METADATA_FILENAME};
use directories::BaseDirs;
use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "ROFI_WEB_CONFIG_DIR";

const APP_DIR_NAME: &str = "rofi-web";

pub struct RofiWebContext {
    pub api: RofiWebApi<FileStore>,
}

/// Paths explicitly requested on the command line.
#[derive(Debug, Default, Clone)]
pub struct PathOverrides {
    pub config_file: Option<PathBuf>,
    pub metadata_file: Option<PathBuf>,
}

/// `$ROFI_WEB_CONFIG_DIR`, or `rofi-web` under the user's config directory.
pub fn config_dir(env_override: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(dir) = env_override.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().join(APP_DIR_NAME))
        .ok_or_else(|| RofiWebError::Config("Could not determine user config dir".to_string()))
}

/// Creates `path` as an empty file unless something already exists there.
///
/// Uses exclusive creation so a concurrent first run never truncates a file
/// another process just wrote. Returns whether the file was created.
pub fn create_if_absent(path: &Path) -> Result<bool> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => {
            log::info!("Created {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.into()),
    }
}

pub fn initialize(overrides: PathOverrides) -> Result<RofiWebContext> {
    let dir = config_dir(std::env::var_os(CONFIG_DIR_ENV).map(PathBuf::from))?;

    let config_path = match overrides.config_file {
        Some(path) => path,
        None => {
            let path = dir.join(CONFIG_FILENAME);
            create_if_absent(&path)?;
            path
        }
    };
    let metadata_path = match overrides.metadata_file {
        Some(path) => path,
        None => {
            let path = dir.join(METADATA_FILENAME);
            create_if_absent(&path)?;
            path
        }
    };

    if config_path.exists() {
        log::info!("Using config file: {}", config_path.display());
    } else {
        log::warn!("Config file {} not found, using defaults", config_path.display());
    }
    log::info!("Using metadata file: {}", metadata_path.display());

    let config = RofiWebConfig::load(&config_path)?
        .with_fg_color_override(std::env::var(FG_COLOR_ENV).ok());

    let store = FileStore::new(metadata_path);
    let api = RofiWebApi::new(store, config);

    Ok(RofiWebContext { api })
}
