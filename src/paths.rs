// Platform directory resolution for the editor's config and data files.

use std::io;
use std::path::PathBuf;

/// Directory name under the platform config/data roots
const APP_DIR_NAME: &str = "chartnote";

/// Config directory (created if absent), e.g. ~/.config/chartnote on Linux.
pub fn get_config_dir() -> io::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no platform config directory")
    })?;
    let dir = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Data directory (created if absent), home of the abbreviations database.
pub fn get_data_dir() -> io::Result<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no platform data directory")
    })?;
    let dir = base.join(APP_DIR_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
