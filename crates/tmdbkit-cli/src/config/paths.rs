//! Config file location.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};

/// Directory name under the user config root.
const APP_DIR: &str = "tmdbkit";

/// Config file name.
const CONFIG_FILE: &str = "config.toml";

/// Resolves the config file path.
///
/// Lookup order:
/// 1. `{dir}/config.toml` when `dir` is given.
/// 2. `$XDG_CONFIG_HOME/tmdbkit/config.toml` when set to an absolute path.
/// 3. `$HOME/.config/tmdbkit/config.toml`.
///
/// # Errors
///
/// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is usable
/// (when `dir` is `None`).
pub fn resolve_config_path(dir: Option<&PathBuf>) -> Result<PathBuf> {
    let xdg = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    config_path_from(dir.map(PathBuf::as_path), xdg.as_deref(), home.as_deref())
}

fn config_path_from(
    dir: Option<&Path>,
    xdg: Option<&Path>,
    home: Option<&Path>,
) -> Result<PathBuf> {
    if let Some(dir) = dir {
        return Ok(dir.join(CONFIG_FILE));
    }
    // Relative XDG paths are invalid and ignored.
    if let Some(root) = xdg.filter(|root| root.is_absolute()) {
        return Ok(root.join(APP_DIR).join(CONFIG_FILE));
    }
    match home.filter(|home| !home.as_os_str().is_empty()) {
        Some(home) => Ok(home.join(".config").join(APP_DIR).join(CONFIG_FILE)),
        None => bail!("cannot locate config: neither XDG_CONFIG_HOME nor HOME is set"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_dir_wins() {
        // Arrange
        let dir = PathBuf::from("/tmp/tmdbkit-project");

        // Act
        let path = config_path_from(
            Some(dir.as_path()),
            Some(Path::new("/xdg")),
            Some(Path::new("/home/u")),
        )
        .unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/tmp/tmdbkit-project/config.toml"));
    }

    #[test]
    fn test_xdg_config_home() {
        // Arrange & Act
        let path =
            config_path_from(None, Some(Path::new("/xdg")), Some(Path::new("/home/u"))).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/xdg/tmdbkit/config.toml"));
    }

    #[test]
    fn test_relative_xdg_falls_back_to_home() {
        // Arrange & Act
        let path =
            config_path_from(None, Some(Path::new("xdg")), Some(Path::new("/home/u"))).unwrap();

        // Assert
        assert_eq!(path, PathBuf::from("/home/u/.config/tmdbkit/config.toml"));
    }

    #[test]
    fn test_no_home_is_error() {
        // Arrange & Act
        let err = config_path_from(None, None, Some(Path::new(""))).unwrap_err();

        // Assert
        assert!(err.to_string().contains("neither XDG_CONFIG_HOME nor HOME"));
    }

    #[test]
    fn test_resolve_with_dir() {
        // Arrange
        let dir = PathBuf::from("/tmp/tmdbkit-project");

        // Act
        let path = resolve_config_path(Some(&dir)).unwrap();

        // Assert
        assert!(path.ends_with("tmdbkit-project/config.toml"));
    }
}
