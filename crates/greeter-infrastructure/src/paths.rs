//! Path resolution for greeter configuration files.

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Path management for greeter.
///
/// ```text
/// ~/.config/greeter/
/// └── config.toml              # Skill configuration
/// ```
pub struct GreeterPaths;

impl GreeterPaths {
    const APP_DIR: &'static str = "greeter";
    const CONFIG_FILE: &'static str = "config.toml";

    /// Returns the greeter configuration directory (`~/.config/greeter/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        let home = dirs::home_dir().ok_or(PathError::HomeDirNotFound)?;
        Ok(home.join(".config").join(Self::APP_DIR))
    }

    /// Returns the path of the configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join(Self::CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_file_location() {
        let path = GreeterPaths::config_file().unwrap();
        assert!(path.ends_with(".config/greeter/config.toml"));
    }
}
