use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::prompt::DEFAULT_CAMERA_COUNT;
use crate::{Error, Result};

/// Environment variable that overrides the store path from the config file
pub const FILE_ENV: &str = "CALIBMAN_FILE";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CalibmanConfig {
    /// Backing store file
    pub file: Option<String>,
    /// Camera count offered by `add`
    pub cameras: Option<usize>,
}

impl CalibmanConfig {
    /// Config written by `calibman init`
    pub fn starter() -> Self {
        Self {
            file: Some(default_store_path().to_string_lossy().to_string()),
            cameras: Some(DEFAULT_CAMERA_COUNT),
        }
    }

    pub fn default_cameras(&self) -> usize {
        self.cameras.unwrap_or(DEFAULT_CAMERA_COUNT)
    }

    /// Store path: `--file` flag, then `CALIBMAN_FILE`, then config, then
    /// `calibrations.yaml`.
    pub fn resolve_store_path(&self, flag: Option<&Path>) -> PathBuf {
        self.resolve_store_path_with(flag, std::env::var(FILE_ENV).ok())
    }

    fn resolve_store_path_with(&self, flag: Option<&Path>, env_value: Option<String>) -> PathBuf {
        if let Some(path) = flag {
            return path.to_path_buf();
        }
        if let Some(value) = env_value.filter(|v| !v.is_empty()) {
            return PathBuf::from(value);
        }
        self.file
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(default_store_path)
    }
}

pub fn default_config_path() -> PathBuf {
    PathBuf::from("calibman.toml")
}

pub fn default_store_path() -> PathBuf {
    PathBuf::from("calibrations.yaml")
}

pub fn load_config(path: Option<&Path>) -> Result<Option<CalibmanConfig>> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path)?;
    let config: CalibmanConfig = toml::from_str(&contents)
        .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
    Ok(Some(config))
}

pub fn write_config(path: &Path, config: &CalibmanConfig, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::Config(format!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        )));
    }

    let contents = toml::to_string_pretty(config).map_err(|e| Error::Config(e.to_string()))?;
    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("calibman.toml"))).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_write_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibman.toml");

        write_config(&path, &CalibmanConfig::starter(), false).unwrap();
        let config = load_config(Some(&path)).unwrap().unwrap();
        assert_eq!(config.file.as_deref(), Some("calibrations.yaml"));
        assert_eq!(config.default_cameras(), 3);
    }

    #[test]
    fn test_write_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibman.toml");

        write_config(&path, &CalibmanConfig::default(), false).unwrap();
        let err = write_config(&path, &CalibmanConfig::starter(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        write_config(&path, &CalibmanConfig::starter(), true).unwrap();
        assert_eq!(load_config(Some(&path)).unwrap().unwrap().cameras, Some(3));
    }

    #[test]
    fn test_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calibman.toml");
        std::fs::write(&path, "cameras = \"three\"\n").unwrap();

        assert!(matches!(load_config(Some(&path)), Err(Error::Config(_))));
    }

    #[test]
    fn test_flag_wins() {
        let config = CalibmanConfig {
            file: Some("from-config.yaml".to_string()),
            cameras: None,
        };
        let path = config.resolve_store_path(Some(Path::new("flag.yaml")));
        assert_eq!(path, PathBuf::from("flag.yaml"));
        assert_eq!(config.default_cameras(), 3);
    }

    #[test]
    fn test_store_path_precedence() {
        let config = CalibmanConfig {
            file: Some("from-config.yaml".to_string()),
            cameras: None,
        };
        let env = || Some("from-env.yaml".to_string());

        let flag = Some(Path::new("flag.yaml"));
        assert_eq!(config.resolve_store_path_with(flag, env()), PathBuf::from("flag.yaml"));
        assert_eq!(config.resolve_store_path_with(None, env()), PathBuf::from("from-env.yaml"));
        assert_eq!(config.resolve_store_path_with(None, Some(String::new())), PathBuf::from("from-config.yaml"));
        assert_eq!(config.resolve_store_path_with(None, None), PathBuf::from("from-config.yaml"));
        assert_eq!(
            CalibmanConfig::default().resolve_store_path_with(None, None),
            default_store_path()
        );
    }

    #[test]
    fn test_store_path_from_env_var() {
        let config = CalibmanConfig {
            file: Some("from-config.yaml".to_string()),
            cameras: None,
        };

        // Only this test touches CALIBMAN_FILE
        unsafe { std::env::set_var(FILE_ENV, "from-env.yaml") };
        let with_env = config.resolve_store_path(None);
        let flag_over_env = config.resolve_store_path(Some(Path::new("flag.yaml")));
        unsafe { std::env::remove_var(FILE_ENV) };
        let without_env = config.resolve_store_path(None);

        assert_eq!(with_env, PathBuf::from("from-env.yaml"));
        assert_eq!(flag_over_env, PathBuf::from("flag.yaml"));
        assert_eq!(without_env, PathBuf::from("from-config.yaml"));
    }
}
