use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use storefront_bridge::config::Config;
use tokio::{
    fs::{OpenOptions, create_dir_all, read_to_string},
    io::AsyncWriteExt,
};

/// Errors that can occur while loading or resolving application configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to determine the user's configuration or data directories. This
    /// usually occurs when required environment variables are missing (e.g.,
    /// `$HOME` on Unix or `%APPDATA%` on Windows).
    #[error("failed to obtain user's directories")]
    DirectoriesNotFound,
    /// An I/O error occurred while reading or writing the configuration file.
    #[error("failed to read config: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid TOML or does not match the expected structure.
    #[error("failed to deserialize config: {0}")]
    DeserializeError(#[from] toml::de::Error),
    /// Failed to serialize the default configuration to TOML.
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

fn build_project_dirs() -> Result<(PathBuf, PathBuf), ConfigError> {
    match ProjectDirs::from("dev", "pelfox", "storefront") {
        Some(path) => Ok((
            path.config_dir().to_path_buf(),
            path.data_dir().to_path_buf(),
        )),
        None => Err(ConfigError::DirectoriesNotFound),
    }
}

/// Loads the application configuration from disk. Returns the loaded config,
/// as well as path to the data directory.
pub async fn load_config() -> Result<(Config, PathBuf), ConfigError> {
    let (config_dir, data_dir) = build_project_dirs()?;
    let config = load_config_from(&config_dir.join("config.toml")).await?;
    Ok((config, data_dir))
}

/// Reads the configuration at `config_path`, writing the defaults there first
/// if the file does not exist yet.
pub(crate) async fn load_config_from(config_path: &Path) -> Result<Config, ConfigError> {
    log::info!("Loading configuration from {config_path:?}");
    if config_path.exists() {
        let contents = read_to_string(config_path).await?;
        return Ok(toml::from_str(&contents)?);
    }

    let config = Config::default();
    if let Some(parent) = config_path.parent() {
        create_dir_all(parent).await?;
    }

    let contents = toml::to_string_pretty(&config)?;
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(config_path)
        .await?;
    file.write_all(contents.as_bytes()).await?;
    file.sync_all().await?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config_from(&path).await.unwrap();
        assert_eq!(config.storefront.trending_limit, 3);

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("base_url = \"https://fakestoreapi.com\""));
    }

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[storefront]\ntrending_limit = 5\n").unwrap();

        let config = load_config_from(&path).await.unwrap();
        assert_eq!(config.storefront.trending_limit, 5);
    }

    #[tokio::test]
    async fn invalid_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "storefront = [").unwrap();

        assert!(matches!(
            load_config_from(&path).await,
            Err(ConfigError::DeserializeError(_))
        ));
    }
}
