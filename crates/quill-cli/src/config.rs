use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Keyring service name used when the config does not override it.
pub const DEFAULT_KEYRING_SERVICE: &str = "quill";

#[derive(Debug, Serialize, Deserialize)]
pub struct QuillConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub secret_store: SecretStoreSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    /// Directory holding the encrypted notes and index
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SecretStoreSection {
    /// Keyring service name for the salt and probe slots
    pub service: String,
}

impl Default for SecretStoreSection {
    fn default() -> Self {
        Self {
            service: DEFAULT_KEYRING_SERVICE.to_string(),
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_notes_dir() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("notes"))
}

pub fn read_config(path: &Path) -> anyhow::Result<QuillConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &QuillConfig) -> anyhow::Result<()> {
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
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("quill"));
        }
    }
    Ok(home_dir()?.join(".config").join("quill"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("quill"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("quill"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
