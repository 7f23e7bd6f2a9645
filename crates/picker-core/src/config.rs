use crate::{PickerError, PickerResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Page size used by both lists unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerConfig {
    #[serde(default)]
    pub available_page_size: Option<usize>,
    #[serde(default)]
    pub selected_page_size: Option<usize>,
}

impl PickerConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/widget-picker/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("widget-picker/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("widget-picker\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load from the default location, falling back to defaults on any problem.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(config) = Self::load_from(&config_path) {
                    return config;
                }
            }
        }
        Self::default()
    }

    /// Load from an explicit path, reporting read and parse failures.
    pub fn load_from(path: &Path) -> PickerResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| PickerError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn effective_available_page_size(&self) -> usize {
        self.available_page_size
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn effective_selected_page_size(&self) -> usize {
        self.selected_page_size
            .filter(|&size| size > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
