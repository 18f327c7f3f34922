use crate::error::{RolodexError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_STORE_FILE: &str = "AddressBook.json";
const DEFAULT_PAGE_SIZE: usize = 10;

/// Configuration for rolodex, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// File name of the address book inside the data directory
    #[serde(default = "default_store_file")]
    pub store_file: String,

    /// Contacts per page for `show page <n>`
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_store_file() -> String {
    DEFAULT_STORE_FILE.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let mut config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        config.page_size = config.page_size.max(1);
        Ok(config)
    }

    pub fn store_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.store_file)
    }
}
