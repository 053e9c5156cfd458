use crate::error::{BmError, Result};
use crate::import_export::browser::BrowserType;
use crate::import_export::export::DEFAULT_TITLE;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Bookmarks file to read when none is given on the command line
    #[serde(default)]
    pub input: Option<PathBuf>,

    /// Browser whose default bookmarks file is used when no input path is set
    #[serde(default)]
    pub browser: Option<String>,

    /// Title of the generated HTML document
    #[serde(default = "default_title")]
    pub title: String,

    /// Output format: html, outline or json
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: None,
            browser: None,
            title: default_title(),
            format: default_format(),
        }
    }
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_format() -> String {
    "html".to_string()
}

impl Config {
    /// Load configuration from a file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| BmError::at_path(path, e))?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from the default location
    /// (`$XDG_CONFIG_HOME/bmhtml/config.yml`, else the platform config dir)
    pub fn load() -> Self {
        Self::load_from_dir(&crate::utils::get_config_dir())
    }

    /// Load `config.yml` from `dir`, falling back to defaults when it is
    /// missing or unreadable
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join("config.yml");

        if config_path.exists() {
            match Self::load_from_path(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(
                        "Failed to load config from {:?}: {}; using default configuration",
                        config_path, e
                    );
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| BmError::at_path(parent, e))?;
        }

        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml).map_err(|e| BmError::at_path(path, e))?;
        Ok(())
    }

    /// Pick the bookmarks file to read.
    ///
    /// An explicit `input` wins, then the configured input, then the default
    /// file of `browser` (or the configured browser, or Opera) under `home`.
    pub fn resolve_input(
        &self,
        input: Option<&Path>,
        browser: Option<&str>,
        home: Option<&Path>,
    ) -> Result<PathBuf> {
        if let Some(path) = input.or(self.input.as_deref()) {
            return Ok(path.to_path_buf());
        }

        let browser = match browser.or(self.browser.as_deref()) {
            Some(name) => BrowserType::from_string(name)
                .ok_or_else(|| BmError::Browser(format!("Unknown browser: {}", name)))?,
            None => BrowserType::Opera,
        };

        let home = home.ok_or_else(|| {
            BmError::Config("cannot determine the home directory; pass an input file".into())
        })?;

        Ok(browser.bookmarks_path_in(home))
    }
}
