use crate::errors::{AppError, AppResult};
use crate::export::report::DEFAULT_REPORT_FILE;
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_store_file")]
    pub store_file: String,
    #[serde(default = "default_report_file")]
    pub report_file: String,
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_institution")]
    pub institution: String,
    /// Enrolled students; used by `summary` when `--strength` is not given.
    #[serde(default)]
    pub class_strength: Option<i64>,
    /// Save the register after every change made from the menu.
    #[serde(default = "default_autosave")]
    pub autosave: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_store_file() -> String {
    Config::config_dir()
        .join("attendance.csv")
        .to_string_lossy()
        .to_string()
}
fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}
fn default_log_file() -> String {
    Config::config_dir()
        .join("rattendance.log")
        .to_string_lossy()
        .to_string()
}
fn default_institution() -> String {
    "Class Register".to_string()
}
fn default_autosave() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_file: default_store_file(),
            report_file: default_report_file(),
            log_file: default_log_file(),
            institution: default_institution(),
            class_strength: None,
            autosave: default_autosave(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rattendance")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rattendance")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rattendance.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    /// An unreadable or malformed file is an error: the CLI refuses to start.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("cannot parse '{}': {}", path.display(), e)))
    }

    pub fn store_path(&self) -> PathBuf {
        expand_tilde(&self.store_file)
    }

    pub fn log_path(&self) -> PathBuf {
        expand_tilde(&self.log_file)
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Initialize configuration directory, config file and empty register.
    ///
    /// `custom_store` (from `--file`) replaces the default register path;
    /// relative names are placed inside the config directory.
    pub fn init_all(custom_store: Option<&str>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let store_path = match custom_store {
            Some(name) => {
                let p = expand_tilde(name);
                if p.is_absolute() { p } else { dir.join(p) }
            }
            None => dir.join("attendance.csv"),
        };

        let config = Config {
            store_file: store_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = config.to_yaml()?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
