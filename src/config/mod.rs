use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Actor recorded on events when `--actor` is not given.
    #[serde(default = "default_actor")]
    pub default_actor: String,
    /// Trailing window length for the regularity report, in days.
    /// Kept configurable so short windows can be used in tests.
    #[serde(default = "default_window_days")]
    pub regularity_window_days: u32,
}

fn default_actor() -> String {
    "user".to_string()
}

fn default_window_days() -> u32 {
    14
}

impl Default for Config {
    fn default() -> Self {
        let db_path = Self::database_file();
        Self {
            database: db_path.to_string_lossy().to_string(),
            default_actor: default_actor(),
            regularity_window_days: default_window_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("pawlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".pawlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("pawlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("pawlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)
        } else {
            Ok(Config::default())
        }
    }

    /// Persist the configuration as YAML, creating the directory if needed
    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir()).map_err(|_| AppError::ConfigSave)?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(Self::config_file(), yaml).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Prepare the configuration for `init`: apply the optional DB override
    /// and write the config file (skipped in test mode, where tests supply
    /// `--db` on every invocation instead).
    pub fn init_all(custom_db: Option<String>, test_mode: bool) -> AppResult<Self> {
        let mut cfg = Self::load()?;

        if let Some(db) = custom_db {
            cfg.database = db;
        }

        if !test_mode {
            cfg.save()?;
        }

        Ok(cfg)
    }

    /// Report missing or odd values without fixing anything.
    pub fn check(&self) -> Vec<String> {
        let mut issues = Vec::new();
        if self.database.trim().is_empty() {
            issues.push("`database` is empty".to_string());
        }
        if self.default_actor.trim().is_empty() {
            issues.push("`default_actor` is empty".to_string());
        }
        if self.regularity_window_days == 0 {
            issues.push("`regularity_window_days` must be at least 1".to_string());
        }
        issues
    }
}
