use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Main store: participants + entry logs.
    pub database: String,
    /// Validator-owned audit store read by export/clear. Never created here.
    pub history_database: String,
    /// External validation script invoked once per validate call.
    pub validator_script: String,
    #[serde(default = "default_interpreter")]
    pub interpreter: String,
    #[serde(default = "default_terminal_id")]
    pub terminal_id: String,
    #[serde(default)]
    pub event_name: String,
    #[serde(default)]
    pub min_seq: i64,
    #[serde(default)]
    pub check_event: bool,
    #[serde(default)]
    pub check_seq: bool,
}

fn default_interpreter() -> String {
    "python3".to_string()
}
fn default_terminal_id() -> String {
    "PC-01".to_string()
}

impl Default for Config {
    fn default() -> Self {
        let dir = Self::config_dir();
        Self {
            database: dir.join("qrgate.sqlite").to_string_lossy().to_string(),
            history_database: dir.join("attendance.db").to_string_lossy().to_string(),
            validator_script: dir.join("validator.py").to_string_lossy().to_string(),
            interpreter: default_interpreter(),
            terminal_id: default_terminal_id(),
            event_name: String::new(),
            min_seq: 0,
            check_event: false,
            check_seq: false,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("qrgate")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".qrgate")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("qrgate.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
        } else {
            Ok(Config::default())
        }
    }

    /// Initialize the configuration directory and file.
    /// Test mode skips writing the config file so test runs never touch
    /// the user's real configuration.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<Config> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let mut config = Config::default();
        if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            config.database = if p.is_absolute() {
                p.to_string_lossy().to_string()
            } else {
                dir.join(p).to_string_lossy().to_string()
            };
        }

        if !is_test {
            let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        Ok(config)
    }
}
