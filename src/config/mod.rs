use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_cooldown_seconds")]
    pub cooldown_seconds: i64,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
}

fn default_cooldown_seconds() -> i64 {
    60
}
fn default_separator_char() -> String {
    "-".to_string()
}
fn default_show_weekday() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            cooldown_seconds: default_cooldown_seconds(),
            separator_char: default_separator_char(),
            show_weekday: default_show_weekday(),
        }
    }
}

impl Config {
    /// Platform config directory: `%APPDATA%\timecard` or `~/.timecard`.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            return PathBuf::from(appdata).join("timecard");
        }
        let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".timecard")
    }

    /// The YAML config file inside [`Config::config_dir`].
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timecard.conf")
    }

    /// Default location of the SQLite database.
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("timecard.sqlite")
    }

    /// Table separator as a single character.
    pub fn separator(&self) -> char {
        self.separator_char.chars().next().unwrap_or('-')
    }

    /// Reads the config file; a missing file means plain defaults.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Initialize configuration directory, file, and an empty database.
    /// Test mode leaves the user's config file alone.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;

        let db_path = custom_name
            .map(PathBuf::from)
            .unwrap_or_else(Self::database_file);

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {}", Self::config_file().display());
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        println!("✅ Database:    {}", db_path.display());

        Ok(())
    }
}
