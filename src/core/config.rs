//! Show or edit the configuration file.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::env;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    /// Prints the loaded configuration as YAML, defaults filled in.
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("{}", yaml);
        Ok(())
    }

    /// Opens the config file in an editor. `--editor` wins, then
    /// `$EDITOR` / `$VISUAL`, then the platform fallback. If the chosen
    /// editor cannot be started the fallback gets one try.
    pub fn edit(path: &str, editor: Option<&str>) -> AppResult<()> {
        let fallback = default_editor();
        let chosen = editor
            .map(str::to_string)
            .or_else(|| env::var("EDITOR").ok())
            .or_else(|| env::var("VISUAL").ok())
            .unwrap_or_else(|| fallback.clone());

        match Command::new(&chosen).arg(path).status() {
            Ok(status) if status.success() => Ok(()),
            _ if chosen != fallback => {
                eprintln!(
                    "⚠️  Editor '{}' not available, falling back to '{}'",
                    chosen, fallback
                );
                let status = Command::new(&fallback)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "editor '{}' exited with an error",
                        fallback
                    )))
                }
            }
            Ok(_) => Err(AppError::Config(format!(
                "editor '{}' exited with an error",
                chosen
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}

fn default_editor() -> String {
    if cfg!(target_os = "windows") {
        "notepad".to_string()
    } else {
        "nano".to_string()
    }
}
