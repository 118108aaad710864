use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    pub logging: LoggingConfig,
    pub source: SourceConfig,
    pub focus: FocusConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceConfig {
    pub backend: String,
    #[serde(default)]
    pub snapshot_path: PathBuf,
    pub command_timeout_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FocusConfig {
    pub raise: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "info".to_string(),
                format: "compact".to_string(),
            },
            source: SourceConfig {
                backend: "auto".to_string(),
                snapshot_path: PathBuf::new(),
                command_timeout_ms: 2000,
            },
            focus: FocusConfig { raise: true },
        }
    }
}

impl Config {
    /// Загрузить конфигурацию: значения по умолчанию, затем TOML-файл
    /// (если он есть), затем переменные окружения `KEYNAV_SECTION__KEY`
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(config_path))
            .merge(Env::prefixed("KEYNAV_").split("__"));

        let config: Config = figment
            .extract()
            .with_context(|| format!("Не удалось загрузить конфигурацию из {:?}", config_path))?;

        // validate() вызывается после наложения флагов командной строки
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        // Валидация настроек логирования
        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => anyhow::bail!("Неверный уровень логирования: {}", self.logging.level),
        }

        match self.logging.format.as_str() {
            "compact" | "full" => {}
            _ => anyhow::bail!("Неверный формат логирования: {}", self.logging.format),
        }

        // Валидация источника окон
        match self.source.backend.as_str() {
            "auto" | "sway" | "x11" | "dry-run" => {}
            "snapshot" => {
                if self.source.snapshot_path.as_os_str().is_empty() {
                    anyhow::bail!("Для backend = \"snapshot\" нужно указать snapshot_path");
                }
            }
            _ => anyhow::bail!("Неверный источник окон: {}", self.source.backend),
        }

        if self.source.command_timeout_ms == 0 {
            anyhow::bail!("command_timeout_ms должно быть больше 0");
        }

        Ok(())
    }

    pub fn command_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.source.command_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut config = Config::default();
        config.logging.level = "verbose".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.source.backend = "wayfire".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.source.command_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_snapshot_backend_requires_path() {
        let mut config = Config::default();
        config.source.backend = "snapshot".to_string();
        assert!(config.validate().is_err());

        config.source.snapshot_path = PathBuf::from("/tmp/layout.json");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/non/existent/keynav.toml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_merges_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nbackend = \"dry-run\"\n\n[focus]\nraise = false").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source.backend, "dry-run");
        assert!(!config.focus.raise);
        assert_eq!(config.source.command_timeout_ms, 2000);
        assert_eq!(config.logging.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_does_not_validate() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[source]\nbackend = \"snapshot\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.source.backend, "snapshot");
        assert!(config.validate().is_err());
    }
}
