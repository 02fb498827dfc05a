use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseError};
use crate::game::Chip;

/// How the replay binary reports the final board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ParseError::UnknownFormat(s.to_string())),
        }
    }
}

/// Settings for replaying a move sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Color of the first chip dropped
    pub first_chip: Chip,
    pub format: OutputFormat,
    /// Abort on the first rejected move instead of skipping it
    pub stop_on_error: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        ReplayConfig {
            first_chip: Chip::Red,
            format: OutputFormat::Text,
            stop_on_error: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub replay: ReplayConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Read and validate the replay configuration at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text. Missing sections and
    /// keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file means built-in defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            eprintln!(
                "Warning: no replay config at '{}', playing with built-in defaults",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.level.parse::<log::LevelFilter>().is_err() {
            return Err(ConfigError::Validation(format!(
                "logging.level '{}' is not a log filter",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// Render the built-in defaults as a TOML config file.
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.replay.first_chip, Chip::Red);
        assert!(config.replay.stop_on_error);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[replay]
first_chip = "black"
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.replay.first_chip, Chip::Black);
        assert_eq!(config.replay.format, OutputFormat::Text);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.replay.first_chip, Chip::Red);
        assert!(config.replay.stop_on_error);
    }

    #[test]
    fn test_unknown_chip_is_a_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[replay]\nfirst_chip = \"yellow\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_toml_str_validates() {
        let result = AppConfig::from_toml_str("[logging]\nlevel = \"chatty\"\n");
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validation_rejects_bad_level() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config.replay.format, OutputFormat::Text);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[replay]
format = "json"
stop_on_error = false

[logging]
level = "debug"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.replay.format, OutputFormat::Json);
        assert!(!config.replay.stop_on_error);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.replay.first_chip, Chip::Red);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connect_four.toml");
        std::fs::write(&path, "[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml().unwrap();
        assert!(toml_str.contains("[replay]"));
        assert!(toml_str.contains("first_chip = \"red\""));
        let config = AppConfig::from_toml_str(&toml_str).unwrap();
        assert_eq!(config.replay.first_chip, Chip::Red);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::Text.to_string(), "text");
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
