use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub view: ViewConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    pub title: String,
    pub empty_message: String,
    pub search_placeholder: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

impl LoggingConfig {
    /// Уровень логирования, при неизвестном значении Debug
    pub fn log_level(&self) -> log::Level {
        self.level.parse().unwrap_or(log::Level::Debug)
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[view]
title = "Product Categories"
empty_message = "No products matching selected criteria"
search_placeholder = "Search"

[logging]
level = "debug"
"#;

/// Load the embedded configuration
///
/// The view has no file system or server to read overrides from, so the
/// embedded TOML is the only source.
pub fn load_config() -> Result<Config, toml::de::Error> {
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config();
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.view.title, "Product Categories");
        assert_eq!(
            config.view.empty_message,
            "No products matching selected criteria"
        );
        assert_eq!(config.logging.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_log_level_parsing() {
        let config = parse_config(
            r#"
[view]
title = "T"
empty_message = "E"
search_placeholder = "S"

[logging]
level = "WARN"
"#,
        )
        .unwrap();
        assert_eq!(config.logging.log_level(), log::Level::Warn);

        let fallback = LoggingConfig {
            level: "loud".to_string(),
        };
        assert_eq!(fallback.log_level(), log::Level::Debug);
    }

    #[test]
    fn test_missing_section_is_error() {
        assert!(parse_config("[view]\ntitle = \"T\"\n").is_err());
    }
}
