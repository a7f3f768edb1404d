//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Toml(e) => write!(f, "Parse error: {}", e),
            ConfigError::Json(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Toml(e) => Some(e),
            ConfigError::Json(e) => Some(e),
            ConfigError::Validation(_) => None,
        }
    }
}

/// Source format of a service description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// `.json` files are JSON, anything else is TOML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Format::Json,
            _ => Format::Toml,
        }
    }
}

/// Parse and validate configuration text.
pub fn parse_config(content: &str, format: Format) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = match format {
        Format::Toml => toml::from_str(content).map_err(ConfigError::Toml)?,
        Format::Json => serde_json::from_str(content).map_err(ConfigError::Json)?,
    };

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML or JSON file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    parse_config(&content, Format::from_path(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(Format::from_path(Path::new("service.json")), Format::Json);
        assert_eq!(Format::from_path(Path::new("service.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("service.toml")), Format::Toml);
        assert_eq!(Format::from_path(Path::new("service")), Format::Toml);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("functions = 3", Format::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));

        let err = parse_config("{", Format::Json).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_validation_error_display() {
        let err = parse_config(
            "[[functions]]\nname = \"a\"\n[[functions]]\nname = \"a\"\n",
            Format::Toml,
        )
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: function a is declared more than once"
        );
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/service.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
