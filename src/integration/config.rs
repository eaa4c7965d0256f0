//! Settings of the integral calculator, read from a TOML document:
//! ```toml
//! [integration]
//! variable = "x"
//! notation = "latex"        # or "plain"
//! quadrature_degree = 20
//!
//! [logging]
//! level = "info"            # off, error, warn, info, debug, trace
//! file = "integrals.log"    # optional
//! ```
//! Missing keys keep their defaults.
use crate::integration::error::IntegrationError;
use crate::symbolic::symbolic_typeset::Notation;
use log::LevelFilter;
use std::path::Path;
use std::str::FromStr;
use toml::{Table, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct IntegratorConfig {
    pub variable: String,
    pub notation: Notation,
    /// number of Gauss-Legendre nodes for the numerical fallback of definite integrals
    pub quadrature_degree: usize,
    pub log_level: LevelFilter,
    pub log_file: Option<String>,
}

impl Default for IntegratorConfig {
    fn default() -> Self {
        IntegratorConfig {
            variable: "x".to_string(),
            notation: Notation::Latex,
            quadrature_degree: 20,
            log_level: LevelFilter::Info,
            log_file: None,
        }
    }
}

fn string_value<'a>(table: &'a Table, section: &str, key: &str) -> Result<Option<&'a str>, IntegrationError> {
    match table.get(key) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(IntegrationError::Config(format!(
            "[{}] {} must be a string, found {}",
            section,
            key,
            other.type_str()
        ))),
    }
}

fn section<'a>(document: &'a Table, name: &str) -> Result<Option<&'a Table>, IntegrationError> {
    match document.get(name) {
        None => Ok(None),
        Some(Value::Table(table)) => Ok(Some(table)),
        Some(_) => Err(IntegrationError::Config(format!("[{}] must be a table", name))),
    }
}

impl IntegratorConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, IntegrationError> {
        let document = text.parse::<Table>()?;
        let mut config = IntegratorConfig::default();

        if let Some(integration) = section(&document, "integration")? {
            if let Some(variable) = string_value(integration, "integration", "variable")? {
                let valid = variable.chars().next().is_some_and(|c| c.is_alphabetic())
                    && variable.chars().all(|c| c.is_alphanumeric() || c == '_');
                if !valid {
                    return Err(IntegrationError::Config(format!(
                        "'{}' is not a valid variable name",
                        variable
                    )));
                }
                config.variable = variable.to_string();
            }
            if let Some(notation) = string_value(integration, "integration", "notation")? {
                config.notation = Notation::from_str(notation).map_err(|_| {
                    IntegrationError::Config(format!("unknown notation '{}'", notation))
                })?;
            }
            match integration.get("quadrature_degree") {
                None => {}
                Some(Value::Integer(n)) if *n >= 2 => config.quadrature_degree = *n as usize,
                Some(other) => {
                    return Err(IntegrationError::Config(format!(
                        "[integration] quadrature_degree must be an integer >= 2, found {}",
                        other
                    )));
                }
            }
        }

        if let Some(logging) = section(&document, "logging")? {
            if let Some(level) = string_value(logging, "logging", "level")? {
                config.log_level = LevelFilter::from_str(level).map_err(|_| {
                    IntegrationError::Config(format!("unknown log level '{}'", level))
                })?;
            }
            config.log_file = string_value(logging, "logging", "file")?.map(str::to_string);
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, IntegrationError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            IntegrationError::Config(format!("cannot read {}: {}", path.as_ref().display(), e))
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = IntegratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, IntegratorConfig::default());
        assert_eq!(config.variable, "x");
        assert_eq!(config.notation, Notation::Latex);
        assert_eq!(config.quadrature_degree, 20);
        assert_eq!(config.log_level, LevelFilter::Info);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_full_document() {
        let text = r#"
            [integration]
            variable = "t"
            notation = "plain"
            quadrature_degree = 32

            [logging]
            level = "debug"
            file = "integrals.log"
        "#;
        let config = IntegratorConfig::from_toml_str(text).unwrap();
        assert_eq!(config.variable, "t");
        assert_eq!(config.notation, Notation::Plain);
        assert_eq!(config.quadrature_degree, 32);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.log_file.as_deref(), Some("integrals.log"));
    }

    #[test]
    fn test_invalid_values() {
        let cases = [
            "[integration]\nnotation = \"html\"",
            "[integration]\nvariable = \"2x\"",
            "[integration]\nquadrature_degree = 1",
            "[integration]\nquadrature_degree = \"many\"",
            "[logging]\nlevel = \"loud\"",
            "integration = 3",
            "[integration\nvariable = \"x\"",
        ];
        for text in cases {
            assert!(
                matches!(IntegratorConfig::from_toml_str(text), Err(IntegrationError::Config(_))),
                "{}",
                text
            );
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[integration]\nnotation = \"Plain\"\n[logging]\nlevel = \"warn\"").unwrap();
        let config = IntegratorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.notation, Notation::Plain);
        assert_eq!(config.log_level, LevelFilter::Warn);

        let missing = IntegratorConfig::from_file("no_such_config_file.toml");
        assert!(matches!(missing, Err(IntegrationError::Config(_))));
    }
}
