use crate::utils::error::{Result, StarwError};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// On-disk configuration. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub upstream: UpstreamSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamSection {
    pub base_url: Option<String>,
    pub collection: Option<String>,
    pub max_pages: Option<u32>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StarwError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StarwError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
bind = "0.0.0.0:8080"

[upstream]
base_url = "https://swapi.dev/api"
collection = "people"
max_pages = 50
timeout_seconds = 10
"#,
        )
        .unwrap();

        assert_eq!(config.server.bind.as_deref(), Some("0.0.0.0:8080"));
        assert_eq!(config.upstream.max_pages, Some(50));
        assert_eq!(config.upstream.timeout_seconds, Some(10));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.server.bind.is_none());
        assert!(config.upstream.base_url.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STARW_TEST_UPSTREAM", "https://swapi.test/api");

        let config = TomlConfig::from_toml_str(
            r#"
[upstream]
base_url = "${STARW_TEST_UPSTREAM}"
"#,
        )
        .unwrap();
        assert_eq!(
            config.upstream.base_url.as_deref(),
            Some("https://swapi.test/api")
        );

        std::env::remove_var("STARW_TEST_UPSTREAM");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = TomlConfig::from_toml_str("[upstream\nbase_url = 1").unwrap_err();
        assert!(matches!(err, StarwError::ConfigError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[upstream]\ncollection = \"people\"\n")
            .unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.upstream.collection.as_deref(), Some("people"));
    }
}
