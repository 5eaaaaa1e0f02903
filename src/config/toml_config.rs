use crate::utils::error::{OracleError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub generator: GeneratorSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratorSection {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OracleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OracleError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})
    ///
    /// Unset variables are left as written, except inside `api_key`, where an unresolved
    /// placeholder would otherwise be sent as a credential.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OracleError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The configured key, unless blank or still an unresolved `${...}` placeholder.
    pub fn api_key(&self) -> Option<&str> {
        self.generator
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty() && !(key.starts_with("${") && key.ends_with('}')))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(endpoint) = &self.generator.endpoint {
            crate::utils::validation::validate_url("generator.endpoint", endpoint)?;
        }
        if let Some(model) = &self.generator.model {
            crate::utils::validation::validate_non_empty_string("generator.model", model)?;
        }
        if let Some(timeout) = self.generator.timeout_seconds {
            crate::utils::validation::validate_range("generator.timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_generator_section() {
        let toml_content = r#"
[generator]
api_key = "abc"
endpoint = "https://example.com"
model = "gemini-2.5-pro"
timeout_seconds = 20
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.api_key(), Some("abc"));
        assert_eq!(config.generator.model.as_deref(), Some("gemini-2.5-pro"));
        assert_eq!(config.generator.timeout_seconds, Some(20));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = TomlConfig::from_toml_str("").unwrap();
        assert!(config.api_key().is_none());
        assert!(config.generator.endpoint.is_none());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ABRAJ_TEST_KEY", "from-env");

        let toml_content = r#"
[generator]
api_key = "${ABRAJ_TEST_KEY}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.api_key(), Some("from-env"));

        std::env::remove_var("ABRAJ_TEST_KEY");
    }

    #[test]
    fn test_unresolved_key_placeholder_counts_as_absent() {
        let toml_content = r#"
[generator]
api_key = "${ABRAJ_TEST_KEY_THAT_IS_NEVER_SET}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.api_key().is_none());
    }

    #[test]
    fn test_config_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[generator]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = TomlConfig::from_toml_str(
            r#"
[generator]
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        assert!(matches!(
            TomlConfig::from_toml_str("[generator\napi_key = 1"),
            Err(OracleError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[generator]
model = "file-model"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.generator.model.as_deref(), Some("file-model"));
    }
}
