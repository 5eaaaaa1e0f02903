use crate::config::toml_config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Environment variables consulted for the credential, in priority order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Resolved generator settings: defaults, then TOML, then environment, then explicit overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorSettings {
    api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
    pub timeout_seconds: Option<u64>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: None,
        }
    }
}

fn usable_key(key: &str) -> Option<String> {
    let key = key.trim();
    (!key.is_empty()).then(|| key.to_string())
}

impl GeneratorSettings {
    pub fn merge_toml(mut self, config: &TomlConfig) -> Self {
        if let Some(key) = config.api_key() {
            self.api_key = Some(key.to_string());
        }
        if let Some(endpoint) = &config.generator.endpoint {
            self.endpoint = endpoint.clone();
        }
        if let Some(model) = &config.generator.model {
            self.model = model.clone();
        }
        if config.generator.timeout_seconds.is_some() {
            self.timeout_seconds = config.generator.timeout_seconds;
        }
        self
    }

    /// Takes the first non-blank credential among [`API_KEY_VARS`].
    pub fn merge_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = API_KEY_VARS
            .iter()
            .filter_map(|name| lookup(name))
            .find_map(|value| usable_key(&value))
        {
            self.api_key = Some(key);
        }
        self
    }

    pub fn with_api_key(mut self, key: Option<&str>) -> Self {
        if let Some(key) = key.and_then(usable_key) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn with_endpoint(mut self, endpoint: Option<&str>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint.to_string();
        }
        self
    }

    pub fn with_model(mut self, model: Option<&str>) -> Self {
        if let Some(model) = model {
            self.model = model.to_string();
        }
        self
    }

    pub fn with_timeout(mut self, timeout_seconds: Option<u64>) -> Self {
        if timeout_seconds.is_some() {
            self.timeout_seconds = timeout_seconds;
        }
        self
    }
}

impl Validate for GeneratorSettings {
    fn validate(&self) -> Result<()> {
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("model", &self.model)?;
        if let Some(timeout) = self.timeout_seconds {
            validation::validate_range("timeout_seconds", timeout, 1, 300)?;
        }
        Ok(())
    }
}

impl ConfigProvider for GeneratorSettings {
    fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn timeout_seconds(&self) -> Option<u64> {
        self.timeout_seconds
    }
}
