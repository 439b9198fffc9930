use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend origin; API paths and media paths are joined onto it
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://back.ifly.com.uz".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct NotificationConfig {
    /// How long a toast stays on screen
    pub timeout_ms: u32,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { timeout_ms: 3000 }
    }
}

/// Default configuration embedded in the bundle
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "https://back.ifly.com.uz"

[notifications]
timeout_ms = 3000
"#;

/// Load configuration from TOML text
///
/// Uses `source` when given (sections missing from it keep their defaults),
/// otherwise the embedded default.
pub fn load_config(source: Option<&str>) -> anyhow::Result<ConsoleConfig> {
    let text = source.unwrap_or(DEFAULT_CONFIG);
    let mut config: ConsoleConfig = toml::from_str(text)?;
    config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();
    if config.api.base_url.is_empty() {
        anyhow::bail!("api.base_url must not be empty");
    }
    Ok(config)
}

impl ConsoleConfig {
    /// Full URL of an API path such as `/api/product`
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api.base_url, path)
    }

    /// Overrides the backend origin; blank values are ignored
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim().trim_end_matches('/');
        if !base_url.is_empty() {
            self.api.base_url = base_url.to_string();
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = load_config(None).unwrap();
        assert_eq!(config, ConsoleConfig::default());
        assert_eq!(
            config.api_url("/api/product"),
            "https://back.ifly.com.uz/api/product"
        );
    }

    #[test]
    fn test_partial_override() {
        let config = load_config(Some("[api]\nbase_url = \"http://localhost:3000/\"\n")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.notifications.timeout_ms, 3000);
    }

    #[test]
    fn test_invalid_config() {
        assert!(load_config(Some("[api]\nbase_url = \"\"\n")).is_err());
        assert!(load_config(Some("[api\n")).is_err());
    }

    #[test]
    fn test_base_url_override() {
        let config = ConsoleConfig::default().with_base_url("http://localhost:8080/");
        assert_eq!(config.api_url("/api/faq"), "http://localhost:8080/api/faq");
        let config = config.with_base_url("   ");
        assert_eq!(config.api.base_url, "http://localhost:8080");
    }
}
