use std::env;

pub const DEFAULT_BASE_URL: &str = "https://api.runware.ai/v1";

#[derive(Clone)]
pub struct RunwareConfig {
    pub api_key: Option<String>,
    pub base_url: String,
}

impl Default for RunwareConfig {
    fn default() -> Self {
        RunwareConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

// The api key stays out of debug output.
impl std::fmt::Debug for RunwareConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunwareConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl RunwareConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let api_key = env::var("RUNWARE_API_KEY").ok().filter(|k| !k.is_empty());
        let base_url = env::var("RUNWARE_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        RunwareConfig { api_key, base_url }
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_v1() {
        let config = RunwareConfig::new();
        assert_eq!(config.base_url, "https://api.runware.ai/v1");
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_debug_hides_api_key() {
        let config = RunwareConfig::new().with_api_key("secret-key");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
