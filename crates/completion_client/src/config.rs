use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_TEMPERATURE: f64 = 0.7;
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

const CONFIG_FILE_PATH: &str = "config.toml";

/// Upstream completion service settings.
///
/// Loaded once at process start and handed to the client; nothing reads the
/// environment after that.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub model: String,
    pub temperature: f64,
    pub timeout_secs: u64,
    pub http_proxy: String,
    pub https_proxy: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_base: DEFAULT_API_BASE.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            http_proxy: String::new(),
            https_proxy: String::new(),
        }
    }
}

impl Config {
    /// Reads `config.toml` from the working directory when present, then
    /// applies environment overrides.
    pub fn new() -> Self {
        let config = Self::from_file(Path::new(CONFIG_FILE_PATH)).unwrap_or_default();
        config.with_overrides(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return None;
            }
        };
        match toml::from_str::<Config>(&content) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Applies overrides from `lookup`, which maps a variable name to its value.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(api_key) = lookup("OPENAI_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(api_key.trim().to_string());
        }
        if let Some(api_base) = lookup("OPENAI_API_BASE").filter(|v| !v.trim().is_empty()) {
            self.api_base = api_base.trim().to_string();
        }
        if let Some(model) = lookup("OPENAI_MODEL").filter(|v| !v.trim().is_empty()) {
            self.model = model.trim().to_string();
        }
        if let Some(temperature) = lookup("OPENAI_TEMPERATURE") {
            match temperature.trim().parse::<f64>() {
                Ok(value) => self.temperature = value,
                Err(_) => log::warn!("Ignoring invalid OPENAI_TEMPERATURE: {temperature:?}"),
            }
        }
        if let Some(timeout) = lookup("OPENAI_TIMEOUT_SECS") {
            match timeout.trim().parse::<u64>() {
                Ok(value) if value > 0 => self.timeout_secs = value,
                _ => log::warn!("Ignoring invalid OPENAI_TIMEOUT_SECS: {timeout:?}"),
            }
        }
        if let Some(http_proxy) = lookup("HTTP_PROXY") {
            self.http_proxy = http_proxy;
        }
        if let Some(https_proxy) = lookup("HTTPS_PROXY") {
            self.https_proxy = https_proxy;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn chat_completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_base.trim_end_matches('/'))
    }
}
