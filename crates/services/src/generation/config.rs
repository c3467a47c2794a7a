use std::env;
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

pub const ENV_PROVIDER: &str = "STUDY_AI_PROVIDER";
pub const ENV_API_KEY: &str = "STUDY_AI_API_KEY";
pub const ENV_BASE_URL: &str = "STUDY_AI_BASE_URL";
pub const ENV_MODEL: &str = "STUDY_AI_MODEL";
pub const ENV_TEMPERATURE: &str = "STUDY_AI_TEMPERATURE";

const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Which wire format the generation backend speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiProvider {
    /// Google Generative Language `generateContent`.
    #[default]
    Gemini,
    /// Any OpenAI-compatible `/chat/completions` endpoint.
    OpenAi,
}

impl AiProvider {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini",
            AiProvider::OpenAi => "openai",
        }
    }

    #[must_use]
    pub fn default_base_url(self) -> &'static str {
        match self {
            AiProvider::Gemini => "https://generativelanguage.googleapis.com/v1beta",
            AiProvider::OpenAi => "https://api.openai.com/v1",
        }
    }

    #[must_use]
    pub fn default_model(self) -> &'static str {
        match self {
            AiProvider::Gemini => "gemini-1.5-flash",
            AiProvider::OpenAi => "gpt-4o-mini",
        }
    }
}

impl FromStr for AiProvider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gemini" | "google" => Ok(Self::Gemini),
            "openai" | "openai-compatible" => Ok(Self::OpenAi),
            other => Err(ConfigError::UnknownProvider(other.to_string())),
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct AiConfig {
    pub provider: AiProvider,
    pub base_url: String,
    pub api_key: String,
    pub model: String,
    pub temperature: f32,
}

impl fmt::Debug for AiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AiConfig")
            .field("provider", &self.provider)
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl AiConfig {
    #[must_use]
    pub fn new(provider: AiProvider, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            base_url: provider.default_base_url().to_string(),
            api_key: api_key.into(),
            model: provider.default_model().to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    /// Read settings from the process environment.
    ///
    /// Returns `Ok(None)` when no API key is set, which leaves generation disabled.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a provider or temperature value cannot be parsed.
    pub fn from_env() -> Result<Option<Self>, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`AiConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when a provider or temperature value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Option<Self>, ConfigError> {
        let value = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let Some(api_key) = value(ENV_API_KEY) else {
            return Ok(None);
        };
        let provider = value(ENV_PROVIDER)
            .map(|raw| raw.parse::<AiProvider>())
            .transpose()?
            .unwrap_or_default();

        let mut config = Self::new(provider, api_key.trim());
        if let Some(base_url) = value(ENV_BASE_URL) {
            config.base_url = base_url.trim().to_string();
        }
        if let Some(model) = value(ENV_MODEL) {
            config.model = model.trim().to_string();
        }
        if let Some(raw) = value(ENV_TEMPERATURE) {
            let parsed = raw
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|t| (0.0..=2.0).contains(t));
            config.temperature = parsed.ok_or(ConfigError::InvalidTemperature(raw))?;
        }

        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn missing_key_disables_generation() {
        assert_eq!(AiConfig::from_lookup(lookup(&[])).unwrap(), None);
        assert_eq!(
            AiConfig::from_lookup(lookup(&[(ENV_API_KEY, "   ")])).unwrap(),
            None
        );
    }

    #[test]
    fn defaults_to_gemini() {
        let config = AiConfig::from_lookup(lookup(&[(ENV_API_KEY, "k")]))
            .unwrap()
            .unwrap();
        assert_eq!(config.provider, AiProvider::Gemini);
        assert_eq!(config.model, "gemini-1.5-flash");
        assert_eq!(config.base_url, AiProvider::Gemini.default_base_url());
    }

    #[test]
    fn overrides_apply() {
        let config = AiConfig::from_lookup(lookup(&[
            (ENV_API_KEY, "k"),
            (ENV_PROVIDER, "OpenAI"),
            (ENV_BASE_URL, "http://localhost:11434/v1"),
            (ENV_MODEL, "llama3"),
            (ENV_TEMPERATURE, "0.2"),
        ]))
        .unwrap()
        .unwrap();
        assert_eq!(config.provider, AiProvider::OpenAi);
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
        assert!((config.temperature - 0.2).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_bad_values() {
        let err = AiConfig::from_lookup(lookup(&[(ENV_API_KEY, "k"), (ENV_PROVIDER, "bard")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::UnknownProvider("bard".into()));

        let err = AiConfig::from_lookup(lookup(&[(ENV_API_KEY, "k"), (ENV_TEMPERATURE, "hot")]))
            .unwrap_err();
        assert_eq!(err, ConfigError::InvalidTemperature("hot".into()));
    }

    #[test]
    fn debug_output_hides_key() {
        let config = AiConfig::new(AiProvider::OpenAi, "sk-secret");
        assert!(!format!("{config:?}").contains("sk-secret"));
    }
}
