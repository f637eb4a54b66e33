//! Environment-driven configuration
//!
//! Every setting has a default except the narration credentials; a provider
//! whose credential is missing is simply left out of the narration chain.

use std::time::Duration;

use crate::error::{AnalystError, Result};
use crate::{
    FEED_URL_ENV_VAR, GEMINI_KEY_ENV_VAR, GEMINI_MODEL_ENV_VAR, GEMINI_URL_ENV_VAR,
    HF_MODEL_ENV_VAR, HF_TOKEN_ENV_VAR, HF_URL_ENV_VAR, TIMEOUT_ENV_VAR,
};

/// StatsBomb open data, served straight from GitHub.
pub const DEFAULT_FEED_URL: &str =
    "https://raw.githubusercontent.com/statsbomb/open-data/master/data";
pub const DEFAULT_GEMINI_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_HF_URL: &str = "https://api-inference.huggingface.co";
pub const DEFAULT_HF_MODEL: &str = "gpt2";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuggingFaceConfig {
    pub token: Option<String>,
    pub model: String,
    pub base_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub feed_url: String,
    pub timeout: Duration,
    pub gemini: GeminiConfig,
    pub hugging_face: HuggingFaceConfig,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let timeout_secs = match var(TIMEOUT_ENV_VAR) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| AnalystError::Config {
                message: format!("{TIMEOUT_ENV_VAR}={raw}: {e}"),
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            feed_url: trim_base(var(FEED_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_FEED_URL.into())),
            timeout: Duration::from_secs(timeout_secs),
            gemini: GeminiConfig {
                api_key: var(GEMINI_KEY_ENV_VAR),
                model: var(GEMINI_MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_GEMINI_MODEL.into()),
                base_url: trim_base(
                    var(GEMINI_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_GEMINI_URL.into()),
                ),
            },
            hugging_face: HuggingFaceConfig {
                token: var(HF_TOKEN_ENV_VAR),
                model: var(HF_MODEL_ENV_VAR).unwrap_or_else(|| DEFAULT_HF_MODEL.into()),
                base_url: trim_base(var(HF_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_HF_URL.into())),
            },
        })
    }
}

fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.feed_url, DEFAULT_FEED_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.gemini.api_key, None);
        assert_eq!(config.gemini.model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.hugging_face.token, None);
        assert_eq!(config.hugging_face.model, DEFAULT_HF_MODEL);
    }

    #[test]
    fn test_overrides_and_trailing_slash() {
        let config = Config::from_lookup(lookup_from(&[
            (FEED_URL_ENV_VAR, "http://localhost:9000/data/"),
            (GEMINI_KEY_ENV_VAR, "key-123"),
            (HF_TOKEN_ENV_VAR, "hf_abc"),
            (HF_MODEL_ENV_VAR, "distilgpt2"),
            (TIMEOUT_ENV_VAR, "5"),
        ]))
        .unwrap();

        assert_eq!(config.feed_url, "http://localhost:9000/data");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.gemini.api_key.as_deref(), Some("key-123"));
        assert_eq!(config.hugging_face.token.as_deref(), Some("hf_abc"));
        assert_eq!(config.hugging_face.model, "distilgpt2");
    }

    #[test]
    fn test_blank_credentials_are_unset() {
        let config = Config::from_lookup(lookup_from(&[(GEMINI_KEY_ENV_VAR, "   ")])).unwrap();
        assert_eq!(config.gemini.api_key, None);
    }

    #[test]
    fn test_invalid_timeout_is_a_config_error() {
        let result = Config::from_lookup(lookup_from(&[(TIMEOUT_ENV_VAR, "soon")]));

        match result {
            Err(AnalystError::Config { message }) => assert!(message.contains("soon")),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
