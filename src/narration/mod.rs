//! Match narration through external text-generation services
//!
//! The prompt is built deterministically from the match summary and a style.
//! Generators are tried once each, in rank order, until one answers; when none
//! does, the caller gets an explanatory message instead of an error.

pub mod gemini;
pub mod huggingface;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::fmt;
use tracing::{info, warn};

use crate::analysis::MatchSummary;
use crate::core::Config;
use crate::{NarrationStyle, GEMINI_KEY_ENV_VAR, HF_TOKEN_ENV_VAR};

pub use gemini::GeminiClient;
pub use huggingface::HuggingFaceClient;


/// Paragraph cap written into every prompt
pub const MAX_PARAGRAPHS: u32 = 3;

/// A service that turns a prompt into text
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Provider name for logging and reporting
    fn name(&self) -> &str;

    async fn generate(&self, prompt: &str) -> anyhow::Result<String>;
}

/// Prompt asking for a narration of `summary` in `style`.
pub fn build_prompt(summary: &MatchSummary, style: NarrationStyle) -> String {
    let events = match summary {
        MatchSummary::Events(_) => format!("Key match events:\n\n{}", summary.render()),
        MatchSummary::NoNotableEvents => summary.render(),
    };

    format!(
        "Generate a narration {} for this football match:\n\n{}\n\nLimit the narration to {} paragraphs.",
        style.instruction(),
        events,
        MAX_PARAGRAPHS
    )
}

/// Outcome of a narration request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Narration {
    Generated { provider: String, text: String },
    Unavailable { message: String },
}

impl Narration {
    pub fn is_generated(&self) -> bool {
        matches!(self, Narration::Generated { .. })
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Narration::Generated { text, .. } => f.write_str(text),
            Narration::Unavailable { message } => f.write_str(message),
        }
    }
}

/// Ranked list of text generators
pub struct Narrator {
    generators: Vec<Box<dyn TextGenerator>>,
}

impl Narrator {
    pub fn new(generators: Vec<Box<dyn TextGenerator>>) -> Self {
        Self { generators }
    }

    /// Gemini first, then Hugging Face; a service without credentials is left out.
    pub fn from_config(config: &Config, client: Client) -> Self {
        let mut generators: Vec<Box<dyn TextGenerator>> = Vec::new();

        match &config.gemini.api_key {
            Some(key) => generators.push(Box::new(GeminiClient::new(
                client.clone(),
                &config.gemini.base_url,
                &config.gemini.model,
                key,
            ))),
            None => warn!("{GEMINI_KEY_ENV_VAR} not set, skipping Gemini"),
        }

        match &config.hugging_face.token {
            Some(token) => generators.push(Box::new(HuggingFaceClient::new(
                client,
                &config.hugging_face.base_url,
                &config.hugging_face.model,
                token,
            ))),
            None => warn!("{HF_TOKEN_ENV_VAR} not set, skipping Hugging Face"),
        }

        Self::new(generators)
    }

    /// Provider names in the order they will be tried
    pub fn providers(&self) -> Vec<&str> {
        self.generators.iter().map(|g| g.name()).collect()
    }

    pub async fn narrate(&self, summary: &MatchSummary, style: NarrationStyle) -> Narration {
        self.generate(&build_prompt(summary, style)).await
    }

    /// Send `prompt` to each generator once, in order, until one succeeds.
    pub async fn generate(&self, prompt: &str) -> Narration {
        if self.generators.is_empty() {
            return Narration::Unavailable {
                message: format!(
                    "Could not generate the narration. Set a valid {GEMINI_KEY_ENV_VAR} or {HF_TOKEN_ENV_VAR}."
                ),
            };
        }

        let mut failures = Vec::new();
        for generator in &self.generators {
            match generator.generate(prompt).await {
                Ok(text) => {
                    info!(provider = generator.name(), "narration generated");
                    return Narration::Generated {
                        provider: generator.name().to_string(),
                        text,
                    };
                }
                Err(e) => {
                    warn!(provider = generator.name(), error = %e, "narration failed");
                    failures.push(format!("{}: {:#}", generator.name(), e));
                }
            }
        }

        Narration::Unavailable {
            message: format!("Error generating narration: {}", failures.join("; ")),
        }
    }
}
