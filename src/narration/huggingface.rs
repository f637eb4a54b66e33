//! Hugging Face inference API client for text-generation models

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;

const MAX_NEW_TOKENS: u32 = 250;
const TEMPERATURE: f64 = 0.8;

#[derive(Debug, Serialize)]
struct Parameters {
    max_new_tokens: u32,
    temperature: f64,
    num_return_sequences: u32,
    return_full_text: bool,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: Parameters,
}

#[derive(Debug, Deserialize)]
struct Generated {
    generated_text: String,
}

pub struct HuggingFaceClient {
    client: Client,
    base_url: String,
    model: String,
    token: String,
}

impl HuggingFaceClient {
    pub fn new(client: Client, base_url: &str, model: &str, token: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            token: token.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}", self.base_url, self.model)
    }
}

#[async_trait]
impl TextGenerator for HuggingFaceClient {
    fn name(&self) -> &str {
        "huggingface"
    }

    async fn generate(&self, prompt: &str) -> anyhow::Result<String> {
        let body = GenerateRequest {
            inputs: prompt,
            parameters: Parameters {
                max_new_tokens: MAX_NEW_TOKENS,
                temperature: TEMPERATURE,
                num_return_sequences: 1,
                return_full_text: false,
            },
        };

        let res = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.token)
            .json(&body)
            .send()
            .await
            .context("Hugging Face request failed")?
            .error_for_status()
            .context("Hugging Face rejected the request")?
            .json::<Vec<Generated>>()
            .await
            .context("Hugging Face response was not valid JSON")?;

        res.into_iter()
            .next()
            .map(|g| g.generated_text)
            .filter(|text| !text.trim().is_empty())
            .ok_or_else(|| anyhow!("Hugging Face returned no text"))
    }
}
