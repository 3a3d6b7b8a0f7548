use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, info};

use crate::config::TranslateConfig;
use crate::error::{Result, TransnameError};
use crate::model::{LanguagePair, language_code_to_name};
use super::{Translator, common};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub model: String,
    pub prompt: String,
    pub stream: bool,
    pub format: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub response: String,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TranslationResult {
    text: String,
}

/// Local LLM served by ollama, prompted to translate one name at a time
pub struct OllamaTranslator {
    client: Client,
    config: TranslateConfig,
    pair: LanguagePair,
}

impl OllamaTranslator {
    pub fn new(config: TranslateConfig, pair: &LanguagePair) -> Result<Self> {
        let client = common::build_client(&config)?;

        Ok(Self {
            client,
            config,
            pair: pair.clone(),
        })
    }

    /// Check if Ollama is available and the model is loaded
    pub async fn check_availability(&self) -> Result<()> {
        let url = format!("{}/api/show", self.config.ollama_endpoint.trim_end_matches('/'));
        let model = &self.config.ollama_model;

        let response = self.client
            .post(&url)
            .json(&json!({ "name": model }))
            .send()
            .await
            .map_err(|e| TransnameError::ModelLoad(format!("Failed to connect to Ollama: {}", e)))?;

        if response.status().is_success() {
            info!("Ollama model '{}' is available", model);
            Ok(())
        } else {
            Err(TransnameError::ModelLoad(format!(
                "Ollama model '{}' not found. Please pull the model first: ollama pull {}",
                model, model
            )))
        }
    }

    fn build_translation_prompt(&self, text: &str) -> String {
        let source_name = language_code_to_name(&self.pair.source);
        let target_name = language_code_to_name(&self.pair.target);

        format!(
            "You are a professional translator.\n\
             \n\
             Translate the following file name from {} to {}.\n\
             Keep it short. Do not add a file extension, quotes or explanations.\n\
             \n\
             Return ONLY the translation in JSON format as {{\"text\":\"your {} translation here\"}}.\n\
             \n\
             File name to translate: \"{}\"\n",
            source_name, target_name, target_name, text
        )
    }
}

#[async_trait]
impl Translator for OllamaTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let request = GenerateRequest {
            model: self.config.ollama_model.clone(),
            prompt: self.build_translation_prompt(text),
            stream: false,
            format: "json".to_string(),
        };

        let url = format!("{}/api/generate", self.config.ollama_endpoint.trim_end_matches('/'));
        debug!("Sending translation request to: {}", url);

        let response = self.client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| TransnameError::Translation(format!("HTTP request failed: {}", e)))?;

        let response = common::error_for_status(response, "Ollama API").await?;
        let generated: GenerateResponse = response.json().await
            .map_err(|e| TransnameError::Translation(format!("Failed to parse response: {}", e)))?;

        debug!("Raw Ollama response: {}", generated.response);
        parse_generated_text(&generated.response)
    }

    fn model_id(&self) -> &str {
        &self.config.ollama_model
    }
}

/// Pull the translation out of the model's reply, JSON first
fn parse_generated_text(raw: &str) -> Result<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(TransnameError::Translation("Empty translation received".to_string()));
    }

    if let Ok(result) = serde_json::from_str::<TranslationResult>(raw) {
        return Ok(result.text.trim().to_string());
    }

    Ok(common::clean_translation_response(raw))
}
