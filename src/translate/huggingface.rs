use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::TranslateConfig;
use crate::error::{Result, TransnameError};
use crate::model::LanguagePair;
use super::{Translator, common};

#[derive(Debug, Clone, Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Debug, Clone, Serialize)]
struct InferenceOptions {
    /// Block until a cold model is loaded instead of failing with 503
    wait_for_model: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct InferenceOutput {
    #[serde(alias = "generated_text")]
    translation_text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Outputs(Vec<InferenceOutput>),
    Error { error: String },
}

/// Pretrained seq2seq translation model served from the model registry
pub struct HuggingFaceTranslator {
    client: Client,
    config: TranslateConfig,
    model_id: String,
}

impl HuggingFaceTranslator {
    pub fn new(config: TranslateConfig, pair: &LanguagePair) -> Result<Self> {
        let client = common::build_client(&config)?;
        let model_id = pair.model_id_for(&config);

        Ok(Self {
            client,
            config,
            model_id,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Check the model id resolves in the registry
    pub async fn check_availability(&self) -> Result<()> {
        let url = format!(
            "{}/api/models/{}",
            self.config.hub_endpoint.trim_end_matches('/'),
            self.model_id
        );
        debug!("Resolving model at: {}", url);

        let response = self.authorize(self.client.get(&url))
            .send()
            .await
            .map_err(|e| TransnameError::ModelLoad(format!(
                "Failed to reach model registry for '{}': {}", self.model_id, e
            )))?;

        match response.status() {
            status if status.is_success() => {
                info!("Translation model '{}' is available", self.model_id);
                Ok(())
            }
            StatusCode::NOT_FOUND => Err(TransnameError::ModelLoad(format!(
                "Model '{}' not found. Check the language pair.", self.model_id
            ))),
            status => Err(TransnameError::ModelLoad(format!(
                "Model registry returned {} for '{}'", status, self.model_id
            ))),
        }
    }
}

#[async_trait]
impl Translator for HuggingFaceTranslator {
    async fn translate(&self, text: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}",
            self.config.inference_endpoint.trim_end_matches('/'),
            self.model_id
        );
        let request = InferenceRequest {
            inputs: text,
            options: InferenceOptions { wait_for_model: true },
        };

        debug!("Sending translation request to: {}", url);

        let response = self.authorize(self.client.post(&url))
            .json(&request)
            .send()
            .await
            .map_err(|e| TransnameError::Translation(format!("HTTP request failed: {}", e)))?;

        let response = common::error_for_status(response, "Inference API").await?;
        let body = response.text().await
            .map_err(|e| TransnameError::Translation(format!("Failed to read response: {}", e)))?;

        debug!("Raw inference response: {}", body);
        parse_inference_response(&body)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}

/// Extract the first translation from an inference response body
fn parse_inference_response(body: &str) -> Result<String> {
    let response: InferenceResponse = serde_json::from_str(body)?;

    match response {
        InferenceResponse::Outputs(outputs) => outputs
            .into_iter()
            .next()
            .map(|output| output.translation_text)
            .ok_or_else(|| TransnameError::Translation("Empty translation received".to_string())),
        InferenceResponse::Error { error } => Err(TransnameError::Translation(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_translation_output() {
        let body = r#"[{"translation_text":"informe"}]"#;
        assert_eq!(parse_inference_response(body).unwrap(), "informe");
    }

    #[test]
    fn test_parse_generated_text_alias() {
        let body = r#"[{"generated_text":"Bericht"}]"#;
        assert_eq!(parse_inference_response(body).unwrap(), "Bericht");
    }

    #[test]
    fn test_parse_error_body() {
        let body = r#"{"error":"Model is currently loading"}"#;
        let err = parse_inference_response(body).unwrap_err();
        assert!(matches!(err, TransnameError::Translation(msg) if msg.contains("loading")));
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse_inference_response("[]").is_err());
        assert!(matches!(parse_inference_response("<html>"), Err(TransnameError::Json(_))));
    }

    #[tokio::test]
    async fn test_unreachable_registry_is_model_load_error() {
        let config = TranslateConfig {
            hub_endpoint: "http://127.0.0.1:9".to_string(),
            timeout_secs: 5,
            ..TranslateConfig::default()
        };
        let pair = LanguagePair::new("en", "es").unwrap();
        let translator = HuggingFaceTranslator::new(config, &pair).unwrap();

        assert_eq!(translator.model_id(), "Helsinki-NLP/opus-mt-en-es");
        let err = translator.check_availability().await.unwrap_err();
        assert!(matches!(err, TransnameError::ModelLoad(_)));
    }
}
