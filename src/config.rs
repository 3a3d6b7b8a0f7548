use serde::{Deserialize, Serialize};
use std::path::Path;
use crate::error::{Result, TransnameError};

fn default_model_org() -> String {
    "Helsinki-NLP".to_string()
}

fn default_model_prefix() -> String {
    "opus-mt".to_string()
}

fn default_hub_endpoint() -> String {
    "https://huggingface.co".to_string()
}

fn default_inference_endpoint() -> String {
    "https://api-inference.huggingface.co".to_string()
}

fn default_ollama_endpoint() -> String {
    "http://localhost:11434".to_string()
}

fn default_ollama_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout_secs() -> u64 {
    300
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub translate: TranslateConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Which model service performs the translation
    #[serde(default)]
    pub backend: TranslationBackend,
    /// Organization part of the model id, `<org>/<prefix>-<src>-<trg>`
    #[serde(default = "default_model_org")]
    pub model_org: String,
    /// Model family prefix, `<org>/<prefix>-<src>-<trg>`
    #[serde(default = "default_model_prefix")]
    pub model_prefix: String,
    /// Model registry used to resolve the model id
    #[serde(default = "default_hub_endpoint")]
    pub hub_endpoint: String,
    /// Inference service hosting the registry models
    #[serde(default = "default_inference_endpoint")]
    pub inference_endpoint: String,
    /// Bearer token for the registry and inference service
    #[serde(default)]
    pub api_token: Option<String>,
    /// Ollama endpoint URL
    #[serde(default = "default_ollama_endpoint")]
    pub ollama_endpoint: String,
    /// LLM model used by the ollama backend
    #[serde(default = "default_ollama_model")]
    pub ollama_model: String,
    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslationBackend {
    /// HuggingFace: Pretrained seq2seq model resolved from the model registry
    #[default]
    HuggingFace,
    /// Ollama: Local LLM prompted to translate
    Ollama,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Where translated files land relative to the target directory
    #[serde(default)]
    pub layout: OutputLayout,
    /// Copy access and modification times from the source file
    #[serde(default = "default_true")]
    pub preserve_timestamps: bool,
    /// Draw a progress bar while processing
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputLayout {
    /// Flat: Every file lands directly in the target directory. Files whose
    /// names translate to the same string overwrite each other.
    #[default]
    Flat,
    /// Mirror: Keep the source file's subdirectory below the target directory
    Mirror,
}

impl Default for TranslateConfig {
    fn default() -> Self {
        Self {
            backend: TranslationBackend::HuggingFace,
            model_org: default_model_org(),
            model_prefix: default_model_prefix(),
            hub_endpoint: default_hub_endpoint(),
            inference_endpoint: default_inference_endpoint(),
            api_token: None,
            ollama_endpoint: default_ollama_endpoint(),
            ollama_model: default_ollama_model(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: OutputLayout::Flat,
            preserve_timestamps: true,
            show_progress: true,
        }
    }
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TransnameError::Config(format!("Failed to read config file: {}", e)))?;

        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| TransnameError::Config(format!("Failed to parse config file: {}", e)))
    }
}
