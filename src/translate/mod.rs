// Translation backends
//
// The translation model is an opaque collaborator: text in, text out, may fail.
// - HuggingFace: Pretrained seq2seq model resolved from the model registry
// - Ollama: Local LLM prompted to translate

pub mod common;
pub mod huggingface;
pub mod ollama;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::config::{TranslateConfig, TranslationBackend};
use crate::error::Result;
use crate::model::LanguagePair;

pub use huggingface::HuggingFaceTranslator;
pub use ollama::OllamaTranslator;

/// Main trait for translation operations
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate a short text (typically a file stem) once
    async fn translate(&self, text: &str) -> Result<String>;

    /// Identifier of the loaded model, for diagnostics
    fn model_id(&self) -> &str;
}

/// Outcome of translating a single name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Translation {
    /// The model produced a translation
    Translated(String),
    /// The model failed; the original text is used unchanged
    Fallback { original: String, reason: String },
}

impl Translation {
    /// The name to use, whichever way the translation went
    pub fn text(&self) -> &str {
        match self {
            Self::Translated(text) => text,
            Self::Fallback { original, .. } => original,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn into_text(self) -> String {
        match self {
            Self::Translated(text) => text,
            Self::Fallback { original, .. } => original,
        }
    }
}

/// Translate `text`, falling back to `text` itself when the model fails.
///
/// Never returns an error: a failure is logged and reported as
/// [`Translation::Fallback`] so one bad name cannot abort a batch.
pub async fn translate_name(translator: &dyn Translator, text: &str) -> Translation {
    match translator.translate(text).await {
        Ok(translated) => {
            let translated = translated.trim();
            if translated.is_empty() {
                warn!("Error during translation: empty output for '{}'", text);
                Translation::Fallback {
                    original: text.to_string(),
                    reason: "empty translation".to_string(),
                }
            } else {
                debug!("Translated '{}' -> '{}'", text, translated);
                Translation::Translated(translated.to_string())
            }
        }
        Err(e) => {
            warn!("Error during translation: {}", e);
            Translation::Fallback {
                original: text.to_string(),
                reason: e.to_string(),
            }
        }
    }
}

/// Factory for loading translator instances
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Build the configured backend and verify its model is available.
    ///
    /// This is the once-per-run model load; an error here aborts the run.
    pub async fn load(config: &TranslateConfig, pair: &LanguagePair) -> Result<Box<dyn Translator>> {
        match config.backend {
            TranslationBackend::HuggingFace => {
                let translator = HuggingFaceTranslator::new(config.clone(), pair)?;
                translator.check_availability().await?;
                Ok(Box::new(translator))
            }
            TranslationBackend::Ollama => {
                let translator = OllamaTranslator::new(config.clone(), pair)?;
                translator.check_availability().await?;
                Ok(Box::new(translator))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransnameError;

    struct Fixed(Result<String>);

    #[async_trait]
    impl Translator for Fixed {
        async fn translate(&self, _text: &str) -> Result<String> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(e) => Err(TransnameError::Translation(e.to_string())),
            }
        }

        fn model_id(&self) -> &str {
            "fixed"
        }
    }

    #[tokio::test]
    async fn test_translated_output_is_trimmed() {
        let translator = Fixed(Ok("  informe \n".to_string()));
        let result = translate_name(&translator, "report").await;
        assert_eq!(result, Translation::Translated("informe".to_string()));
        assert!(!result.is_fallback());
    }

    #[tokio::test]
    async fn test_failure_falls_back_to_identity() {
        let translator = Fixed(Err(TransnameError::Translation("model exploded".to_string())));
        let result = translate_name(&translator, "report").await;
        assert!(result.is_fallback());
        assert_eq!(result.text(), "report");
        assert_eq!(result.into_text(), "report");
    }

    #[tokio::test]
    async fn test_empty_output_falls_back_to_identity() {
        let translator = Fixed(Ok("   ".to_string()));
        let result = translate_name(&translator, "notes").await;
        assert!(result.is_fallback());
        assert_eq!(result.text(), "notes");
    }
}
