use std::fmt;

use crate::config::TranslateConfig;
use crate::error::{Result, TransnameError};

/// Source and target language codes, fixed for a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    pub fn new(source: &str, target: &str) -> Result<Self> {
        Ok(Self {
            source: validate_code(source)?,
            target: validate_code(target)?,
        })
    }

    /// Registry identifier of the pretrained model for this pair,
    /// `<org>/<prefix>-<src>-<trg>`
    pub fn model_id(&self, org: &str, prefix: &str) -> String {
        format!("{}/{}-{}-{}", org, prefix, self.source, self.target)
    }

    pub fn model_id_for(&self, config: &TranslateConfig) -> String {
        self.model_id(&config.model_org, &config.model_prefix)
    }
}

impl fmt::Display for LanguagePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.source, self.target)
    }
}

fn validate_code(code: &str) -> Result<String> {
    let code = code.trim();
    if code.is_empty() {
        return Err(TransnameError::Config("Language code must not be empty".to_string()));
    }
    if code.chars().any(|c| c.is_whitespace() || c == '/' || c == '\\') {
        return Err(TransnameError::Config(format!("Invalid language code: {}", code)));
    }
    Ok(code.to_string())
}

/// Convert language code to full language name for clearer prompts
pub fn language_code_to_name(code: &str) -> String {
    match code.to_lowercase().as_str() {
        "en" => "English".to_string(),
        "es" => "Spanish".to_string(),
        "fr" => "French".to_string(),
        "de" => "German".to_string(),
        "it" => "Italian".to_string(),
        "pt" => "Portuguese".to_string(),
        "nl" => "Dutch".to_string(),
        "sv" => "Swedish".to_string(),
        "da" => "Danish".to_string(),
        "fi" => "Finnish".to_string(),
        "pl" => "Polish".to_string(),
        "cs" => "Czech".to_string(),
        "hu" => "Hungarian".to_string(),
        "ru" => "Russian".to_string(),
        "uk" => "Ukrainian".to_string(),
        "tr" => "Turkish".to_string(),
        "ar" => "Arabic".to_string(),
        "he" => "Hebrew".to_string(),
        "hi" => "Hindi".to_string(),
        "ja" => "Japanese".to_string(),
        "ko" => "Korean".to_string(),
        "zh" => "Chinese".to_string(),
        "th" => "Thai".to_string(),
        "vi" => "Vietnamese".to_string(),
        "id" => "Indonesian".to_string(),
        _ => code.to_string(),
    }
}
