use std::time::Duration;
use reqwest::{Client, Response};

use crate::config::TranslateConfig;
use crate::error::{Result, TransnameError};

/// HTTP client shared by the backends of one run
pub fn build_client(config: &TranslateConfig) -> Result<Client> {
    Client::builder()
        .user_agent(concat!("transname/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()
        .map_err(TransnameError::Http)
}

/// Turn a non-success response into a translation error carrying the body
pub async fn error_for_status(response: Response, what: &str) -> Result<Response> {
    if response.status().is_success() {
        return Ok(response);
    }

    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    Err(TransnameError::Translation(format!(
        "{} error {}: {}", what, status, error_text
    )))
}

/// Clean up translation response to extract just the translation
pub fn clean_translation_response(response: &str) -> String {
    let lines: Vec<&str> = response.lines().collect();

    for &line in &lines {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }

        if trimmed.starts_with("Here is") ||
           trimmed.starts_with("Here are") ||
           trimmed.starts_with("Option") ||
           trimmed.starts_with("**Option") ||
           trimmed.starts_with("- ") ||
           trimmed.starts_with("* ") {
            continue;
        }

        if trimmed.starts_with("**") && trimmed.ends_with("**") {
            continue;
        }

        let trimmed = trimmed.strip_prefix("Translation:").unwrap_or(trimmed).trim();
        return trimmed.trim_matches('"').to_string();
    }

    response.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_translation_response() {
        assert_eq!(clean_translation_response("informe"), "informe");
        assert_eq!(clean_translation_response("\n  \"informe\"  \n"), "informe");
        assert_eq!(
            clean_translation_response("Here is the translation:\nTranslation: informe\n- alt"),
            "informe"
        );
        assert_eq!(clean_translation_response("**Option 1**\ninforme"), "informe");
    }
}
