//! `DeepL` API client for machine translation between English and French.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Deserialize;
use thiserror::Error;
use tracing::instrument;

use crate::config::DeeplConfig;

/// Errors that can occur when interacting with the `DeepL` API.
#[derive(Debug, Error)]
pub enum DeeplError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The response carried no translation.
    #[error("DeepL returned no translation")]
    EmptyResponse,
}

/// Language pair direction. The source is always the other language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetLanguage {
    En,
    Fr,
}

impl TargetLanguage {
    /// `DeepL` code of the target language.
    #[must_use]
    pub const fn target_code(self) -> &'static str {
        match self {
            Self::En => "EN-US",
            Self::Fr => "FR",
        }
    }

    /// `DeepL` code of the source language.
    #[must_use]
    pub const fn source_code(self) -> &'static str {
        match self {
            Self::En => "FR",
            Self::Fr => "EN",
        }
    }
}

#[derive(Debug, Deserialize)]
struct TranslateResponse {
    #[serde(default)]
    translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
struct Translation {
    text: String,
}

/// `DeepL` translate endpoint client.
#[derive(Clone)]
pub struct DeeplClient {
    client: reqwest::Client,
    api_url: String,
}

impl DeeplClient {
    /// Create a new `DeepL` client.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &DeeplConfig) -> Result<Self, DeeplError> {
        let mut headers = HeaderMap::new();
        let auth_value = format!("DeepL-Auth-Key {}", config.api_key.expose_secret());
        let mut auth_header =
            HeaderValue::from_str(&auth_value).map_err(|e| DeeplError::Api {
                status: 0,
                message: format!("Invalid API key format: {e}"),
            })?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
        })
    }

    /// Translate `text` into `target`.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API answers with a non-2xx
    /// status, or the response has no translation.
    #[instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn translate(&self, text: &str, target: TargetLanguage) -> Result<String, DeeplError> {
        let form = [
            ("text", text),
            ("source_lang", target.source_code()),
            ("target_lang", target.target_code()),
        ];

        let response = self.client.post(&self.api_url).form(&form).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DeeplError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: TranslateResponse = response.json().await?;
        body.translations
            .into_iter()
            .next()
            .map(|t| t.text)
            .ok_or(DeeplError::EmptyResponse)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!(TargetLanguage::Fr.target_code(), "FR");
        assert_eq!(TargetLanguage::Fr.source_code(), "EN");
        assert_eq!(TargetLanguage::En.target_code(), "EN-US");
        assert_eq!(TargetLanguage::En.source_code(), "FR");
    }

    #[test]
    fn test_response_shape() {
        let body: TranslateResponse = serde_json::from_str(
            r#"{"translations":[{"detected_source_language":"EN","text":"Bonjour"}]}"#,
        )
        .unwrap();
        assert_eq!(body.translations[0].text, "Bonjour");

        let empty: TranslateResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.translations.is_empty());
    }

    #[test]
    fn test_client_builds_from_config() {
        let config = DeeplConfig {
            api_key: "k3y-Wq8fZ2mN7pL4xR9t:fx".to_string().into(),
            api_url: "http://127.0.0.1:9/v2/translate".to_string(),
        };
        assert!(DeeplClient::new(&config).is_ok());
    }
}
