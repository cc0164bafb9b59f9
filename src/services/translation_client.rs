use reqwest::Client;
use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::config::client::ClientConfig;
use crate::modules::translate::schema::TranslateRequest;

#[derive(Error, Debug)]
pub enum TranslateError {
    #[error("No text to translate")]
    Validation,
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Server error: {status}")]
    Server { status: u16 },
    #[error("Invalid response: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation(String);

impl Translation {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone)]
pub struct TranslationClient {
    client: Client,
    endpoint_url: String,
}

impl TranslationClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: Client::new(),
            endpoint_url: config.endpoint_url,
        }
    }

    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Sends one translation request. Empty `text` fails with
    /// [`TranslateError::Validation`] before anything touches the network.
    /// Only bodies that are not JSON at all fail as
    /// [`TranslateError::Malformed`]; any JSON without a usable `translation`
    /// field yields an empty translation.
    pub async fn translate(&self, text: &str, language: &str) -> Result<Translation, TranslateError> {
        if text.is_empty() {
            return Err(TranslateError::Validation);
        }

        let request = TranslateRequest {
            text: text.to_string(),
            language: language.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint_url)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TranslateError::Server {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let parsed: Value = serde_json::from_str(&body)?;

        Ok(Translation(display_text(parsed.get("translation"))))
    }
}

/// Only `translation` is read. Missing or null shows nothing, non-string
/// values are shown as their JSON text.
fn display_text(translation: Option<&Value>) -> String {
    match translation {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

impl Default for TranslationClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}
