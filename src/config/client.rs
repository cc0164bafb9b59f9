use std::env;

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/translate";

/// Where the popup sends its translation requests.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub endpoint_url: String,
}

impl ClientConfig {
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
        }
    }

    pub fn from_env() -> Self {
        let endpoint_url =
            env::var("TRANSLATE_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());

        Self { endpoint_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}
