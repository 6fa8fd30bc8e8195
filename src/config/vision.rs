//! Vision API access settings

use std::env;
use std::time::Duration;
use log::debug;

use crate::errors::{FigureError, FigureResult};

/// Environment variable holding the API credential
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// Environment variable overriding the chat completions endpoint
pub const API_URL_VAR: &str = "FIGCROP_API_URL";

/// Environment variable overriding the model name
pub const MODEL_VAR: &str = "FIGCROP_MODEL";

const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
const DEFAULT_MODEL: &str = "gpt-4o";
const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Load variables from a `.env` file in the working directory, if present
///
/// Variables already set in the process environment are left untouched.
pub fn load_env_file() {
    match dotenv::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No environment file loaded: {}", e),
    }
}

/// Settings for talking to the vision-capable chat completions endpoint
#[derive(Debug, Clone, PartialEq)]
pub struct VisionApiConfig {
    /// Bearer credential; requests are refused when missing
    pub api_key: Option<String>,
    /// Full URL of the chat completions endpoint
    pub endpoint: String,
    /// Model name sent with every request
    pub model: String,
    /// Completion token limit
    pub max_tokens: u32,
    /// Request timeout; `None` waits as long as the transport allows
    pub timeout: Option<Duration>,
}

impl Default for VisionApiConfig {
    fn default() -> Self {
        VisionApiConfig {
            api_key: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: None,
        }
    }
}

impl VisionApiConfig {
    /// Override fields with values found in the process environment
    pub fn apply_env(&mut self) {
        if let Some(key) = non_empty_var(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(url) = non_empty_var(API_URL_VAR) {
            self.endpoint = url;
        }
        if let Some(model) = non_empty_var(MODEL_VAR) {
            self.model = model;
        }
    }

    /// Set the credential explicitly
    pub fn with_api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Set the endpoint explicitly
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Return the credential or fail with a configuration error
    pub fn require_api_key(&self) -> FigureResult<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| FigureError::Configuration(
                format!("{} not found in environment", API_KEY_VAR)))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}
