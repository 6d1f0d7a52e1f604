//! Gemini client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde::Serialize;
use serde_json::json;
use std::env;
use tracing::{debug, info, warn};

use super::adapter::{to_gemini_contents, translate_role};
use super::traits::ChatModel;
use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::config::AppConfig;
use crate::domain::types::{Turn, TurnRole};

const PROVIDER_ID: &str = "gemini";

/// Resolve the API key from the environment variable named in the config.
pub fn resolve_api_key(env_var: &str) -> Option<String> {
    let name = env_var.trim();
    if name.is_empty() {
        return None;
    }
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => None,
        Err(err) => {
            warn!(env_var = name, %err, "API key environment variable is not set");
            None
        }
    }
}

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    endpoint: String,
    api_path: String,
    api_key: String,
    http: Client,
}

impl GeminiClient {
    pub fn new(endpoint: String, api_path: String, api_key: String) -> Self {
        Self {
            endpoint,
            api_path,
            api_key,
            http: Client::new(),
        }
    }

    /// Build a client from config, failing when the key is absent. The key
    /// is read once here at startup; a missing credential is fatal.
    pub fn from_config(config: &AppConfig) -> Result<Self, ModelError> {
        let api_key = resolve_api_key(&config.api_key_env)
            .ok_or_else(|| ModelError::missing_api_key(PROVIDER_ID))?;
        Ok(Self::new(
            config.endpoint.clone(),
            config.api_path.clone(),
            api_key,
        ))
    }

    fn build_model_url(&self, model: &str) -> String {
        let base = self.endpoint.trim_end_matches('/');
        format!("{base}/{}/{model}:generateContent", self.api_path)
    }

    /// Post JSON with query param auth, Gemini style.
    async fn post_with_query_key<Req, Res>(&self, url: &str, body: &Req) -> Result<Res, ModelError>
    where
        Req: Serialize,
        Res: for<'de> Deserialize<'de>,
    {
        let url_with_key = format!("{}?key={}", url, self.api_key);

        self.http
            .post(&url_with_key)
            .json(body)
            .send()
            .await
            .map_err(|e| ModelError::network(PROVIDER_ID, e))?
            .error_for_status()
            .map_err(|e| ModelError::network(PROVIDER_ID, e))?
            .json()
            .await
            .map_err(|e| ModelError::network(PROVIDER_ID, e))
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.build_model_url(&request.model);
        let contents = to_gemini_contents(&request.turns);

        let mut payload = json!({ "contents": contents });
        if let Some(system) = &request.system_prompt {
            payload["system_instruction"] = json!({
                "parts": [{"text": system}]
            });
        }

        info!(
            provider = PROVIDER_ID,
            model = request.model.as_str(),
            turns = request.turns.len(),
            "Sending request to Gemini"
        );

        let response: GeminiResponse = self.post_with_query_key(&url, &payload).await?;
        debug!("Received response from Gemini");

        let content = response
            .candidates
            .unwrap_or_default()
            .into_iter()
            .flat_map(|c| c.content)
            .next()
            .ok_or_else(|| ModelError::invalid_response(PROVIDER_ID, "missing candidate"))?;

        // Gemini tags its replies "model"; translate to our vocabulary.
        let role = content
            .role
            .as_deref()
            .and_then(|raw| TurnRole::from_str(translate_role(raw)))
            .unwrap_or(TurnRole::Assistant);

        let text = content
            .parts
            .into_iter()
            .find_map(|p| p.text)
            .ok_or_else(|| ModelError::invalid_response(PROVIDER_ID, "missing text"))?;

        Ok(ModelResponse {
            reply: Turn::new(role, text),
        })
    }
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    role: Option<String>,
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
}
