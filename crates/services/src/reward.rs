use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::RewardError;

/// Fixed prompt for the perfect-run reward graphic.
pub const REWARD_PROMPT: &str = "A bright, cheerful cartoon trophy surrounded by confetti and \
                                 stars, celebrating a perfect arithmetic practice run, kid-friendly";

#[derive(Clone, Debug)]
pub struct RewardConfig {
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

impl RewardConfig {
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let api_key = env::var("DRILL_REWARD_API_KEY").ok()?;
        if api_key.trim().is_empty() {
            return None;
        }
        let base_url = env::var("DRILL_REWARD_BASE_URL")
            .unwrap_or_else(|_| "https://api.openai.com/v1".into());
        let model = env::var("DRILL_REWARD_MODEL").unwrap_or_else(|_| "gpt-image-1".into());
        Some(Self {
            base_url,
            api_key,
            model,
        })
    }
}

/// Image payload returned for a perfect run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewardImage {
    /// Base64-encoded PNG, ready for a data URI.
    pub b64_png: String,
}

/// Thin client for the reward-image endpoint.
///
/// Unconfigured (no API key) it reports `enabled() == false` and every
/// fetch fails with `RewardError::Disabled`; callers treat any error as
/// "no reward" without touching scoring.
#[derive(Clone)]
pub struct RewardService {
    client: Client,
    config: Option<RewardConfig>,
}

impl RewardService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(RewardConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<RewardConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Request one reward image for the given prompt.
    ///
    /// # Errors
    ///
    /// Returns `RewardError` when the service is disabled, the request
    /// fails, or the response holds no image.
    pub async fn fetch(&self, prompt: &str) -> Result<RewardImage, RewardError> {
        let config = self.config.as_ref().ok_or(RewardError::Disabled)?;

        let url = format!(
            "{}/images/generations",
            config.base_url.trim_end_matches('/')
        );
        let payload = ImageRequest {
            model: config.model.clone(),
            prompt: prompt.to_string(),
            n: 1,
            size: "512x512",
        };

        let response = self
            .client
            .post(url)
            .bearer_auth(&config.api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(RewardError::HttpStatus(response.status()));
        }

        let body: ImageResponse = response.json().await?;
        let b64_png = body
            .data
            .into_iter()
            .next()
            .and_then(|item| item.b64_json)
            .ok_or(RewardError::EmptyResponse)?;

        Ok(RewardImage { b64_png })
    }
}

#[derive(Debug, Serialize)]
struct ImageRequest {
    model: String,
    prompt: String,
    n: u8,
    size: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    b64_json: Option<String>,
}
