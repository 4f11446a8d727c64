//! Data models and structures
//!
//! Defines the HTTP payloads exchanged with callers and the runtime
//! configuration shared by the OpenAI clients and the server.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Body of `POST /generate-comic`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryRequest {
    pub story: String,
}

/// Successful response: one image URL per panel, in panel order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComicResponse {
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_COMPLETION_MODEL: &str = "gpt-3.5-turbo-instruct";
pub const DEFAULT_MAX_TOKENS: u32 = 300;
pub const DEFAULT_IMAGE_SIZE: &str = "1024x1024";

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub completion_model: String,
    pub completion_max_tokens: u32,
    pub image_model: Option<String>,
    pub image_size: String,
    pub completion_timeout: Duration,
    pub image_timeout: Duration,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from a `.env` file (if present) and the process
    /// environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| Error::Config("OPENAI_API_KEY not set".to_string()))?;

        let openai_base_url = lookup("OPENAI_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            openai_api_key,
            openai_base_url,
            completion_model: lookup("COMPLETION_MODEL")
                .unwrap_or_else(|| DEFAULT_COMPLETION_MODEL.to_string()),
            completion_max_tokens: parse_var(&lookup, "COMPLETION_MAX_TOKENS")?
                .unwrap_or(DEFAULT_MAX_TOKENS),
            image_model: lookup("IMAGE_MODEL").filter(|model| !model.trim().is_empty()),
            image_size: lookup("IMAGE_SIZE").unwrap_or_else(|| DEFAULT_IMAGE_SIZE.to_string()),
            completion_timeout: Duration::from_secs(
                parse_var(&lookup, "COMPLETION_TIMEOUT_SECS")?.unwrap_or(30),
            ),
            image_timeout: Duration::from_secs(
                parse_var(&lookup, "IMAGE_TIMEOUT_SECS")?.unwrap_or(60),
            ),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_var(&lookup, "PORT")?.unwrap_or(8080),
        })
    }
}

fn parse_var<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| Error::Config(format!("{} is invalid ('{}'): {}", key, raw, e))),
        None => Ok(None),
    }
}
