use super::client::OpenAiHttpClient;
use super::types::{CompletionRequest, CompletionResponse};
use crate::ai::SegmentationService;
use crate::{prompts, story, Error, Result};
use async_trait::async_trait;

/// Splits stories with the OpenAI text completions API.
pub struct OpenAiCompletionClient {
    http: OpenAiHttpClient,
    model: String,
    max_tokens: u32,
}

impl OpenAiCompletionClient {
    pub fn new(http: OpenAiHttpClient, model: String, max_tokens: u32) -> Self {
        Self {
            http,
            model,
            max_tokens,
        }
    }
}

#[async_trait]
impl SegmentationService for OpenAiCompletionClient {
    async fn split_story(&self, story: &str) -> Result<Vec<String>> {
        let request = CompletionRequest {
            model: self.model.clone(),
            prompt: prompts::render(prompts::SEGMENT_STORY, &[("story", story)]),
            max_tokens: self.max_tokens,
        };

        tracing::debug!(
            "Requesting story segmentation (model: {}, {} chars)",
            self.model,
            story.len()
        );
        let response: CompletionResponse = self.http.post("/v1/completions", &request).await?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| Error::AiProvider("No response from completion API".to_string()))?;

        if choice.finish_reason.as_deref() == Some("length") {
            tracing::warn!(
                "Segmentation output hit the {} token limit and may be truncated",
                self.max_tokens
            );
        }

        Ok(story::split_segments(&choice.text))
    }
}
