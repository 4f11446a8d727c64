//! AI service integration for story segmentation and panel illustration
//!
//! Provides interfaces to OpenAI's Completions and Image APIs, plus in-memory
//! mocks for tests and local harnesses.

pub mod mock;
pub mod openai;

pub use mock::{MockImageGenerationClient, MockSegmentationClient};
pub use openai::{OpenAiCompletionClient, OpenAiImageClient};

use crate::Result;
use async_trait::async_trait;

/// Splits a story into ordered, comic-panel-sized segments.
#[async_trait]
pub trait SegmentationService: Send + Sync {
    async fn split_story(&self, story: &str) -> Result<Vec<String>>;
}

/// Renders one panel description into an image and returns its URL.
#[async_trait]
pub trait ImageGenerationService: Send + Sync {
    async fn generate_image(&self, description: &str) -> Result<String>;
}
