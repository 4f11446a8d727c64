use super::{ImageGenerationService, SegmentationService};
use crate::{story, Error, Result};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory segmenter. Without configured responses it echoes the story
/// back line by line, like a completion model that keeps the author's
/// paragraphing.
#[derive(Clone)]
pub struct MockSegmentationClient {
    responses: Arc<Mutex<Vec<Vec<String>>>>,
    failure: Option<String>,
    call_count: Arc<Mutex<usize>>,
    stories: Arc<Mutex<Vec<String>>>,
}

impl MockSegmentationClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failure: None,
            call_count: Arc::new(Mutex::new(0)),
            stories: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_segments_response(self, segments: Vec<String>) -> Self {
        self.responses.lock().unwrap().push(segments);
        self
    }

    /// Make every call fail with [`Error::AiProvider`].
    pub fn with_failure(mut self, message: &str) -> Self {
        self.failure = Some(message.to_string());
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    pub fn get_stories(&self) -> Vec<String> {
        self.stories.lock().unwrap().clone()
    }
}

impl Default for MockSegmentationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SegmentationService for MockSegmentationClient {
    async fn split_story(&self, story: &str) -> Result<Vec<String>> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.stories.lock().unwrap().push(story.to_string());

        if let Some(message) = &self.failure {
            return Err(Error::AiProvider(message.clone()));
        }

        let responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Ok(story::split_segments(story))
        } else {
            let index = (*count - 1) % responses.len();
            Ok(responses[index].clone())
        }
    }
}

/// In-memory image generator returning deterministic URLs.
#[derive(Clone)]
pub struct MockImageGenerationClient {
    base_url: String,
    fail_on_call: Option<usize>,
    call_count: Arc<Mutex<usize>>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockImageGenerationClient {
    pub fn new() -> Self {
        Self {
            base_url: "https://mock-images.example.com".to_string(),
            fail_on_call: None,
            call_count: Arc::new(Mutex::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    /// Fail the `call`-th request (1-based) and every request after it.
    pub fn with_failure_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn get_call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Descriptions received so far, in call order.
    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Default for MockImageGenerationClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageGenerationService for MockImageGenerationClient {
    async fn generate_image(&self, description: &str) -> Result<String> {
        let mut count = self.call_count.lock().unwrap();
        *count += 1;
        self.prompts.lock().unwrap().push(description.to_string());

        match self.fail_on_call {
            Some(call) if *count >= call => Err(Error::AiProvider("No image generated".to_string())),
            _ => Ok(format!("{}/panel-{}.png", self.base_url, *count)),
        }
    }
}
