//! Story-to-comic orchestration.

use crate::ai::openai::OpenAiHttpClient;
use crate::ai::{
    ImageGenerationService, OpenAiCompletionClient, OpenAiImageClient, SegmentationService,
};
use crate::models::Config;
use crate::Result;
use tracing::{error, info};

/// Runs segmentation once, then renders each segment in order.
pub struct ComicPipeline {
    segmenter: Box<dyn SegmentationService>,
    image_gen: Box<dyn ImageGenerationService>,
}

/// Injectable service bundle used to construct [`ComicPipeline`] in tests/harnesses.
pub struct PipelineServices {
    pub segmenter: Box<dyn SegmentationService>,
    pub image_gen: Box<dyn ImageGenerationService>,
}

impl ComicPipeline {
    /// Build a pipeline from concrete service dependencies.
    pub fn with_services(services: PipelineServices) -> Self {
        Self {
            segmenter: services.segmenter,
            image_gen: services.image_gen,
        }
    }

    /// Construct the OpenAI-backed pipeline described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let completion_http = OpenAiHttpClient::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.completion_timeout,
        )?;
        let image_http = OpenAiHttpClient::new(
            config.openai_api_key.clone(),
            config.openai_base_url.clone(),
            config.image_timeout,
        )?;

        info!(
            "Segmentation provider: OpenAI (model: {})",
            config.completion_model
        );
        info!(
            "Image provider: OpenAI (model: {}, size: {})",
            config.image_model.as_deref().unwrap_or("default"),
            config.image_size
        );

        Ok(Self::with_services(PipelineServices {
            segmenter: Box::new(OpenAiCompletionClient::new(
                completion_http,
                config.completion_model.clone(),
                config.completion_max_tokens,
            )),
            image_gen: Box::new(OpenAiImageClient::new(
                image_http,
                config.image_model.clone(),
                config.image_size.clone(),
            )),
        }))
    }

    /// Turn a story into one image URL per segment.
    ///
    /// The first failing image call aborts the run; no partial list is
    /// returned and later segments are never requested.
    pub async fn generate(&self, story: &str) -> Result<Vec<String>> {
        let segments = self.segmenter.split_story(story).await.map_err(|e| {
            error!("Story segmentation failed: {}", e);
            e
        })?;
        info!("Story split into {} segments", segments.len());

        let mut images = Vec::with_capacity(segments.len());
        for (index, segment) in segments.iter().enumerate() {
            let panel = index + 1;
            info!("[panel {}/{}] Generating image", panel, segments.len());

            let url = self.image_gen.generate_image(segment).await.map_err(|e| {
                error!(
                    "[panel {}/{}] Image generation failed: {}",
                    panel,
                    segments.len(),
                    e
                );
                e
            })?;
            images.push(url);
        }

        info!("Generated {} panel images", images.len());
        Ok(images)
    }
}
