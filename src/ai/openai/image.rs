use super::client::OpenAiHttpClient;
use super::types::{ImageGenerationRequest, ImageGenerationResponse};
use crate::ai::ImageGenerationService;
use crate::{Error, Result};
use async_trait::async_trait;

pub struct OpenAiImageClient {
    http: OpenAiHttpClient,
    model: Option<String>,
    size: String,
}

impl OpenAiImageClient {
    pub fn new(http: OpenAiHttpClient, model: Option<String>, size: String) -> Self {
        Self { http, model, size }
    }
}

#[async_trait]
impl ImageGenerationService for OpenAiImageClient {
    async fn generate_image(&self, description: &str) -> Result<String> {
        let request = ImageGenerationRequest {
            model: self.model.clone(),
            prompt: description.to_string(),
            n: 1,
            size: self.size.clone(),
        };

        let response: ImageGenerationResponse =
            self.http.post("/v1/images/generations", &request).await?;

        let image = response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| Error::AiProvider("No image generated".to_string()))?;

        if let Some(revised) = &image.revised_prompt {
            tracing::debug!("Image prompt revised by provider: {}", revised);
        }

        image
            .url
            .ok_or_else(|| Error::AiProvider("No image URL in OpenAI response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, model: Option<&str>) -> OpenAiImageClient {
        let http = OpenAiHttpClient::new(
            "test-key".to_string(),
            server.uri(),
            Duration::from_secs(5),
        )
        .unwrap();
        OpenAiImageClient::new(http, model.map(str::to_string), "1024x1024".to_string())
    }

    #[tokio::test]
    async fn test_generate_image_returns_first_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(header("Authorization", "Bearer test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "created": 1700000000,
                "data": [
                    { "url": "https://img.example/1.png" },
                    { "url": "https://img.example/2.png" }
                ]
            })))
            .mount(&server)
            .await;

        let url = client_for(&server, None)
            .generate_image("A hero rises.")
            .await
            .unwrap();
        assert_eq!(url, "https://img.example/1.png");
    }

    #[tokio::test]
    async fn test_generate_image_request_body_without_model() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(body_json(serde_json::json!({
                "prompt": "A hero rises.",
                "n": 1,
                "size": "1024x1024"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://img.example/1.png" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server, None)
            .generate_image("A hero rises.")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_generate_image_sends_configured_model() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .and(wiremock::matchers::body_string_contains(
                "\"model\":\"dall-e-3\"",
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "url": "https://img.example/1.png" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server, Some("dall-e-3"))
            .generate_image("panel")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_generate_image_empty_data_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
            )
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .generate_image("panel")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
        assert!(err.to_string().contains("No image generated"));
    }

    #[tokio::test]
    async fn test_generate_image_missing_url_is_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "data": [{ "b64_json": "iVBORw0KGgo=" }]
            })))
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .generate_image("panel")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }

    #[tokio::test]
    async fn test_generate_image_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/images/generations"))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .mount(&server)
            .await;

        let err = client_for(&server, None)
            .generate_image("panel")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AiProvider(_)));
    }
}
