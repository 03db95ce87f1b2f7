use crate::{
    error::{LogoError, Result},
    models::{GeneratedLogo, ImageGenerationRequest, ImagesApiResponse},
};
use serde_json::json;
use uuid::Uuid;

pub const DEFAULT_MODEL: &str = "dall-e-3";
const IMAGES_PATH: &str = "/v1/images/generations";

#[derive(Clone, Debug)]
pub struct ImagesClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl ImagesClient {
    pub fn new(http: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn supported_models() -> Vec<(&'static str, &'static str, &'static str)> {
        vec![
            ("dall-e-3", "DALL-E 3", "OpenAI"),
            ("dall-e-2", "DALL-E 2", "OpenAI"),
            ("gpt-image-1", "GPT Image 1", "OpenAI"),
        ]
    }

    /// One best-effort call per invocation. Failures are terminal; the caller
    /// decides whether to invoke again.
    pub async fn generate(&self, request: ImageGenerationRequest) -> Result<GeneratedLogo> {
        let model = request.model.as_deref().unwrap_or(DEFAULT_MODEL);

        let payload = json!({
            "model": model,
            "prompt": request.prompt.as_str(),
            "n": 1,
            "size": request.size.as_deref().unwrap_or("1024x1024"),
            "quality": request.quality.as_deref().unwrap_or("hd"),
            "style": request.style.as_deref().unwrap_or("natural"),
            "response_format": request.response_format.as_deref().unwrap_or("url"),
        });

        let request_id = Uuid::new_v4();
        log::info!(
            "Generating image with model: {} [req:{}]",
            model,
            request_id
        );

        let response = self
            .http
            .post(format!("{}{}", self.base_url, IMAGES_PATH))
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| LogoError::NetworkError(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| LogoError::NetworkError(e.to_string()))?;

        if !status.is_success() {
            let message = extract_error_message(&body)
                .unwrap_or_else(|| format!("image service returned HTTP {}", status.as_u16()));
            log::error!(
                "Image generation failed with HTTP {} [req:{}]: {}",
                status.as_u16(),
                request_id,
                message
            );
            return Err(match status.as_u16() {
                401 | 403 => LogoError::AuthError(message),
                429 => LogoError::RateLimited(message),
                _ => LogoError::ServiceError(message),
            });
        }

        let api_response: ImagesApiResponse = serde_json::from_str(&body).map_err(|e| {
            LogoError::ServiceError(format!("failed to parse image response: {}", e))
        })?;

        let image = api_response
            .data
            .into_iter()
            .next()
            .ok_or_else(|| LogoError::ServiceError("no images generated".into()))?;

        if image.url.is_none() && image.b64_json.is_none() {
            return Err(LogoError::ServiceError(
                "image response carried neither a url nor a b64_json payload".into(),
            ));
        }

        log::info!("Image generation succeeded [req:{}]", request_id);

        Ok(GeneratedLogo {
            url: image.url,
            image_data: image.b64_json,
            prompt: request.prompt,
            revised_prompt: image.revised_prompt,
            model: model.to_string(),
        })
    }
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;

    if let Some(msg) = parsed
        .get("error")
        .and_then(|error| error.get("message"))
        .and_then(|message| message.as_str())
    {
        return Some(msg.to_string());
    }

    parsed
        .get("message")
        .and_then(|message| message.as_str())
        .map(ToOwned::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn client_for(server: &mockito::ServerGuard) -> ImagesClient {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        ImagesClient::new(http, "test-key".to_string(), server.url())
    }

    #[tokio::test]
    async fn generate_returns_url_from_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"created": 1700000000, "data": [{"url": "https://images.example/logo.png", "revised_prompt": "a crisp vector logo"}]}"#,
            )
            .create_async()
            .await;

        let logo = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap();

        assert_eq!(logo.url.as_deref(), Some("https://images.example/logo.png"));
        assert_eq!(logo.prompt, "a logo");
        assert_eq!(logo.revised_prompt.as_deref(), Some("a crisp vector logo"));
        assert_eq!(logo.model, DEFAULT_MODEL);
    }

    #[tokio::test]
    async fn generate_surfaces_b64_payload() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"data": [{"b64_json": "aGVsbG8="}]}"#)
            .create_async()
            .await;

        let logo = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo").with_response_format("b64_json"))
            .await
            .unwrap();

        assert!(logo.url.is_none());
        assert_eq!(logo.image_data.as_deref(), Some("aGVsbG8="));
    }

    #[tokio::test]
    async fn unauthorized_is_auth_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":{"message":"Incorrect API key provided"}}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        match err {
            LogoError::AuthError(message) => {
                assert_eq!(message, "Incorrect API key provided");
            }
            other => panic!("unexpected error variant: {}", other),
        }
    }

    #[tokio::test]
    async fn forbidden_is_auth_error_not_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(403)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::AuthError(_)));
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images/generations")
            .with_status(429)
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::RateLimited(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn server_error_is_service_error_and_not_retried() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/images/generations")
            .with_status(500)
            .with_body("Internal Server Error")
            .expect(1)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::ServiceError(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn malformed_body_is_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::ServiceError(_)));
    }

    #[tokio::test]
    async fn empty_data_is_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_body(r#"{"data": []}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::ServiceError(_)));
    }

    #[tokio::test]
    async fn image_without_url_or_payload_is_service_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_body(r#"{"data": [{"revised_prompt": "a crisp vector logo"}]}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::ServiceError(_)));
    }

    #[tokio::test]
    async fn timeout_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("POST", "/v1/images/generations")
            .with_status(200)
            .with_body_from_request(|_| {
                std::thread::sleep(Duration::from_secs(2));
                br#"{"data": []}"#.to_vec()
            })
            .create_async()
            .await;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(300))
            .build()
            .unwrap();
        let client = ImagesClient::new(http, "test-key".to_string(), server.url());

        let err = client
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::NetworkError(_)));
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_network_error() {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(500))
            .build()
            .unwrap();
        let client = ImagesClient::new(http, "test-key".to_string(), "http://127.0.0.1:9".into());

        let err = client
            .generate(ImageGenerationRequest::new("a logo"))
            .await
            .unwrap_err();

        assert!(matches!(err, LogoError::NetworkError(_)));
    }
}
