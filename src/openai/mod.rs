pub mod images_client;

use std::time::Duration;

use crate::{
    config::OpenAiConfig,
    error::{LogoError, Result},
    models::{GeneratedLogo, ImageGenerationRequest, LogoRequest},
    prompt,
};

pub use images_client::ImagesClient;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
const DEFAULT_TIMEOUT_SECS: u64 = 60;

#[derive(Clone, Debug)]
pub struct OpenAiClient {
    images_client: ImagesClient,
}

impl OpenAiClient {
    /// Credentials are an explicit configuration value. A missing key fails
    /// here, before any network call is attempted.
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                LogoError::AuthError(
                    "no API key configured; set OPENAI_API_KEY or use OpenAiConfig::with_api_key"
                        .into(),
                )
            })?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let timeout = Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LogoError::NetworkError(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            images_client: ImagesClient::new(http, api_key, base_url),
        })
    }

    pub fn images(&self) -> &ImagesClient {
        &self.images_client
    }

    /// The whole pipeline for one user action: render the prompt, dispatch it,
    /// return the logo together with the prompt that produced it.
    pub async fn generate_logo(&self, request: &LogoRequest) -> Result<GeneratedLogo> {
        let prompt = prompt::build_prompt(request)?;
        self.images_client
            .generate(ImageGenerationRequest::new(prompt))
            .await
    }
}
