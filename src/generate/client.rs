//! Image generation client.
//!
//! [`ImageGenerator`] is the seam between the runner and the external API:
//! one call per prompt, blocking, no retries. [`GeminiClient`] implements it
//! against the Google Generative Language API.

use super::wire::{GenerateContentRequest, GenerateContentResponse};
use crate::config::Settings;
use crate::error::{PosterError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::blocking::Client;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

/// Upper bound for one generation call; image models are slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Image bytes returned by one successful call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Generates one image for one prompt.
pub trait ImageGenerator {
    /// Submit `prompt` at `aspect_ratio` (e.g. "9:16").
    ///
    /// A response without image data is [`PosterError::EmptyResponse`].
    fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<GeneratedImage>;
}

/// Google Gemini image generation client.
pub struct GeminiClient {
    client: Client,
    api_key: SecretString,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(settings: &Settings, api_key: SecretString) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PosterError::Api(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model: settings.model.clone(),
            base_url: settings.base_url.clone(),
        })
    }

    /// `generateContent` endpoint for the configured model.
    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

impl ImageGenerator for GeminiClient {
    fn generate(&self, prompt: &str, aspect_ratio: &str) -> Result<GeneratedImage> {
        let wire_request = GenerateContentRequest::image_prompt(prompt, aspect_ratio);

        tracing::debug!(
            model = %self.model,
            aspect_ratio,
            prompt_chars = prompt.chars().count(),
            "sending image generation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", self.api_key.expose_secret())
            .json(&wire_request)
            .send()
            .map_err(|e| {
                tracing::error!(model = %self.model, error = %e, "image generation request failed");
                PosterError::Api(format!("failed to send request: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            tracing::error!(model = %self.model, status = %status, "image API returned an error");
            return Err(PosterError::Api(format!("provider returned {status}: {body}")));
        }

        let wire_response: GenerateContentResponse = response.json().map_err(|e| {
            tracing::error!(model = %self.model, error = %e, "failed to parse image API response");
            PosterError::Api(format!("failed to parse response: {e}"))
        })?;

        extract_image(&wire_response)
    }
}

/// Decode the first inline image of a response.
pub(crate) fn extract_image(response: &GenerateContentResponse) -> Result<GeneratedImage> {
    let Some(inline) = response.first_inline_data() else {
        tracing::warn!(
            finish_reason = response.finish_reason().unwrap_or("unknown"),
            text = %response.text(),
            "response contained no image data"
        );
        return Err(PosterError::EmptyResponse);
    };

    let bytes = STANDARD
        .decode(inline.data.as_bytes())
        .map_err(|e| PosterError::Api(format!("invalid base64 image data: {e}")))?;

    if bytes.is_empty() {
        return Err(PosterError::EmptyResponse);
    }

    Ok(GeneratedImage {
        bytes,
        mime_type: inline.mime_type.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_endpoint_uses_model_and_trims_slash() {
        let settings = Settings {
            base_url: "https://example.test/v1beta/".to_string(),
            ..Settings::default()
        };
        let client = GeminiClient::new(&settings, SecretString::from("k")).unwrap();

        assert_eq!(
            client.endpoint(),
            "https://example.test/v1beta/models/gemini-3-pro-image-preview:generateContent"
        );
    }

    #[test]
    fn test_extract_image_decodes_base64() {
        let resp = response(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": "aGVsbG8="}}]}}]}"#,
        );
        let image = extract_image(&resp).unwrap();

        assert_eq!(image.bytes, b"hello");
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_extract_image_without_inline_data_is_empty_response() {
        let resp = response(r#"{"candidates": [{"content": {"parts": [{"text": "no"}]}}]}"#);
        assert!(matches!(extract_image(&resp), Err(PosterError::EmptyResponse)));
    }

    #[test]
    fn test_extract_image_with_empty_payload_is_empty_response() {
        let resp = response(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"mimeType": "image/png", "data": ""}}]}}]}"#,
        );
        assert!(matches!(extract_image(&resp), Err(PosterError::EmptyResponse)));
    }

    #[test]
    fn test_extract_image_rejects_bad_base64() {
        let resp = response(
            r#"{"candidates": [{"content": {"parts": [{"inlineData": {"data": "@@not base64@@"}}]}}]}"#,
        );
        assert!(matches!(extract_image(&resp), Err(PosterError::Api(_))));
    }
}
