//! Google `generateContent` wire format, reduced to what image generation needs.

use serde::{Deserialize, Serialize};

// -- Request types --

/// `generateContent` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

impl GenerateContentRequest {
    /// Single user turn asking for text and image output at `aspect_ratio`.
    pub fn image_prompt(prompt: &str, aspect_ratio: &str) -> Self {
        Self {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt.to_string()),
                    inline_data: None,
                }],
            }],
            generation_config: GenerationConfig {
                response_modalities: vec!["TEXT".to_string(), "IMAGE".to_string()],
                image_config: ImageConfig {
                    aspect_ratio: aspect_ratio.to_string(),
                },
            },
        }
    }
}

/// Content object containing role and parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

/// One part of a content object. Parts of other kinds (thoughts, function
/// calls) deserialize with both fields empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
}

/// Inline binary payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    /// MIME type (e.g. "image/png").
    #[serde(default)]
    pub mime_type: String,
    /// Base64-encoded data.
    pub data: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_modalities: Vec<String>,
    pub image_config: ImageConfig,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageConfig {
    pub aspect_ratio: String,
}

// -- Response types --

/// `generateContent` response body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

impl GenerateContentResponse {
    /// All parts across candidates, in order.
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .iter()
            .filter_map(|c| c.content.as_ref())
            .flat_map(|content| content.parts.iter())
    }

    /// The first part carrying inline data.
    pub fn first_inline_data(&self) -> Option<&InlineData> {
        self.parts().find_map(|part| part.inline_data.as_ref())
    }

    /// Concatenated text parts, useful when the model declined to draw.
    pub fn text(&self) -> String {
        self.parts()
            .filter_map(|part| part.text.as_deref())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .iter()
            .find_map(|c| c.finish_reason.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_in_api_shape() {
        let request = GenerateContentRequest::image_prompt("画一张海报", "9:16");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "contents": [{"role": "user", "parts": [{"text": "画一张海报"}]}],
                "generationConfig": {
                    "responseModalities": ["TEXT", "IMAGE"],
                    "imageConfig": {"aspectRatio": "9:16"}
                }
            })
        );
    }

    #[test]
    fn test_response_finds_first_inline_part() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{
                "candidates": [{
                    "content": {"role": "model", "parts": [
                        {"text": "Here is your poster"},
                        {"inlineData": {"mimeType": "image/png", "data": "AAAA"}},
                        {"inlineData": {"mimeType": "image/png", "data": "BBBB"}}
                    ]},
                    "finishReason": "STOP"
                }],
                "usageMetadata": {"totalTokenCount": 10}
            }"#,
        )
        .unwrap();

        let inline = response.first_inline_data().unwrap();
        assert_eq!(inline.data, "AAAA");
        assert_eq!(inline.mime_type, "image/png");
        assert_eq!(response.text(), "Here is your poster");
        assert_eq!(response.finish_reason(), Some("STOP"));
    }

    #[test]
    fn test_response_without_image() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "I can't draw that"}]}, "finishReason": "SAFETY"}]}"#,
        )
        .unwrap();
        assert!(response.first_inline_data().is_none());
        assert_eq!(response.finish_reason(), Some("SAFETY"));

        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(empty.first_inline_data().is_none());
        assert_eq!(empty.text(), "");
    }
}
