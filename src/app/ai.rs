//! Bridge to the Google Gemini generative API.
//!
//! The credential lives in process memory only and is never written to
//! disk. Key handling is a small state machine: no key -> prompt -> the
//! key validates (cached) or it doesn't (cleared, so the next attempt
//! prompts again). All calls are blocking and run on the UI thread; a
//! failure is reported once to the caller and nothing is retried.

use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Content,
}

/// Holds the session credential and performs the API round trips.
#[derive(Debug, Default)]
pub struct AiBridge {
    api_key: Option<String>,
}

impl AiBridge {
    pub fn new() -> Self {
        Self { api_key: None }
    }

    pub fn has_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Validate a freshly entered key against the live service and cache it.
    pub fn set_key(&mut self, key: String) -> Result<()> {
        self.set_key_with(key, validate_key)
    }

    /// Same as `set_key` but with an injectable validator. A rejected key
    /// leaves the bridge without a credential, so the next attempt
    /// re-prompts.
    pub fn set_key_with<F>(&mut self, key: String, validate: F) -> Result<()>
    where
        F: FnOnce(&str) -> Result<()>,
    {
        self.api_key = None;
        validate(&key)?;
        self.api_key = Some(key);
        Ok(())
    }

    /// Blocking summarize/explain round trip for the cached key.
    pub fn summarize(&self, content: &str) -> Result<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or_else(|| AppError::Ai("no API key set".to_string()))?;

        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: build_prompt(content),
                }],
            }],
        };

        let url = format!(
            "{}/models/{}:generateContent?key={}",
            API_BASE, GEMINI_MODEL, key
        );
        let response = minreq::post(url)
            .with_header("Content-Type", "application/json")
            .with_timeout(REQUEST_TIMEOUT_SECS)
            .with_json(&request)?
            .send()?;

        if response.status_code != 200 {
            return Err(AppError::Ai(format!(
                "service returned HTTP {}: {}",
                response.status_code,
                response.as_str().unwrap_or("")
            )));
        }

        extract_text(response.json()?)
    }
}

/// Probe the model metadata endpoint to check that a key is accepted.
pub fn validate_key(key: &str) -> Result<()> {
    let url = format!("{}/models/{}?key={}", API_BASE, GEMINI_MODEL, key);
    let response = minreq::get(url)
        .with_timeout(REQUEST_TIMEOUT_SECS)
        .send()?;

    if response.status_code == 200 {
        Ok(())
    } else {
        Err(AppError::InvalidApiKey(format!(
            "HTTP {}",
            response.status_code
        )))
    }
}

/// Fixed summarize/explain prompt wrapped around the user's selection.
pub fn build_prompt(content: &str) -> String {
    format!(
        "Please act as a helpful assistant. Analyze the following text or code snippet \
         and provide a concise explanation or summary. If it's code, explain what it does. \
         If it's text, summarize its main points.\n\n\
         Content to analyze:\n---\n{}\n---\n",
        content
    )
}

/// Pull the first candidate's text out of a generate response.
pub fn extract_text(response: GenerateResponse) -> Result<String> {
    let text = response
        .candidates
        .into_iter()
        .next()
        .map(|candidate| {
            candidate
                .content
                .parts
                .into_iter()
                .map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        Err(AppError::Ai("empty response from service".to_string()))
    } else {
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_key_returns_to_no_key() {
        let mut bridge = AiBridge::new();
        let result = bridge.set_key_with("bad-key".to_string(), |_| {
            Err(AppError::InvalidApiKey("HTTP 400".to_string()))
        });
        assert!(result.is_err());
        assert!(!bridge.has_key());

        // A later attempt with a valid key succeeds.
        bridge
            .set_key_with("good-key".to_string(), |_| Ok(()))
            .unwrap();
        assert!(bridge.has_key());
    }

    #[test]
    fn test_new_key_replaces_old_only_on_success() {
        let mut bridge = AiBridge::new();
        bridge.set_key_with("first".to_string(), |_| Ok(())).unwrap();
        let _ = bridge.set_key_with("second".to_string(), |_| {
            Err(AppError::InvalidApiKey("HTTP 403".to_string()))
        });
        // The old key is discarded before validation; a failed swap means
        // no credential at all.
        assert!(!bridge.has_key());
    }

    #[test]
    fn test_summarize_without_key_is_error() {
        let bridge = AiBridge::new();
        let err = bridge.summarize("anything").unwrap_err();
        assert!(matches!(err, AppError::Ai(_)));
    }

    #[test]
    fn test_build_prompt_embeds_content() {
        let prompt = build_prompt("fn main() {}");
        assert!(prompt.contains("fn main() {}"));
        assert!(prompt.contains("concise explanation or summary"));
    }

    #[test]
    fn test_extract_text_joins_parts() {
        let response = GenerateResponse {
            candidates: vec![Candidate {
                content: Content {
                    parts: vec![
                        Part {
                            text: "Hello ".to_string(),
                        },
                        Part {
                            text: "world".to_string(),
                        },
                    ],
                },
            }],
        };
        assert_eq!(extract_text(response).unwrap(), "Hello world");
    }

    #[test]
    fn test_extract_text_empty_is_error() {
        let response = GenerateResponse { candidates: vec![] };
        assert!(matches!(extract_text(response), Err(AppError::Ai(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let request = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "hi".to_string(),
                }],
            }],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"contents":[{"parts":[{"text":"hi"}]}]}"#);
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"A summary."}],"role":"model"},"finishReason":"STOP"}]}"#;
        let response: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(extract_text(response).unwrap(), "A summary.");
    }
}
