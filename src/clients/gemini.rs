use crate::error::{self, Result};
use serde::{Deserialize, Serialize};
use std::{env, future::Future};

const DEFAULT_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.0-flash";

#[derive(Serialize)]
struct GenerateRequest<'a> {
    #[serde(rename = "systemInstruction")]
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

pub trait AiTrait: Send + Sync + 'static {
    fn generate(
        &self,
        system_instruction: &str,
        message: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}

pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    pub fn from_env() -> Self {
        let api_key = env::var("GEMINI_API_KEY").ok();

        if api_key.is_none() {
            warn!("GEMINI_API_KEY is not set, the tutor endpoint will be unavailable");
        }

        Self {
            client: reqwest::Client::new(),
            base_url: env::var("GEMINI_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned()),
            model: env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_owned()),
            api_key,
        }
    }
}

impl AiTrait for GeminiClient {
    async fn generate(&self, system_instruction: &str, message: &str) -> Result<String> {
        let Some(api_key) = &self.api_key else {
            return Err(error::AI_NOT_CONFIGURED);
        };

        let request = GenerateRequest {
            system_instruction: Content {
                parts: vec![Part {
                    text: system_instruction,
                }],
            },
            contents: vec![Content {
                parts: vec![Part { text: message }],
            }],
        };

        let res = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|error| {
                warn!("failed to reach the ai service: {error}");
                error::AI_ERROR
            })?;

        if !res.status().is_success() {
            warn!(status = %res.status(), "ai service returned an error");
            return Err(error::AI_ERROR);
        }

        let response: GenerateResponse = res.json().await.map_err(|error| {
            warn!("malformed ai response: {error}");
            error::AI_ERROR
        })?;

        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or(error::AI_ERROR)
    }
}
