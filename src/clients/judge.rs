use crate::error::{self, Result};
use serde::{Deserialize, Serialize};
use std::{env, future::Future, time::Duration};

/// Judge0 status ids: 1 is "In Queue", 2 is "Processing", 3 is "Accepted",
/// everything above is some kind of rejection.
const STATUS_PROCESSING: i64 = 2;
pub const STATUS_ACCEPTED: i64 = 3;

const POLL_INTERVAL: Duration = Duration::from_millis(350);
const MAX_POLLS: u32 = 100;

pub fn language_name(language_id: i64) -> Option<&'static str> {
    match language_id {
        62 => Some("Java"),
        63 => Some("JavaScript"),
        71 => Some("Python"),
        _ => None,
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct JudgeSubmission {
    pub source_code: String,
    pub language_id: i64,
    pub stdin: String,
    pub expected_output: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeStatus {
    pub id: i64,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeResult {
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub compile_output: Option<String>,
    pub status: JudgeStatus,
    pub time: Option<String>,
    pub memory: Option<f64>,
}

impl JudgeResult {
    #[inline]
    pub fn accepted(&self) -> bool {
        self.status.id == STATUS_ACCEPTED
    }

    #[inline]
    fn judged(&self) -> bool {
        self.status.id > STATUS_PROCESSING
    }
}

pub trait JudgeTrait: Send + Sync + 'static {
    fn run(
        &self,
        submissions: Vec<JudgeSubmission>,
    ) -> impl Future<Output = Result<Vec<JudgeResult>>> + Send;
}

pub struct Judge0Client {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Judge0Client {
    pub fn from_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: env::var("JUDGE0_URL").expect("JUDGE0_URL is not set"),
            api_key: env::var("JUDGE0_API_KEY").ok(),
        }
    }

    fn with_auth(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => builder.header("X-Auth-Token", key),
            None => builder,
        }
    }
}

#[derive(Serialize)]
struct Batch<'a> {
    submissions: &'a [JudgeSubmission],
}

#[derive(Deserialize)]
struct Token {
    token: String,
}

#[derive(Deserialize)]
struct BatchResults {
    submissions: Vec<JudgeResult>,
}

impl JudgeTrait for Judge0Client {
    async fn run(&self, submissions: Vec<JudgeSubmission>) -> Result<Vec<JudgeResult>> {
        let res = self
            .with_auth(self.client.post(format!("{}/submissions/batch", self.base_url)))
            .query(&[("base64_encoded", "false")])
            .json(&Batch {
                submissions: &submissions,
            })
            .send()
            .await
            .map_err(|error| {
                warn!("failed to submit batch to judge: {error}");
                error::JUDGE_ERROR
            })?;

        if !res.status().is_success() {
            warn!(status = %res.status(), "judge rejected batch submission");
            return Err(error::JUDGE_ERROR);
        }

        let tokens: Vec<Token> = res.json().await.map_err(|error| {
            warn!("malformed judge token response: {error}");
            error::JUDGE_ERROR
        })?;

        let tokens = tokens
            .iter()
            .map(|t| t.token.as_str())
            .collect::<Vec<_>>()
            .join(",");

        for _ in 0..MAX_POLLS {
            let res = self
                .with_auth(
                    self.client
                        .get(format!("{}/submissions/batch", self.base_url)),
                )
                .query(&[
                    ("tokens", tokens.as_str()),
                    ("base64_encoded", "false"),
                    (
                        "fields",
                        "stdout,stderr,compile_output,status,time,memory",
                    ),
                ])
                .send()
                .await
                .map_err(|error| {
                    warn!("failed to poll judge: {error}");
                    error::JUDGE_ERROR
                })?;

            if !res.status().is_success() {
                warn!(status = %res.status(), "judge rejected batch poll");
                return Err(error::JUDGE_ERROR);
            }

            let results: BatchResults = res.json().await.map_err(|error| {
                warn!("malformed judge poll response: {error}");
                error::JUDGE_ERROR
            })?;

            if results.submissions.iter().all(JudgeResult::judged) {
                return Ok(results.submissions);
            }

            tokio::time::sleep(POLL_INTERVAL).await;
        }

        warn!("judge did not finish within the poll budget");
        Err(error::JUDGE_ERROR)
    }
}
