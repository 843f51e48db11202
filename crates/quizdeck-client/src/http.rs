//! HTTP implementation of the quiz parsing/scoring service.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use quizdeck_core::error::ServiceError;
use quizdeck_core::model::{ResultData, StartedQuiz, UploadedFile};
use quizdeck_core::traits::{QuizService, SubmitRequest};

use crate::config::QuizdeckConfig;

pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// `QuizService` backed by the quiz REST API.
pub struct HttpQuizService {
    base_url: String,
    start_path: String,
    submit_path: String,
    max_questions: Option<u32>,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpQuizService {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            start_path: "/quiz/start".to_string(),
            submit_path: "/quiz/submit".to_string(),
            max_questions: None,
            timeout_secs,
            client: build_client(timeout_secs),
        }
    }

    pub fn from_config(config: &QuizdeckConfig) -> Self {
        let mut service = Self::with_timeout(&config.api_base_url, config.request_timeout_secs);
        service.start_path = config.start_path.clone();
        service.submit_path = config.submit_path.clone();
        service.max_questions = config.max_questions;
        service
    }

    /// Cap the number of questions the service draws from the file.
    pub fn with_max_questions(mut self, max_questions: u32) -> Self {
        self.max_questions = Some(max_questions);
        self
    }

    fn start_url(&self) -> String {
        let url = format!("{}{}", self.base_url, self.start_path);
        match self.max_questions {
            Some(n) => format!("{url}?max_questions={n}"),
            None => url,
        }
    }
}

#[async_trait]
impl QuizService for HttpQuizService {
    #[instrument(skip(self, file), fields(file = %file.name, bytes = file.raw_text.len()))]
    async fn start_quiz(&self, file: &UploadedFile) -> Result<StartedQuiz, ServiceError> {
        let part = reqwest::multipart::Part::text(file.raw_text.clone())
            .file_name(file.name.clone())
            .mime_str("text/plain")
            .map_err(|e| ServiceError::Network(e.to_string()))?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(self.start_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_secs))?;

        let started: StartedQuiz = decode(response).await?;
        tracing::debug!(
            questions = started.questions.len(),
            warnings = started.warnings.len(),
            "quiz started"
        );
        Ok(started)
    }

    #[instrument(
        skip(self, request),
        fields(quiz = %request.payload.quiz_name, guest = request.bearer_token.is_none())
    )]
    async fn submit_quiz(&self, request: &SubmitRequest) -> Result<ResultData, ServiceError> {
        let mut req = self
            .client
            .post(format!("{}{}", self.base_url, self.submit_path))
            .header("content-type", "application/json");

        if let Some(token) = &request.bearer_token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let response = req
            .json(&request.payload)
            .send()
            .await
            .map_err(|e| send_error(e, self.timeout_secs))?;

        decode(response).await
    }
}

pub(crate) fn build_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .expect("failed to build HTTP client")
}

pub(crate) fn send_error(e: reqwest::Error, timeout_secs: u64) -> ServiceError {
    if e.is_timeout() {
        ServiceError::Timeout(timeout_secs)
    } else {
        ServiceError::Network(e.to_string())
    }
}

/// Turn a response into `T`, or into a classified error for non-2xx statuses.
pub(crate) async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ServiceError> {
    let status = response.status().as_u16();
    if !response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body);
        tracing::debug!(status, detail = ?detail, "service returned an error");
        return Err(if status == 401 {
            ServiceError::Unauthorized(detail)
        } else {
            ServiceError::Api { status, detail }
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

/// Pull a string `detail` out of an error body.
///
/// Validation failures carry a structured `detail`; those are not shown.
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .filter(|d| !d.is_empty())
        .map(String::from)
}
