//! Core data model types for quizdeck.
//!
//! These mirror the JSON shapes exchanged with the quiz parsing/scoring
//! service. Field names on the Rust side describe what the value is; serde
//! renames map them onto the service's wire names.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Quiz name sent when the uploaded file has no usable name.
pub const UNKNOWN_QUIZ_NAME: &str = "Unknown Quiz";

/// A local exam file that has been read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    /// File name as picked by the user (e.g. "networks.txt").
    pub name: String,
    /// Full, verbatim file contents.
    pub raw_text: String,
}

impl UploadedFile {
    pub fn new(name: impl Into<String>, raw_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_text: raw_text.into(),
        }
    }
}

/// A multiple-choice question as returned by the parsing service.
///
/// The question text is its identity: answers and results are joined on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "question")]
    pub text: String,
    pub options: Vec<String>,
}

/// Successful response of the start-quiz call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StartedQuiz {
    #[serde(default)]
    pub questions: Vec<Question>,
    /// Advisory, non-fatal formatting notes about the uploaded file.
    #[serde(default, deserialize_with = "null_as_default")]
    pub warnings: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Chosen option per question text. Absent entries mean "unanswered".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerMap {
    inner: HashMap<String, String>,
}

impl AnswerMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` for `question_text`, replacing any earlier choice.
    pub fn upsert(&mut self, question_text: &str, option: &str) {
        self.inner
            .insert(question_text.to_string(), option.to_string());
    }

    pub fn get(&self, question_text: &str) -> Option<&str> {
        self.inner.get(question_text).map(String::as_str)
    }

    /// The answer to send for a question: the chosen option or `""`.
    pub fn answer_or_empty(&self, question_text: &str) -> &str {
        self.get(question_text).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// One `{question, answer}` entry of a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

/// Body of the submit-quiz call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    pub original_file_content: String,
    pub quiz_name: String,
    #[serde(rename = "time_spent")]
    pub time_spent_seconds: u64,
    #[serde(rename = "questions")]
    pub answered_questions: Vec<AnsweredQuestion>,
}

/// Scored result returned by the scoring service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultData {
    pub total_score: f64,
    pub max_score: f64,
    #[serde(rename = "correct_answers")]
    pub correct_count: u32,
    #[serde(rename = "wrong_answers")]
    pub wrong_count: u32,
    #[serde(rename = "no_answers")]
    pub unanswered_count: u32,
    #[serde(default)]
    pub total_questions: Option<u32>,
    #[serde(default)]
    pub score_percentage: Option<f64>,
    #[serde(rename = "results", default)]
    pub per_question_results: Vec<QuestionResult>,
}

/// Scoring outcome for a single question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionResult {
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub comment: Option<String>,
}
