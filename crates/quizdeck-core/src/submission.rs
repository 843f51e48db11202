//! Submission builder.
//!
//! Pure functions from the current session state (plus elapsed time and an
//! optional credential) to the request sent to the scoring service.

use crate::model::{
    AnswerMap, AnsweredQuestion, Question, SubmissionPayload, UploadedFile, UNKNOWN_QUIZ_NAME,
};
use crate::session::QuizSession;
use crate::traits::{Credential, SubmitRequest};

/// Assemble the payload for a set of questions and answers.
///
/// Every question yields exactly one entry; unanswered questions carry `""`.
/// The original file text is sent verbatim so the service can re-parse it.
pub fn build_payload(
    file: Option<&UploadedFile>,
    questions: &[Question],
    answers: &AnswerMap,
    time_spent_seconds: u64,
) -> SubmissionPayload {
    let quiz_name = file
        .map(|f| f.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_QUIZ_NAME)
        .to_string();

    SubmissionPayload {
        original_file_content: file.map(|f| f.raw_text.clone()).unwrap_or_default(),
        quiz_name,
        time_spent_seconds,
        answered_questions: questions
            .iter()
            .map(|q| AnsweredQuestion {
                question: q.text.clone(),
                answer: answers.answer_or_empty(&q.text).to_string(),
            })
            .collect(),
    }
}

/// Build the full submit request for a session.
///
/// The bearer token is attached only when a credential is present; guest
/// submissions go out without one.
pub fn build_request(
    session: &QuizSession,
    credential: Option<&Credential>,
    time_spent_seconds: u64,
) -> SubmitRequest {
    SubmitRequest {
        payload: build_payload(
            session.file(),
            session.questions(),
            session.answers(),
            time_spent_seconds,
        ),
        bearer_token: credential.map(|c| c.token.clone()),
    }
}
