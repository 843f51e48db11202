//! Quiz session state machine.
//!
//! `QuizSession` is the single mutable aggregate for one attempt at one exam
//! file. All mutation goes through the named transitions below; the session
//! is the only caller of [`QuizService`].
//!
//! Each network call is split into `begin_*` / `finish_*` halves so a driver
//! can run the request elsewhere. Tickets carry the file-selection
//! generation; a completion for an older generation, or one arriving when the
//! session is no longer waiting for it, is dropped. `start_quiz` and
//! `submit_quiz` compose both halves for callers that simply await.

use std::fmt;
use std::path::Path;

use tokio::time::Instant;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::clock;
use crate::error::{IntakeError, ServiceError};
use crate::intake::{FileIntake, ReadTicket};
use crate::model::{AnswerMap, Question, ResultData, StartedQuiz, UploadedFile};
use crate::render::{render, DisplayModel};
use crate::submission::build_request;
use crate::traits::{Credential, QuizService, SubmitRequest};

/// Error shown when a quiz is started without a file.
pub const NO_FILE_SELECTED: &str = "Select a .txt file";

const START_TRANSPORT_FALLBACK: &str = "Error loading quiz";
const SUBMIT_TRANSPORT_FALLBACK: &str = "Error submitting quiz";

/// Named state of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Loading,
    Ready,
    Submitting,
    Finished,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::Loading => write!(f, "loading"),
            Phase::Ready => write!(f, "ready"),
            Phase::Submitting => write!(f, "submitting"),
            Phase::Finished => write!(f, "finished"),
        }
    }
}

/// An in-flight start-quiz call.
#[derive(Debug, Clone)]
pub struct StartTicket {
    generation: u64,
    file: UploadedFile,
}

impl StartTicket {
    /// The file to upload.
    pub fn file(&self) -> &UploadedFile {
        &self.file
    }
}

/// An in-flight submit-quiz call.
#[derive(Debug, Clone)]
pub struct SubmitTicket {
    generation: u64,
    request: SubmitRequest,
}

impl SubmitTicket {
    /// The request to send.
    pub fn request(&self) -> &SubmitRequest {
        &self.request
    }
}

/// One user's attempt at a single uploaded quiz file.
#[derive(Debug)]
pub struct QuizSession {
    id: Uuid,
    phase: Phase,
    intake: FileIntake,
    questions: Vec<Question>,
    answers: AnswerMap,
    started_at: Option<Instant>,
    warnings: Vec<String>,
    error: Option<String>,
    result: Option<ResultData>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: Phase::Idle,
            intake: FileIntake::new(),
            questions: Vec::new(),
            answers: AnswerMap::new(),
            started_at: None,
            warnings: Vec::new(),
            error: None,
            result: None,
        }
    }

    // -----------------------------------------------------------------------
    // Read access
    // -----------------------------------------------------------------------

    /// Identifier of the logical session; changes on every file selection.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The active uploaded file, once its read has completed.
    pub fn file(&self) -> Option<&UploadedFile> {
        self.intake.current()
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&ResultData> {
        self.result.as_ref()
    }

    /// Display model of the finished session.
    pub fn display(&self) -> Option<DisplayModel> {
        self.result
            .as_ref()
            .map(|result| render(result, &self.questions))
    }

    // -----------------------------------------------------------------------
    // File selection
    // -----------------------------------------------------------------------

    /// Select a file from disk, or deselect with `None`.
    ///
    /// Starts a logically new session: questions, answers, result, warnings
    /// and error are cleared before anything else happens. The returned
    /// ticket must be read and handed back through [`Self::file_read`].
    pub fn select_file(&mut self, path: Option<&Path>) -> Option<ReadTicket> {
        self.reset();
        self.intake.select(path)
    }

    /// Select a file whose contents are already in memory.
    pub fn select_uploaded(&mut self, file: UploadedFile) {
        self.reset();
        self.intake.select_in_memory(file);
    }

    /// Apply a completed file read. Returns `true` if the file became active.
    ///
    /// Stale reads are ignored. A failed read leaves no active file and
    /// records the failure in `error`.
    pub fn file_read(
        &mut self,
        ticket: &ReadTicket,
        read: Result<UploadedFile, IntakeError>,
    ) -> bool {
        match self.intake.complete(ticket, read) {
            Ok(applied) => applied,
            Err(e) => {
                self.error = Some(e.to_string());
                false
            }
        }
    }

    /// Select and read a file in one step.
    pub async fn load_file(&mut self, path: &Path) -> bool {
        let Some(ticket) = self.select_file(Some(path)) else {
            return false;
        };
        let read = ticket.read().await;
        self.file_read(&ticket, read)
    }

    fn reset(&mut self) {
        self.id = Uuid::new_v4();
        self.phase = Phase::Idle;
        self.questions.clear();
        self.answers.clear();
        self.started_at = None;
        self.warnings.clear();
        self.error = None;
        self.result = None;
        debug!(session = %self.id, "session reset");
    }

    // -----------------------------------------------------------------------
    // Start
    // -----------------------------------------------------------------------

    /// `Idle -> Loading`. Returns `None` when the transition does not happen.
    ///
    /// Without an active file this records [`NO_FILE_SELECTED`] and stays
    /// `Idle`; no call must be made.
    pub fn begin_start(&mut self) -> Option<StartTicket> {
        if self.phase != Phase::Idle {
            debug!(phase = %self.phase, "start ignored outside idle");
            return None;
        }
        let Some(file) = self.intake.current().cloned() else {
            self.error = Some(NO_FILE_SELECTED.to_string());
            return None;
        };

        self.phase = Phase::Loading;
        self.error = None;
        self.warnings.clear();
        self.result = None;
        debug!(session = %self.id, file = %file.name, "loading quiz");

        Some(StartTicket {
            generation: self.intake.generation(),
            file,
        })
    }

    /// `Loading -> Ready` on success, `Loading -> Idle` on failure.
    ///
    /// Returns `false` if the completion was stale and ignored.
    pub fn finish_start(
        &mut self,
        ticket: StartTicket,
        outcome: Result<StartedQuiz, ServiceError>,
    ) -> bool {
        if ticket.generation != self.intake.generation() || self.phase != Phase::Loading {
            warn!(phase = %self.phase, "discarding stale start-quiz response");
            return false;
        }

        match outcome {
            Ok(started) => {
                if !started.warnings.is_empty() {
                    warn!(count = started.warnings.len(), "quiz file has warnings");
                }
                self.questions = started.questions;
                self.answers.clear();
                self.warnings = started.warnings;
                self.started_at = Some(clock::start());
                self.phase = Phase::Ready;
                debug!(session = %self.id, questions = self.questions.len(), "quiz ready");
            }
            Err(e) => {
                self.error = Some(failure_message(&e, Call::Start));
                self.questions.clear();
                self.phase = Phase::Idle;
                debug!(session = %self.id, error = %e, "quiz failed to load");
            }
        }
        true
    }

    /// Run the start transition against `service`.
    #[instrument(skip_all, fields(session = %self.id))]
    pub async fn start_quiz(&mut self, service: &dyn QuizService) -> bool {
        let Some(ticket) = self.begin_start() else {
            return false;
        };
        let outcome = service.start_quiz(ticket.file()).await;
        self.finish_start(ticket, outcome)
    }

    // -----------------------------------------------------------------------
    // Answering
    // -----------------------------------------------------------------------

    /// Record `option` as the answer to the question with `question_text`.
    ///
    /// Only applies while `Ready` and only for a question in the current set.
    /// The option itself is not checked against the question's options.
    pub fn select_answer(&mut self, question_text: &str, option: &str) -> bool {
        if self.phase != Phase::Ready {
            debug!(phase = %self.phase, "answer ignored outside ready");
            return false;
        }
        if !self.questions.iter().any(|q| q.text == question_text) {
            debug!(question = question_text, "answer for unknown question ignored");
            return false;
        }
        self.answers.upsert(question_text, option);
        true
    }

    // -----------------------------------------------------------------------
    // Submit
    // -----------------------------------------------------------------------

    /// `Ready -> Submitting`. A no-op unless `Ready` with at least one question.
    pub fn begin_submit(&mut self, credential: Option<&Credential>) -> Option<SubmitTicket> {
        if self.phase != Phase::Ready || self.questions.is_empty() {
            debug!(phase = %self.phase, questions = self.questions.len(), "submit ignored");
            return None;
        }

        let time_spent = clock::elapsed_seconds(self.started_at);
        let request = build_request(self, credential, time_spent);
        self.phase = Phase::Submitting;
        self.error = None;
        debug!(
            session = %self.id,
            time_spent,
            answered = self.answers.len(),
            guest = request.bearer_token.is_none(),
            "submitting quiz"
        );

        Some(SubmitTicket {
            generation: self.intake.generation(),
            request,
        })
    }

    /// `Submitting -> Finished` on success, `Submitting -> Ready` on failure.
    ///
    /// Answers are preserved on failure so the user can retry.
    pub fn finish_submit(
        &mut self,
        ticket: SubmitTicket,
        outcome: Result<ResultData, ServiceError>,
    ) -> bool {
        if ticket.generation != self.intake.generation() || self.phase != Phase::Submitting {
            warn!(phase = %self.phase, "discarding stale submit-quiz response");
            return false;
        }

        match outcome {
            Ok(result) => {
                debug!(session = %self.id, score = result.total_score, "quiz finished");
                self.result = Some(result);
                self.phase = Phase::Finished;
            }
            Err(e) => {
                self.error = Some(failure_message(&e, Call::Submit));
                self.phase = Phase::Ready;
                debug!(session = %self.id, error = %e, "submission failed");
            }
        }
        true
    }

    /// Run the submit transition against `service`.
    #[instrument(skip_all, fields(session = %self.id))]
    pub async fn submit_quiz(
        &mut self,
        service: &dyn QuizService,
        credential: Option<&Credential>,
    ) -> bool {
        let Some(ticket) = self.begin_submit(credential) else {
            return false;
        };
        let outcome = service.submit_quiz(ticket.request()).await;
        self.finish_submit(ticket, outcome)
    }
}

#[derive(Clone, Copy)]
enum Call {
    Start,
    Submit,
}

/// The message stored in `error` after a failed call.
fn failure_message(err: &ServiceError, call: Call) -> String {
    if let Some(detail) = err.detail() {
        return detail.to_string();
    }
    match (err.status(), call) {
        (Some(status), Call::Start) => format!("API Error {status}"),
        (Some(status), Call::Submit) => format!("Submission Error {status}"),
        (None, Call::Start) => START_TRANSPORT_FALLBACK.to_string(),
        (None, Call::Submit) => SUBMIT_TRANSPORT_FALLBACK.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use async_trait::async_trait;

    /// Service double that replays fixed outcomes and records calls.
    struct ScriptedService {
        start: Result<StartedQuiz, ServiceError>,
        submit: Result<ResultData, ServiceError>,
        start_calls: AtomicU32,
        submit_calls: AtomicU32,
        last_submit: Mutex<Option<SubmitRequest>>,
    }

    impl ScriptedService {
        fn new(
            start: Result<StartedQuiz, ServiceError>,
            submit: Result<ResultData, ServiceError>,
        ) -> Self {
            Self {
                start,
                submit,
                start_calls: AtomicU32::new(0),
                submit_calls: AtomicU32::new(0),
                last_submit: Mutex::new(None),
            }
        }

        fn last_submit(&self) -> Option<SubmitRequest> {
            self.last_submit.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl QuizService for ScriptedService {
        async fn start_quiz(&self, _file: &UploadedFile) -> Result<StartedQuiz, ServiceError> {
            self.start_calls.fetch_add(1, Ordering::Relaxed);
            self.start.clone()
        }

        async fn submit_quiz(&self, request: &SubmitRequest) -> Result<ResultData, ServiceError> {
            self.submit_calls.fetch_add(1, Ordering::Relaxed);
            *self.last_submit.lock().unwrap() = Some(request.clone());
            self.submit.clone()
        }
    }

    fn one_question() -> StartedQuiz {
        StartedQuiz {
            questions: vec![Question {
                text: "Q1?".into(),
                options: vec!["A".into(), "B".into()],
            }],
            warnings: vec!["line 5 ignored".into()],
        }
    }

    fn two_questions() -> StartedQuiz {
        StartedQuiz {
            questions: vec![
                Question {
                    text: "Q1?".into(),
                    options: vec!["A".into(), "B".into()],
                },
                Question {
                    text: "Q2?".into(),
                    options: vec!["X".into(), "Y".into(), "Z".into()],
                },
            ],
            warnings: vec![],
        }
    }

    fn scored() -> ResultData {
        ResultData {
            total_score: 1.0,
            max_score: 1.0,
            correct_count: 1,
            wrong_count: 0,
            unanswered_count: 0,
            total_questions: Some(1),
            score_percentage: Some(100.0),
            per_question_results: vec![],
        }
    }

    fn with_file() -> QuizSession {
        let mut session = QuizSession::new();
        session.select_uploaded(UploadedFile::new("exam.txt", "Q1?\n*A\nB\n"));
        session
    }

    #[tokio::test]
    async fn start_without_file_stays_idle_and_makes_no_call() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = QuizSession::new();

        assert!(!session.start_quiz(&service).await);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.error(), Some(NO_FILE_SELECTED));
        assert_eq!(service.start_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn successful_start_with_warnings_is_ready() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();

        assert!(session.start_quiz(&service).await);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.questions().len(), 1);
        assert_eq!(session.warnings(), ["line 5 ignored".to_string()]);
        assert!(session.started_at().is_some());
        assert!(session.error().is_none());
    }

    #[tokio::test]
    async fn failed_start_returns_to_idle_with_detail() {
        let service = ScriptedService::new(
            Err(ServiceError::Api {
                status: 400,
                detail: Some("File errors: no questions".into()),
            }),
            Ok(scored()),
        );
        let mut session = with_file();

        assert!(session.start_quiz(&service).await);
        assert_eq!(session.phase(), Phase::Idle);
        assert_eq!(session.error(), Some("File errors: no questions"));
        assert!(session.questions().is_empty());
        assert!(session.started_at().is_none());
    }

    #[tokio::test]
    async fn start_fallback_messages() {
        let service = ScriptedService::new(
            Err(ServiceError::Api {
                status: 413,
                detail: None,
            }),
            Ok(scored()),
        );
        let mut session = with_file();
        session.start_quiz(&service).await;
        assert_eq!(session.error(), Some("API Error 413"));

        let service = ScriptedService::new(
            Err(ServiceError::Network("connection refused".into())),
            Ok(scored()),
        );
        let mut session = with_file();
        session.start_quiz(&service).await;
        assert_eq!(session.error(), Some("Error loading quiz"));
    }

    #[tokio::test]
    async fn answers_last_write_wins_per_question() {
        let service = ScriptedService::new(Ok(two_questions()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;

        assert!(session.select_answer("Q1?", "A"));
        assert!(session.select_answer("Q2?", "Y"));
        assert!(session.select_answer("Q1?", "B"));

        assert_eq!(session.answers().len(), 2);
        assert_eq!(session.answers().get("Q1?"), Some("B"));
        assert_eq!(session.answers().get("Q2?"), Some("Y"));
    }

    #[tokio::test]
    async fn answers_only_for_known_questions_while_ready() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        assert!(!session.select_answer("Q1?", "A"));

        session.start_quiz(&service).await;
        assert!(!session.select_answer("Not a question", "A"));
        assert!(session.answers().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn submit_builds_payload_with_elapsed_time() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.select_answer("Q1?", "B");

        tokio::time::advance(Duration::from_millis(42_300)).await;
        assert!(session.submit_quiz(&service, None).await);

        let sent = service.last_submit().unwrap();
        assert_eq!(sent.payload.time_spent_seconds, 42);
        assert_eq!(sent.payload.answered_questions.len(), 1);
        assert_eq!(sent.payload.answered_questions[0].question, "Q1?");
        assert_eq!(sent.payload.answered_questions[0].answer, "B");
        assert_eq!(sent.payload.original_file_content, "Q1?\n*A\nB\n");
        assert!(sent.bearer_token.is_none());

        assert_eq!(session.phase(), Phase::Finished);
        assert!(session.result().is_some());
        assert!(session.display().is_some());
    }

    #[tokio::test]
    async fn submit_with_nothing_answered_sends_empty_answers() {
        let service = ScriptedService::new(Ok(two_questions()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.submit_quiz(&service, None).await;

        let sent = service.last_submit().unwrap();
        assert_eq!(sent.payload.answered_questions.len(), 2);
        assert!(sent
            .payload
            .answered_questions
            .iter()
            .all(|a| a.answer.is_empty()));
    }

    #[tokio::test]
    async fn submit_attaches_credential() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let credential = Credential {
            token: "jwt".into(),
            username: "mario".into(),
            is_admin: false,
        };
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.submit_quiz(&service, Some(&credential)).await;

        assert_eq!(
            service.last_submit().unwrap().bearer_token.as_deref(),
            Some("jwt")
        );
    }

    #[tokio::test]
    async fn failed_submit_returns_to_ready_preserving_answers() {
        let service = ScriptedService::new(
            Ok(one_question()),
            Err(ServiceError::Api {
                status: 500,
                detail: Some("scoring unavailable".into()),
            }),
        );
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.select_answer("Q1?", "B");
        let before = session.answers().clone();

        assert!(session.submit_quiz(&service, None).await);
        assert_eq!(session.phase(), Phase::Ready);
        assert_eq!(session.error(), Some("scoring unavailable"));
        assert_eq!(session.answers(), &before);
        assert!(session.result().is_none());

        // Retry is allowed.
        assert!(session.begin_submit(None).is_some());
    }

    #[tokio::test]
    async fn submit_fallback_messages() {
        let service = ScriptedService::new(
            Ok(one_question()),
            Err(ServiceError::Api {
                status: 502,
                detail: None,
            }),
        );
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.submit_quiz(&service, None).await;
        assert_eq!(session.error(), Some("Submission Error 502"));

        let service = ScriptedService::new(
            Ok(one_question()),
            Err(ServiceError::Decode("expected value".into())),
        );
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.submit_quiz(&service, None).await;
        assert_eq!(session.error(), Some("Error submitting quiz"));
    }

    #[tokio::test]
    async fn submit_guards() {
        let empty = StartedQuiz::default();
        let service = ScriptedService::new(Ok(empty), Ok(scored()));
        let mut session = with_file();

        // Not ready yet.
        assert!(session.begin_submit(None).is_none());

        // Ready but no questions.
        session.start_quiz(&service).await;
        assert_eq!(session.phase(), Phase::Ready);
        assert!(!session.submit_quiz(&service, None).await);
        assert_eq!(service.submit_calls.load(Ordering::Relaxed), 0);
    }

    #[tokio::test]
    async fn no_double_submit() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;

        let ticket = session.begin_submit(None).unwrap();
        assert_eq!(session.phase(), Phase::Submitting);
        assert!(session.begin_submit(None).is_none());
        assert!(session.begin_start().is_none());

        session.finish_submit(ticket, Ok(scored()));
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[tokio::test]
    async fn finished_is_terminal() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.submit_quiz(&service, None).await;

        assert!(!session.select_answer("Q1?", "A"));
        assert!(session.begin_start().is_none());
        assert!(session.begin_submit(None).is_none());
        assert_eq!(session.phase(), Phase::Finished);
    }

    #[tokio::test]
    async fn new_file_while_ready_clears_everything() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.select_answer("Q1?", "A");
        let first_id = session.id();

        session.select_uploaded(UploadedFile::new("other.txt", "Q9?\n*A\nB\n"));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.questions().is_empty());
        assert!(session.answers().is_empty());
        assert!(session.warnings().is_empty());
        assert!(session.error().is_none());
        assert!(session.result().is_none());
        assert!(session.started_at().is_none());
        assert_ne!(session.id(), first_id);
        assert_eq!(session.file().unwrap().name, "other.txt");
    }

    #[tokio::test]
    async fn new_file_after_finish_discards_result() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;
        session.submit_quiz(&service, None).await;
        assert!(session.result().is_some());

        session.select_uploaded(UploadedFile::new("exam.txt", "again"));
        assert!(session.result().is_none());
        assert!(session.start_quiz(&service).await);
        assert_eq!(session.phase(), Phase::Ready);
    }

    #[tokio::test]
    async fn deselection_clears_file() {
        let mut session = with_file();
        assert!(session.select_file(None).is_none());
        assert!(session.file().is_none());
        assert!(session.begin_start().is_none());
        assert_eq!(session.error(), Some(NO_FILE_SELECTED));
    }

    #[tokio::test]
    async fn start_response_after_reselection_is_ignored() {
        let mut session = with_file();
        let ticket = session.begin_start().unwrap();

        session.select_uploaded(UploadedFile::new("other.txt", "other"));
        assert!(!session.finish_start(ticket, Ok(one_question())));
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.questions().is_empty());
    }

    #[tokio::test]
    async fn submit_response_after_reselection_is_ignored() {
        let service = ScriptedService::new(Ok(one_question()), Ok(scored()));
        let mut session = with_file();
        session.start_quiz(&service).await;
        let ticket = session.begin_submit(None).unwrap();

        session.select_uploaded(UploadedFile::new("other.txt", "other"));
        assert!(!session.finish_submit(ticket, Ok(scored())));
        assert!(session.result().is_none());
        assert_eq!(session.phase(), Phase::Idle);
    }

    #[tokio::test]
    async fn load_file_reads_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("exam.txt");
        std::fs::write(&path, "Q1?\n*A\nB\n").unwrap();

        let mut session = QuizSession::new();
        assert!(session.load_file(&path).await);
        assert_eq!(session.file().unwrap().name, "exam.txt");

        assert!(!session.load_file(&dir.path().join("missing.txt")).await);
        assert!(session.file().is_none());
        assert!(session.error().unwrap().contains("missing.txt"));
    }
}
