//! Collaborator seams.
//!
//! The session state machine only ever talks to the parsing/scoring service
//! through `QuizService`; `quizdeck-client` provides the HTTP implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ServiceError;
use crate::model::{ResultData, StartedQuiz, SubmissionPayload, UploadedFile};

/// The quiz parsing/scoring service.
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Upload an exam file and receive the question set to present.
    async fn start_quiz(&self, file: &UploadedFile) -> Result<StartedQuiz, ServiceError>;

    /// Submit answers for scoring.
    async fn submit_quiz(&self, request: &SubmitRequest) -> Result<ResultData, ServiceError>;
}

/// A submission ready to send: payload plus the optional bearer token.
///
/// Guest submissions carry no token and must not send an Authorization header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub payload: SubmissionPayload,
    pub bearer_token: Option<String>,
}

/// An identity-provider credential.
///
/// Note: Custom Debug impl masks the token to prevent accidental exposure in logs.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub token: String,
    pub username: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"***")
            .field("username", &self.username)
            .field("is_admin", &self.is_admin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_debug_masks_token() {
        let credential = Credential {
            token: "secret-jwt".into(),
            username: "mario".into(),
            is_admin: false,
        };
        let printed = format!("{credential:?}");
        assert!(!printed.contains("secret-jwt"));
        assert!(printed.contains("mario"));
    }
}
