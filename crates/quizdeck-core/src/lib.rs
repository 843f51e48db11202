//! quizdeck-core: quiz session lifecycle.
//!
//! This crate defines the data model, the collaborator trait, and the session
//! state machine that takes an exam file from selection through scoring.

pub mod clock;
pub mod error;
pub mod intake;
pub mod model;
pub mod render;
pub mod session;
pub mod submission;
pub mod traits;

pub use error::{IntakeError, ServiceError};
pub use session::{Phase, QuizSession};
pub use traits::{Credential, QuizService, SubmitRequest};
