//! quizdeck-client: HTTP collaborators for quizdeck.
//!
//! Implements `QuizService` over the quiz REST API and provides read-only
//! clients for the identity provider and the statistics store.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod http;
pub mod stats;

pub use auth::IdentityClient;
pub use config::{load_config, load_config_from, QuizdeckConfig};
pub use credentials::CredentialStore;
pub use http::HttpQuizService;
pub use stats::StatsClient;
