pub mod login;
pub mod stats;
pub mod take;
