//! Chat backend abstraction
//!
//! The chat widget forwards each user message to a generative-language
//! service and shows whatever text comes back. The service is reached through
//! [`ChatCollaborator`] so the HTTP layer and the tests do not care which
//! backend answers.

use crate::error::AppResult;

pub mod gemini;
pub mod log;

pub use gemini::GeminiClient;
pub use log::ChatLog;

/// Trait for services that answer chat messages
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ChatCollaborator: Send + Sync {
    /// Send one message and wait for the reply text
    ///
    /// Called at most once per submitted message. Implementations must not
    /// retry; any failure is reported as an error and handled by the caller.
    async fn ask(&self, text: &str) -> AppResult<String>;

    /// Collaborator name for logging
    fn name(&self) -> &'static str;
}
