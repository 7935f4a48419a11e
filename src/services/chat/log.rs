use crate::{
    error::AppResult,
    models::{ChatMessage, FALLBACK_REPLY, GREETING},
};

use super::ChatCollaborator;

/// Conversation shown in the chat widget
///
/// A submission is split into [`ChatLog::begin`] and [`ChatLog::complete`] so
/// callers that share the log behind a lock can release it while the reply is
/// being generated. [`ChatLog::submit`] runs both halves for single-owner use.
#[derive(Debug, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
    pending_replies: usize,
    open: bool,
}

impl Default for ChatLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatLog {
    /// Creates a closed chat holding only the greeting
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::assistant(GREETING)],
            pending_replies: 0,
            open: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Whether a reply is still being generated
    pub fn is_typing(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    /// Records a user message and returns the text to send to the collaborator
    ///
    /// Returns `None`, leaving the log untouched, when the message is blank.
    pub fn begin(&mut self, text: &str) -> Option<String> {
        if text.trim().is_empty() {
            return None;
        }

        self.messages.push(ChatMessage::user(text));
        self.pending_replies += 1;
        Some(text.to_string())
    }

    /// Appends the assistant reply for a submission started with `begin`
    ///
    /// A failed call is logged and replaced by the fallback reply.
    pub fn complete(&mut self, outcome: AppResult<String>) {
        let reply = match outcome {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = %e, "Error generating chat response");
                FALLBACK_REPLY.to_string()
            }
        };

        self.messages.push(ChatMessage::assistant(reply));
        self.pending_replies = self.pending_replies.saturating_sub(1);
    }

    /// Sends a message and waits for the reply
    ///
    /// Returns false when the message was blank and nothing happened.
    pub async fn submit(&mut self, collaborator: &dyn ChatCollaborator, text: &str) -> bool {
        let Some(prompt) = self.begin(text) else {
            return false;
        };

        let outcome = collaborator.ask(&prompt).await;
        self.complete(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::chat::MockChatCollaborator;

    #[test]
    fn test_new_log_has_greeting() {
        let log = ChatLog::new();
        assert_eq!(log.messages().len(), 1);
        assert_eq!(log.messages()[0].message, GREETING);
        assert!(!log.messages()[0].is_user);
        assert!(!log.is_typing());
        assert!(!log.is_open());
    }

    #[tokio::test]
    async fn test_blank_message_makes_no_call() {
        let mut collaborator = MockChatCollaborator::new();
        collaborator.expect_ask().never();

        let mut log = ChatLog::new();
        assert!(!log.submit(&collaborator, "   \n\t").await);
        assert!(!log.submit(&collaborator, "").await);
        assert_eq!(log.messages().len(), 1);
        assert!(!log.is_typing());
    }

    #[tokio::test]
    async fn test_successful_reply_is_appended() {
        let mut collaborator = MockChatCollaborator::new();
        collaborator
            .expect_ask()
            .withf(|text| text == " Is caffeine banned? ")
            .times(1)
            .returning(|_| Ok("Caffeine is on the monitoring program.".to_string()));

        let mut log = ChatLog::new();
        assert!(log.submit(&collaborator, " Is caffeine banned? ").await);

        let messages = log.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[1].message, " Is caffeine banned? ");
        assert!(messages[1].is_user);
        assert_eq!(messages[2].message, "Caffeine is on the monitoring program.");
        assert!(!messages[2].is_user);
        assert!(!log.is_typing());
    }

    #[test]
    fn test_failure_appends_single_fallback() {
        let mut collaborator = MockChatCollaborator::new();
        collaborator
            .expect_ask()
            .times(1)
            .returning(|_| Err(AppError::ExternalApi("quota exceeded".to_string())));

        let mut log = ChatLog::new();
        assert!(tokio_test::block_on(log.submit(&collaborator, "hello")));

        let messages = log.messages();
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[2].message, FALLBACK_REPLY);
        assert_eq!(
            messages.iter().filter(|m| m.message == FALLBACK_REPLY).count(),
            1
        );
        assert!(!log.is_typing());
    }

    #[test]
    fn test_typing_while_reply_pending() {
        let mut log = ChatLog::new();
        assert_eq!(log.begin("first").as_deref(), Some("first"));
        assert_eq!(log.begin("second").as_deref(), Some("second"));
        assert!(log.is_typing());

        log.complete(Ok("one".to_string()));
        assert!(log.is_typing());

        log.complete(Err(AppError::ExternalApi("boom".to_string())));
        assert!(!log.is_typing());
        assert_eq!(log.messages().len(), 5);
    }

    #[test]
    fn test_open_flag_does_not_affect_messages() {
        let mut log = ChatLog::new();
        log.set_open(true);
        assert!(log.is_open());
        log.begin("hi");
        log.set_open(false);
        assert_eq!(log.messages().len(), 2);
    }
}
