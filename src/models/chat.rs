use chrono::{DateTime, Utc};
use serde::Serialize;

/// Opening line of every conversation
pub const GREETING: &str = "Hello! How can I assist you with anti-doping information today?";

/// Shown in place of a reply whenever the chat backend call fails
pub const FALLBACK_REPLY: &str = "I'm sorry, I encountered an error. Please try again.";

/// One line of the chat widget
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ChatMessage {
    pub message: String,
    /// True for messages typed by the user, false for assistant replies
    pub is_user: bool,
    pub sent_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_user: true,
            sent_at: Utc::now(),
        }
    }

    pub fn assistant(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_user: false,
            sent_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_set_author() {
        assert!(ChatMessage::user("hi").is_user);
        assert!(!ChatMessage::assistant(GREETING).is_user);
    }

    #[test]
    fn test_chat_message_serialization() {
        let json = serde_json::to_value(ChatMessage::user("What is WADA?")).unwrap();
        assert_eq!(json["message"], "What is WADA?");
        assert_eq!(json["is_user"], true);
        assert!(json["sent_at"].is_string());
    }
}
