//! Chats
//!
//! A chat is a named, ordered conversation thread.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::message::Message;

/// Unique chat identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChatId(String);

impl ChatId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ChatId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ChatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A conversation thread
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chat {
    pub id: ChatId,

    /// Display name (generated, or set by renaming)
    pub name: String,

    /// Messages in insertion order
    pub messages: Vec<Message>,

    pub is_pinned: bool,

    pub created_at: DateTime<Utc>,

    /// Time of the most recent exchange
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_message: Option<DateTime<Utc>>,
}

impl Chat {
    /// Create an empty, unpinned chat
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ChatId::new(),
            name: name.into(),
            messages: Vec::new(),
            is_pinned: false,
            created_at: Utc::now(),
            last_message: None,
        }
    }

    /// Append a user message and its reply as one exchange
    pub fn push_exchange(&mut self, question: Message, reply: Message) {
        self.last_message = Some(reply.timestamp);
        self.messages.push(question);
        self.messages.push(reply);
    }

    /// Content of the last message, shown under the name in the sidebar
    pub fn preview(&self) -> Option<&str> {
        self.messages.last().map(|m| m.content.as_str())
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::Category;

    #[test]
    fn test_chat_creation() {
        let chat = Chat::new("Case Study Mar07");
        assert!(chat.is_empty());
        assert!(!chat.is_pinned);
        assert!(chat.last_message.is_none());
        assert!(chat.preview().is_none());
    }

    #[test]
    fn test_push_exchange_sets_preview() {
        let mut chat = Chat::new("Legal Advice Jan02");
        chat.push_exchange(
            Message::user("Is a verbal contract binding?", Category::Business),
            Message::assistant("From a business law perspective...", Category::Business),
        );

        assert_eq!(chat.message_count(), 2);
        assert!(chat.messages[0].is_user());
        assert_eq!(chat.preview(), Some("From a business law perspective..."));
        assert!(chat.last_message.is_some());
    }

    #[test]
    fn test_camel_case_shape() {
        let chat = Chat::new("Policy Review Feb11");
        let json = serde_json::to_value(&chat).unwrap();
        assert_eq!(json["isPinned"], serde_json::json!(false));
        assert!(json.get("createdAt").is_some());
        assert!(json.get("lastMessage").is_none());
    }
}
