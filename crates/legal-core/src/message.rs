//! Chat Messages
//!
//! A message is one turn in a chat: written by the user or generated as the
//! assistant's reply, and tagged with a legal category.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique message identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageId(String);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Area of law a question belongs to
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    General,
    Family,
    Business,
    Criminal,
}

impl Category {
    pub const ALL: [Self; 4] = [Self::General, Self::Family, Self::Business, Self::Criminal];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Family => "family",
            Self::Business => "business",
            Self::Criminal => "criminal",
        }
    }

    /// Label shown in the category picker
    pub const fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Family => "Family",
            Self::Business => "Business",
            Self::Criminal => "Criminal",
        }
    }

    /// Parse a category, falling back to `General` for anything unknown
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "family" => Self::Family,
            "business" => Self::Business,
            "criminal" => Self::Criminal,
            _ => Self::General,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who wrote a message
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Author {
    User,
    Assistant,
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Assistant => write!(f, "assistant"),
        }
    }
}

/// Stored as the `isUser` boolean of the browser JSON shape
mod is_user {
    use super::Author;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(author: &Author, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(*author == Author::User)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Author, D::Error> {
        let is_user = bool::deserialize(deserializer)?;
        Ok(if is_user { Author::User } else { Author::Assistant })
    }
}

/// A single message in a chat
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,

    /// Text content
    pub content: String,

    #[serde(rename = "isUser", with = "is_user")]
    pub author: Author,

    pub timestamp: DateTime<Utc>,

    pub category: Category,
}

impl Message {
    /// Create a new message
    pub fn new(author: Author, content: impl Into<String>, category: Category) -> Self {
        Self {
            id: MessageId::new(),
            content: content.into(),
            author,
            timestamp: Utc::now(),
            category,
        }
    }

    /// Create a user message
    pub fn user(content: impl Into<String>, category: Category) -> Self {
        Self::new(Author::User, content, category)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>, category: Category) -> Self {
        Self::new(Author::Assistant, content, category)
    }

    pub fn is_user(&self) -> bool {
        self.author == Author::User
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_creation() {
        let msg = Message::user("How to draft an NDA?", Category::Business);
        assert!(msg.is_user());
        assert_eq!(msg.content, "How to draft an NDA?");
        assert_eq!(msg.category, Category::Business);
        assert!(!msg.id.as_str().is_empty());
    }

    #[test]
    fn test_browser_json_shape() {
        let msg = Message::assistant("Here's my analysis:", Category::Family);
        let json = serde_json::to_value(&msg).unwrap();

        assert_eq!(json["isUser"], serde_json::json!(false));
        assert_eq!(json["category"], "family");
        assert!(json.get("author").is_none());
    }

    #[test]
    fn test_category_parse_falls_back_to_general() {
        assert_eq!(Category::parse("Criminal"), Category::Criminal);
        assert_eq!(Category::parse("maritime"), Category::General);
    }
}
