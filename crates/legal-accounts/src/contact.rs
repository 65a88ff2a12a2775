//! Contact Form Submissions
//!
//! The landing page's "Have a question?" form. Submissions are appended to a
//! list in the key/value store in place of a backend inbox.

use chrono::{DateTime, Utc};
use legal_core::KeyValueStore;
use legal_core::storage::{keys, load_json, save_json};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One submitted contact form
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only list of submissions
pub struct ContactBook<S> {
    store: S,
}

impl<S: KeyValueStore> ContactBook<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// All submissions, oldest first
    pub fn submissions(&self) -> Result<Vec<ContactSubmission>> {
        Ok(load_json(&self.store, keys::CONTACTS)?.unwrap_or_default())
    }

    /// Record a submission
    pub fn submit(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<ContactSubmission> {
        let submission = ContactSubmission {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            email: email.into(),
            message: message.into(),
            timestamp: Utc::now(),
        };

        let mut all = self.submissions()?;
        all.push(submission.clone());
        save_json(&self.store, keys::CONTACTS, &all)?;

        tracing::info!(id = %submission.id, total = all.len(), "Contact form submitted");
        Ok(submission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use legal_core::MemoryStore;

    #[test]
    fn test_submissions_append() {
        let book = ContactBook::new(MemoryStore::new());
        assert!(book.submissions().unwrap().is_empty());

        let first = book.submit("Sam", "sam@example.com", "Do you support trusts?").unwrap();
        book.submit("Kim", "kim@example.com", "Pricing for firms?").unwrap();

        let all = book.submissions().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0], first);
        assert_eq!(all[1].name, "Kim");
    }
}
