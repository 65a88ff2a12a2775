//! # legal-accounts
//!
//! Mock accounts for the Legal.AI demo: sign-up, login and logout against a
//! user list kept in the same key/value store as the chats, plus the landing
//! page's contact-form inbox.
//!
//! None of this is secure. Passwords are stored and compared in plain text and
//! there are no session tokens; it exists so the dashboard has someone to
//! greet.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use legal_accounts::{AuthService, Registration};
//! use legal_core::MemoryStore;
//!
//! let mut auth = AuthService::load(MemoryStore::new())?;
//! auth.register(Registration {
//!     full_name: "Grace Hopper".into(),
//!     email: "grace@example.com".into(),
//!     password: "cobol".into(),
//!     ..Default::default()
//! })?;
//! assert!(auth.is_authenticated());
//! ```

mod auth;
mod contact;
mod error;
mod user;

pub use auth::AuthService;
pub use contact::{ContactBook, ContactSubmission};
pub use error::{AccountError, Result};
pub use user::{Registration, User, UserId, UserType};
