//! # legal-core
//!
//! Chat session store for the Legal.AI dashboard demo.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        ChatSession                            │
//! │  ┌─────────────┐  ┌──────────────┐  ┌─────────────────────┐  │
//! │  │  Chat list  │  │  Responder   │  │   KeyValueStore     │  │
//! │  │ + current   │──│ (canned, RNG │──│ (memory, browser    │  │
//! │  │   pointer   │  │  injected)   │  │  localStorage)      │  │
//! │  └─────────────┘  └──────────────┘  └─────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The view dispatches an action, the session mutates in memory, and the view
//! calls `save()` once the action is done.

pub mod chat;
pub mod error;
pub mod message;
pub mod responder;
pub mod session;
pub mod storage;

pub use chat::{Chat, ChatId};
pub use error::{CoreError, Result};
pub use message::{Author, Category, Message, MessageId};
pub use session::ChatSession;
pub use storage::{KeyValueStore, MemoryStore};
