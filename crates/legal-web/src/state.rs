//! Shared App State
//!
//! One `ChatSession` and one `AuthService` are created when the app mounts and
//! shared through context. Every chat action goes through `update_chats`, which
//! is where the session's save boundary sits.

use leptos::logging::warn;
use leptos::prelude::*;

use legal_accounts::{AccountError, AuthService, User};
use legal_core::ChatSession;

use crate::storage::BrowserStorage;

pub type Chats = ChatSession<BrowserStorage>;

#[derive(Clone, Copy)]
pub struct AppState {
    pub chats: RwSignal<Chats>,
    pub auth: RwSignal<AuthService<BrowserStorage>>,
}

impl AppState {
    /// Load stored chats and login, falling back to a blank slate when the
    /// stored JSON is unreadable
    pub fn load() -> Self {
        let chats = ChatSession::load(BrowserStorage).unwrap_or_else(|e| {
            warn!("Ignoring saved chats: {e}");
            ChatSession::empty(BrowserStorage)
        });

        let auth = AuthService::load(BrowserStorage).unwrap_or_else(|e| {
            warn!("Ignoring saved login: {e}");
            AuthService::signed_out(BrowserStorage)
        });

        Self {
            chats: RwSignal::new(chats),
            auth: RwSignal::new(auth),
        }
    }

    /// Run a chat action, then save
    pub fn update_chats<T>(&self, action: impl FnOnce(&mut Chats) -> T) -> Option<T> {
        self.chats.try_update(|session| {
            let out = action(session);
            if let Err(e) = session.save() {
                warn!("Failed to save chats: {e}");
            }
            out
        })
    }

    /// Read from the chat session
    pub fn with_chats<T>(&self, f: impl FnOnce(&Chats) -> T) -> T {
        self.chats.with(f)
    }

    /// Run an auth action, returning the inline error message on failure
    pub fn update_auth(
        &self,
        action: impl FnOnce(&mut AuthService<BrowserStorage>) -> Result<(), AccountError>,
    ) -> Result<(), String> {
        self.auth
            .try_update(action)
            .unwrap_or(Ok(()))
            .map_err(|e| {
                warn!("Auth failed: {e}");
                e.user_message().to_string()
            })
    }

    pub fn current_user(&self) -> Option<User> {
        self.auth.with(|auth| auth.current_user().cloned())
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.with(AuthService::is_authenticated)
    }
}

pub fn provide_app_state() {
    provide_context(AppState::load());
}

pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
