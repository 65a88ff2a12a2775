//! Chat Session Management
//!
//! `ChatSession` owns the chat list and the active-chat pointer. Mutations only
//! touch memory and mark the session dirty; `save()` is the single point where
//! the list is written back to the key/value store.

use chrono::Local;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::chat::{Chat, ChatId};
use crate::error::{CoreError, Result};
use crate::message::{Category, Message};
use crate::responder;
use crate::storage::{KeyValueStore, keys, load_json, save_json};

/// Chat list plus the chat currently on screen
pub struct ChatSession<S, R = StdRng> {
    store: S,
    rng: R,

    /// Newest first
    chats: Vec<Chat>,

    /// Always names a chat in `chats` when set
    current: Option<ChatId>,

    dirty: bool,
}

impl<S: KeyValueStore> ChatSession<S> {
    /// Restore the saved chat list, seeding randomness from the OS
    pub fn load(store: S) -> Result<Self> {
        Self::load_with_rng(store, StdRng::from_entropy())
    }

    /// Start with no chats, seeding randomness from the OS
    pub fn empty(store: S) -> Self {
        Self::new(store, StdRng::from_entropy())
    }
}

impl<S: KeyValueStore, R: Rng> ChatSession<S, R> {
    /// Start with an empty chat list, ignoring anything already stored
    pub const fn new(store: S, rng: R) -> Self {
        Self {
            store,
            rng,
            chats: Vec::new(),
            current: None,
            dirty: false,
        }
    }

    /// Restore the saved chat list with an injected random source
    pub fn load_with_rng(store: S, rng: R) -> Result<Self> {
        let chats: Vec<Chat> = load_json(&store, keys::CHATS)?.unwrap_or_default();
        tracing::debug!(count = chats.len(), "Loaded chats");

        let mut session = Self::new(store, rng);
        session.chats = chats;
        Ok(session)
    }

    /// All chats, newest first
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    /// Look up a chat by ID
    pub fn chat(&self, id: &ChatId) -> Option<&Chat> {
        self.chats.iter().find(|c| &c.id == id)
    }

    fn chat_mut(&mut self, id: &ChatId) -> Result<&mut Chat> {
        self.chats
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| CoreError::ChatNotFound(id.to_string()))
    }

    pub const fn current_chat_id(&self) -> Option<&ChatId> {
        self.current.as_ref()
    }

    /// The chat currently selected
    pub fn current_chat(&self) -> Option<&Chat> {
        self.current.as_ref().and_then(|id| self.chat(id))
    }

    /// Pinned chats, in list order
    pub fn pinned_chats(&self) -> impl Iterator<Item = &Chat> {
        self.chats.iter().filter(|c| c.is_pinned)
    }

    /// Unpinned chats, in list order
    pub fn history_chats(&self) -> impl Iterator<Item = &Chat> {
        self.chats.iter().filter(|c| !c.is_pinned)
    }

    /// Create a chat, put it at the top of the list and select it
    pub fn create_chat(&mut self) -> ChatId {
        let name = responder::chat_name(&mut self.rng, Local::now().date_naive());
        let chat = Chat::new(name);
        let id = chat.id.clone();

        tracing::debug!(chat_id = %id, name = %chat.name, "Created chat");
        self.chats.insert(0, chat);
        self.current = Some(id.clone());
        self.dirty = true;
        id
    }

    /// Select a chat; unknown IDs leave the selection untouched.
    ///
    /// Returns whether the ID matched a chat.
    pub fn select_chat(&mut self, id: &ChatId) -> bool {
        if self.chat(id).is_none() {
            return false;
        }
        self.current = Some(id.clone());
        true
    }

    /// Unselect the current chat without deleting it
    pub fn clear_current_chat(&mut self) {
        self.current = None;
    }

    /// Send a message to the current chat and append the generated reply.
    ///
    /// Does nothing and returns `false` when no chat is selected.
    pub fn send_message(&mut self, content: impl Into<String>, category: Category) -> bool {
        let Some(id) = self.current.clone() else {
            return false;
        };

        let question = Message::user(content, category);
        let reply = Message::assistant(
            responder::reply(&mut self.rng, &question.content, category),
            category,
        );

        let Some(chat) = self.chats.iter_mut().find(|c| c.id == id) else {
            tracing::warn!(chat_id = %id, "Current chat vanished");
            self.current = None;
            return false;
        };
        chat.push_exchange(question, reply);
        tracing::debug!(chat_id = %id, %category, "Appended exchange");

        self.dirty = true;
        true
    }

    /// Send from a suggestion: starts a chat first when none is selected
    pub fn ask(&mut self, content: impl Into<String>, category: Category) -> ChatId {
        let id = match self.current.clone() {
            Some(id) => id,
            None => self.create_chat(),
        };
        self.send_message(content, category);
        id
    }

    /// Rename a chat
    pub fn rename_chat(&mut self, id: &ChatId, name: impl Into<String>) -> Result<()> {
        let chat = self.chat_mut(id)?;
        chat.name = name.into();
        tracing::debug!(chat_id = %id, name = %chat.name, "Renamed chat");
        self.dirty = true;
        Ok(())
    }

    /// Flip the pinned flag, returning the new value
    pub fn toggle_pin(&mut self, id: &ChatId) -> Result<bool> {
        let chat = self.chat_mut(id)?;
        chat.is_pinned = !chat.is_pinned;
        let pinned = chat.is_pinned;
        tracing::debug!(chat_id = %id, pinned, "Toggled pin");
        self.dirty = true;
        Ok(pinned)
    }

    /// Delete a chat; clears the selection if it was the current one
    pub fn delete_chat(&mut self, id: &ChatId) -> Result<Chat> {
        let pos = self
            .chats
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| CoreError::ChatNotFound(id.to_string()))?;
        let removed = self.chats.remove(pos);

        if self.current.as_ref() == Some(id) {
            self.current = None;
        }

        tracing::debug!(chat_id = %id, "Deleted chat");
        self.dirty = true;
        Ok(removed)
    }

    /// Whether there are changes not yet written by `save()`
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the chat list to the store if it changed.
    ///
    /// An empty list is written too, so deleting the last chat sticks.
    pub fn save(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        save_json(&self.store, keys::CHATS, &self.chats)?;
        self.dirty = false;
        tracing::debug!(count = self.chats.len(), "Saved chats");
        Ok(())
    }

    pub const fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rand::rngs::mock::StepRng;

    fn session() -> ChatSession<MemoryStore, StepRng> {
        ChatSession::new(MemoryStore::new(), StepRng::new(0, 0))
    }

    #[test]
    fn test_create_chat_becomes_current() {
        let mut session = session();
        let id = session.create_chat();

        assert!(!id.as_str().is_empty());
        assert_eq!(session.current_chat_id(), Some(&id));
        assert!(session.current_chat().unwrap().name.starts_with("Contract Review "));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_new_chats_are_prepended() {
        let mut session = session();
        let first = session.create_chat();
        let second = session.create_chat();

        assert_eq!(session.chats()[0].id, second);
        assert_eq!(session.chats()[1].id, first);
    }

    #[test]
    fn test_select_unknown_chat_is_noop() {
        let mut session = session();
        let id = session.create_chat();

        assert!(!session.select_chat(&ChatId::from_string("nope")));
        assert_eq!(session.current_chat_id(), Some(&id));
    }

    #[test]
    fn test_send_without_current_chat() {
        let mut session = session();
        session.create_chat();
        session.clear_current_chat();

        assert!(!session.send_message("hello", Category::General));
        assert!(session.chats()[0].is_empty());
    }

    #[test]
    fn test_send_appends_pair() {
        let mut session = session();
        session.create_chat();

        assert!(session.send_message("Can I break my lease?", Category::Family));

        let chat = session.current_chat().unwrap();
        assert_eq!(chat.message_count(), 2);
        assert!(chat.messages[0].is_user());
        assert!(!chat.messages[1].is_user());
        assert_eq!(chat.messages[1].content, responder::replies(Category::Family)[0]);
        assert!(chat.messages.iter().all(|m| m.category == Category::Family));
        assert!(chat.last_message.is_some());
    }

    #[test]
    fn test_ask_creates_chat_when_none_selected() {
        let mut session = session();
        let id = session.ask("How to draft an NDA?", Category::Business);

        assert_eq!(session.chats().len(), 1);
        assert_eq!(session.current_chat_id(), Some(&id));
        assert_eq!(session.current_chat().unwrap().message_count(), 2);
    }

    #[test]
    fn test_rename_current_chat() {
        let mut session = session();
        let id = session.create_chat();
        session.rename_chat(&id, "Lease dispute").unwrap();

        assert_eq!(session.chat(&id).unwrap().name, "Lease dispute");
        assert_eq!(session.current_chat().unwrap().name, "Lease dispute");
    }

    #[test]
    fn test_unknown_chat_errors() {
        let mut session = session();
        let missing = ChatId::from_string("missing");

        assert!(matches!(
            session.rename_chat(&missing, "x"),
            Err(CoreError::ChatNotFound(_))
        ));
        assert!(session.toggle_pin(&missing).is_err());
        assert!(session.delete_chat(&missing).is_err());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_toggle_pin_partitions_sidebar() {
        let mut session = session();
        let a = session.create_chat();
        let b = session.create_chat();

        assert!(session.toggle_pin(&a).unwrap());
        assert_eq!(session.pinned_chats().map(|c| c.id.clone()).collect::<Vec<_>>(), vec![a.clone()]);
        assert_eq!(session.history_chats().map(|c| c.id.clone()).collect::<Vec<_>>(), vec![b]);

        assert!(!session.toggle_pin(&a).unwrap());
        assert_eq!(session.pinned_chats().count(), 0);
    }

    #[test]
    fn test_delete_current_clears_pointer() {
        let mut session = session();
        let other = session.create_chat();
        let current = session.create_chat();

        session.delete_chat(&other).unwrap();
        assert_eq!(session.current_chat_id(), Some(&current));

        session.delete_chat(&current).unwrap();
        assert!(session.current_chat_id().is_none());
        assert!(session.chats().is_empty());
    }

    #[test]
    fn test_save_is_explicit() {
        let mut session = session();
        session.create_chat();
        assert!(session.store().get(keys::CHATS).unwrap().is_none());

        session.save().unwrap();
        assert!(!session.is_dirty());
        assert!(session.store().get(keys::CHATS).unwrap().is_some());
    }
}
