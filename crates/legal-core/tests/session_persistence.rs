use std::sync::Arc;

use legal_core::storage::keys;
use legal_core::{Category, ChatSession, CoreError, KeyValueStore, MemoryStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn seeded(store: Arc<MemoryStore>) -> ChatSession<Arc<MemoryStore>> {
    ChatSession::load_with_rng(store, StdRng::seed_from_u64(1)).unwrap()
}

#[test]
fn saved_chats_survive_reload() {
    let store = Arc::new(MemoryStore::new());

    let mut session = seeded(store.clone());
    let pinned = session.create_chat();
    session.send_message("What is consideration?", Category::Business);
    session.toggle_pin(&pinned).unwrap();
    session.rename_chat(&pinned, "Consideration").unwrap();
    session.create_chat();
    session.save().unwrap();

    let reloaded = seeded(store);
    assert_eq!(reloaded.chats(), session.chats());
    assert!(reloaded.current_chat().is_none());

    let chat = reloaded.chat(&pinned).unwrap();
    assert_eq!(chat.name, "Consideration");
    assert!(chat.is_pinned);
    assert_eq!(chat.message_count(), 2);
}

#[test]
fn deleting_last_chat_persists_empty_list() {
    let store = Arc::new(MemoryStore::new());

    let mut session = seeded(store.clone());
    let id = session.create_chat();
    session.save().unwrap();

    session.delete_chat(&id).unwrap();
    session.save().unwrap();

    assert_eq!(store.get(keys::CHATS).unwrap().as_deref(), Some("[]"));
    assert!(seeded(store).chats().is_empty());
}

#[test]
fn unsaved_changes_are_not_written() {
    let store = Arc::new(MemoryStore::new());

    let mut session = seeded(store.clone());
    session.create_chat();
    drop(session);

    assert!(seeded(store).chats().is_empty());
}

#[test]
fn reads_browser_shaped_json() {
    let store = MemoryStore::new();
    store
        .set(
            keys::CHATS,
            r#"[{
                "id": "1712345678901",
                "name": "Case Study Apr05",
                "messages": [
                    {"id": "1712345680000", "content": "Hi", "isUser": true,
                     "timestamp": "2024-04-05T10:00:00.000Z", "category": "criminal"},
                    {"id": "1712345680001", "content": "In criminal law, understanding your rights and the legal process is crucial:",
                     "isUser": false, "timestamp": "2024-04-05T10:00:00.000Z", "category": "criminal"}
                ],
                "isPinned": true,
                "createdAt": "2024-04-05T09:59:00.000Z",
                "lastMessage": "2024-04-05T10:00:00.000Z"
            }]"#,
        )
        .unwrap();

    let session = ChatSession::load(&store).unwrap();
    let chat = &session.chats()[0];
    assert_eq!(chat.id.as_str(), "1712345678901");
    assert!(chat.is_pinned);
    assert!(chat.messages[0].is_user());
    assert_eq!(chat.messages[1].category, Category::Criminal);
}

#[test]
fn malformed_stored_chats_fail_to_load() {
    let store = MemoryStore::new();
    store.set(keys::CHATS, "{\"oops\":").unwrap();

    let result = ChatSession::load(&store);
    assert!(matches!(result, Err(CoreError::Json(_))));
}
