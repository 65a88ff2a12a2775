//! UI Components

use chrono::Local;
use leptos::logging::warn;
use leptos::prelude::*;

use legal_core::{Category, Chat, ChatId, Message};

use crate::state::use_app_state;

/// Message bubble component
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let (class, avatar, author) = if message.is_user() {
        ("message message-user", "👤", "You")
    } else {
        ("message message-assistant", "🤖", "Legal.AI")
    };
    let time = message
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M")
        .to_string();

    view! {
        <div class=class>
            <span class="avatar">{avatar}</span>
            <div class="body">
                <div class="meta">
                    <span class="role">{author}</span>
                    <span class="category">{message.category.as_str()}</span>
                </div>
                <p class="content">{message.content}</p>
                <span class="time">{time}</span>
            </div>
        </div>
    }
}

/// Category dropdown shown next to the input
#[component]
pub fn CategoryPicker(
    category: ReadSignal<Category>,
    set_category: WriteSignal<Category>,
) -> impl IntoView {
    view! {
        <select
            class="category-picker"
            on:change=move |ev| set_category.set(Category::parse(&event_target_value(&ev)))
        >
            {Category::ALL
                .into_iter()
                .map(|c| {
                    view! {
                        <option value=c.as_str() selected=move || category.get() == c>
                            {c.label()}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}

/// One entry in the sidebar's pinned or history list
#[component]
pub fn ChatItem(
    chat: Chat,
    active: bool,
    /// Chat whose name is being edited
    editing: RwSignal<Option<ChatId>>,
    /// Name typed so far
    draft: RwSignal<String>,
    /// Chat awaiting delete confirmation
    deleting: RwSignal<Option<ChatId>>,
) -> impl IntoView {
    let state = use_app_state();

    let id = chat.id.clone();
    let is_editing = {
        let id = id.clone();
        Memo::new(move |_| editing.with(|e| e.as_ref() == Some(&id)))
    };

    let save_edit = move || {
        if let Some(id) = editing.get_untracked() {
            let name = draft.get_untracked().trim().to_string();
            if !name.is_empty() {
                if let Some(Err(e)) = state.update_chats(|s| s.rename_chat(&id, name)) {
                    warn!("Rename failed: {e}");
                }
            }
        }
        editing.set(None);
        draft.set(String::new());
    };
    let cancel_edit = move || {
        editing.set(None);
        draft.set(String::new());
    };

    let select = {
        let id = id.clone();
        move |_| {
            if !is_editing.get_untracked() {
                state.update_chats(|s| s.select_chat(&id));
            }
        }
    };
    let start_edit = {
        let id = id.clone();
        let name = chat.name.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            draft.set(name.clone());
            editing.set(Some(id.clone()));
        }
    };
    let toggle_pin = {
        let id = id.clone();
        move |ev: leptos::ev::MouseEvent| {
            ev.stop_propagation();
            if let Some(Err(e)) = state.update_chats(|s| s.toggle_pin(&id)) {
                warn!("Pin toggle failed: {e}");
            }
        }
    };
    let ask_delete = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        deleting.set(Some(id.clone()));
    };

    let class = if active { "chat-item active" } else { "chat-item" };
    let pin_label = if chat.is_pinned { "Unpin" } else { "Pin" };
    let preview = chat.preview().map(str::to_string);
    let name = chat.name;

    view! {
        <div class=class on:click=select>
            <Show
                when=move || is_editing.get()
                fallback=move || {
                    view! {
                        <div class="chat-item-row">
                            <span class="chat-name">{name.clone()}</span>
                            <button class="icon" title="Rename" on:click=start_edit.clone()>"✎"</button>
                            <button class="icon" title=pin_label on:click=toggle_pin.clone()>"📌"</button>
                            <button class="icon" title="Delete" on:click=ask_delete.clone()>"🗑"</button>
                        </div>
                    }
                }
            >
                <input
                    type="text"
                    class="chat-rename"
                    autofocus=true
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        match ev.key().as_str() {
                            "Enter" => save_edit(),
                            "Escape" => cancel_edit(),
                            _ => {}
                        }
                    }
                    on:blur=move |_| save_edit()
                />
            </Show>
            {preview.map(|p| view! { <p class="chat-preview">{p}</p> })}
        </div>
    }
}

/// Modal asking the user to confirm a destructive action
#[component]
pub fn ConfirmDialog(
    title: &'static str,
    message: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h3>{title}</h3>
                <p>{message}</p>
                <div class="dialog-actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
