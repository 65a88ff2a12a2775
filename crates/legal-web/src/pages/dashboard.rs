//! Dashboard Page

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use legal_core::{Category, ChatId};

use crate::components::{CategoryPicker, ChatItem, ConfirmDialog, MessageBubble};
use crate::state::use_app_state;

const SUGGESTIONS: [&str; 3] = [
    "How to draft an NDA?",
    "What are the tenets of contract law?",
    "How to handle intellectual property disputes?",
];

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = use_app_state();

    view! {
        <Show
            when=move || state.is_authenticated()
            fallback=|| {
                view! {
                    <div class="access-denied">
                        <h1>"Access Denied"</h1>
                        <p>"Please log in to access the dashboard."</p>
                        <a href="/auth" class="btn btn-primary">"Login"</a>
                    </div>
                }
            }
        >
            <div class="dashboard">
                <DashboardHeader />
                <div class="dashboard-body">
                    <DashboardSidebar />
                    <DashboardMain />
                </div>
            </div>
        </Show>
    }
}

#[component]
fn DashboardHeader() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let logout = move |_| {
        if let Err(msg) = state.update_auth(|auth| auth.logout()) {
            warn!("Logout incomplete: {msg}");
        }
        state.update_chats(|s| s.clear_current_chat());
        navigate("/", Default::default());
    };

    let user = move || state.current_user();

    view! {
        <header class="dashboard-header">
            <div class="brand">
                <span class="logo">"Legal.AI"</span>
                <span class="subtitle">"Dashboard"</span>
            </div>
            <div class="user">
                <div class="user-info">
                    <div class="user-name">{move || user().map(|u| u.full_name)}</div>
                    <div class="user-type">{move || user().map(|u| u.user_type.as_str())}</div>
                </div>
                <div class="avatar">{move || user().and_then(|u| u.initial()).map(String::from)}</div>
                <button class="icon" title="Logout" on:click=logout>"⎋"</button>
            </div>
        </header>
    }
}

#[component]
fn DashboardSidebar() -> impl IntoView {
    let state = use_app_state();
    let editing = RwSignal::new(None::<ChatId>);
    let draft = RwSignal::new(String::new());
    let deleting = RwSignal::new(None::<ChatId>);

    let has_pinned = move || state.with_chats(|s| s.pinned_chats().next().is_some());
    let has_history = move || state.with_chats(|s| s.history_chats().next().is_some());

    let pinned = move || {
        state.with_chats(|s| {
            let current = s.current_chat_id().cloned();
            s.pinned_chats()
                .map(|c| (c.clone(), current.as_ref() == Some(&c.id)))
                .collect::<Vec<_>>()
        })
    };
    let history = move || {
        state.with_chats(|s| {
            let current = s.current_chat_id().cloned();
            s.history_chats()
                .map(|c| (c.clone(), current.as_ref() == Some(&c.id)))
                .collect::<Vec<_>>()
        })
    };

    let confirm_delete = Callback::new(move |()| {
        if let Some(id) = deleting.get_untracked() {
            if let Some(Err(e)) = state.update_chats(|s| s.delete_chat(&id).map(|_| ())) {
                warn!("Delete failed: {e}");
            }
        }
        deleting.set(None);
    });
    let cancel_delete = Callback::new(move |()| deleting.set(None));

    view! {
        <aside class="sidebar">
            <button
                class="btn btn-primary new-chat"
                on:click=move |_| {
                    state.update_chats(|s| s.create_chat());
                }
            >
                "+ New Chat"
            </button>

            <Show when=has_pinned>
                <h3 class="sidebar-heading">"Pinned Chats"</h3>
                <div class="chat-list">
                    {move || {
                        pinned()
                            .into_iter()
                            .map(|(chat, active)| {
                                view! { <ChatItem chat=chat active=active editing=editing draft=draft deleting=deleting /> }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <h3 class="sidebar-heading">"History"</h3>
            <Show
                when=has_history
                fallback=|| view! { <p class="empty">"No chats yet"</p> }
            >
                <div class="chat-list">
                    {move || {
                        history()
                            .into_iter()
                            .map(|(chat, active)| {
                                view! { <ChatItem chat=chat active=active editing=editing draft=draft deleting=deleting /> }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>

            <Show when=move || deleting.with(Option::is_some)>
                <ConfirmDialog
                    title="Delete chat?"
                    message="This conversation will be removed from this device."
                    on_confirm=confirm_delete
                    on_cancel=cancel_delete
                />
            </Show>
        </aside>
    }
}

#[component]
fn DashboardMain() -> impl IntoView {
    let state = use_app_state();
    let (input, set_input) = signal(String::new());
    let (category, set_category) = signal(Category::General);

    let has_current = move || state.with_chats(|s| s.current_chat_id().is_some());

    // Starts a chat when none is selected, so the welcome screen's input works too
    let send = move || {
        let text = input.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        let category = category.get_untracked();
        state.update_chats(|s| {
            if s.current_chat_id().is_some() {
                s.send_message(text, category);
            } else {
                s.ask(text, category);
            }
        });
        set_input.set(String::new());
    };

    let suggest = move |text: &'static str| {
        let category = category.get_untracked();
        state.update_chats(|s| s.ask(text, category));
    };

    let messages = move || {
        state.with_chats(|s| {
            s.current_chat()
                .map(|c| c.messages.clone())
                .unwrap_or_default()
        })
    };

    let input_box = move || {
        view! {
            <div class="input-area">
                <CategoryPicker category=category set_category=set_category />
                <textarea
                    rows="1"
                    placeholder="Ask a legal question..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" && !ev.shift_key() {
                            ev.prevent_default();
                            send();
                        }
                    }
                />
                <button
                    on:click=move |_| send()
                    disabled=move || input.with(|i| i.trim().is_empty())
                >
                    "Send"
                </button>
            </div>
        }
    };

    view! {
        <main class="chat-main">
            <Show
                when=has_current
                fallback=move || {
                    view! {
                        <div class="welcome">
                            <div class="welcome-icon">"🤖"</div>
                            <h2>"Welcome to Legal.AI"</h2>
                            <p>
                                "Start a conversation with our AI legal assistant. Ask questions, analyze documents, or get legal insights."
                            </p>
                            {input_box()}
                            <div class="suggestions">
                                {SUGGESTIONS
                                    .into_iter()
                                    .map(|text| {
                                        view! {
                                            <button class="suggestion" on:click=move |_| suggest(text)>
                                                <span class="hint">"💡"</span>
                                                {text}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    }
                }
            >
                <div class="messages">
                    {move || {
                        messages()
                            .into_iter()
                            .map(|message| view! { <MessageBubble message=message /> })
                            .collect_view()
                    }}
                </div>
                {input_box()}
            </Show>
        </main>
    }
}
