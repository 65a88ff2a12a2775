//! Landing Page

use std::time::Duration;

use leptos::ev::SubmitEvent;
use leptos::logging::warn;
use leptos::prelude::*;

use legal_accounts::ContactBook;

use crate::state::use_app_state;
use crate::storage::BrowserStorage;

#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="home">
            <nav class="navbar">
                <span class="logo">"Legal.AI"</span>
                <div class="nav-links">
                    <a href="#features">"Features"</a>
                    <a href="#how-to-use">"How to use"</a>
                    <a href="#contact">"Contact"</a>
                    <Show
                        when=move || state.is_authenticated()
                        fallback=|| view! { <a href="/auth" class="btn btn-primary">"Login"</a> }
                    >
                        <a href="/dashboard" class="btn btn-primary">"Dashboard"</a>
                    </Show>
                </div>
            </nav>

            <header class="hero">
                <h1>"Your AI legal assistant"</h1>
                <p class="tagline">
                    "Instant answers to legal questions, for consumers and the lawyers who serve them."
                </p>
                <div class="cta">
                    <a href="/auth" class="btn btn-primary">"Get Started"</a>
                    <a href="#how-to-use" class="btn">"Learn More"</a>
                </div>
            </header>

            <section id="features" class="features">
                <div class="feature">
                    <h3>"⚖️ Legal Research"</h3>
                    <p>"Ask about contracts, family matters, business compliance or criminal procedure."</p>
                </div>
                <div class="feature">
                    <h3>"📄 Document Analysis"</h3>
                    <p>"Keep each matter in its own chat, pinned where you can find it."</p>
                </div>
                <div class="feature">
                    <h3>"🔒 Private"</h3>
                    <p>"Conversations stay in this browser. Nothing is sent to a server."</p>
                </div>
            </section>

            <section id="how-to-use" class="how-to-use">
                <h2>"How to use"</h2>
                <ol>
                    <li>"Create an account as a consumer or a lawyer."</li>
                    <li>"Start a chat and pick the area of law."</li>
                    <li>"Ask your question and review the answer."</li>
                </ol>
            </section>

            <ContactSection />
        </div>
    }
}

#[component]
fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (loading, set_loading) = signal(false);
    let (submitted, set_submitted) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_loading.set(true);

        // Feels like a round trip even though it only touches local storage
        set_timeout(
            move || {
                let book = ContactBook::new(BrowserStorage);
                match book.submit(
                    name.get_untracked(),
                    email.get_untracked(),
                    message.get_untracked(),
                ) {
                    Ok(_) => {
                        set_submitted.set(true);
                        set_name.set(String::new());
                        set_email.set(String::new());
                        set_message.set(String::new());
                        set_timeout(move || set_submitted.set(false), Duration::from_secs(3));
                    }
                    Err(e) => warn!("Contact form not saved: {e}"),
                }
                set_loading.set(false);
            },
            Duration::from_secs(1),
        );
    };

    view! {
        <section id="contact" class="contact">
            <h2>"Have a question?"</h2>
            <p class="subtitle">
                "Get in touch with our team. We're here to help you transform your legal practice with AI."
            </p>

            <Show when=move || submitted.get()>
                <div class="notice success">"✓ Thanks! We'll get back to you soon."</div>
            </Show>

            <form class="contact-form" on:submit=submit>
                <div class="field">
                    <label for="contact-name">"Name"</label>
                    <input
                        id="contact-name"
                        type="text"
                        required=true
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="contact-email">"Email"</label>
                    <input
                        id="contact-email"
                        type="email"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="contact-message">"Message"</label>
                    <textarea
                        id="contact-message"
                        rows="5"
                        required=true
                        prop:value=move || message.get()
                        on:input=move |ev| set_message.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Sending..." } else { "Send Message" }}
                </button>
            </form>
        </section>
    }
}
