//! Login / Sign-up Page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use legal_accounts::{Registration, UserType};

use crate::state::use_app_state;

const STATES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

const COUNTRIES: [&str; 13] = [
    "United States", "Canada", "United Kingdom", "Australia", "Germany", "France",
    "Italy", "Spain", "Netherlands", "Sweden", "Norway", "Denmark", "Other",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    SignUp,
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_app_state();
    let navigate = use_navigate();

    let mode = RwSignal::new(Mode::Login);
    let form = RwSignal::new(Registration::default());
    let (error, set_error) = signal(None::<String>);
    let (show_password, set_show_password) = signal(false);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let registration = form.get_untracked();
        let result = match mode.get_untracked() {
            Mode::Login => state.update_auth(|auth| {
                auth.login(&registration.email, &registration.password)
                    .map(|_| ())
            }),
            Mode::SignUp => state.update_auth(|auth| auth.register(registration).map(|_| ())),
        };

        match result {
            Ok(()) => navigate(
                "/dashboard",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            ),
            Err(msg) => set_error.set(Some(msg)),
        }
    };

    let switch_mode = move |to: Mode| {
        mode.set(to);
        set_error.set(None);
    };

    let is_signup = move || mode.get() == Mode::SignUp;

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <a href="/" class="logo">"Legal.AI"</a>
                <h2>
                    {move || if is_signup() { "Create Your Account" } else { "Login to Your Account" }}
                </h2>

                {move || error.get().map(|msg| view! { <div class="notice error">{msg}</div> })}

                <form on:submit=submit>
                    <Show when=is_signup>
                        <TextField
                            id="fullName"
                            label="Full Name"
                            kind="text"
                            form=form
                            get=|r| r.full_name.clone()
                            set=|r, v| r.full_name = v
                        />
                    </Show>

                    <TextField
                        id="email"
                        label="Email"
                        kind="email"
                        form=form
                        get=|r| r.email.clone()
                        set=|r, v| r.email = v
                    />

                    <div class="field">
                        <label for="password">"Password"</label>
                        <div class="password">
                            <input
                                id="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                required=true
                                prop:value=move || form.with(|r| r.password.clone())
                                on:input=move |ev| form.update(|r| r.password = event_target_value(&ev))
                            />
                            <button
                                type="button"
                                class="icon"
                                on:click=move |_| set_show_password.update(|s| *s = !*s)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                    </div>

                    <Show when=is_signup>
                        <TextField
                            id="phone"
                            label="Phone"
                            kind="tel"
                            form=form
                            get=|r| r.phone.clone()
                            set=|r, v| r.phone = v
                        />
                        <div class="field-row">
                            <TextField
                                id="city"
                                label="City"
                                kind="text"
                                form=form
                                get=|r| r.city.clone()
                                set=|r, v| r.city = v
                            />
                            <SelectField
                                id="state"
                                label="State"
                                placeholder="Select State"
                                options=&STATES
                                form=form
                                get=|r| r.state.clone()
                                set=|r, v| r.state = v
                            />
                        </div>
                        <SelectField
                            id="country"
                            label="Country"
                            placeholder="Select Country"
                            options=&COUNTRIES
                            form=form
                            get=|r| r.country.clone()
                            set=|r, v| r.country = v
                        />
                        <div class="field">
                            <label>"User Type"</label>
                            <div class="user-types">
                                {[(UserType::Consumer, "Consumer"), (UserType::Lawyer, "Lawyer")]
                                    .into_iter()
                                    .map(|(kind, label)| {
                                        view! {
                                            <label class="user-type">
                                                <input
                                                    type="radio"
                                                    name="userType"
                                                    value=kind.as_str()
                                                    prop:checked=move || form.with(|r| r.user_type == kind)
                                                    on:change=move |ev| {
                                                        form.update(|r| r.user_type = UserType::parse(&event_target_value(&ev)));
                                                    }
                                                />
                                                {label}
                                            </label>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </Show>

                    <button type="submit" class="btn btn-primary full-width">
                        {move || if is_signup() { "Sign Up" } else { "Login" }}
                    </button>
                </form>

                <div class="switch-mode">
                    <Show
                        when=is_signup
                        fallback=move || {
                            view! {
                                "Don't have an account? "
                                <button class="link" on:click=move |_| switch_mode(Mode::SignUp)>
                                    "Sign up"
                                </button>
                            }
                        }
                    >
                        "Already have an account? "
                        <button class="link" on:click=move |_| switch_mode(Mode::Login)>
                            "Login"
                        </button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

/// Required text input bound to one `Registration` field
#[component]
fn TextField(
    id: &'static str,
    label: &'static str,
    kind: &'static str,
    form: RwSignal<Registration>,
    get: fn(&Registration) -> String,
    set: fn(&mut Registration, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <input
                id=id
                type=kind
                required=true
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|r| set(r, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn SelectField(
    id: &'static str,
    label: &'static str,
    placeholder: &'static str,
    options: &'static [&'static str],
    form: RwSignal<Registration>,
    get: fn(&Registration) -> String,
    set: fn(&mut Registration, String),
) -> impl IntoView {
    view! {
        <div class="field">
            <label for=id>{label}</label>
            <select
                id=id
                required=true
                prop:value=move || form.with(get)
                on:change=move |ev| form.update(|r| set(r, event_target_value(&ev)))
            >
                <option value="">{placeholder}</option>
                {options
                    .iter()
                    .map(|opt| view! { <option value=*opt>{*opt}</option> })
                    .collect_view()}
            </select>
        </div>
    }
}
