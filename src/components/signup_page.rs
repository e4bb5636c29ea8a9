//! Signup Page Component
//!
//! Strict validation re-runs on every keystroke; per-field messages plus a
//! combined flag gating the submit button. On success the new account lands
//! on the signin page rather than straight in the dashboard.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::toast_host::{notify_error, notify_success};
use crate::session;
use crate::store::use_app_store;
use crate::validate;

#[component]
pub fn SignupPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (show_password, set_show_password) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let email_error = move || validate::signup_email_error(&email.get());
    let password_error = move || validate::signup_password_error(&password.get());
    let button_disabled =
        move || submitting.get() || !validate::signup_form_valid(&email.get(), &password.get());

    let handle_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if button_disabled() {
            return;
        }
        set_submitting.set(true);
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::signup(&email_value, &password_value).await {
                Ok(auth) => {
                    session::store_token(&auth.access_token);
                    notify_success(store, "Signup successful!");
                    navigate("/signin", Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SIGNUP] signup failed: {err}").into());
                    notify_error(store, err.app_message().unwrap_or("Signup failed").to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign Up"</h2>
                <form on:submit=handle_submit>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                        }
                    />
                    <Show when=move || !email_error().is_empty()>
                        <span class="field-error">{email_error}</span>
                    </Show>

                    <div class="password-row">
                        <input
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Password"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                let target = ev.target().unwrap();
                                let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                                set_password.set(input.value());
                            }
                        />
                        <button
                            type="button"
                            class="eye-btn"
                            on:click=move |_| set_show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "Hide" } else { "Show" }}
                        </button>
                    </div>
                    <Show when=move || !password_error().is_empty()>
                        <span class="field-error">{password_error}</span>
                    </Show>

                    <button type="submit" disabled=button_disabled>
                        "Sign Up"
                    </button>
                </form>

                <h5>
                    "Already have an account? "
                    <A href="/signin">"Sign In"</A>
                </h5>
            </div>
        </div>
    }
}
