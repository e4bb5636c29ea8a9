//! Signin Page Component
//!
//! Keeps the looser contains-`@`-and-`.` email check, and only starts
//! showing the email error once the field has been typed in.

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
pub fn SigninPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_touched, set_email_touched) = signal(false);
    let (show_password, set_show_password) = signal(false);
    let (submitting, set_submitting) = signal(false);

    let email_invalid = move || !validate::signin_email(&email.get());
    let show_email_error = move || email_touched.get() && email_invalid();
    let button_disabled =
        move || submitting.get() || !validate::signin_form_valid(&email.get(), &password.get());

    let handle_signin = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if button_disabled() {
            return;
        }
        set_submitting.set(true);
        let email_value = email.get();
        let password_value = password.get();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(auth) => {
                    session::store_token(&auth.access_token);
                    notify_success(store, "Signin successful!");
                    navigate("/dashboard", Default::default());
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[SIGNIN] login failed: {err}").into());
                    notify_error(store, err.app_message().unwrap_or("Signin failed").to_string());
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Sign In"</h2>
                <form on:submit=handle_signin>
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            set_email.set(input.value());
                            // Mark touched after the first change.
                            if !email_touched.get_untracked() {
                                set_email_touched.set(true);
                            }
                        }
                    />
                    <Show when=show_email_error>
                        <span class="field-error">"Please enter a valid email address"</span>
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

                    <button type="submit" disabled=button_disabled>
                        "Sign In"
                    </button>
                </form>

                <h5>
                    "Don't have an account? "
                    <A href="/signup">"Sign Up"</A>
                </h5>
            </div>
        </div>
    }
}
