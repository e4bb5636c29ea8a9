//! Toast Host Component
//!
//! Renders the queued notifications from the app store; each one dismisses
//! itself after a few seconds.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::store::{
    store_dismiss_toast, store_push_toast, use_app_store, AppStateStoreFields, AppStore, ToastKind,
};

const TOAST_MS: u32 = 4_000;

/// Queue a success toast that dismisses itself
pub fn notify_success(store: AppStore, message: impl Into<String>) {
    notify(store, ToastKind::Success, message.into());
}

/// Queue an error toast that dismisses itself
pub fn notify_error(store: AppStore, message: impl Into<String>) {
    notify(store, ToastKind::Error, message.into());
}

fn notify(store: AppStore, kind: ToastKind, message: String) {
    let id = store_push_toast(&store, kind, message);
    spawn_local(async move {
        TimeoutFuture::new(TOAST_MS).await;
        store_dismiss_toast(&store, id);
    });
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-host">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    view! { <div class=class>{toast.message.clone()}</div> }
                }
            />
        </div>
    }
}
