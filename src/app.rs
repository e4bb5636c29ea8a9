//! Todo List Frontend App
//!
//! Route table plus the navigation gate that runs ahead of every view.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{DashboardPage, SigninPage, SignupPage, ToastHost};
use crate::gate::{self, GateDecision};
use crate::session;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide the store to all children
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <RouteGate />
            <ToastHost />
            <main class="app-main">
                <Routes fallback=|| view! { <p class="status">"Not found"</p> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/signin") view=SigninPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/dashboard") view=DashboardPage />
                </Routes>
            </main>
        </Router>
    }
}

/// Applies the gate decision on every location change, before the target
/// view does any work of its own. Reads only the cookie token.
#[component]
fn RouteGate() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move |_| {
        let path = location.pathname.get();
        if let GateDecision::Redirect(target) =
            gate::decide(&path, session::cookie_token().as_deref())
        {
            navigate(target, Default::default());
        }
    });
}

