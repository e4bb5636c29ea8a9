//! Dashboard Page Component
//!
//! The protected list view. On mount it checks the stored token, then runs
//! the fetch/mutate/refetch loop: every mutation is followed by a full list
//! reload, so the visible list is always re-derived from the server rather
//! than patched locally.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use wasm_bindgen::JsCast;

use crate::api;
use crate::components::toast_host::notify_success;
use crate::components::TodoRow;
use crate::graphql::ApiError;
use crate::models::Todo;
use crate::session;
use crate::store::use_app_store;
use crate::validate;

/// Phase of the list view. Data only exists in `Ready`, so a rendered list
/// with nothing behind it cannot be expressed.
#[derive(Debug, Clone, PartialEq)]
pub enum ListPhase {
    /// No local token; the view is on its way to `/signin`
    Unauthenticated,
    /// Token present, list fetch in flight
    Loading,
    /// List loaded
    Ready(Vec<Todo>),
    /// The fetch itself failed; replaces the list view entirely
    Failed(String),
}

/// Next phase once a list fetch resolves
fn fetch_resolved(result: Result<Vec<Todo>, ApiError>) -> ListPhase {
    match result {
        Ok(todos) => ListPhase::Ready(todos),
        Err(err) => ListPhase::Failed(err.to_string()),
    }
}

/// What a finished mutation does next
#[derive(Debug, PartialEq)]
enum MutationFollowUp {
    /// Reload the list from the server
    Refetch,
    /// Keep the current phase untouched; the error only gets logged
    KeepPhase,
}

/// A mutation never writes to the phase itself: success hands over to a
/// full refetch, failure leaves the rendered list exactly as it was.
fn mutation_follow_up<T>(result: &Result<T, ApiError>) -> MutationFollowUp {
    match result {
        Ok(_) => MutationFollowUp::Refetch,
        Err(_) => MutationFollowUp::KeepPhase,
    }
}

/// Console diagnostics for a failed mutation: headline plus any application
/// sub-errors. The visible list stays as it was; no refetch happens.
fn log_mutation_failure(op: &str, err: &ApiError) {
    web_sys::console::error_1(&format!("[DASHBOARD] {op} failed: {err}").into());
    if let ApiError::Api(errors) = err {
        for sub in errors {
            web_sys::console::error_1(&format!("[DASHBOARD]   graphql: {}", sub.message).into());
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let store = use_app_store();
    let navigate = use_navigate();

    let (phase, set_phase) = signal(ListPhase::Loading);
    let (new_todo, set_new_todo) = signal(String::new());

    // Bumped on every refetch and on unmount; a continuation only applies
    // its result while its generation is still the current one.
    let generation = StoredValue::new(0u32);
    on_cleanup(move || {
        let _ = generation.try_update_value(|g| *g += 1);
    });

    let refetch = move || {
        generation.update_value(|g| *g += 1);
        let fetch_generation = generation.get_value();
        spawn_local(async move {
            let resolved = fetch_resolved(api::get_todos().await);
            if generation.try_get_value() == Some(fetch_generation) {
                set_phase.set(resolved);
            }
        });
    };

    // Token check on mount; the query never fires without one.
    let mount_navigate = navigate.clone();
    Effect::new(move |_| match session::token() {
        Some(_) => {
            set_phase.set(ListPhase::Loading);
            refetch();
        }
        None => {
            set_phase.set(ListPhase::Unauthenticated);
            mount_navigate("/signin", Default::default());
        }
    });

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let raw = new_todo.get();
        let Some(title) = validate::create_title(&raw).map(str::to_string) else {
            return;
        };
        spawn_local(async move {
            let result = api::create_todo(&title, None).await;
            match mutation_follow_up(&result) {
                MutationFollowUp::Refetch => {
                    set_new_todo.set(String::new());
                    refetch();
                }
                MutationFollowUp::KeepPhase => {
                    if let Err(err) = &result {
                        log_mutation_failure("create", err);
                    }
                }
            }
        });
    };

    let toggle_todo = Callback::new(move |(id, completed): (String, bool)| {
        spawn_local(async move {
            let result = api::update_todo(&id, !completed).await;
            match mutation_follow_up(&result) {
                MutationFollowUp::Refetch => refetch(),
                MutationFollowUp::KeepPhase => {
                    if let Err(err) = &result {
                        log_mutation_failure("update", err);
                    }
                }
            }
        });
    });

    let delete_todo = Callback::new(move |id: String| {
        spawn_local(async move {
            let result = api::delete_todo(&id).await;
            match mutation_follow_up(&result) {
                MutationFollowUp::Refetch => refetch(),
                MutationFollowUp::KeepPhase => {
                    if let Err(err) = &result {
                        log_mutation_failure("delete", err);
                    }
                }
            }
        });
    });

    let logout_navigate = navigate.clone();
    let logout = move |_| {
        session::clear_token();
        notify_success(store, "Logout successful!");
        logout_navigate("/signin", Default::default());
    };

    view! {
        <div class="dashboard">
            <div class="dashboard-header">
                <h1>"Your Todo List"</h1>
                <button class="logout-btn" on:click=logout>
                    "Logout"
                </button>
            </div>

            <form class="new-todo-form" on:submit=add_todo>
                <input
                    type="text"
                    placeholder="Add a new task"
                    prop:value=move || new_todo.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_new_todo.set(input.value());
                    }
                />
                <button type="submit">"Add"</button>
            </form>

            {move || match phase.get() {
                ListPhase::Unauthenticated | ListPhase::Loading => {
                    view! { <p class="status">"Loading..."</p> }.into_any()
                }
                ListPhase::Failed(message) => {
                    view! { <p class="status error">"Error: " {message}</p> }.into_any()
                }
                ListPhase::Ready(todos) => {
                    if todos.is_empty() {
                        view! { <p class="empty-state">"No todos yet. Add one above!"</p> }
                            .into_any()
                    } else {
                        view! {
                            <ul class="todo-list">
                                {todos
                                    .into_iter()
                                    .map(|todo| {
                                        view! {
                                            <TodoRow
                                                todo=todo
                                                on_toggle=toggle_todo
                                                on_delete=delete_todo
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::GraphqlError;

    #[test]
    fn test_empty_list_is_ready_not_failed() {
        assert_eq!(fetch_resolved(Ok(Vec::new())), ListPhase::Ready(Vec::new()));
    }

    #[test]
    fn test_fetch_error_replaces_list() {
        let err = ApiError::Transport("connection refused".to_string());
        match fetch_resolved(Err(err)) {
            ListPhase::Failed(message) => assert!(message.contains("connection refused")),
            other => panic!("expected Failed, got {other:?}"),
        }
    }

    #[test]
    fn test_application_error_message_survives_into_phase() {
        let err = ApiError::Api(vec![GraphqlError {
            message: "Unauthorized".to_string(),
        }]);
        assert_eq!(
            fetch_resolved(Err(err)),
            ListPhase::Failed("Unauthorized".to_string())
        );
    }

    #[test]
    fn test_successful_mutation_triggers_refetch() {
        let result: Result<(), ApiError> = Ok(());
        assert_eq!(mutation_follow_up(&result), MutationFollowUp::Refetch);
    }

    #[test]
    fn test_failed_toggle_keeps_rendered_list() {
        let before = ListPhase::Ready(vec![Todo {
            id: "x".to_string(),
            title: "buy milk".to_string(),
            description: None,
            completed: false,
        }]);

        let result: Result<(), ApiError> =
            Err(ApiError::Transport("connection refused".to_string()));
        assert_eq!(mutation_follow_up(&result), MutationFollowUp::KeepPhase);

        // No refetch means no phase write; the item's completed flag is
        // exactly what it was before the toggle was attempted.
        match &before {
            ListPhase::Ready(todos) => assert!(!todos[0].completed),
            other => panic!("expected Ready, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_mutation_with_app_errors_keeps_phase() {
        let result: Result<(), ApiError> = Err(ApiError::Api(vec![GraphqlError {
            message: "Forbidden".to_string(),
        }]));
        assert_eq!(mutation_follow_up(&result), MutationFollowUp::KeepPhase);
    }
}
