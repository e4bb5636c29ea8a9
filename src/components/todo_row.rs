//! Todo Row Component
//!
//! One list entry: completion checkbox, title, delete button.

use leptos::prelude::*;

use crate::models::Todo;

#[component]
pub fn TodoRow(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<(String, bool)>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let completed = todo.completed;
    let toggle_id = todo.id.clone();
    let delete_id = todo.id.clone();

    view! {
        <li class=if completed { "todo-row done" } else { "todo-row" }>
            <label class="todo-main">
                <input
                    type="checkbox"
                    prop:checked=completed
                    on:change=move |_| on_toggle.run((toggle_id.clone(), completed))
                />
                <span class=if completed { "todo-title done" } else { "todo-title" }>
                    {todo.title.clone()}
                </span>
            </label>
            {todo.description.clone().map(|d| view! { <span class="todo-desc">{d}</span> })}
            <button class="delete-btn" on:click=move |_| on_delete.run(delete_id.clone())>
                "Delete"
            </button>
        </li>
    }
}
