//! Card component for main-todo list items on the home page.
//!
//! DESIGN
//! ======
//! The whole card navigates to the sub-todo list; edit and delete are
//! overlaid buttons that suppress that navigation and hand the action back
//! to the page via callbacks.

use leptos::prelude::*;

use crate::net::types::MainTodo;
use crate::util::format::format_date_time;

/// A clickable card representing one main todo, painted in its own colors.
#[component]
pub fn TodoCard(
    todo: MainTodo,
    on_edit: Callback<MainTodo>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let href = format!("/{}", todo.slug);
    let style = format!("background:{};color:{}", todo.color, todo.text_color);
    let created = format_date_time(&todo.created_at);
    let title = todo.title.clone();
    let delete_id = todo.id.clone();
    let edit_todo = todo.clone();

    view! {
        <a class="todo-card" href=href style=style>
            <div class="todo-card__body">
                <h3 class="todo-card__title">{title}</h3>
                <p class="todo-card__created">"Created: " {created}</p>
            </div>
            <div class="todo-card__actions">
                <button
                    class="todo-card__edit"
                    title="Edit"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_edit.run(edit_todo.clone());
                    }
                >
                    "Edit"
                </button>
                <button
                    class="todo-card__delete"
                    title="Delete"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        on_delete.run(delete_id.clone());
                    }
                >
                    "Delete"
                </button>
            </div>
        </a>
    }
}
