//! Sub-todo page for a single main todo, addressed by slug.
//!
//! SYSTEM CONTEXT
//! ==============
//! The slug comes from the route. Navigating between two slugged routes
//! re-runs the load; each successful mutation re-fetches the list once.
//! Toggling completion resubmits the full task with `complete` inverted.

#[cfg(test)]
#[path = "sub_todos_test.rs"]
mod sub_todos_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::components::spinner::Spinner;
use crate::components::toast::{report_api_error, show};
use crate::net::types::{SubTodo, SubTodoPayload};
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::todos::SubTodosState;
use crate::util::format::format_date_time;
use crate::util::guard;

/// Form state shared by the create and edit panels.
#[derive(Clone, Debug, PartialEq, Eq)]
struct SubTodoForm {
    task_name: String,
    comment: String,
    color: String,
    text_color: String,
}

impl Default for SubTodoForm {
    fn default() -> Self {
        Self {
            task_name: String::new(),
            comment: String::new(),
            color: "#ffffff".to_owned(),
            text_color: "#000000".to_owned(),
        }
    }
}

impl SubTodoForm {
    fn from_todo(todo: &SubTodo) -> Self {
        Self {
            task_name: todo.task_name.clone(),
            comment: todo.comment.clone(),
            color: todo.color.clone(),
            text_color: todo.text_color.clone(),
        }
    }
}

/// Render the slug as a heading: dashes become spaces.
fn slug_title(slug: &str) -> String {
    slug.replace('-', " ")
}

fn validate_sub_todo_form(
    form: &SubTodoForm,
    slug: &str,
    complete: bool,
) -> Result<SubTodoPayload, &'static str> {
    let task_name = form.task_name.trim();
    if task_name.is_empty() {
        return Err("Task name is required");
    }
    Ok(SubTodoPayload {
        task_name: task_name.to_owned(),
        comment: form.comment.trim().to_owned(),
        color: form.color.clone(),
        text_color: form.text_color.clone(),
        complete,
        slug: slug.to_owned(),
    })
}

/// Full-entity payload with the completion flag inverted. Tasks created
/// before slugs were stored on them fall back to the page's slug.
fn toggle_payload(todo: &SubTodo, fallback_slug: &str) -> SubTodoPayload {
    let slug = if todo.slug.is_empty() { fallback_slug } else { &todo.slug };
    SubTodoPayload {
        task_name: todo.task_name.clone(),
        comment: todo.comment.clone(),
        color: todo.color.clone(),
        text_color: todo.text_color.clone(),
        complete: !todo.complete,
        slug: slug.to_owned(),
    }
}

/// Inline style for a task row. Completed rows get a fixed green treatment
/// regardless of the stored colors.
fn row_style(todo: &SubTodo) -> String {
    if todo.complete {
        return "background-color:#10b981;color:#ffffff".to_owned();
    }
    let color = if todo.color.is_empty() { "#f9f9f9" } else { &todo.color };
    let text_color = if todo.text_color.is_empty() { "#000000" } else { &todo.text_color };
    format!("background-color:{color};color:{text_color}")
}

/// Task list for one main todo, with inline create, edit, toggle and delete.
#[component]
pub fn SubTodosPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();

    guard::install_protected(session, navigate);

    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());

    let todos = RwSignal::new(SubTodosState::default());
    let form = RwSignal::new(SubTodoForm::default());
    let editing = RwSignal::new(None::<SubTodo>);
    let delete_id = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    // Keyed on the slug so client-side navigation between lists reloads.
    let loaded_slug = RwSignal::new(String::new());
    Effect::new(move || {
        let current = slug.get();
        if current.is_empty() || !session.get().is_authenticated() {
            return;
        }
        if loaded_slug.get() == current {
            return;
        }
        loaded_slug.set(current.clone());
        load_sub_todos(session, toasts, todos, current);
    });

    let begin_edit = Callback::new(move |todo: SubTodo| {
        form.set(SubTodoForm::from_todo(&todo));
        editing.set(Some(todo));
    });
    let cancel_edit = Callback::new(move |()| {
        editing.set(None);
        form.set(SubTodoForm::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let target = editing.get_untracked();
        let complete = target.as_ref().is_some_and(|t| t.complete);
        let payload = match validate_sub_todo_form(&form.get_untracked(), &slug.get_untracked(), complete) {
            Ok(payload) => payload,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        let Some(token) = session.get_untracked().token() else {
            return;
        };
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let outcome = match &target {
                Some(todo) => crate::net::api::update_sub_todo(&token, &todo.id, &payload).await,
                None => crate::net::api::create_sub_todo(&token, &payload).await,
            };
            match outcome {
                Ok(message) => {
                    let fallback = if target.is_some() {
                        "Updated successfully"
                    } else {
                        "Created successfully"
                    };
                    show(toasts, ToastKind::Success, message.unwrap_or_else(|| fallback.to_owned()));
                    editing.set(None);
                    form.set(SubTodoForm::default());
                    load_sub_todos(session, toasts, todos, slug.get_untracked());
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, payload, target);
        }
    };

    let on_toggle = Callback::new(move |todo: SubTodo| {
        if busy.get() {
            return;
        }
        let Some(token) = session.get_untracked().token() else {
            return;
        };
        let payload = toggle_payload(&todo, &slug.get_untracked());
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_sub_todo(&token, &todo.id, &payload).await {
                Ok(message) => {
                    show(
                        toasts,
                        ToastKind::Success,
                        message.unwrap_or_else(|| "Status updated".to_owned()),
                    );
                    load_sub_todos(session, toasts, todos, slug.get_untracked());
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, payload, todo);
        }
    });

    let confirm_delete = Callback::new(move |()| {
        let Some(id) = delete_id.get_untracked() else {
            return;
        };
        let Some(token) = session.get_untracked().token() else {
            return;
        };
        delete_id.set(None);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_sub_todo(&token, &id).await {
                Ok(message) => {
                    show(
                        toasts,
                        ToastKind::Success,
                        message.unwrap_or_else(|| "Deleted successfully".to_owned()),
                    );
                    load_sub_todos(session, toasts, todos, slug.get_untracked());
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, id);
        }
    });

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__content">
                <h2 class="page__heading page__heading--slug">{move || slug_title(&slug.get())}</h2>

                <form class="todo-form todo-form--inline" on:submit=on_submit>
                    <input
                        class="todo-form__input"
                        type="text"
                        placeholder="Task name"
                        prop:value=move || form.get().task_name
                        on:input=move |ev| form.update(|f| f.task_name = event_target_value(&ev))
                    />
                    <input
                        class="todo-form__input"
                        type="text"
                        placeholder="Comment (optional)"
                        prop:value=move || form.get().comment
                        on:input=move |ev| form.update(|f| f.comment = event_target_value(&ev))
                    />
                    <label class="todo-form__color">
                        "Background"
                        <input
                            type="color"
                            prop:value=move || form.get().color
                            on:input=move |ev| form.update(|f| f.color = event_target_value(&ev))
                        />
                    </label>
                    <label class="todo-form__color">
                        "Text"
                        <input
                            type="color"
                            prop:value=move || form.get().text_color
                            on:input=move |ev| form.update(|f| f.text_color = event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if editing.get().is_some() { "Update Task" } else { "Add Task" }}
                    </button>
                    <Show when=move || editing.get().is_some()>
                        <button class="btn" type="button" on:click=move |_| cancel_edit.run(())>
                            "Cancel"
                        </button>
                    </Show>
                </form>

                <Show when=move || !todos.get().loading fallback=move || view! { <Spinner/> }>
                    <Show
                        when=move || !todos.get().items.is_empty()
                        fallback=move || {
                            view! { <p class="empty-state">"No tasks yet. Add your first one above."</p> }
                        }
                    >
                        <ul class="task-list">
                            {move || {
                                todos
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|todo| {
                                        let toggle_target = todo.clone();
                                        let edit_target = todo.clone();
                                        let id = todo.id.clone();
                                        let comment = todo.comment.clone();
                                        view! {
                                            <li class="task-list__row" style=row_style(&todo)>
                                                <input
                                                    type="checkbox"
                                                    prop:checked=todo.complete
                                                    prop:disabled=move || busy.get()
                                                    on:change=move |_| on_toggle.run(toggle_target.clone())
                                                />
                                                <div class="task-list__body">
                                                    <span class=move || {
                                                        if todo.complete {
                                                            "task-list__name task-list__name--done"
                                                        } else {
                                                            "task-list__name"
                                                        }
                                                    }>{todo.task_name.clone()}</span>
                                                    <Show when={
                                                        let comment = comment.clone();
                                                        move || !comment.is_empty()
                                                    }>
                                                        <span class="task-list__comment">{comment.clone()}</span>
                                                    </Show>
                                                    <span class="task-list__date">
                                                        {format_date_time(&todo.created_at)}
                                                    </span>
                                                </div>
                                                <div class="task-list__actions">
                                                    <button
                                                        class="btn btn--ghost"
                                                        on:click=move |_| begin_edit.run(edit_target.clone())
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--ghost btn--danger"
                                                        on:click=move |_| delete_id.set(Some(id.clone()))
                                                    >
                                                        "Delete"
                                                    </button>
                                                </div>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                </Show>

                <Show when=move || delete_id.get().is_some()>
                    <div class="dialog-backdrop" on:click=move |_| delete_id.set(None)>
                        <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                            <h3 class="dialog__title">"Delete Task"</h3>
                            <p class="dialog__danger">"Are you sure you want to delete this task?"</p>
                            <div class="dialog__actions">
                                <button class="btn" on:click=move |_| delete_id.set(None)>
                                    "Cancel"
                                </button>
                                <button class="btn btn--danger" on:click=move |_| confirm_delete.run(())>
                                    "Delete"
                                </button>
                            </div>
                        </div>
                    </div>
                </Show>
            </main>
        </div>
    }
}

/// Fetch the tasks for one slug, replacing local items on success.
fn load_sub_todos(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    todos: RwSignal<SubTodosState>,
    slug: String,
) {
    let Some(token) = session.get_untracked().token() else {
        return;
    };
    todos.update(|state| state.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_sub_todos(&token, &slug).await {
            Ok(items) => todos.update(|state| {
                state.items = items;
                state.loading = false;
            }),
            Err(err) => {
                todos.update(|state| state.loading = false);
                report_api_error(session, toasts, &err);
            }
        }
    });
    #[cfg(not(feature = "csr"))]
    {
        let _ = (token, toasts, slug);
    }
}
