//! Home page listing main todos with edit and delete actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. It fetches the collection once
//! a session is confirmed and re-fetches after every successful mutation;
//! failures leave the rendered list untouched.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::spinner::Spinner;
use crate::components::toast::{report_api_error, show};
use crate::components::todo_card::TodoCard;
use crate::net::types::{MainTodo, MainTodoPayload};
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::state::todos::MainTodosState;
use crate::util::guard;

/// Edit-modal form state, pre-populated from the target todo. Submitting
/// unchanged fields is permitted; there is no dirty-check.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct EditTodoForm {
    id: String,
    title: String,
    color: String,
    text_color: String,
}

impl EditTodoForm {
    fn from_todo(todo: &MainTodo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            color: todo.color.clone(),
            text_color: todo.text_color.clone(),
        }
    }

    fn payload(&self) -> Result<MainTodoPayload, &'static str> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required");
        }
        Ok(MainTodoPayload {
            title: title.to_owned(),
            color: self.color.clone(),
            text_color: self.text_color.clone(),
        })
    }
}

/// Home page — the main-todo grid with create/edit/delete affordances.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    guard::install_protected(session, navigate);

    let todos = RwSignal::new(MainTodosState::default());

    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if !session.get().is_authenticated() {
            return;
        }
        load_main_todos(session, toasts, todos);
        requested.set(true);
    });

    let edit_open = RwSignal::new(false);
    let edit_form = RwSignal::new(EditTodoForm::default());
    let delete_id = RwSignal::new(None::<String>);

    let on_edit = Callback::new(move |todo: MainTodo| {
        edit_form.set(EditTodoForm::from_todo(&todo));
        edit_open.set(true);
    });
    let on_delete_request = Callback::new(move |id: String| delete_id.set(Some(id)));
    let on_edit_cancel = Callback::new(move |()| edit_open.set(false));
    let on_delete_cancel = Callback::new(move |()| delete_id.set(None));

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__content">
                <h2 class="page__heading">"Your Todos"</h2>

                <Show when=move || !todos.get().loading fallback=move || view! { <Spinner/> }>
                    <Show
                        when=move || !todos.get().items.is_empty()
                        fallback=move || {
                            view! {
                                <div class="empty-state">
                                    <p>"No todos found. Start by creating one!"</p>
                                    <a class="empty-state__cta" href="/create">
                                        "Add Task"
                                    </a>
                                </div>
                            }
                        }
                    >
                        <div class="todo-grid">
                            {move || {
                                todos
                                    .get()
                                    .items
                                    .into_iter()
                                    .map(|todo| {
                                        view! {
                                            <TodoCard todo=todo on_edit=on_edit on_delete=on_delete_request/>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>

                <Show when=move || edit_open.get()>
                    <EditTodoDialog
                        form=edit_form
                        on_cancel=on_edit_cancel
                        session=session
                        toasts=toasts
                        todos=todos
                    />
                </Show>
                <Show when=move || delete_id.get().is_some()>
                    <DeleteTodoDialog
                        todo_id=delete_id
                        on_cancel=on_delete_cancel
                        session=session
                        toasts=toasts
                        todos=todos
                    />
                </Show>
            </main>
        </div>
    }
}

/// Modal dialog for editing a main todo's title and colors.
#[component]
fn EditTodoDialog(
    form: RwSignal<EditTodoForm>,
    on_cancel: Callback<()>,
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    todos: RwSignal<MainTodosState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let current = form.get_untracked();
        let payload = match current.payload() {
            Ok(payload) => payload,
            Err(warning) => {
                show(toasts, ToastKind::Warning, warning);
                return;
            }
        };
        let Some(token) = session.get_untracked().token() else {
            return;
        };
        on_cancel.run(());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_main_todo(&token, &current.id, &payload).await {
                Ok(message) => {
                    show(
                        toasts,
                        ToastKind::Success,
                        message.unwrap_or_else(|| "Todo updated".to_owned()),
                    );
                    load_main_todos(session, toasts, todos);
                }
                Err(err) => report_api_error(session, toasts, &err),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, payload);
        }
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h3 class="dialog__title">"Edit Todo"</h3>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Title"
                    prop:value=move || form.get().title
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
                <div class="dialog__colors">
                    <label class="dialog__color">
                        "Background"
                        <input
                            type="color"
                            prop:value=move || form.get().color
                            on:input=move |ev| form.update(|f| f.color = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__color">
                        "Text"
                        <input
                            type="color"
                            prop:value=move || form.get().text_color
                            on:input=move |ev| form.update(|f| f.text_color = event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit">
                        "Update"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// Confirmation dialog for deleting a main todo; declining issues no request.
#[component]
fn DeleteTodoDialog(
    todo_id: RwSignal<Option<String>>,
    on_cancel: Callback<()>,
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    todos: RwSignal<MainTodosState>,
) -> impl IntoView {
    let submit = Callback::new(move |()| {
        let Some(id) = todo_id.get_untracked() else {
            return;
        };
        let Some(token) = session.get_untracked().token() else {
            return;
        };
        on_cancel.run(());
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_main_todo(&token, &id).await {
                Ok(message) => {
                    show(
                        toasts,
                        ToastKind::Success,
                        message.unwrap_or_else(|| "Todo deleted".to_owned()),
                    );
                    load_main_todos(session, toasts, todos);
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
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h3 class="dialog__title">"Delete Todo"</h3>
                <p class="dialog__danger">"Are you sure you want to delete this todo?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| submit.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Fetch the full main-todo collection, replacing local items on success.
fn load_main_todos(
    session: RwSignal<SessionState>,
    toasts: RwSignal<ToastState>,
    todos: RwSignal<MainTodosState>,
) {
    let Some(token) = session.get_untracked().token() else {
        return;
    };
    todos.update(|state| state.loading = true);
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::api::fetch_main_todos(&token).await {
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
        let _ = (token, toasts);
    }
}
