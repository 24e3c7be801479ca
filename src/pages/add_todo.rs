//! Dedicated page for creating a main todo.

#[cfg(test)]
#[path = "add_todo_test.rs"]
mod add_todo_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::components::navbar::Navbar;
use crate::components::toast::{report_api_error, show};
use crate::net::types::MainTodoPayload;
use crate::state::session::SessionState;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::guard;

const DEFAULT_COLOR: &str = "#10b981";
const DEFAULT_TEXT_COLOR: &str = "#ffffff";

fn validate_new_todo(title: &str, color: &str, text_color: &str) -> Result<MainTodoPayload, &'static str> {
    let title = title.trim();
    if title.is_empty() {
        return Err("Title is required");
    }
    Ok(MainTodoPayload {
        title: title.to_owned(),
        color: color.to_owned(),
        text_color: text_color.to_owned(),
    })
}

/// Create-todo page; a successful create navigates back to the list.
#[component]
pub fn AddTodoPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();

    guard::install_protected(session, navigate.clone());

    let title = RwSignal::new(String::new());
    let color = RwSignal::new(DEFAULT_COLOR.to_owned());
    let text_color = RwSignal::new(DEFAULT_TEXT_COLOR.to_owned());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let payload = match validate_new_todo(&title.get(), &color.get(), &text_color.get()) {
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
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::create_main_todo(&token, &payload).await {
                    Ok(message) => {
                        show(
                            toasts,
                            ToastKind::Success,
                            message.unwrap_or_else(|| "Todo created".to_owned()),
                        );
                        navigate("/", NavigateOptions::default());
                    }
                    Err(err) => report_api_error(session, toasts, &err),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, payload, &navigate);
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__content page__content--narrow">
                <h2 class="page__heading">"Add Todo"</h2>
                <form class="todo-form" on:submit=on_submit>
                    <label class="todo-form__label">
                        "Title"
                        <input
                            class="todo-form__input"
                            type="text"
                            placeholder="What needs doing?"
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <div class="todo-form__colors">
                        <label class="todo-form__color">
                            "Background"
                            <input
                                type="color"
                                prop:value=move || color.get()
                                on:input=move |ev| color.set(event_target_value(&ev))
                            />
                        </label>
                        <label class="todo-form__color">
                            "Text"
                            <input
                                type="color"
                                prop:value=move || text_color.get()
                                on:input=move |ev| text_color.set(event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating..." } else { "Create Todo" }}
                    </button>
                </form>
            </main>
        </div>
    }
}
