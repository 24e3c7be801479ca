//! Top navigation bar with responsive menu and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// App-wide navigation: brand link home, a link to the create form, and a
/// logout action that drops the session. Collapses behind a menu toggle on
/// narrow viewports.
#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let menu_open = RwSignal::new(false);
    let navigate = use_navigate();

    let on_logout = Callback::new(move |()| {
        crate::state::session::expire(session);
        menu_open.set(false);
        navigate("/login", NavigateOptions::default());
    });

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">
                    "POLY" <span class="navbar__brand-accent">"TECHUB"</span>
                </a>

                <div class="navbar__links">
                    <a class="navbar__link" href="/create">
                        "Add Todo"
                    </a>
                    <Show when=move || session.get().is_authenticated()>
                        <button class="navbar__logout" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </Show>
                </div>

                <button
                    class="navbar__menu-toggle"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                    aria-label="Toggle menu"
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    <a class="navbar__link" href="/create" on:click=move |_| menu_open.set(false)>
                        "Add Todo"
                    </a>
                    <Show when=move || session.get().is_authenticated()>
                        <button class="navbar__logout" on:click=move |_| on_logout.run(())>
                            "Logout"
                        </button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
