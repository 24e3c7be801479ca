//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::toast::ToastShelf;
use crate::pages::{
    add_todo::AddTodoPage, home::HomePage, login::LoginPage, signup::SignUpPage,
    sub_todos::SubTodosPage,
};
use crate::state::session::SessionState;
use crate::state::toast::ToastState;

/// Root application component.
///
/// Hydrates the session from storage, provides shared state contexts and
/// sets up client-side routing. Unknown paths redirect home; the route
/// guards then sort authenticated and anonymous visitors.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::from_storage());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(session);
    provide_context(toasts);

    view! {
        <Stylesheet id="app" href="/styles.css"/>
        <Title text="PolyTecHub"/>

        <ToastShelf/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("create") view=AddTodoPage/>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=ParamSegment("slug") view=SubTodosPage/>
            </Routes>
        </Router>
    }
}
