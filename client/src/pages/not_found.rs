//! Fallback page for unknown routes.
//!
//! Leaving through "Back Home" drops the current event selection, so the
//! events list is shown again before any event-scoped page.

#[cfg(test)]
#[path = "not_found_test.rs"]
mod not_found_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::events_path;
use crate::state::session::Session;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Clear the event selection and return where "Back Home" leads.
pub fn leave_to_events<S: KeyValueStore + ?Sized>(session: &mut Session, store: &S) -> String {
    session.clear_event(store);
    events_path()
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let back_home = move |_| {
        let target = session.try_update(|s| leave_to_events(s, &BrowserStorage)).unwrap_or_else(events_path);
        navigate(&target, NavigateOptions::default());
    };

    view! {
        <div class="page page--not-found">
            <h1 class="page__title">"404"</h1>
            <p class="page__subtitle">"The page you are looking for does not exist."</p>
            <button class="btn btn--ghost" on:click=back_home>"Back Home"</button>
        </div>
    }
}
