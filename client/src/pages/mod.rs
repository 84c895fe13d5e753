//! Route-level page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each data page owns a [`PageLoader`] signal and fills it on mount through
//! [`spawn_load`]. A `401` from any loader is forwarded to the session gate,
//! which re-opens the login prompt.

pub mod event_overview;
pub mod event_participants;
pub mod home;
pub mod not_found;
pub mod users;

use std::future::Future;

use leptos::prelude::*;

use crate::net::outcome::ApiOutcome;
use crate::state::gate::SessionGate;
use crate::state::loader::{PageData, PageLoader};

/// Start a new load generation and run `fetch` on the browser event loop.
pub(crate) fn spawn_load<T, F, Fut>(loader: RwSignal<PageLoader<T>>, gate: RwSignal<SessionGate>, fetch: F)
where
    T: PageData + Send + Sync + 'static,
    F: FnOnce() -> Fut + 'static,
    Fut: Future<Output = ApiOutcome<Option<T>>> + 'static,
{
    let Some(generation) = loader.try_update(PageLoader::start) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let outcome = fetch().await;
        if loader.try_update(|l| l.settle(generation, outcome)) == Some(crate::state::loader::Settled::Unauthorized) {
            log::debug!("page load unauthorized (generation {generation})");
            gate.update(SessionGate::signal_unauthorized);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = (generation, gate, fetch);
}
