//! Logout confirmation.

#[cfg(test)]
#[path = "logout_dialog_test.rs"]
mod logout_dialog_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::sign_out_locally;
use crate::components::toaster::push_toast;
use crate::net::outcome::ApiOutcome;
use crate::routes::events_path;
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};

/// Whether a logout response ends the session. The API answers a
/// successful logout with `401`.
pub fn logout_succeeded<T>(outcome: &ApiOutcome<T>) -> bool {
    matches!(outcome, ApiOutcome::Success(_) | ApiOutcome::Unauthorized)
}

#[component]
pub fn LogoutDialog(on_close: Callback<()>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let finish = Callback::new(move |outcome: ApiOutcome<serde_json::Value>| {
        busy.set(false);
        if logout_succeeded(&outcome) {
            sign_out_locally(session);
            on_close.run(());
            navigate(&events_path(), NavigateOptions::default());
        } else {
            push_toast(toasts, ToastKind::Error, "Logout", outcome.message().unwrap_or_default());
        }
    });

    let confirm = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::logout().await;
            finish.run(outcome);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = finish;
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--alert" on:click=move |ev| ev.stop_propagation()>
                <h2>"Logout"</h2>
                <p class="dialog__description">"Are you sure you want to logout?"</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=confirm>
                        "Lemme Out"
                    </button>
                </div>
            </div>
        </div>
    }
}
