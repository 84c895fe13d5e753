//! Read-only profile view opened from the user menu.

use leptos::prelude::*;

use crate::state::gate::SessionGate;

#[component]
pub fn SettingsDialog(on_close: Callback<()>) -> impl IntoView {
    let gate = expect_context::<RwSignal<SessionGate>>();
    let field = move |pick: fn(&crate::net::types::User) -> String| {
        move || gate.with(|g| g.profile().map(pick).unwrap_or_default())
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--settings" on:click=move |ev| ev.stop_propagation()>
                <button class="dialog__close" title="Close" on:click=move |_| on_close.run(())>"×"</button>
                <h2>"Settings"</h2>
                <p class="dialog__description">"Your profile as the TIX API knows it."</p>
                <label class="dialog__label">
                    "UUID"
                    <input class="dialog__input" type="text" disabled=true prop:value=field(|u| u.uuid.clone())/>
                </label>
                <label class="dialog__label">
                    "Email"
                    <input class="dialog__input" type="text" disabled=true prop:value=field(|u| u.email.clone())/>
                </label>
                <label class="dialog__label">
                    "Username"
                    <input
                        class="dialog__input"
                        type="text"
                        disabled=true
                        prop:value=field(|u| format!("@{}", u.username))
                    />
                </label>
            </div>
        </div>
    }
}
