//! Invite a new admin by email.

use leptos::prelude::*;

use crate::state::gate::SessionGate;
use crate::state::toast::ToastState;
use crate::state::users::InviteForm;

#[component]
pub fn InviteUserDialog(on_close: Callback<()>, on_invited: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(InviteForm::default());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let gate = expect_context::<RwSignal<SessionGate>>();

    let submit = Callback::new(move |()| {
        let Some(email) = form.try_update(InviteForm::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::components::toaster::push_toast;
            use crate::state::toast::ToastKind;
            use crate::state::users::InviteResult;

            let outcome = crate::net::api::invite_user(&email).await;
            match form.try_update(|f| f.apply_outcome(outcome)) {
                Some(InviteResult::Sent(message)) => {
                    push_toast(toasts, ToastKind::Info, "Invitation", &message);
                    on_close.run(());
                    on_invited.run(());
                }
                Some(InviteResult::Unauthorized) => {
                    gate.update(SessionGate::signal_unauthorized);
                    on_close.run(());
                }
                Some(InviteResult::Failed(_)) | None => {}
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (email, toasts, gate, on_invited);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--invite" on:click=move |ev| ev.stop_propagation()>
                <h2>"Invite new User"</h2>
                <p class="dialog__description">"The invited admin receives a magic link by email."</p>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        placeholder="admin@tix.id"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                {move || {
                    form.with(|f| f.error().map(str::to_owned))
                        .map(|message| view! { <p class="dialog__message dialog__message--error">{message}</p> })
                }}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || form.with(InviteForm::is_busy)
                        on:click=move |_| submit.run(())
                    >
                        {move || if form.with(InviteForm::is_busy) { "Please wait..." } else { "Send Invitation" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
