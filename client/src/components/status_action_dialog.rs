//! Approve/decline dialog for one participant.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::layout::sign_out_locally;
use crate::components::toaster::push_toast;
use crate::net::types::Participant;
use crate::routes::events_path;
use crate::state::session::Session;
use crate::state::status_action::{StatusAction, StatusResult};
use crate::state::toast::{ToastKind, ToastState};

#[component]
pub fn StatusActionDialog(
    event_id: String,
    participant: Participant,
    on_close: Callback<()>,
    on_updated: Callback<()>,
) -> impl IntoView {
    let action = RwSignal::new(StatusAction::new());
    let toasts = expect_context::<RwSignal<ToastState>>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let apply = Callback::new(move |result: StatusResult| match result {
        StatusResult::Updated(message) => {
            push_toast(toasts, ToastKind::Info, "Action", &message);
            on_close.run(());
            on_updated.run(());
        }
        StatusResult::Unauthorized => {
            sign_out_locally(session);
            on_close.run(());
            navigate(&events_path(), NavigateOptions::default());
        }
        StatusResult::Failed(message) => push_toast(toasts, ToastKind::Error, "Action", &message),
    });

    let participant_id = participant.id;
    let submit = move |_| {
        let request = match action.try_update(StatusAction::begin) {
            Some(Ok(Some(request))) => request,
            Some(Err(message)) => {
                push_toast(toasts, ToastKind::Error, "Action", message);
                return;
            }
            Some(Ok(None)) | None => return,
        };

        #[cfg(feature = "hydrate")]
        {
            let event_id = event_id.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::update_participant_status(&event_id, participant_id, &request).await;
                if let Some(result) = action.try_update(|a| a.apply_outcome(outcome)) {
                    apply.run(result);
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (request, &event_id, participant_id, apply);
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--status" on:click=move |ev| ev.stop_propagation()>
                <h2>"Update Status"</h2>
                <p class="dialog__description">{format!("{} <{}>", participant.name, participant.email)}</p>
                <select
                    class="dialog__input"
                    on:change=move |ev| action.update(|a| a.select(&event_target_value(&ev)))
                >
                    <option value="" selected=true>"Select a status"</option>
                    <option value="approved">"Approved"</option>
                    <option value="declined">"Declined"</option>
                </select>
                <Show when=move || action.with(StatusAction::needs_reason)>
                    <label class="dialog__label">
                        "Reason"
                        <textarea
                            class="dialog__input"
                            placeholder="e.g: fraud detected . . ."
                            prop:value=move || action.with(|a| a.reason.clone())
                            on:input=move |ev| action.update(|a| a.reason = event_target_value(&ev))
                        ></textarea>
                    </label>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button
                        class="btn btn--primary"
                        disabled=move || action.with(StatusAction::is_busy)
                        on:click=submit
                    >
                        {move || action.with(StatusAction::button_label)}
                    </button>
                </div>
            </div>
        </div>
    }
}
