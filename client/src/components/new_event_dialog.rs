//! "Create new Event" dialog.
//!
//! DESIGN
//! ======
//! All field rules live in [`NewEventForm`]; this component only binds inputs
//! and runs the two requests. A rejected submission is shown with a blocking
//! `window.alert`; any other submit failure stays inline above the actions.

use leptos::prelude::*;

use crate::state::event_form::{NewEventForm, parse_date_input};
use crate::state::gate::SessionGate;

#[component]
pub fn NewEventDialog(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(NewEventForm::new());
    let gate = expect_context::<RwSignal<SessionGate>>();

    let validate = move |_| {
        let Some(form_id) = form.try_update(NewEventForm::begin_validation).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::validate_google_form(&form_id).await;
            if form.try_update(|f| f.apply_validation(outcome)) == Some(true) {
                gate.update(SessionGate::signal_unauthorized);
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (form_id, gate);
    };

    let submit = move |_| {
        let Some(request) = form.try_update(NewEventForm::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::state::event_form::SubmitResult;

            let outcome = crate::net::api::create_event(&request).await;
            let Some(result) = form.try_update(|f| f.apply_submit(outcome)) else {
                return;
            };
            match result {
                SubmitResult::Created => {
                    log::info!("event created: {}", request.name);
                    on_created.run(());
                }
                SubmitResult::Rejected(message) => {
                    if let Some(window) = web_sys::window() {
                        let _ = window.alert_with_message(&message);
                    }
                }
                SubmitResult::Unauthorized => {
                    gate.update(SessionGate::signal_unauthorized);
                    on_close.run(());
                }
                SubmitResult::Failed(message) => log::warn!("create event failed: {message}"),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (request, on_created);
    };

    let accepted = move || form.with(NewEventForm::form_accepted);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--event" on:click=move |ev| ev.stop_propagation()>
                <h2>"Create new Event"</h2>
                <p class="dialog__description">"Add a new event to manage participants and tickets."</p>

                <label class="dialog__label">
                    "Google Form ID"
                    <div class="dialog__inline">
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g: 1FAIpQLScYGWgSs8k7viWgVzLFfu1cCOpFZksIoiBFKrpMnpGSjX1jHw"
                            prop:value=move || form.with(|f| f.google_form_id.clone())
                            disabled=move || form.with(NewEventForm::form_id_locked)
                            on:input=move |ev| form.update(|f| f.google_form_id = event_target_value(&ev))
                        />
                        <button
                            class="btn"
                            disabled=move || form.with(NewEventForm::form_id_locked)
                            on:click=validate
                        >
                            {move || {
                                if form.with(NewEventForm::is_validating) {
                                    "Checking..."
                                } else if accepted() {
                                    "Verified"
                                } else {
                                    "Validate"
                                }
                            }}
                        </button>
                    </div>
                </label>
                {move || {
                    form.with(|f| f.form_error().map(str::to_owned))
                        .map(|message| view! { <p class="dialog__message dialog__message--error">{message}</p> })
                }}

                <Show when=accepted>
                    <div class="dialog__questions">
                        <span class="dialog__questions-label">"Forms:"</span>
                        {move || {
                            form.with(|f| {
                                f.questions()
                                    .iter()
                                    .map(|q| view! { <span class="badge">{q.title.to_lowercase()}</span> })
                                    .collect::<Vec<_>>()
                            })
                        }}
                    </div>

                    <label class="dialog__label">
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g: Stand up comedy."
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Preregister"
                        <input
                            class="dialog__input"
                            type="date"
                            on:change=move |ev| form.update(|f| f.preregister_date = parse_date_input(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="dialog__label">
                        "Event Date"
                        <input
                            class="dialog__input"
                            type="date"
                            on:change=move |ev| form.update(|f| f.event_date = parse_date_input(&event_target_value(&ev)))
                        />
                    </label>
                    <label class="dialog__label">
                        "Location"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g: Jalan Suka Maju no 45"
                            prop:value=move || form.with(|f| f.location.clone())
                            on:input=move |ev| form.update(|f| f.location = event_target_value(&ev))
                        />
                    </label>

                    {move || {
                        form.with(|f| f.submit_error().map(str::to_owned))
                            .map(|message| view! { <p class="dialog__message dialog__message--error">{message}</p> })
                    }}
                    <div class="dialog__actions dialog__actions--split">
                        <button class="btn btn--danger" on:click=move |_| form.update(NewEventForm::reset)>
                            "Reset"
                        </button>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                            <button
                                class="btn btn--primary"
                                disabled=move || !form.with(NewEventForm::can_submit)
                                on:click=submit
                            >
                                {move || if form.with(NewEventForm::is_submitting) { "Please wait . . ." } else { "Submit" }}
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </div>
    }
}
