//! Participants of one event: sync from Google Forms, export, and per-row
//! status actions.
//!
//! DESIGN
//! ======
//! Event-scoped actions resolve the event from the session selection, not
//! the URL, so an explicitly cleared selection stops them before any request
//! is made. The list itself loads for the event named in the route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::spawn_load;
use crate::components::layout::sign_out_locally;
use crate::components::sections::{ErrorSection, NoDataSection};
use crate::components::status_action_dialog::StatusActionDialog;
use crate::components::toaster::push_toast;
use crate::net::types::{ExportType, Participant};
use crate::routes::events_path;
use crate::state::event_action::{
    ActionReport, BUSY_LABEL, RowAction, SYNC_LABEL, action_event_id, row_action, ticket_sent_message,
};
use crate::state::gate::SessionGate;
use crate::state::loader::{LoadState, PageLoader};
use crate::state::session::Session;
use crate::state::toast::{ToastKind, ToastState};
use crate::util::time::format_timestamp;

#[component]
pub fn EventParticipantsPage() -> impl IntoView {
    let gate = expect_context::<RwSignal<SessionGate>>();
    let session = expect_context::<RwSignal<Session>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = use_navigate();
    let params = use_params_map();
    let loader = RwSignal::new(PageLoader::<Vec<Participant>>::new());
    let syncing = RwSignal::new(false);
    let status_target = RwSignal::new(None::<Participant>);

    let event_id = move || params.with(|p| p.get("id").unwrap_or_default());
    let load = Callback::new(move |id: String| {
        spawn_load(loader, gate, move || async move { crate::net::api::fetch_event_participants(&id).await });
    });
    Effect::new(move |_| load.run(event_id()));
    let refresh = Callback::new(move |()| load.run(event_id()));

    // Toast a report and leave for the events list when it asks to.
    let publish = Callback::new(move |report: ActionReport| {
        push_toast(toasts, report.kind, &report.title, &report.description);
        if report.leave_to_events {
            navigate(&events_path(), NavigateOptions::default());
        }
    });

    // Resolve the selected event or bounce to the events list.
    let require_event = move || match session.with_untracked(action_event_id) {
        Ok(id) => Some(id),
        Err(message) => {
            publish.run(ActionReport {
                kind: ToastKind::Error,
                title: "Failed".to_owned(),
                description: message.to_owned(),
                leave_to_events: true,
            });
            None
        }
    };

    let sync = Callback::new(move |()| {
        if syncing.get_untracked() {
            return;
        }
        let Some(id) = require_event() else {
            return;
        };
        syncing.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::sync_participants(&id).await;
            syncing.try_set(false);
            let succeeded = matches!(outcome, crate::net::outcome::ApiOutcome::Success(_));
            publish.run(crate::state::event_action::report("Action Sync Data", outcome));
            if succeeded {
                refresh.run(());
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let export = Callback::new(move |export_type: ExportType| {
        let Some(id) = require_event() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::export_event(&id, export_type).await;
            publish.run(crate::state::event_action::report("Action Export Data", outcome));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (id, export_type);
    });

    let resend_ticket = Callback::new(move |participant: Participant| {
        let Some(id) = require_event() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::outcome::ApiOutcome;

            match crate::net::api::generate_ticket(&id, participant.id).await {
                ApiOutcome::Success(data) => {
                    let text = crate::net::api::payload_text(&data);
                    push_toast(toasts, ToastKind::Info, "Action", &ticket_sent_message(&text, &participant.email));
                }
                ApiOutcome::Unauthorized => {
                    sign_out_locally(session);
                    publish.run(crate::state::event_action::report("Action", ApiOutcome::Unauthorized));
                }
                other => push_toast(toasts, ToastKind::Error, "Action", other.message().unwrap_or_default()),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (id, participant, ticket_sent_message, sign_out_locally);
    });

    let sync_label = move || if syncing.get() { BUSY_LABEL } else { SYNC_LABEL };
    let close_status = Callback::new(move |()| status_target.set(None));
    let open_status = Callback::new(move |p: Participant| status_target.set(Some(p)));

    view! {
        <div class="page page--participants">
            {move || match loader.get().state().clone() {
                LoadState::Loading => view! { <p class="page__loading">"Loading participants..."</p> }.into_any(),
                LoadState::Failed(_) => view! { <ErrorSection on_retry=refresh/> }.into_any(),
                LoadState::Empty => {
                    view! { <NoDataSection data_name="Participants" action=(sync_label(), sync)/> }.into_any()
                }
                LoadState::Loaded(rows) => {
                    view! {
                        <div class="page__header">
                            <div>
                                <h1 class="page__title">"Participants"</h1>
                                <p>"List of event participants who request to get their tickets."</p>
                            </div>
                            <div class="page__actions">
                                <button class="btn" on:click=move |_| export.run(ExportType::Pdf)>"Export PDF"</button>
                                <button class="btn" on:click=move |_| export.run(ExportType::Xls)>"Export XLS"</button>
                                <button
                                    class="btn btn--primary"
                                    disabled=move || syncing.get()
                                    on:click=move |_| sync.run(())
                                >
                                    {sync_label}
                                </button>
                            </div>
                        </div>
                        <ParticipantTable rows=rows on_resend=resend_ticket on_update_status=open_status/>
                    }
                        .into_any()
                }
            }}
            {move || {
                status_target.get().map(|participant| {
                    view! {
                        <StatusActionDialog
                            event_id=event_id()
                            participant=participant
                            on_close=close_status
                            on_updated=refresh
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn ParticipantTable(
    rows: Vec<Participant>,
    on_resend: Callback<Participant>,
    on_update_status: Callback<Participant>,
) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Name"</th>
                    <th>"Email"</th>
                    <th>"Phone"</th>
                    <th>"Job"</th>
                    <th>"Date of Birth"</th>
                    <th>"Proof of Payment"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|p| {
                        let action = row_action(&p.status);
                        let status_note = match (&p.approved_at, &p.declined_at) {
                            (Some(at), _) => format!("approved {}", format_timestamp(*at)),
                            (None, Some(at)) => format!("declined {}: {}", format_timestamp(*at), p.declined_reason),
                            (None, None) => String::new(),
                        };
                        let row = p.clone();
                        view! {
                            <tr>
                                <td class="table__name">{p.name}</td>
                                <td>{p.email.to_lowercase()}</td>
                                <td>{p.phone}</td>
                                <td>{p.job}</td>
                                <td>{p.date_of_birth}</td>
                                <td>
                                    <a href=p.proof_of_payment target="_blank" rel="noreferrer">"Click to see"</a>
                                </td>
                                <td>
                                    <span class="badge badge--outline" title=status_note>{p.status.to_string()}</span>
                                </td>
                                <td>
                                    {match action {
                                        Some(RowAction::ResendTicket) => {
                                            view! {
                                                <button class="btn btn--ghost" on:click=move |_| on_resend.run(row.clone())>
                                                    "Resend Ticket"
                                                </button>
                                            }
                                                .into_any()
                                        }
                                        Some(RowAction::UpdateStatus) => {
                                            view! {
                                                <button
                                                    class="btn btn--ghost"
                                                    on:click=move |_| on_update_status.run(row.clone())
                                                >
                                                    "Update Status"
                                                </button>
                                            }
                                                .into_any()
                                        }
                                        None => view! { <span class="table__muted">"-"</span> }.into_any(),
                                    }}
                                </td>
                            </tr>
                        }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}
