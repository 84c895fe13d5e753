//! Events list: the landing page under `/admin`.
//!
//! Selecting a future event persists it as the current selection and opens
//! its overview. The list is the only page usable without a selection.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::spawn_load;
use crate::components::new_event_dialog::NewEventDialog;
use crate::components::sections::{ErrorSection, NoDataSection};
use crate::net::types::Event;
use crate::routes::overview_path;
use crate::state::gate::SessionGate;
use crate::state::loader::{LoadState, PageLoader};
use crate::state::session::Session;
use crate::util::storage::BrowserStorage;
use crate::util::time::{days_until, format_event_date, is_selectable, now_epoch_secs};

#[component]
pub fn HomePage() -> impl IntoView {
    let gate = expect_context::<RwSignal<SessionGate>>();
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let loader = RwSignal::new(PageLoader::<Vec<Event>>::new());
    let show_new_event = RwSignal::new(false);

    let load = Callback::new(move |()| {
        spawn_load(loader, gate, crate::net::api::list_events);
    });
    Effect::new(move |_| load.run(()));

    let open_event = Callback::new(move |event: Event| {
        session.update(|s| s.select_event(&BrowserStorage, &event.google_form_id, &event.name));
        navigate(&overview_path(&event.google_form_id), NavigateOptions::default());
    });

    let open_dialog = Callback::new(move |()| show_new_event.set(true));
    let close_dialog = Callback::new(move |()| show_new_event.set(false));
    let created = Callback::new(move |()| {
        show_new_event.set(false);
        load.run(());
    });

    view! {
        <div class="page page--home">
            <div class="page__hero">
                <h1 class="page__hero-title">" - TIX - "</h1>
                <p class="page__hero-tagline">"Manage Events Participants and Tickets"</p>
            </div>
            {move || match loader.get().state().clone() {
                LoadState::Loading => view! { <p class="page__loading">"Loading events..."</p> }.into_any(),
                LoadState::Failed(_) => view! { <ErrorSection on_retry=load/> }.into_any(),
                LoadState::Empty => {
                    view! { <NoDataSection data_name="events" action=("Create new Event", open_dialog)/> }.into_any()
                }
                LoadState::Loaded(events) => {
                    view! { <EventCards events=events on_open=open_event on_create=open_dialog/> }.into_any()
                }
            }}
            <Show when=move || show_new_event.get()>
                <NewEventDialog on_close=close_dialog on_created=created/>
            </Show>
        </div>
    }
}

#[component]
fn EventCards(events: Vec<Event>, on_open: Callback<Event>, on_create: Callback<()>) -> impl IntoView {
    let now = now_epoch_secs();

    view! {
        <div class="event-cards">
            <button class="event-card event-card--new" title="Create new Event" on:click=move |_| on_create.run(())>
                "+"
            </button>
            {events
                .into_iter()
                .enumerate()
                .map(|(index, event)| {
                    let selectable = is_selectable(event.event_date, now);
                    let days = days_until(event.event_date, now).max(0);
                    let date = format_event_date(event.event_date);
                    let title = format!("#{} - {}", index + 1, event.name);
                    let participants = event.total_participants;
                    let location = event.location.clone();
                    let is_active = event.is_active;
                    view! {
                        <button
                            class="event-card"
                            disabled=!selectable
                            on:click=move |_| on_open.run(event.clone())
                        >
                            <Show when=move || is_active>
                                <span class="event-card__live" title="Active"></span>
                            </Show>
                            <h3 class="event-card__title">{title}</h3>
                            <div class="event-card__count">{participants}</div>
                            <p class="event-card__count-label">"Participants"</p>
                            <p class="event-card__days">{format!("{days} days before the event.")}</p>
                            <p class="event-card__meta">{date}</p>
                            <p class="event-card__meta">{location}</p>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
