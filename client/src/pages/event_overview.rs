//! Event overview: participant counters, weekly respondents, and the most
//! recent registrations.

#[cfg(test)]
#[path = "event_overview_test.rs"]
mod event_overview_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::spawn_load;
use crate::components::sections::{ErrorSection, NoDataSection};
use crate::net::types::{Event, WeeklyOverview};
use crate::state::gate::SessionGate;
use crate::state::loader::{LoadState, PageLoader};

/// Bar length for the weekly histogram, as a percentage of the busiest day.
pub fn bar_percent(total: i64, max: i64) -> i64 {
    if max <= 0 || total <= 0 {
        return 0;
    }
    (total.min(max) * 100) / max
}

#[component]
pub fn EventOverviewPage() -> impl IntoView {
    let gate = expect_context::<RwSignal<SessionGate>>();
    let params = use_params_map();
    let loader = RwSignal::new(PageLoader::<Event>::new());

    let load = Callback::new(move |event_id: String| {
        spawn_load(loader, gate, move || async move { crate::net::api::fetch_event_overview(&event_id).await });
    });
    let event_id = move || params.with(|p| p.get("id").unwrap_or_default());
    Effect::new(move |_| load.run(event_id()));
    let retry = Callback::new(move |()| load.run(event_id()));

    view! {
        <div class="page page--overview">
            {move || match loader.get().state().clone() {
                LoadState::Loading => view! { <p class="page__loading">"Loading overview..."</p> }.into_any(),
                LoadState::Failed(_) => view! { <ErrorSection on_retry=retry/> }.into_any(),
                LoadState::Empty => view! { <NoDataSection data_name="overview data"/> }.into_any(),
                LoadState::Loaded(event) => view! { <OverviewData event=event/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn OverviewData(event: Event) -> impl IntoView {
    let recent_count = event.latest_respondents.len();

    view! {
        <div class="overview__counters">
            <CounterCard
                title="Total Responded"
                value=event.total_participants
                note="All participants who responded through Google Forms, indicating their intent to join the event."
            />
            <CounterCard
                title="Approved"
                value=event.total_approved_participant
                note="Participants who received their generated tickets and may attend the event."
            />
            <CounterCard
                title="Waiting Approval"
                value=event.total_waiting_approval_participant
                note="Participants awaiting approval before a ticket is generated for them."
            />
            <CounterCard
                title="Declined"
                value=event.total_declined_participant
                note="Participants declined for fraud or age, based on proof of payment and date of birth."
            />
        </div>
        <div class="overview__panels">
            <section class="card overview__weekly">
                <h3>"Respondents overview of the past 7 days."</h3>
                <WeeklyBars days=event.weekly_overview/>
            </section>
            <section class="card overview__recent">
                <h3>"Recent respondents"</h3>
                <p class="card__description">{format!("You got {recent_count} respondents today.")}</p>
                {if event.latest_respondents.is_empty() {
                    view! { <p class="overview__empty">"No recent respondents."</p> }.into_any()
                } else {
                    event
                        .latest_respondents
                        .into_iter()
                        .map(|p| {
                            let initials: String = p.name.chars().take(2).collect();
                            view! {
                                <div class="respondent">
                                    <span class="avatar">{initials}</span>
                                    <div>
                                        <p class="respondent__name">{p.name}</p>
                                        <p class="respondent__contact">{format!("{} | {}", p.email, p.phone)}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </section>
        </div>
    }
}

#[component]
fn CounterCard(title: &'static str, value: i64, note: &'static str) -> impl IntoView {
    view! {
        <section class="card counter">
            <h3 class="counter__title">{title}</h3>
            <div class="counter__value">{value}</div>
            <p class="counter__note">{note}</p>
        </section>
    }
}

#[component]
fn WeeklyBars(days: Vec<WeeklyOverview>) -> impl IntoView {
    let max = days.iter().map(|d| d.total).max().unwrap_or(0);
    days.into_iter()
        .map(|day| {
            let width = format!("width: {}%", bar_percent(day.total, max));
            view! {
                <div class="bar">
                    <span class="bar__label">{day.name}</span>
                    <span class="bar__fill" style=width></span>
                    <span class="bar__value">{day.total}</span>
                </div>
            }
        })
        .collect_view()
}
