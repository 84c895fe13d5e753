//! Top bar: event switcher, main navigation, and the user menu.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::logout_dialog::LogoutDialog;
use crate::components::new_event_dialog::NewEventDialog;
use crate::components::settings_dialog::SettingsDialog;
use crate::routes::{Section, active_section, events_path, google_form_url, overview_path, participants_path, users_path};
use crate::state::gate::SessionGate;
use crate::state::session::Session;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <EventSwitcher/>
            <MainNav/>
            <div class="header__spacer"></div>
            <UserNav/>
        </header>
    }
}

#[component]
fn EventSwitcher() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let open = RwSignal::new(false);
    let show_new_event = RwSignal::new(false);

    let open_google_form = move |_| {
        open.set(false);
        let Some(form_id) = session.with_untracked(|s| s.selected_event().map(|e| e.id.clone())) else {
            return;
        };
        let url = google_form_url(&form_id);

        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            let _ = window.open_with_url_and_target(&url, "_blank");
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = url;
    };

    let show_events = Callback::new({
        let navigate = navigate.clone();
        move |()| {
            open.set(false);
            navigate(&events_path(), NavigateOptions::default());
        }
    });

    let on_close = Callback::new(move |()| show_new_event.set(false));
    let on_created = Callback::new(move |()| {
        show_new_event.set(false);
        navigate(&events_path(), NavigateOptions::default());
    });

    view! {
        <div class="event-switcher">
            <button class="btn btn--ghost event-switcher__trigger" on:click=move |_| open.update(|o| *o = !*o)>
                {move || session.with(Session::event_label)}
            </button>
            <Show when=move || open.get()>
                <ul class="menu">
                    <li class="menu__heading">"Action"</li>
                    <li>
                        <button
                            class="menu__item"
                            on:click=move |_| {
                                open.set(false);
                                show_new_event.set(true);
                            }
                        >
                            "Create new Event"
                        </button>
                    </li>
                    <li class="menu__heading">"Navigation"</li>
                    <li>
                        <button class="menu__item" on:click=open_google_form>"Google Form"</button>
                    </li>
                    <li>
                        <button class="menu__item" on:click=move |_| show_events.run(())>"Show Event Lists"</button>
                    </li>
                </ul>
            </Show>
            <Show when=move || show_new_event.get()>
                <NewEventDialog on_close=on_close on_created=on_created/>
            </Show>
        </div>
    }
}

#[component]
fn MainNav() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let event_id = move || session.with(|s| s.selected_event().map(|e| e.id.clone()).unwrap_or_default());
    let class_for = move |section: Section| {
        move || {
            if pathname.with(|p| active_section(p)) == Some(section) {
                "nav__link nav__link--active"
            } else {
                "nav__link"
            }
        }
    };
    let go = move |target: String| navigate(&target, NavigateOptions::default());
    let go_overview = go.clone();
    let go_participants = go.clone();

    view! {
        <nav class="nav">
            <button class=class_for(Section::Overview) on:click=move |_| go_overview(overview_path(&event_id()))>
                "Overview"
            </button>
            <button
                class=class_for(Section::Participants)
                on:click=move |_| go_participants(participants_path(&event_id()))
            >
                "Participants"
            </button>
            <button class=class_for(Section::Users) on:click=move |_| go(users_path())>
                "Users"
            </button>
        </nav>
    }
}

#[component]
fn UserNav() -> impl IntoView {
    let gate = expect_context::<RwSignal<SessionGate>>();
    let open = RwSignal::new(false);
    let show_settings = RwSignal::new(false);
    let show_logout = RwSignal::new(false);

    let initials = move || gate.with(|g| g.profile().map_or_else(|| "-".to_owned(), |u| u.initials()));
    let username = move || gate.with(|g| g.profile().map_or_else(|| "-".to_owned(), |u| u.username.clone()));
    let email = move || gate.with(|g| g.profile().map_or_else(|| "-".to_owned(), |u| u.email.clone()));

    view! {
        <div class="user-nav">
            <button class="avatar" on:click=move |_| open.update(|o| *o = !*o)>{initials}</button>
            <Show when=move || open.get()>
                <div class="menu menu--right">
                    <div class="menu__label">
                        <p class="menu__name">"@" {username}</p>
                        <p class="menu__email">{email}</p>
                    </div>
                    <button
                        class="menu__item"
                        on:click=move |_| {
                            open.set(false);
                            show_settings.set(true);
                        }
                    >
                        "Settings"
                    </button>
                    <button
                        class="menu__item"
                        on:click=move |_| {
                            open.set(false);
                            show_logout.set(true);
                        }
                    >
                        "Log out"
                    </button>
                </div>
            </Show>
            <Show when=move || show_settings.get()>
                <SettingsDialog on_close=Callback::new(move |()| show_settings.set(false))/>
            </Show>
            <Show when=move || show_logout.get()>
                <LogoutDialog on_close=Callback::new(move |()| show_logout.set(false))/>
            </Show>
        </div>
    }
}
