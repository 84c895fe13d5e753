//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::DefaultLayout;
use crate::pages::{
    event_overview::EventOverviewPage, event_participants::EventParticipantsPage, home::HomePage,
    not_found::NotFoundPage, users::UsersPage,
};
use crate::state::gate::SessionGate;
use crate::state::session::Session;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, session gate, and toast contexts, then mounts every
/// page under `/admin` inside the default layout.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The layout reloads the session from browser storage once hydrated.
    provide_context(RwSignal::new(Session::default()));
    provide_context(RwSignal::new(SessionGate::new()));
    provide_context(RwSignal::new(ToastState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/tix-admin.css"/>
        <Title text="TIX Admin"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <ParentRoute path=StaticSegment("admin") view=DefaultLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=(StaticSegment("event"), StaticSegment("overview"), ParamSegment("id")) view=EventOverviewPage/>
                    <Route
                        path=(StaticSegment("event"), StaticSegment("participants"), ParamSegment("id"))
                        view=EventParticipantsPage
                    />
                    <Route path=StaticSegment("users") view=UsersPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
