//! Full-screen splash shown while the session gate settles.

use leptos::prelude::*;

#[component]
pub fn Splash() -> impl IntoView {
    view! {
        <div class="splash">
            <h1 class="splash__title">"TIX"</h1>
            <p class="splash__tagline">"Manage Events Participants and Tickets"</p>
            <div class="splash__spinner" aria-hidden="true"></div>
        </div>
    }
}
