//! Default layout: splash, session gate, navigation chrome, and login prompt.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/admin` route renders inside this layout. It owns the browser side
//! of the session gate: it starts the splash timer, reads the magic-link
//! fragment, re-runs the gate on each navigation, and performs the
//! [`GateEffect`]s the gate returns.
//!
//! TRADE-OFFS
//! ==========
//! Effects run fire-and-forget on the browser event loop. A profile fetch
//! that settles after a logout still lands in the gate; the next navigation
//! corrects it.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::header::Header;
use crate::components::login_modal::LoginModal;
use crate::components::splash::Splash;
use crate::components::toaster::Toaster;
use crate::routes::events_path;
use crate::state::gate::{GateEffect, SessionGate, show_navigation};
use crate::state::session::Session;
use crate::util::storage::BrowserStorage;

/// Forget the login flag and event selection in storage and in the session
/// signal. Used wherever a `401` means "start over".
pub fn sign_out_locally(session: RwSignal<Session>) {
    session.update(|s| s.sign_out(&BrowserStorage));
}

/// Performs gate effects. `Copy` so async tasks can carry it.
#[derive(Clone, Copy)]
struct GateDriver {
    gate: RwSignal<SessionGate>,
    session: RwSignal<Session>,
    redirect: Callback<String>,
}

impl GateDriver {
    fn apply(self, effects: Vec<GateEffect>) {
        for effect in effects {
            match effect {
                GateEffect::RedirectToEvents => self.redirect.run(events_path()),
                GateEffect::ExchangeToken(token) => self.exchange(token),
                GateEffect::FetchProfile => self.fetch_profile(),
            }
        }
    }

    fn exchange(self, token: crate::state::gate::MagicLinkToken) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::verify_session(&token.access_token, &token.kind).await;
            let accepted = matches!(outcome, crate::net::outcome::ApiOutcome::Success(_));
            if accepted {
                self.session.update(|s| s.mark_logged_in(&BrowserStorage));
                log::debug!("magic link accepted ({})", token.kind);
            } else {
                log::warn!("magic link rejected: {}", outcome.message().unwrap_or_default());
            }
            // Drop the token from the address bar.
            if let Some(path) = web_sys::window().and_then(|w| w.location().pathname().ok()) {
                self.redirect.run(path);
            }
            let effects = self.gate.try_update(|g| g.token_exchanged(accepted)).unwrap_or_default();
            self.apply(effects);
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (token, self.session);
    }

    fn fetch_profile(self) {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_profile().await;
            if outcome.is_unauthorized() {
                log::debug!("profile fetch unauthorized; reopening login");
            }
            self.gate.try_update(|g| g.profile_loaded(outcome));
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = self.gate;
    }
}

#[component]
pub fn DefaultLayout() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let gate = expect_context::<RwSignal<SessionGate>>();
    let pathname = use_location().pathname;
    let navigate = use_navigate();

    let redirect = Callback::new(move |target: String| {
        navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
    let driver = GateDriver { gate, session, redirect };

    #[cfg(feature = "hydrate")]
    {
        session.set(Session::load(&BrowserStorage));

        let fragment = web_sys::window().and_then(|w| w.location().hash().ok());
        gloo_timers::callback::Timeout::new(crate::config::SPLASH_MIN_DISPLAY_MS, move || {
            let effects = gate.try_update(|g| g.finish_splash(fragment.as_deref())).unwrap_or_default();
            driver.apply(effects);
        })
        .forget();
    }

    // Re-run the gate on every navigation and every session change.
    Effect::new(move |_| {
        let path = pathname.get();
        let effects = session.with(|s| gate.try_update(|g| g.navigate(&path, s))).unwrap_or_default();
        driver.apply(effects);
    });

    let show_navs = move || show_navigation(&pathname.get());

    view! {
        <Show when=move || !gate.with(SessionGate::splash_visible) fallback=|| view! { <Splash/> }>
            <div class="layout__unsupported">
                "Screen Size Not Supported" <br/> "(min: 768px/tablet screen)"
            </div>
            <div class="layout">
                <Show when=show_navs>
                    <Header/>
                </Show>
                <main class="layout__main">
                    <Outlet/>
                </main>
                <Toaster/>
                <Show when=show_navs>
                    <Footer/>
                </Show>
            </div>
            <Show when=move || gate.with(SessionGate::login_prompt_visible)>
                <LoginModal/>
            </Show>
        </Show>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let year = crate::util::time::current_year();

    view! {
        <footer class="footer">
            <a href="https://github.com/aasumitro/tix" target="_blank" rel="noreferrer">
                {format!("© {year} - TIX")}
            </a>
            <ul class="footer__links">
                <li><a href="https://github.com/aasumitro/tix" target="_blank" rel="noreferrer">"Docs"</a></li>
                <li><a href="https://github.com/aasumitro/tix" target="_blank" rel="noreferrer">"FAQs"</a></li>
                <li><a href="https://github.com/aasumitro/tix" target="_blank" rel="noreferrer">"Support"</a></li>
            </ul>
        </footer>
    }
}
