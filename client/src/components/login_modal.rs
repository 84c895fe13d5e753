//! Magic-link login prompt.
//!
//! The prompt has no close control: it is shown and hidden by the session
//! gate. While a rate-limit cooldown runs, a one-second ticker drives the
//! countdown label until the button re-enables.

use leptos::prelude::*;

use crate::state::login::{LoginForm, LoginStage};

#[component]
pub fn LoginModal() -> impl IntoView {
    let form = RwSignal::new(LoginForm::new());

    let submit = Callback::new(move |()| {
        let Some(email) = form.try_update(LoginForm::begin_request).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::request_magic_link(&email).await;
            let rate_limited = matches!(outcome, crate::net::outcome::ApiOutcome::RateLimited(_));
            if form.try_update(|f| f.apply_outcome(outcome)).is_none() {
                return;
            }
            if rate_limited {
                run_cooldown(form).await;
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = email;
    });

    let message_class = move || {
        if form.with(LoginForm::is_error) { "dialog__message dialog__message--error" } else { "dialog__message" }
    };

    view! {
        <div class="dialog-backdrop">
            <div class="dialog dialog--login">
                <h2>"Login"</h2>
                <Show
                    when=move || form.with(|f| f.stage() == LoginStage::EnterEmail)
                    fallback=|| {
                        view! {
                            <p class="dialog__message">
                                "We've sent you a magic link to your email. Please check your inbox."
                            </p>
                        }
                    }
                >
                    <p class=message_class>{move || form.with(|f| f.message().to_owned())}</p>
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
                </Show>
                <div class="dialog__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || form.with(LoginForm::button_disabled)
                        on:click=move |_| {
                            form.update(|f| {
                                if f.stage() == LoginStage::LinkSent {
                                    f.reopen();
                                }
                            });
                            submit.run(());
                        }
                    >
                        {move || form.with(|f| f.button_label().to_owned())}
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Tick the cooldown once per second until it ends or the prompt unmounts.
#[cfg(feature = "hydrate")]
async fn run_cooldown(form: RwSignal<LoginForm>) {
    while form.try_with_untracked(|f| f.cooldown().is_active()).unwrap_or(false) {
        gloo_timers::future::TimeoutFuture::new(1_000).await;
        if form.try_update(LoginForm::tick).is_none() {
            break;
        }
    }
}
