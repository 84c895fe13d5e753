//! Toast stack rendered by the default layout.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};

/// Queue a toast and schedule its dismissal.
pub fn push_toast(toasts: RwSignal<ToastState>, kind: ToastKind, title: &str, description: &str) {
    let Some(id) = toasts.try_update(|t| t.push(kind, title, description)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(crate::config::TOAST_DISPLAY_MS, move || {
            toasts.try_update(|t| t.dismiss(id));
        })
        .forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <ol class="toaster">
            <For
                each=move || toasts.get().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = match toast.kind {
                        ToastKind::Info => "toast",
                        ToastKind::Error => "toast toast--error",
                    };
                    view! {
                        <li class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            <p class="toast__title">{toast.title}</p>
                            <p class="toast__description">{toast.description}</p>
                        </li>
                    }
                }
            />
        </ol>
    }
}
