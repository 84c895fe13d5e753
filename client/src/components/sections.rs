//! Placeholder sections for failed and empty page loads.

use leptos::prelude::*;

/// Full-width error block with a retry button.
#[component]
pub fn ErrorSection(on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="section section--error">
            <h1 class="section__title">"Oops . . ."</h1>
            <p class="section__text">"Something went wrong"</p>
            <button class="btn btn--ghost" on:click=move |_| on_retry.run(())>"Refresh"</button>
        </div>
    }
}

/// Shown when a load succeeded with nothing to display.
#[component]
pub fn NoDataSection(
    data_name: &'static str,
    #[prop(optional)] action: Option<(&'static str, Callback<()>)>,
) -> impl IntoView {
    view! {
        <div class="section section--empty">
            <h1 class="section__title">"Uowhh . . ."</h1>
            <p class="section__text">{format!("Seems like you don't have any {data_name} yet")}</p>
            {action.map(|(label, on_action)| {
                view! {
                    <button class="btn btn--ghost" on:click=move |_| on_action.run(())>{label}</button>
                }
            })}
        </div>
    }
}
