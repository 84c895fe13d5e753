//! Admin users: search, invite, and delete.

use leptos::prelude::*;

use super::spawn_load;
use crate::components::invite_user_dialog::InviteUserDialog;
use crate::components::sections::{ErrorSection, NoDataSection};
use crate::net::types::User;
use crate::state::gate::SessionGate;
use crate::state::loader::{LoadState, PageLoader};
use crate::state::toast::ToastState;
use crate::state::users::filter_by_email;

#[component]
pub fn UsersPage() -> impl IntoView {
    let gate = expect_context::<RwSignal<SessionGate>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let loader = RwSignal::new(PageLoader::<Vec<User>>::new());
    let query = RwSignal::new(String::new());
    let show_invite = RwSignal::new(false);

    let load = Callback::new(move |()| {
        spawn_load(loader, gate, crate::net::api::list_users);
    });
    Effect::new(move |_| load.run(()));

    let delete = Callback::new(move |user: User| {
        #[cfg(feature = "hydrate")]
        {
            use crate::components::toaster::push_toast;
            use crate::net::outcome::ApiOutcome;
            use crate::state::toast::ToastKind;
            use crate::state::users::USER_DELETED_MESSAGE;

            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&format!("Delete the account of {}?", user.email)).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match crate::net::api::remove_user(&user.uuid).await {
                    ApiOutcome::Success(_) => {
                        push_toast(toasts, ToastKind::Info, "Account deleted!", USER_DELETED_MESSAGE);
                        load.run(());
                    }
                    ApiOutcome::Unauthorized => gate.update(SessionGate::signal_unauthorized),
                    other => push_toast(
                        toasts,
                        ToastKind::Error,
                        "Failed to delete account!",
                        other.message().unwrap_or_default(),
                    ),
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (user, toasts);
    });

    let open_invite = Callback::new(move |()| show_invite.set(true));
    let close_invite = Callback::new(move |()| show_invite.set(false));

    view! {
        <div class="page page--users">
            {move || match loader.get().state().clone() {
                LoadState::Loading => view! { <p class="page__loading">"Loading users..."</p> }.into_any(),
                LoadState::Failed(_) => view! { <ErrorSection on_retry=load/> }.into_any(),
                LoadState::Empty => {
                    view! { <NoDataSection data_name="users" action=("Invite via email", open_invite)/> }.into_any()
                }
                LoadState::Loaded(users) => {
                    view! {
                        <div class="page__header">
                            <div>
                                <h1 class="page__title">"Users"</h1>
                                <p>"List of invited users who can access this site."</p>
                            </div>
                            <button class="btn btn--primary" on:click=move |_| open_invite.run(())>
                                "Invite via email"
                            </button>
                        </div>
                        <input
                            class="page__search"
                            type="search"
                            placeholder="Search by email . . ."
                            prop:value=move || query.get()
                            on:input=move |ev| query.set(event_target_value(&ev))
                        />
                        <UserTable users=users query=query on_delete=delete/>
                    }
                        .into_any()
                }
            }}
            <Show when=move || show_invite.get()>
                <InviteUserDialog on_close=close_invite on_invited=load/>
            </Show>
        </div>
    }
}

#[component]
fn UserTable(users: Vec<User>, query: RwSignal<String>, on_delete: Callback<User>) -> impl IntoView {
    view! {
        <table class="table">
            <thead>
                <tr>
                    <th>"Username"</th>
                    <th>"Email"</th>
                    <th>"Status"</th>
                    <th>"Actions"</th>
                </tr>
            </thead>
            <tbody>
                {move || {
                    query.with(|q| {
                        filter_by_email(&users, q)
                            .into_iter()
                            .cloned()
                            .map(|user| {
                                let status = if user.is_verified { "verified" } else { "need confirmation" };
                                let target = user.clone();
                                view! {
                                    <tr>
                                        <td>{format!("@{}", user.username)}</td>
                                        <td>{user.email}</td>
                                        <td><span class="badge badge--outline">{status}</span></td>
                                        <td>
                                            <button
                                                class="btn btn--ghost btn--danger"
                                                on:click=move |_| on_delete.run(target.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    })
                }}
            </tbody>
        </table>
    }
}
