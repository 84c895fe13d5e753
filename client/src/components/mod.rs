//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the layout chrome and the action dialogs while reading
//! and writing shared state from Leptos context providers. Every dialog is
//! closed by its parent through an explicit `on_close` callback.

pub mod header;
pub mod invite_user_dialog;
pub mod layout;
pub mod login_modal;
pub mod logout_dialog;
pub mod new_event_dialog;
pub mod sections;
pub mod settings_dialog;
pub mod splash;
pub mod status_action_dialog;
pub mod toaster;
