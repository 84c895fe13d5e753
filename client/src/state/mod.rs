//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `gate`, `login`, page loaders, and
//! one module per action form) so components depend on small focused models
//! that are testable without a browser.

pub mod event_action;
pub mod event_form;
pub mod gate;
pub mod loader;
pub mod login;
pub mod session;
pub mod status_action;
pub mod toast;
pub mod users;
