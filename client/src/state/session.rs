//! Session owner for the login flag and the current event selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout, header, and every event-scoped page need to know whether the
//! admin is logged in and which event is active. `Session` is the single
//! owner of that state: it is loaded once from storage, provided through
//! context as `RwSignal<Session>`, and every mutation writes through to the
//! injected [`KeyValueStore`].
//!
//! DESIGN
//! ======
//! The storage keys keep their historical names so existing browsers keep
//! their selection. A present-but-empty `current_event` decodes as
//! [`EventSelection::Cleared`], distinct from a key that was never written.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::util::storage::KeyValueStore;

pub const CURRENT_EVENT_KEY: &str = "current_event";
pub const CURRENT_EVENT_NAME_KEY: &str = "current_event_name";
pub const LOGIN_FLAG_KEY: &str = "is_login";

/// The event an admin is working on. `id` is the Google Form id the API
/// uses in event-scoped paths.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedEvent {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EventSelection {
    /// No selection was ever stored.
    #[default]
    Unset,
    /// A selection existed and was explicitly cleared.
    Cleared,
    Selected(SelectedEvent),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    logged_in: bool,
    event: EventSelection,
}

impl Session {
    /// Read the persisted session.
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        let logged_in = store
            .get(LOGIN_FLAG_KEY)
            .is_some_and(|raw| !raw.trim().is_empty() && raw.trim() != "false");

        let event = match store.get(CURRENT_EVENT_KEY) {
            None => EventSelection::Unset,
            Some(id) if id.trim().is_empty() => EventSelection::Cleared,
            Some(id) => EventSelection::Selected(SelectedEvent {
                id: id.trim().to_owned(),
                name: store.get(CURRENT_EVENT_NAME_KEY).unwrap_or_default(),
            }),
        };

        Self { logged_in, event }
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn event(&self) -> &EventSelection {
        &self.event
    }

    pub fn selected_event(&self) -> Option<&SelectedEvent> {
        match &self.event {
            EventSelection::Selected(event) => Some(event),
            EventSelection::Unset | EventSelection::Cleared => None,
        }
    }

    pub fn has_event(&self) -> bool {
        self.selected_event().is_some()
    }

    /// Display name for the header; `-` when nothing is selected.
    pub fn event_label(&self) -> String {
        self.selected_event()
            .map(|e| e.name.trim())
            .filter(|name| !name.is_empty())
            .unwrap_or("-")
            .to_owned()
    }

    pub fn mark_logged_in<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        store.set(LOGIN_FLAG_KEY, "true");
        self.logged_in = true;
    }

    pub fn select_event<S: KeyValueStore + ?Sized>(&mut self, store: &S, id: &str, name: &str) {
        store.set(CURRENT_EVENT_KEY, id);
        store.set(CURRENT_EVENT_NAME_KEY, name);
        self.event = EventSelection::Selected(SelectedEvent { id: id.to_owned(), name: name.to_owned() });
    }

    pub fn clear_event<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        store.set(CURRENT_EVENT_KEY, "");
        store.remove(CURRENT_EVENT_NAME_KEY);
        self.event = EventSelection::Cleared;
    }

    /// Forget the login flag and the event selection.
    pub fn sign_out<S: KeyValueStore + ?Sized>(&mut self, store: &S) {
        store.remove(LOGIN_FLAG_KEY);
        store.remove(CURRENT_EVENT_KEY);
        store.remove(CURRENT_EVENT_NAME_KEY);
        self.logged_in = false;
        self.event = EventSelection::Unset;
    }
}
