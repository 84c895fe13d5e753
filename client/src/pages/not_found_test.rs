use super::*;
use crate::state::event_action::{SELECT_EVENT_MESSAGE, action_event_id};
use crate::state::session::EventSelection;
use crate::util::storage::MemoryStore;

#[test]
fn back_home_clears_selection_and_targets_events_list() {
    let store = MemoryStore::default();
    let mut session = Session::load(&store);
    session.select_event(&store, "form-1", "Gala");

    assert_eq!(leave_to_events(&mut session, &store), "/admin");
    assert_eq!(session.event(), &EventSelection::Cleared);
    assert_eq!(Session::load(&store).event(), &EventSelection::Cleared);
}

#[test]
fn event_actions_refuse_after_back_home() {
    let store = MemoryStore::default();
    let mut session = Session::load(&store);
    session.select_event(&store, "form-1", "Gala");
    leave_to_events(&mut session, &store);

    assert_eq!(action_event_id(&session), Err(SELECT_EVENT_MESSAGE));
}
