use super::*;

#[test]
fn memory_store_set_get_remove() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("current_event", "f1");
    assert_eq!(store.get("current_event").as_deref(), Some("f1"));
    store.set("current_event", "f2");
    assert_eq!(store.get("current_event").as_deref(), Some("f2"));
    assert_eq!(store.len(), 1);
    store.remove("current_event");
    assert_eq!(store.get("current_event"), None);
}

#[test]
fn memory_store_keeps_empty_values() {
    let store = MemoryStore::new();
    store.set("current_event", "");
    assert_eq!(store.get("current_event").as_deref(), Some(""));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_inert_off_browser() {
    let store = BrowserStorage;
    store.set("is_login", "true");
    assert_eq!(store.get("is_login"), None);
    store.remove("is_login");
}
