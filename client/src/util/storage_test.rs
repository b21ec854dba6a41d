use super::*;

#[test]
fn memory_store_starts_empty() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    assert_eq!(store.get("missing"), None);
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set("k", "a");
    store.set("k", "b");
    assert_eq!(store.get("k").as_deref(), Some("b"));
    assert_eq!(store.len(), 1);
}

#[test]
fn memory_store_remove_missing_is_noop() {
    let store = MemoryStore::new();
    store.remove("missing");
    assert!(store.is_empty());
}

#[test]
fn take_returns_value_and_deletes_it() {
    let store = MemoryStore::new();
    store.set("k", "v");
    assert_eq!(store.take("k").as_deref(), Some("v"));
    assert_eq!(store.get("k"), None);
    assert_eq!(store.take("k"), None);
}

#[test]
fn take_through_reference_uses_same_store() {
    let store = MemoryStore::new();
    store.set("k", "v");
    let by_ref = &store;
    assert_eq!(by_ref.take("k").as_deref(), Some("v"));
    assert!(store.is_empty());
}

/// Store that only implements the required methods, exercising the
/// provided `take`.
struct GetRemoveOnly(MemoryStore);

impl KeyValueStore for GetRemoveOnly {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&self, key: &str, value: &str) {
        self.0.set(key, value);
    }

    fn remove(&self, key: &str) {
        self.0.remove(key);
    }
}

#[test]
fn default_take_reads_then_removes() {
    let store = GetRemoveOnly(MemoryStore::new());
    store.set("k", "v");
    assert_eq!(store.take("k").as_deref(), Some("v"));
    assert!(store.0.is_empty());
}
