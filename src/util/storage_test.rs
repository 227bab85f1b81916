use super::*;

#[test]
fn memory_store_set_get_delete() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v1").unwrap();
    store.set("k", "v2").unwrap();
    assert_eq!(store.get("k").as_deref(), Some("v2"));
    assert_eq!(store.len(), 1);
    store.delete("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn memory_store_delete_missing_key_is_noop() {
    let store = MemoryStore::new();
    store.delete("missing");
    assert!(store.is_empty());
}

#[cfg(not(feature = "csr"))]
#[test]
fn local_storage_is_unavailable_off_browser() {
    let store = LocalStorage;
    assert_eq!(store.get("userData"), None);
    assert_eq!(store.set("userData", "{}"), Err(StorageError::Unavailable));
    store.delete("userData");
}
