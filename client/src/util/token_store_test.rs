use super::*;

#[test]
fn token_key_is_token() {
    assert_eq!(TOKEN_KEY, "token");
}

#[test]
fn local_store_reads_nothing_outside_browser() {
    assert_eq!(LocalTokenStore.token(), None);
}

#[test]
fn local_store_write_reports_unavailable_outside_browser() {
    assert_eq!(LocalTokenStore.store_token("abc"), Err(StorageError::Unavailable));
}

#[test]
fn memory_store_starts_empty() {
    assert_eq!(MemoryTokenStore::default().token(), None);
}

#[test]
fn memory_store_overwrites_previous_token() {
    let store = MemoryTokenStore::with_token("old");
    store.store_token("new").unwrap();
    assert_eq!(store.token().as_deref(), Some("new"));
}
