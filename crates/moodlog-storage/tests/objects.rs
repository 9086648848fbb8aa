use moodlog_storage::error::StorageError;
use moodlog_storage::objects::LocalStore;

#[tokio::test]
async fn put_then_get_round_trips_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());

    store.put_object("a/b/c.json", b"{}".to_vec()).await.unwrap();
    assert_eq!(store.get_object("a/b/c.json").await.unwrap(), b"{}");
    assert!(store.exists("a/b/c.json").await.unwrap());
}

#[tokio::test]
async fn missing_object_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());

    assert!(matches!(
        store.get_object("nope.json").await,
        Err(StorageError::NotFound { key }) if key == "nope.json"
    ));
    assert!(matches!(
        store.delete_object("nope.json").await,
        Err(StorageError::NotFound { .. })
    ));
    assert!(!store.exists("nope.json").await.unwrap());
}

#[tokio::test]
async fn keys_cannot_escape_root() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());

    for key in ["", "../secret.json", "/etc/passwd", "a/../../b", "a\\b"] {
        assert!(
            matches!(store.get_object(key).await, Err(StorageError::InvalidKey(_))),
            "key {key:?} should be rejected"
        );
    }
}

#[tokio::test]
async fn list_returns_sorted_keys_and_skips_temp_files() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());

    store.put_object("items/b.json", b"2".to_vec()).await.unwrap();
    store.put_object("items/a.json", b"1".to_vec()).await.unwrap();
    store.put_object("items/nested/c.json", b"3".to_vec()).await.unwrap();
    std::fs::write(dir.path().join("items/half.written.tmp"), b"x").unwrap();

    let keys = store.list_objects("items/").await.unwrap();
    assert_eq!(keys, vec!["items/a.json", "items/b.json"]);
}

#[tokio::test]
async fn listing_missing_prefix_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());
    assert!(store.list_objects("nothing/here/").await.unwrap().is_empty());
}

#[tokio::test]
async fn put_overwrites_and_delete_removes() {
    let dir = tempfile::tempdir().unwrap();
    let store = LocalStore::new(dir.path());

    store.put_object("x.json", b"1".to_vec()).await.unwrap();
    store.put_object("x.json", b"2".to_vec()).await.unwrap();
    assert_eq!(store.get_object("x.json").await.unwrap(), b"2");

    store.delete_object("x.json").await.unwrap();
    assert!(!store.exists("x.json").await.unwrap());
}
