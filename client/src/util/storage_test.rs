use super::*;

struct RejectingStorage;

impl KvStore for RejectingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned(), message: "quota exceeded".to_owned() })
    }
}

#[test]
fn save_then_load_returns_same_value() {
    let store = MemoryStorage::new();
    save_json(&store, "slot", &vec![1, 2, 3]).unwrap();
    let loaded: Option<Vec<i32>> = load_json(&store, "slot");
    assert_eq!(loaded, Some(vec![1, 2, 3]));
}

#[test]
fn load_missing_slot_is_none() {
    let store = MemoryStorage::new();
    let loaded: Option<Vec<i32>> = load_json(&store, "absent");
    assert!(loaded.is_none());
}

#[test]
fn load_malformed_slot_is_none() {
    let store = MemoryStorage::new().with_item("slot", "{not json");
    let loaded: Option<Vec<i32>> = load_json(&store, "slot");
    assert!(loaded.is_none());
}

#[test]
fn load_from_unavailable_backend_is_none() {
    let loaded: Option<Vec<i32>> = load_json(&RejectingStorage, "slot");
    assert!(loaded.is_none());
}

#[test]
fn read_slot_tells_missing_from_malformed() {
    let store = MemoryStorage::new().with_item("bad", "{not json").with_item("good", "[4]");
    assert_eq!(read_slot::<Vec<i32>>(&store, "absent"), Slot::Missing);
    assert_eq!(read_slot::<Vec<i32>>(&store, "bad"), Slot::Malformed);
    assert_eq!(read_slot::<Vec<i32>>(&store, "good"), Slot::Value(vec![4]));
    assert_eq!(read_slot::<Vec<i32>>(&RejectingStorage, "good"), Slot::Missing);
}

#[test]
fn save_reports_backend_rejection() {
    let err = save_json(&RejectingStorage, "slot", &1).unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "slot"));
    assert_eq!(err.to_string(), "write slot slot: quota exceeded");
}

#[test]
fn memory_storage_clones_share_slots() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("k", "v").unwrap();
    assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_is_empty_and_accepts_writes_off_browser() {
    assert_eq!(BrowserStorage.get_item("pm_products").unwrap(), None);
    assert!(BrowserStorage.set_item("pm_products", "[]").is_ok());
}
