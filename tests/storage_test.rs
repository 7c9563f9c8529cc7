//! ファイルストアの永続化テスト
//!
//! ローカル追加項目と検索履歴が再起動後も復元されることを検証

use abbr_lookup::storage::FileStorage;
use abbr_lookup_common::storage::{LOCAL_ITEMS_SLOT, SEARCH_HISTORY_SLOT};
use abbr_lookup_common::{Record, RecordStore, SearchHistory, Storage};
use tempfile::tempdir;

/// 空のストア
#[test]
fn test_file_storage_empty() {
    let dir = tempdir().expect("Failed to create temp dir");
    let storage = FileStorage::open(dir.path()).expect("ストア作成失敗");

    assert!(storage.get(LOCAL_ITEMS_SLOT).is_none());
    assert!(RecordStore::open(&storage).is_empty());
    assert!(SearchHistory::open(&storage).is_empty());
}

/// 存在しないディレクトリは作成される
#[test]
fn test_file_storage_creates_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    let nested = dir.path().join("a").join("b");
    let storage = FileStorage::open(&nested).expect("ストア作成失敗");

    assert!(nested.is_dir());
    assert_eq!(storage.dir(), nested.as_path());
}

/// スロットの上書き
#[test]
fn test_file_storage_overwrite() {
    let dir = tempdir().expect("Failed to create temp dir");
    let mut storage = FileStorage::open(dir.path()).expect("ストア作成失敗");

    storage.set("slot", "first").unwrap();
    storage.set("slot", "second").unwrap();

    assert_eq!(storage.get("slot").as_deref(), Some("second"));
    assert!(storage.slot_path("slot").exists());
    // 一時ファイルは残らない
    assert!(!dir.path().join(".slot.json.tmp").exists());
}

/// ローカル追加項目の保存と復元
#[test]
fn test_local_items_survive_restart() {
    let dir = tempdir().expect("Failed to create temp dir");

    {
        let mut storage = FileStorage::open(dir.path()).unwrap();
        let mut store = RecordStore::open(&storage);
        store
            .add_local(Record::new("VPN", "Virtual Private Network", "虛擬私人網路"), &mut storage)
            .expect("追加失敗");
        store
            .add_local(Record::new("NAT", "Network Address Translation", "網路位址轉換"), &mut storage)
            .expect("追加失敗");
    }

    let storage = FileStorage::open(dir.path()).unwrap();
    let store = RecordStore::open(&storage);
    let abbrs: Vec<&str> = store.local().iter().map(|r| r.abbr.as_str()).collect();
    assert_eq!(abbrs, vec!["NAT", "VPN"]);
}

/// 検索履歴の保存と復元
#[test]
fn test_history_survives_restart() {
    let dir = tempdir().expect("Failed to create temp dir");

    {
        let mut storage = FileStorage::open(dir.path()).unwrap();
        let mut history = SearchHistory::open(&storage);
        for keyword in ["tcp", "ip", "tcp"] {
            history.record(keyword, &mut storage).unwrap();
        }
    }

    let storage = FileStorage::open(dir.path()).unwrap();
    let history = SearchHistory::open(&storage);
    assert_eq!(history.entries(), &["tcp".to_string(), "ip".to_string()]);
}

/// 破損したスロットは空として扱われる
#[test]
fn test_corrupted_slots() {
    let dir = tempdir().expect("Failed to create temp dir");
    std::fs::write(dir.path().join(format!("{}.json", LOCAL_ITEMS_SLOT)), "{ invalid json }").unwrap();
    std::fs::write(dir.path().join(format!("{}.json", SEARCH_HISTORY_SLOT)), "42").unwrap();

    let storage = FileStorage::open(dir.path()).unwrap();
    assert!(RecordStore::open(&storage).is_empty());
    assert!(SearchHistory::open(&storage).is_empty());
}

/// UTF-8でないスロットは空として読むが、上書きはしない
#[test]
fn test_unreadable_slot_is_not_overwritten() {
    let dir = tempdir().expect("Failed to create temp dir");
    let slot_file = dir.path().join(format!("{}.json", LOCAL_ITEMS_SLOT));
    let written: &[u8] = &[0xFF, 0xFE, b'[', 0x80, b']'];
    std::fs::write(&slot_file, written).unwrap();

    let mut storage = FileStorage::open(dir.path()).unwrap();
    assert!(storage.get(LOCAL_ITEMS_SLOT).is_none());

    let mut store = RecordStore::open(&storage);
    let result = store.add_local(Record::new("VPN", "Virtual Private Network", "虛擬私人網路"), &mut storage);

    assert!(matches!(result, Err(abbr_lookup_common::Error::Storage(_))));
    assert!(store.local().is_empty());
    assert_eq!(std::fs::read(&slot_file).unwrap(), written);
}
