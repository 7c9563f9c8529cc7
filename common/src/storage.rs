//! 永続キー・バリューストアの抽象
//!
//! ブラウザの localStorage 相当。値はスロット単位で丸ごと上書きされる。

use crate::error::Result;
use std::collections::HashMap;

/// ローカル追加項目のスロット名
pub const LOCAL_ITEMS_SLOT: &str = "local_abbr_items";

/// 検索履歴のスロット名
pub const SEARCH_HISTORY_SLOT: &str = "search_history";

/// スロット単位で文字列を保存するストア
pub trait Storage {
    fn get(&self, slot: &str) -> Option<String>;
    fn set(&mut self, slot: &str, value: &str) -> Result<()>;
}

/// メモリ上のストア（テスト・WASM以外の一時利用向け）
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, slot: &str, value: &str) -> Self {
        self.slots.insert(slot.to_string(), value.to_string());
        self
    }
}

impl Storage for MemoryStorage {
    fn get(&self, slot: &str) -> Option<String> {
        self.slots.get(slot).cloned()
    }

    fn set(&mut self, slot: &str, value: &str) -> Result<()> {
        self.slots.insert(slot.to_string(), value.to_string());
        Ok(())
    }
}

/// スロットのJSONを読み込む。欠損・破損時は既定値
pub(crate) fn read_json_slot<T>(storage: &dyn Storage, slot: &str) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    let Some(raw) = storage.get(slot) else {
        return T::default();
    };

    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(slot, error = %e, "破損したスロットを無視します");
            T::default()
        }
    }
}
