//! 検索履歴
//!
//! 直近のキーワードを新しい順に最大10件保持する。重複は先頭へ移動。

use crate::error::Result;
use crate::storage::{read_json_slot, Storage, SEARCH_HISTORY_SLOT};

/// 保持する履歴の上限
pub const HISTORY_LIMIT: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHistory {
    entries: Vec<String>,
}

impl SearchHistory {
    /// ストアから履歴を復元
    pub fn open(storage: &dyn Storage) -> Self {
        let mut entries: Vec<String> = read_json_slot(storage, SEARCH_HISTORY_SLOT);

        // 手で編集されたスロットでも不変条件を保つ
        let mut seen = Vec::with_capacity(entries.len());
        entries.retain(|e| {
            if e.is_empty() || seen.contains(e) {
                false
            } else {
                seen.push(e.clone());
                true
            }
        });
        entries.truncate(HISTORY_LIMIT);

        Self { entries }
    }

    /// キーワードを記録して永続化
    ///
    /// 空白のみのキーワードは記録しない（戻り値 false）。
    pub fn record(&mut self, keyword: &str, storage: &mut dyn Storage) -> Result<bool> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Ok(false);
        }

        let mut next: Vec<String> = Vec::with_capacity(HISTORY_LIMIT);
        next.push(keyword.to_string());
        next.extend(self.entries.iter().filter(|e| e.as_str() != keyword).cloned());
        next.truncate(HISTORY_LIMIT);

        storage.set(SEARCH_HISTORY_SLOT, &serde_json::to_string(&next)?)?;
        self.entries = next;
        Ok(true)
    }

    /// 履歴を消去
    pub fn clear(&mut self, storage: &mut dyn Storage) -> Result<()> {
        storage.set(SEARCH_HISTORY_SLOT, "[]")?;
        self.entries.clear();
        Ok(())
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
