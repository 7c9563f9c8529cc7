//! レコードストア
//!
//! リモートデータセットとローカル追加項目を保持し、
//! 「ローカル追加（新しい順）→ リモート」の順で結合したビューを提供する。

use crate::error::{Result, ValidationError};
use crate::storage::{read_json_slot, Storage, LOCAL_ITEMS_SLOT};
use crate::types::{Dataset, Record};

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    dataset: Dataset,
    local: Vec<Record>,
}

impl RecordStore {
    /// ストアからローカル追加項目を復元して生成
    pub fn open(storage: &dyn Storage) -> Self {
        let local: Vec<Record> = read_json_slot(storage, LOCAL_ITEMS_SLOT);
        tracing::debug!(count = local.len(), "ローカル追加項目を復元");
        Self {
            dataset: Dataset::default(),
            local,
        }
    }

    /// リモートデータセットを差し替え（タイトルと項目を同時に）
    pub fn load(&mut self, dataset: Dataset) {
        self.dataset = dataset;
    }

    /// 新規項目を先頭に追加して永続化
    ///
    /// 各フィールドは前後の空白を除去してから検査する。
    /// 検査・保存のどちらかに失敗した場合、状態は変わらない。
    pub fn add_local(&mut self, record: Record, storage: &mut dyn Storage) -> Result<()> {
        let record = Record {
            abbr: record.abbr.trim().to_string(),
            full: record.full.trim().to_string(),
            zh: record.zh.trim().to_string(),
        };
        validate(&record)?;

        let mut next = Vec::with_capacity(self.local.len() + 1);
        next.push(record);
        next.extend(self.local.iter().cloned());

        storage.set(LOCAL_ITEMS_SLOT, &serde_json::to_string(&next)?)?;
        self.local = next;
        Ok(())
    }

    /// ローカル追加項目をすべて削除
    pub fn clear_local(&mut self, storage: &mut dyn Storage) -> Result<()> {
        storage.set(LOCAL_ITEMS_SLOT, "[]")?;
        self.local.clear();
        Ok(())
    }

    /// 結合ビュー（ローカル → リモート）
    pub fn merged_view(&self) -> Vec<Record> {
        self.local
            .iter()
            .chain(self.dataset.items.iter())
            .cloned()
            .collect()
    }

    /// 結合ビューをデータセットとして取得（JSONエクスポート用）
    pub fn merged_dataset(&self) -> Dataset {
        Dataset::new(self.dataset.title.clone(), self.merged_view())
    }

    pub fn title(&self) -> &str {
        &self.dataset.title
    }

    pub fn local(&self) -> &[Record] {
        &self.local
    }

    pub fn remote(&self) -> &[Record] {
        &self.dataset.items
    }

    pub fn len(&self) -> usize {
        self.local.len() + self.dataset.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn validate(record: &Record) -> std::result::Result<(), ValidationError> {
    let missing: Vec<&'static str> = [
        ("abbr", &record.abbr),
        ("full", &record.full),
        ("zh", &record.zh),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { missing })
    }
}
