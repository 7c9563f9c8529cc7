//! アプリケーション状態
//!
//! 起動時に生成し、メソッド経由でのみ変更する。永続化と描画は
//! `Storage` / `Renderer` に委ねるので、ブラウザなしで動作確認できる。

use crate::collation::Collator;
use crate::error::{LoadError, Result};
use crate::export::{export_dataset, ExportFile, ExportFormat};
use crate::group::{group_records, index_labels};
use crate::history::SearchHistory;
use crate::query::filter;
use crate::render::{Renderer, View};
use crate::source::{LoadTicket, SourceTracker};
use crate::storage::Storage;
use crate::store::RecordStore;
use crate::types::{Dataset, Record};

/// 読み込み失敗時の通知
pub const LOAD_FAILED_MESSAGE: &str = "データを読み込めませんでした。パスとアクセス権を確認してください";

/// 項目追加時の通知
pub const ITEM_ADDED_MESSAGE: &str = "項目を追加しました";

pub struct App<S: Storage, R: Renderer> {
    store: RecordStore,
    history: SearchHistory,
    source: SourceTracker,
    keyword: String,
    collator: Box<dyn Collator>,
    storage: S,
    renderer: R,
}

impl<S: Storage, R: Renderer> App<S, R> {
    /// ストアからローカル追加項目と履歴を復元して生成
    pub fn new(storage: S, renderer: R, collator: Box<dyn Collator>, initial_source: &str) -> Self {
        let store = RecordStore::open(&storage);
        let history = SearchHistory::open(&storage);
        Self {
            store,
            history,
            source: SourceTracker::new(initial_source),
            keyword: String::new(),
            collator,
            storage,
            renderer,
        }
    }

    /// 読み込み前（または読み込み失敗時）に表示するタイトルを設定
    ///
    /// 生成直後、最初の読み込みより前に呼ぶ。
    pub fn with_default_title(mut self, title: &str) -> Self {
        self.store.load(Dataset::new(title, Vec::new()));
        self
    }

    /// データセットの読み込みを開始
    pub fn begin_load(&mut self, location: &str) -> LoadTicket {
        self.source.begin(location)
    }

    /// 読み込み結果を反映
    ///
    /// 成功時はデータを差し替えて再描画。失敗時は選択を戻して一度だけ通知し、
    /// 表示中のデータはそのまま残す。
    pub fn finish_load(&mut self, ticket: LoadTicket, result: std::result::Result<Dataset, LoadError>) -> bool {
        match result {
            Ok(dataset) => {
                tracing::info!(
                    location = %ticket.location,
                    title = %dataset.title,
                    items = dataset.items.len(),
                    "データセットを読み込みました"
                );
                self.store.load(dataset);
                self.source.complete(&ticket);
                self.refresh();
                true
            }
            Err(e) => {
                tracing::warn!(location = %ticket.location, error = %e, "読み込み失敗");
                let restored = self.source.fail(&ticket).to_string();
                tracing::debug!(selection = %restored, "ソース選択を戻しました");
                self.renderer.notify(LOAD_FAILED_MESSAGE);
                false
            }
        }
    }

    /// 読み込まずにソース選択を戻す
    pub fn cancel_load(&mut self) -> String {
        self.source.revert().to_string()
    }

    /// キーワードで絞り込んで再描画
    pub fn search(&mut self, keyword: &str) {
        self.set_keyword(keyword);
        self.refresh();
    }

    /// 再描画せずにキーワードだけ設定
    pub fn set_keyword(&mut self, keyword: &str) {
        self.keyword = keyword.trim().to_string();
    }

    /// キーワードを履歴に記録
    pub fn remember_search(&mut self, keyword: &str) -> Result<bool> {
        self.history.record(keyword, &mut self.storage)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        self.history.clear(&mut self.storage)
    }

    /// 新規項目を追加
    ///
    /// 入力不備は `Error::Validation` で返し、状態は変えない。
    pub fn add_local(&mut self, record: Record) -> Result<()> {
        self.store.add_local(record, &mut self.storage)?;
        self.renderer.notify(ITEM_ADDED_MESSAGE);
        self.refresh();
        Ok(())
    }

    pub fn clear_local(&mut self) -> Result<()> {
        self.store.clear_local(&mut self.storage)?;
        self.refresh();
        Ok(())
    }

    /// 現在の表示内容
    pub fn view(&self) -> View {
        let merged = self.store.merged_view();
        let visible = filter(&merged, &self.keyword);
        View {
            title: self.store.title().to_string(),
            keyword: self.keyword.clone(),
            index: index_labels(&merged, self.collator.as_ref()),
            total: merged.len(),
            visible: visible.len(),
            buckets: group_records(&visible, self.collator.as_ref()),
        }
    }

    pub fn refresh(&mut self) {
        let view = self.view();
        self.renderer.render(&view);
    }

    /// 結合ビュー全体を書き出し
    pub fn export(&self, format: ExportFormat) -> Result<ExportFile> {
        export_dataset(&self.store.merged_dataset(), format)
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn history(&self) -> &SearchHistory {
        &self.history
    }

    pub fn source(&self) -> &SourceTracker {
        &self.source
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
