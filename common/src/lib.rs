//! Abbreviation Lookup Common Library
//!
//! 略語データの結合・検索・グループ化・書き出しを行うコア。
//! 端末版とWeb版で共有され、I/Oは `Storage` / `Renderer` 経由のみ。

pub mod app;
pub mod collation;
pub mod error;
pub mod export;
pub mod group;
pub mod history;
pub mod query;
pub mod render;
pub mod source;
pub mod storage;
pub mod store;
pub mod types;

pub use app::App;
pub use collation::{Collation, Collator};
pub use error::{Error, LoadError, Result, ValidationError};
pub use export::{export_dataset, ExportFile, ExportFormat};
pub use group::{group_records, index_labels, Bucket};
pub use history::SearchHistory;
pub use query::filter;
pub use render::{Renderer, View};
pub use source::{LoadState, LoadTicket, SourceTracker};
pub use storage::{MemoryStorage, Storage};
pub use store::RecordStore;
pub use types::{Dataset, Record, DEFAULT_TITLE};
