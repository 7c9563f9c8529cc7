//! エラー型定義

use thiserror::Error;

/// 新規項目の入力不備
///
/// 未入力のフィールド名を保持する。状態は一切変更されない。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("未入力の項目があります: {}", .missing.join(", "))]
pub struct ValidationError {
    pub missing: Vec<&'static str>,
}

/// データセットの読み込み失敗（通信エラー・JSON不正）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("データを読み込めません: {0}")]
pub struct LoadError(pub String);

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("エクスポートできるデータがありません")]
    EmptyExport,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
