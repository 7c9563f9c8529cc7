//! 略語データの型定義
//!
//! - Record: 略語・正式名称・中文訳の三つ組
//! - Dataset: リモートから読み込むデータセット全体

use crate::error::LoadError;
use serde::{Deserialize, Deserializer, Serialize};

/// タイトル未指定時の既定タイトル
pub const DEFAULT_TITLE: &str = "專業英文縮寫查詢";

/// 略語レコード
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, deserialize_with = "lenient_string")]
    pub abbr: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub full: String,

    #[serde(default, deserialize_with = "lenient_string")]
    pub zh: String,
}

impl Record {
    pub fn new(abbr: impl Into<String>, full: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            abbr: abbr.into(),
            full: full.into(),
            zh: zh.into(),
        }
    }
}

/// データセット
///
/// フィールド順（title, items）はJSONエクスポートの出力順になる。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    pub title: String,
    pub items: Vec<Record>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            items: Vec::new(),
        }
    }
}

/// 受信したJSONの形
#[derive(Deserialize)]
struct DatasetWire {
    #[serde(default)]
    title: Option<String>,
    items: Vec<Record>,
}

impl Dataset {
    pub fn new(title: impl Into<String>, items: Vec<Record>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// JSON文字列から読み込み
    ///
    /// `items` が無い・配列でない場合は失敗。`title` が空または無い場合は既定タイトル。
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Self::from_json_titled(json, DEFAULT_TITLE)
    }

    /// `title` が空または無い場合に `default_title` を使う
    pub fn from_json_titled(json: &str, default_title: &str) -> Result<Self, LoadError> {
        let wire: DatasetWire =
            serde_json::from_str(json).map_err(|e| LoadError::new(e.to_string()))?;
        Ok(Self::from_wire(wire, default_title))
    }

    /// 取得済みのJSON値から読み込み
    pub fn from_value_titled(value: serde_json::Value, default_title: &str) -> Result<Self, LoadError> {
        let wire: DatasetWire =
            serde_json::from_value(value).map_err(|e| LoadError::new(e.to_string()))?;
        Ok(Self::from_wire(wire, default_title))
    }

    fn from_wire(wire: DatasetWire, default_title: &str) -> Self {
        let title = wire
            .title
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| default_title.to_string());
        Self {
            title,
            items: wire.items,
        }
    }
}

/// null・数値・真偽値も文字列として受け入れる
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s,
        Some(other) => other.to_string(),
    })
}
