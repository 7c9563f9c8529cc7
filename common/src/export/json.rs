//! JSON出力

use crate::error::Result;
use crate::types::Dataset;

/// `{ title, items }` を整形済みJSONに変換
///
/// 出力はそのまま `Dataset::from_json` で読み戻せる。
pub fn to_json(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}
