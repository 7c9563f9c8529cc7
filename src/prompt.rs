//! 対話入力

use crate::error::{LookupError, Result};
use dialoguer::Input;

/// カスタムソースのURLを入力。空入力は取り消し
pub fn prompt_custom_url() -> Result<Option<String>> {
    let input: String = Input::new()
        .with_prompt("JSON ファイルの URL を入力 (例: https://example.com/data.json)")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| LookupError::Prompt(e.to_string()))?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        Ok(Some(trimmed.to_string()))
    }
}

/// 未指定のフィールドだけ入力を求める
pub fn prompt_field(value: Option<String>, label: &str) -> Result<String> {
    if let Some(v) = value {
        return Ok(v);
    }

    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| LookupError::Prompt(e.to_string()))
}
