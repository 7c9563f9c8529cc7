//! データセット取得
//!
//! `http://` / `https://` はHTTP GET、それ以外はローカルファイルとして読む。
//! 失敗はすべて `LoadError` 1種類にまとめる。

use abbr_lookup_common::{Dataset, LoadError};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceLocation {
    Http(String),
    File(PathBuf),
}

impl SourceLocation {
    pub fn parse(location: &str) -> Self {
        let location = location.trim();
        let lower = location.to_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            SourceLocation::Http(location.to_string())
        } else {
            SourceLocation::File(PathBuf::from(location))
        }
    }
}

/// データセットを取得
///
/// `title` が無いデータセットには `default_title` を付ける。
pub async fn fetch_dataset(
    location: &str,
    timeout: Duration,
    default_title: &str,
) -> Result<Dataset, LoadError> {
    match SourceLocation::parse(location) {
        SourceLocation::Http(url) => fetch_http(&url, timeout, default_title).await,
        SourceLocation::File(path) => {
            let content = tokio::fs::read_to_string(&path)
                .await
                .map_err(|e| LoadError::new(format!("{}: {}", path.display(), e)))?;
            Dataset::from_json_titled(&content, default_title)
        }
    }
}

async fn fetch_http(url: &str, timeout: Duration, default_title: &str) -> Result<Dataset, LoadError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LoadError::new(e.to_string()))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| LoadError::new(e.to_string()))?;

    if !response.status().is_success() {
        return Err(LoadError::new(format!("HTTP {}", response.status())));
    }

    let payload: serde_json::Value = response
        .json()
        .await
        .map_err(|e| LoadError::new(e.to_string()))?;
    Dataset::from_value_titled(payload, default_title)
}
