use crate::error::{LookupError, Result};
use abbr_lookup_common::{Collation, DEFAULT_TITLE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 組み込みのデータソース
pub const BUILTIN_SOURCE: &str = "data.json";

/// 設定ファイルの場所を上書きする環境変数
pub const CONFIG_ENV: &str = "ABBR_LOOKUP_CONFIG";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 組み込みソース（URLまたはファイルパス）
    pub source: String,
    /// ローカル追加項目・履歴の保存先
    pub data_dir: Option<PathBuf>,
    pub collation: Collation,
    pub timeout_seconds: u64,
    /// `title` を持たないデータセットの表示名
    pub default_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: BUILTIN_SOURCE.into(),
            data_dir: None,
            collation: Collation::default(),
            timeout_seconds: 30,
            default_title: DEFAULT_TITLE.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let base = dirs::config_dir()
            .ok_or_else(|| LookupError::Config("設定ディレクトリが見つかりません".into()))?;
        Ok(base.join("abbr-lookup").join("config.json"))
    }

    /// 保存先ディレクトリ
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }

        let base = dirs::data_dir()
            .ok_or_else(|| LookupError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("abbr-lookup"))
    }

    /// 既定タイトル（空なら組み込みの既定値）
    pub fn title_fallback(&self) -> &str {
        let title = self.default_title.trim();
        if title.is_empty() {
            DEFAULT_TITLE
        } else {
            title
        }
    }

    pub fn set_source(&mut self, source: String) -> Result<()> {
        if source.trim().is_empty() {
            return Err(LookupError::Config("ソースが空です".into()));
        }
        self.source = source.trim().to_string();
        self.save()
    }

    pub fn set_collation(&mut self, collation: Collation) -> Result<()> {
        self.collation = collation;
        self.save()
    }
}
