//! 並び順（照合規則）
//!
//! ロケール依存の並び順を隠れた依存にせず、設定として渡す。

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 文字列の比較規則
pub trait Collator {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

impl<F> Collator for F
where
    F: Fn(&str, &str) -> Ordering,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// 組み込みの照合規則
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Collation {
    /// コードポイント順（"Apple" < "api"）
    #[default]
    Ordinal,
    /// 大文字小文字を無視し、同値ならコードポイント順（"api" < "Apple"）
    CaseInsensitive,
}

impl Collator for Collation {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        match self {
            Collation::Ordinal => a.cmp(b),
            Collation::CaseInsensitive => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
        }
    }
}

impl std::str::FromStr for Collation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ordinal" | "code-point" => Ok(Collation::Ordinal),
            "case-insensitive" | "caseless" | "locale" => Ok(Collation::CaseInsensitive),
            _ => Err(format!(
                "Unknown collation: {}. Use ordinal or case-insensitive",
                s
            )),
        }
    }
}

impl std::fmt::Display for Collation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Collation::Ordinal => write!(f, "ordinal"),
            Collation::CaseInsensitive => write!(f, "case-insensitive"),
        }
    }
}
