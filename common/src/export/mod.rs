//! Export core modules shared across front ends.
//!
//! 書き出し方法（ファイル保存・ダウンロード）は呼び出し側が決める。
//! ここではバイト列・MIMEタイプ・ファイル名までを組み立てる。

pub mod csv;
pub mod json;

#[cfg(feature = "excel")]
pub mod excel_core;

use crate::error::{Error, Result};
use crate::types::{Dataset, DEFAULT_TITLE};

/// 出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    #[cfg(feature = "excel")]
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            #[cfg(feature = "excel")]
            ExportFormat::Excel => "xlsx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv;charset=utf-8",
            ExportFormat::Json => "application/json",
            #[cfg(feature = "excel")]
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
        }
    }

    /// 利用可能なすべての形式
    pub fn all() -> Vec<ExportFormat> {
        let mut formats = vec![ExportFormat::Csv, ExportFormat::Json];
        #[cfg(feature = "excel")]
        formats.push(ExportFormat::Excel);
        formats
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            #[cfg(feature = "excel")]
            "excel" | "xlsx" => Ok(ExportFormat::Excel),
            _ => Err(format!("Unknown format: {}. Use csv, json, or excel", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// 書き出し内容
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// データセットを指定形式で書き出し
///
/// 項目が無い場合は `Error::EmptyExport`。
pub fn export_dataset(dataset: &Dataset, format: ExportFormat) -> Result<ExportFile> {
    if dataset.items.is_empty() {
        return Err(Error::EmptyExport);
    }

    let bytes = match format {
        ExportFormat::Csv => csv::to_csv(&dataset.items).into_bytes(),
        ExportFormat::Json => json::to_json(dataset)?.into_bytes(),
        #[cfg(feature = "excel")]
        ExportFormat::Excel => excel_core::generate_excel_buffer(&dataset.items).map_err(Error::Export)?,
    };

    tracing::info!(export_format = %format, items = dataset.items.len(), "エクスポート");

    Ok(ExportFile {
        file_name: file_name_for(&dataset.title, format.extension()),
        mime_type: format.mime_type(),
        bytes,
    })
}

/// タイトルからファイル名を作る
///
/// ファイル名に使えない文字は `_` に置換し、空なら既定タイトルを使う。
pub fn file_name_for(title: &str, extension: &str) -> String {
    let sanitized: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    let stem = if sanitized.is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        sanitized
    };
    format!("{}.{}", stem, extension)
}
