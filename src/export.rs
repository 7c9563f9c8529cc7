//! 書き出しファイルの保存

use crate::error::Result;
use abbr_lookup_common::ExportFile;
use std::path::{Path, PathBuf};

/// 保存先パスを決める
///
/// 出力先がディレクトリ（または拡張子なし）ならタイトル由来のファイル名を付ける。
/// 複数形式を同時に出す場合は、指定ファイル名の拡張子を形式ごとに差し替える。
pub fn output_path_for(output: &Path, file: &ExportFile, multiple: bool) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        return output.join(&file.file_name);
    }

    if !multiple {
        return output.to_path_buf();
    }

    let extension = Path::new(&file.file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");
    output.with_extension(extension)
}

/// ファイルに保存
pub fn write_export(file: &ExportFile, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, &file.bytes)?;
    tracing::info!(path = %path.display(), mime = file.mime_type, "書き出し完了");
    Ok(())
}
