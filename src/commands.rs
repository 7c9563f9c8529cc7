//! コマンドの実行本体
//!
//! 読み込みに失敗しても、ローカル追加項目と直前のデータセットで処理を続ける。

use crate::error::Result;
use crate::export::{output_path_for, write_export};
use abbr_lookup_common::{App, ExportFormat, Renderer, Storage};
use std::path::{Path, PathBuf};

/// 検索結果を表示し、キーワードを履歴に記録
///
/// 読み込み成功時は `finish_load` が描画済みなので、失敗時のみ描画する。
pub fn show_search<S: Storage, R: Renderer>(
    app: &mut App<S, R>,
    keyword: &str,
    loaded: bool,
    remember: bool,
) -> Result<()> {
    if !loaded {
        app.refresh();
    }

    if remember {
        app.remember_search(keyword)?;
    }
    Ok(())
}

/// 結合ビューを各形式で書き出す
///
/// 書き出した順にパスを返す。項目が無い場合は `Error::EmptyExport`。
pub fn export_to<S: Storage, R: Renderer>(
    app: &App<S, R>,
    formats: &[ExportFormat],
    output: &Path,
) -> Result<Vec<PathBuf>> {
    let multiple = formats.len() > 1;
    let mut written = Vec::with_capacity(formats.len());

    for &format in formats {
        let file = app.export(format)?;
        let path = output_path_for(output, &file, multiple);
        write_export(&file, &path)?;
        written.push(path);
    }

    Ok(written)
}
