//! ファイルによるキー・バリューストア
//!
//! スロットごとに `<slot>.json` を1つ持つ。書き込みは一時ファイル経由で丸ごと置き換える。
//! 読めないスロット（権限なし・UTF-8でない等）は空として扱うが、上書きはしない。

use crate::error::Result;
use abbr_lookup_common::Storage;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn open(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    pub fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{}.json", slot))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Storage for FileStorage {
    fn get(&self, slot: &str) -> Option<String> {
        let path = self.slot_path(slot);
        match std::fs::read_to_string(&path) {
            Ok(content) => Some(content),
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                tracing::warn!(slot, path = %path.display(), error = %e, "スロットを読み込めません");
                None
            }
        }
    }

    fn set(&mut self, slot: &str, value: &str) -> abbr_lookup_common::Result<()> {
        let path = self.slot_path(slot);
        if let Err(e) = check_readable(&path) {
            return Err(abbr_lookup_common::Error::Storage(format!(
                "{} を読み込めないため上書きしません: {}",
                path.display(),
                e
            )));
        }

        let tmp = self.dir.join(format!(".{}.json.tmp", slot));
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        tracing::debug!(slot, path = %path.display(), "スロットを保存");
        Ok(())
    }
}

/// 既存のスロットが読めるか確認する。無ければ可
fn check_readable(path: &Path) -> std::io::Result<()> {
    match std::fs::read_to_string(path) {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
