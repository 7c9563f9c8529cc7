//! 表示の抽象
//!
//! コアは `View` を組み立てて `Renderer` に渡すだけで、描画方法は知らない。

use crate::group::Bucket;
use serde::Serialize;

/// 描画用のスナップショット
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct View {
    pub title: String,
    pub keyword: String,
    /// 検索結果をグループ化したもの
    pub buckets: Vec<Bucket>,
    /// 結合ビュー全体のバケット名（ジャンプ用）
    pub index: Vec<String>,
    /// 結合ビューの件数
    pub total: usize,
    /// 検索結果の件数
    pub visible: usize,
}

impl View {
    pub fn is_empty(&self) -> bool {
        self.visible == 0
    }
}

pub trait Renderer {
    fn render(&mut self, view: &View);

    /// 一時的な通知（トースト相当）
    fn notify(&mut self, message: &str);
}
