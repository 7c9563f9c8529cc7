//! 端末への描画

use abbr_lookup_common::{Renderer, View};
use std::fmt::Write;

/// 検索結果なしの表示
pub const NO_RESULT: &str = "該当するデータがありません";

#[derive(Debug, Clone, Default)]
pub struct TerminalRenderer {
    /// ジャンプ用インデックスも表示する
    pub show_index: bool,
    /// 一覧を出さず通知だけ表示する
    pub quiet: bool,
}

impl TerminalRenderer {
    pub fn new(show_index: bool) -> Self {
        Self {
            show_index,
            quiet: false,
        }
    }

    pub fn quiet() -> Self {
        Self {
            show_index: false,
            quiet: true,
        }
    }
}

impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &View) {
        if !self.quiet {
            print!("{}", render_view(view, self.show_index));
        }
    }

    fn notify(&mut self, message: &str) {
        eprintln!("💬 {}", message);
    }
}

/// 表示内容を文字列に整形
pub fn render_view(view: &View, show_index: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "📖 {}", view.title);
    if view.keyword.is_empty() {
        let _ = writeln!(out, "   {}件", view.total);
    } else {
        let _ = writeln!(out, "   「{}」 {}/{}件", view.keyword, view.visible, view.total);
    }

    if show_index && !view.index.is_empty() {
        let _ = writeln!(out, "   [{}]", view.index.join(" "));
    }
    out.push('\n');

    if view.is_empty() {
        let _ = writeln!(out, "{}", NO_RESULT);
        return out;
    }

    for bucket in &view.buckets {
        let _ = writeln!(out, "── {} ──", bucket.label);
        for record in &bucket.records {
            let _ = writeln!(out, "  {:<10} {}  {}", record.abbr, record.full, record.zh);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use abbr_lookup_common::{Bucket, Record};

    fn view() -> View {
        View {
            title: "網路縮寫".into(),
            keyword: String::new(),
            buckets: vec![Bucket {
                label: "T".into(),
                records: vec![Record::new("TCP", "Transmission Control Protocol", "傳輸控制協定")],
            }],
            index: vec!["#".into(), "T".into()],
            total: 2,
            visible: 1,
        }
    }

    #[test]
    fn test_render_view_buckets() {
        let out = render_view(&view(), false);
        assert!(out.contains("📖 網路縮寫"));
        assert!(out.contains("── T ──"));
        assert!(out.contains("TCP"));
        assert!(out.contains("傳輸控制協定"));
        assert!(!out.contains("[# T]"));
    }

    #[test]
    fn test_render_view_index() {
        let out = render_view(&view(), true);
        assert!(out.contains("[# T]"));
    }

    #[test]
    fn test_render_view_no_result() {
        let view = View {
            title: "x".into(),
            keyword: "zzz".into(),
            total: 3,
            ..Default::default()
        };
        let out = render_view(&view, false);
        assert!(out.contains("「zzz」 0/3件"));
        assert!(out.contains(NO_RESULT));
    }
}
