//! 頭文字によるグループ化
//!
//! `abbr` で並べ替え、大文字化した先頭文字ごとにまとめる。
//! A〜Z 以外で始まる項目（数字・記号・非ASCII・空）は `#` にまとめる。

use crate::collation::Collator;
use crate::types::Record;
use serde::Serialize;

/// A〜Z 以外の頭文字のバケット名
pub const OTHER_BUCKET: &str = "#";

/// 同じ頭文字を持つ項目のまとまり
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub label: String,
    pub records: Vec<Record>,
}

/// 項目が属するバケット名
pub fn bucket_label(abbr: &str) -> String {
    let Some(first) = abbr.chars().next() else {
        return OTHER_BUCKET.to_string();
    };

    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) if c.is_ascii_uppercase() => c.to_string(),
        _ => OTHER_BUCKET.to_string(),
    }
}

/// `abbr` で安定ソート
pub fn sort_records(list: &[Record], collator: &dyn Collator) -> Vec<Record> {
    let mut sorted = list.to_vec();
    sorted.sort_by(|a, b| collator.compare(&a.abbr, &b.abbr));
    sorted
}

/// ソートしてバケットに分ける
///
/// バケットはラベルを同じ照合規則で比較した昇順。
pub fn group_records(list: &[Record], collator: &dyn Collator) -> Vec<Bucket> {
    let mut buckets: Vec<Bucket> = Vec::new();

    for record in sort_records(list, collator) {
        let label = bucket_label(&record.abbr);
        match buckets.iter_mut().find(|b| b.label == label) {
            Some(bucket) => bucket.records.push(record),
            None => buckets.push(Bucket {
                label,
                records: vec![record],
            }),
        }
    }

    buckets.sort_by(|a, b| collator.compare(&a.label, &b.label));
    buckets
}

/// ジャンプ用のバケット名一覧（重複なし・昇順）
pub fn index_labels(list: &[Record], collator: &dyn Collator) -> Vec<String> {
    let mut labels: Vec<String> = Vec::new();
    for record in list {
        let label = bucket_label(&record.abbr);
        if !labels.contains(&label) {
            labels.push(label);
        }
    }
    labels.sort_by(|a, b| collator.compare(a, b));
    labels
}
