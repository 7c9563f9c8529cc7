//! 部分一致検索

use crate::types::Record;

/// キーワードで絞り込み
///
/// 空（または空白のみ）のキーワードは元のリストをそのまま返す。
/// `abbr` と `full` は小文字化して比較し、`zh` は小文字化しない。
pub fn filter(list: &[Record], keyword: &str) -> Vec<Record> {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return list.to_vec();
    }

    let needle = keyword.to_lowercase();
    list.iter()
        .filter(|record| matches(record, &needle))
        .cloned()
        .collect()
}

fn matches(record: &Record, needle: &str) -> bool {
    record.abbr.to_lowercase().contains(needle)
        || record.full.to_lowercase().contains(needle)
        || record.zh.contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("TCP", "Transmission Control Protocol", "傳輸控制協定"),
            Record::new("IP", "Internet Protocol", "網際協定"),
            Record::new("CPU", "Central Processing Unit", "中央處理器"),
            Record::new("GPU", "Graphics Processing Unit", ""),
        ]
    }

    fn abbrs(list: &[Record]) -> Vec<&str> {
        list.iter().map(|r| r.abbr.as_str()).collect()
    }

    #[test]
    fn test_empty_keyword_returns_all_in_order() {
        let list = sample();
        assert_eq!(filter(&list, ""), list);
        assert_eq!(filter(&list, "   "), list);
    }

    #[test]
    fn test_case_insensitive_abbr() {
        let list = sample();
        assert_eq!(abbrs(&filter(&list, "tcp")), vec!["TCP"]);
        assert_eq!(abbrs(&filter(&list, "Pu")), vec!["CPU", "GPU"]);
    }

    #[test]
    fn test_matches_full() {
        let list = sample();
        assert_eq!(abbrs(&filter(&list, "processing")), vec!["CPU", "GPU"]);
        assert_eq!(abbrs(&filter(&list, "PROTOCOL")), vec!["TCP", "IP"]);
    }

    #[test]
    fn test_matches_zh() {
        let list = sample();
        assert_eq!(abbrs(&filter(&list, "協定")), vec!["TCP", "IP"]);
    }

    #[test]
    fn test_zh_not_case_folded() {
        let list = vec![Record::new("x", "y", "Wi-Fi 無線")];
        assert_eq!(filter(&list, "wi-fi 無線").len(), 0);
        assert_eq!(filter(&list, "無線").len(), 1);
    }

    #[test]
    fn test_empty_fields_never_match_fail() {
        let list = vec![Record::new("", "", ""), Record::new("NAT", "", "")];
        assert_eq!(abbrs(&filter(&list, "nat")), vec!["NAT"]);
    }

    #[test]
    fn test_result_is_subsequence() {
        let list = sample();
        let result = filter(&list, "p");
        let mut cursor = list.iter();
        for record in &result {
            assert!(cursor.any(|r| r == record));
        }
    }

    #[test]
    fn test_no_match() {
        assert!(filter(&sample(), "zzz").is_empty());
    }
}
