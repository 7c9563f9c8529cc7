//! CSV出力
//!
//! 表計算ソフトで文字化けしないよう先頭にBOMを付け、行区切りはCRLF。

use crate::types::Record;

const BOM: char = '\u{FEFF}';
const HEADER: [&str; 3] = ["abbr", "full", "zh"];

/// セルを二重引用符で囲み、内部の引用符は二重化
pub fn escape_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// レコード一覧をCSV文字列に変換
pub fn to_csv(records: &[Record]) -> String {
    let rows = records.iter().map(|r| {
        [&r.abbr, &r.full, &r.zh]
            .map(|v| escape_cell(v))
            .join(",")
    });

    let lines: Vec<String> = std::iter::once(HEADER.join(",")).chain(rows).collect();

    let mut content = String::new();
    content.push(BOM);
    content.push_str(&lines.join("\r\n"));
    content
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_cell_doubles_quotes() {
        assert_eq!(escape_cell(r#"Acme "Corp""#), r#""Acme ""Corp""""#);
        assert_eq!(escape_cell(""), r#""""#);
    }

    #[test]
    fn test_to_csv_layout() {
        let records = vec![
            Record::new("TCP", "Transmission Control Protocol", "傳輸控制協定"),
            Record::new("X", "a,b", "line\nbreak"),
        ];
        let csv = to_csv(&records);

        assert!(csv.starts_with('\u{FEFF}'));
        let body = csv.trim_start_matches('\u{FEFF}');
        let lines: Vec<&str> = body.split("\r\n").collect();
        assert_eq!(lines[0], "abbr,full,zh");
        assert_eq!(lines[1], r#""TCP","Transmission Control Protocol","傳輸控制協定""#);
        assert_eq!(lines[2], "\"X\",\"a,b\",\"line\nbreak\"");
        assert!(!csv.ends_with("\r\n"));
    }

    #[test]
    fn test_to_csv_header_only() {
        assert_eq!(to_csv(&[]), "\u{FEFF}abbr,full,zh");
    }
}
