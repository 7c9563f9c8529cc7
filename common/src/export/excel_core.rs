//! Excel生成（共通ライブラリ）
//!
//! 結合ビューを1シートの一覧表として書き出す

use crate::types::Record;
use rust_xlsxwriter::*;

const HEADERS: [&str; 3] = ["abbr", "full", "zh"];
const COLUMN_WIDTHS: [f64; 3] = [14.0, 40.0, 24.0];

/// Excelをバッファに生成
pub fn generate_excel_buffer(records: &[Record]) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF5F5F5))
        .set_border(FormatBorder::Thin)
        .set_border_color(Color::RGB(0xAAAAAA));

    let worksheet = workbook.add_worksheet();
    worksheet.set_name("items")
        .map_err(|e| format!("シート名設定エラー: {}", e))?;

    for (col, (header, width)) in HEADERS.iter().zip(COLUMN_WIDTHS).enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, width)
            .map_err(|e| format!("列幅設定エラー: {}", e))?;
        worksheet.write_string_with_format(0, col, *header, &header_format)
            .map_err(|e| format!("見出し書き込みエラー: {}", e))?;
    }

    for (i, record) in records.iter().enumerate() {
        let row = (i + 1) as u32;
        for (col, value) in [&record.abbr, &record.full, &record.zh].into_iter().enumerate() {
            worksheet.write_string(row, col as u16, value.as_str())
                .map_err(|e| format!("セル書き込みエラー: {}", e))?;
        }
    }

    worksheet.set_freeze_panes(1, 0)
        .map_err(|e| format!("ウィンドウ枠固定エラー: {}", e))?;

    // バッファに書き出し
    workbook.save_to_buffer()
        .map_err(|e| format!("Excel保存エラー: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_excel_buffer() {
        let records = vec![Record::new("API", "Application Programming Interface", "應用程式介面")];
        let buffer = generate_excel_buffer(&records).unwrap();
        // xlsx は zip
        assert!(buffer.starts_with(b"PK"));
    }

    #[test]
    fn test_generate_excel_buffer_empty() {
        assert!(generate_excel_buffer(&[]).is_ok());
    }
}
