// ==========================================
// 门诊诊室排班系统 - 工作簿解析器实现
// ==========================================
// 支持: Excel (.xlsx) 字节流
// 规则: 首行为表头；全空行剔除；单元格统一转为去空白文本
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use crate::importer::importer_trait::{RawRow, RawSheet, SheetParser};
use calamine::{open_workbook_from_rs, Data, Range, Reader, Xlsx};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::collections::HashMap;
use std::io::Cursor;

/// Excel 序列日期基准（1900 日期系统）
fn excel_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

/// Excel 序列值 → 日期时间
///
/// 整数部分为天数，小数部分为当日时间
pub fn excel_serial_to_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }
    let millis = (serial * 86_400_000.0).round() as i64;
    excel_epoch().checked_add_signed(Duration::milliseconds(millis))
}

/// Excel 序列值 → 文本
///
/// - 小于 1: 仅时间 "HH:MM:SS"
/// - 无小数: 仅日期 "YYYY-MM-DD"
/// - 其他: "YYYY-MM-DD HH:MM:SS"
fn excel_serial_to_text(serial: f64) -> String {
    match excel_serial_to_datetime(serial) {
        None => serial.to_string(),
        Some(dt) if serial < 1.0 => dt.time().format("%H:%M:%S").to_string(),
        Some(dt) if serial.fract() == 0.0 => dt.date().format("%Y-%m-%d").to_string(),
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

/// 单元格 → 去空白文本
pub fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => excel_serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.trim().to_string(),
        Data::Error(e) => e.to_string(),
    }
}

/// 区域 → RawSheet（首行表头）
fn range_to_sheet(name: &str, range: &Range<Data>) -> ImportResult<RawSheet> {
    let mut rows = range.rows();
    let header_row = rows.next().ok_or_else(|| ImportError::MissingHeader {
        sheet: name.to_string(),
    })?;

    let headers: Vec<String> = header_row.iter().map(cell_to_string).collect();

    let mut records = Vec::new();
    for (idx, data_row) in rows.enumerate() {
        let mut cells = HashMap::new();
        for (col_idx, cell) in data_row.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                if !header.is_empty() {
                    cells.insert(header.clone(), cell_to_string(cell));
                }
            }
        }

        // 跳过完全空白的行
        if cells.values().all(|v| v.is_empty()) {
            continue;
        }

        records.push(RawRow {
            row_number: idx + 2,
            cells,
        });
    }

    Ok(RawSheet {
        name: name.to_string(),
        headers,
        rows: records,
    })
}

// ==========================================
// ExcelParser 实现
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct ExcelParser;

impl SheetParser for ExcelParser {
    fn parse_sheets(&self, bytes: &[u8], sheets: &[&str]) -> ImportResult<Vec<RawSheet>> {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes))?;

        let names = workbook.sheet_names();
        let mut parsed = Vec::with_capacity(sheets.len());
        for sheet in sheets {
            if !names.iter().any(|n| n == sheet) {
                return Err(ImportError::SheetNotFound {
                    sheet: sheet.to_string(),
                });
            }
            let range = workbook.worksheet_range(sheet)?;
            parsed.push(range_to_sheet(sheet, &range)?);
        }

        Ok(parsed)
    }
}
