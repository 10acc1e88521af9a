// ==========================================
// 门诊诊室排班系统 - 周表 CSV 导出
// ==========================================
// 列: date, dept, people, start-time, end-time（多诊室时首列为 room）
// 空值导出为空单元格；时间格式 %H:%M:%S
// ==========================================

use crate::domain::report::RoomReport;
use crate::domain::room_table::{RoomDayEntry, RoomWeekTable};
use chrono::NaiveTime;
use csv::Writer;
use std::io::Write;
use thiserror::Error;

/// 周表列名
pub const TABLE_COLUMNS: [&str; 5] = ["date", "dept", "people", "start-time", "end-time"];

const TIME_FORMAT: &str = "%H:%M:%S";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("CSV 写入失败: {0}")]
    Csv(#[from] csv::Error),

    #[error("文件写入失败: {0}")]
    Io(#[from] std::io::Error),
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| t.format(TIME_FORMAT).to_string())
        .unwrap_or_default()
}

fn entry_fields(entry: &RoomDayEntry) -> [String; 5] {
    [
        entry.date_label(),
        entry.department.clone().unwrap_or_default(),
        entry.occupants.clone().unwrap_or_default(),
        format_time(entry.start_time),
        format_time(entry.end_time),
    ]
}

/// 导出单个诊室周表
pub fn write_room_table_csv<W: Write>(writer: W, table: &RoomWeekTable) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(TABLE_COLUMNS)?;
    for entry in table.iter() {
        csv_writer.write_record(entry_fields(entry))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// 导出多个诊室报表（首列为诊室编号）
pub fn write_reports_csv<W: Write>(writer: W, reports: &[RoomReport]) -> Result<(), ExportError> {
    let mut csv_writer = Writer::from_writer(writer);

    let mut header = vec!["room"];
    header.extend(TABLE_COLUMNS);
    csv_writer.write_record(&header)?;

    for report in reports {
        for entry in report.table.iter() {
            let fields = entry_fields(entry);
            let mut record = vec![report.room.as_str()];
            record.extend(fields.iter().map(String::as_str));
            csv_writer.write_record(&record)?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
