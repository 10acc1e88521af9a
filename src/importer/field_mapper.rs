// ==========================================
// 门诊诊室排班系统 - 字段映射器实现
// ==========================================
// 职责: 原始行 → AssignmentRecord / LeaveRecord + 类型转换
// 规则: person-2 为空时默认为空字符串（渲染时仍以 "-" 拼接）
// ==========================================

use crate::domain::assignment::{AssignmentRecord, LeaveRecord};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::file_parser::excel_serial_to_datetime;
use crate::importer::importer_trait::{RawRow, RawSheet};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use tracing::warn;

// ==========================================
// 列名定义
// ==========================================
pub mod schedule_columns {
    pub const DEPARTMENT: &str = "department";
    pub const PERSON_1: &str = "person-1";
    pub const PERSON_2: &str = "person-2";
    pub const ROOM: &str = "room";
    pub const DATE: &str = "date";
    pub const DAY: &str = "day";
    pub const START_TIME: &str = "start-time";
    pub const END_TIME: &str = "end-time";
    pub const OCCURS_UNTIL_DATE: &str = "occurs until date";

    pub const REQUIRED: [&str; 9] = [
        DEPARTMENT,
        PERSON_1,
        PERSON_2,
        ROOM,
        DATE,
        DAY,
        START_TIME,
        END_TIME,
        OCCURS_UNTIL_DATE,
    ];
}

pub mod leave_columns {
    pub const PERSON_1: &str = "person-1";
    pub const FROM: &str = "from";
    pub const TO: &str = "to";

    pub const REQUIRED: [&str; 3] = [PERSON_1, FROM, TO];
}

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S", "%H:%M", "%H:%M:%S%.f"];

#[derive(Debug, Default, Clone, Copy)]
pub struct FieldMapper;

impl FieldMapper {
    /// 映射排班工作表
    pub fn map_schedule_sheet(&self, sheet: &RawSheet) -> ImportResult<Vec<AssignmentRecord>> {
        self.require_columns(sheet, &schedule_columns::REQUIRED)?;
        sheet
            .rows
            .iter()
            .map(|row| self.map_assignment(&sheet.name, row))
            .collect()
    }

    /// 映射休假工作表
    pub fn map_leave_sheet(&self, sheet: &RawSheet) -> ImportResult<Vec<LeaveRecord>> {
        self.require_columns(sheet, &leave_columns::REQUIRED)?;
        sheet
            .rows
            .iter()
            .map(|row| self.map_leave(&sheet.name, row))
            .collect()
    }

    /// 单行 → AssignmentRecord
    pub fn map_assignment(&self, sheet: &str, row: &RawRow) -> ImportResult<AssignmentRecord> {
        use schedule_columns::*;

        let record = AssignmentRecord {
            department: self.get_string(row, DEPARTMENT),
            person_a: self.get_string(row, PERSON_1),
            person_b: self.get_string(row, PERSON_2),
            room: self.require_string(sheet, row, ROOM)?,
            weekday: self.parse_weekday(sheet, row, DAY)?,
            start_time: self.parse_time(sheet, row, START_TIME)?,
            end_time: self.parse_time(sheet, row, END_TIME)?,
            valid_from: self.parse_date(sheet, row, DATE)?,
            valid_until: self.parse_date(sheet, row, OCCURS_UNTIL_DATE)?,
        };

        if record.valid_from > record.valid_until {
            warn!(
                sheet,
                row = row.row_number,
                valid_from = %record.valid_from,
                valid_until = %record.valid_until,
                "排班生效区间倒置，该记录不会命中任何日期"
            );
        }
        Ok(record)
    }

    /// 单行 → LeaveRecord
    pub fn map_leave(&self, sheet: &str, row: &RawRow) -> ImportResult<LeaveRecord> {
        use leave_columns::*;

        let record = LeaveRecord {
            person: self.require_string(sheet, row, PERSON_1)?,
            from: self.parse_date(sheet, row, FROM)?,
            to: self.parse_date(sheet, row, TO)?,
        };

        if record.from > record.to {
            warn!(
                sheet,
                row = row.row_number,
                person = %record.person,
                "休假区间倒置，该记录不会命中任何日期"
            );
        }
        Ok(record)
    }

    fn require_columns(&self, sheet: &RawSheet, columns: &[&str]) -> ImportResult<()> {
        match columns.iter().find(|c| !sheet.has_column(c)) {
            Some(missing) => Err(ImportError::MissingColumn {
                sheet: sheet.name.clone(),
                column: missing.to_string(),
            }),
            None => Ok(()),
        }
    }

    /// 提取字符串字段，缺失或空白返回空字符串
    fn get_string(&self, row: &RawRow, key: &str) -> String {
        row.cells
            .get(key)
            .map(|v| v.trim().to_string())
            .unwrap_or_default()
    }

    fn require_string(&self, sheet: &str, row: &RawRow, key: &str) -> ImportResult<String> {
        let value = self.get_string(row, key);
        if value.is_empty() {
            return Err(ImportError::MissingValue {
                sheet: sheet.to_string(),
                row: row.row_number,
                field: key.to_string(),
            });
        }
        Ok(value)
    }

    /// 解析星期（Mon / Monday，大小写不敏感）
    fn parse_weekday(&self, sheet: &str, row: &RawRow, key: &str) -> ImportResult<Weekday> {
        let value = self.require_string(sheet, row, key)?;
        value
            .parse::<Weekday>()
            .map_err(|_| ImportError::WeekdayFormatError {
                sheet: sheet.to_string(),
                row: row.row_number,
                field: key.to_string(),
                value,
            })
    }

    /// 解析日期
    ///
    /// 支持: YYYY-MM-DD / YYYYMMDD / 带时间的日期 / Excel 序列值
    fn parse_date(&self, sheet: &str, row: &RawRow, key: &str) -> ImportResult<NaiveDate> {
        let value = self.require_string(sheet, row, key)?;
        parse_date_text(&value).ok_or_else(|| ImportError::DateFormatError {
            sheet: sheet.to_string(),
            row: row.row_number,
            field: key.to_string(),
            value,
        })
    }

    /// 解析时间
    ///
    /// 支持: HH:MM:SS / HH:MM / 当日小数（如 0.375 = 09:00）
    fn parse_time(&self, sheet: &str, row: &RawRow, key: &str) -> ImportResult<NaiveTime> {
        let value = self.require_string(sheet, row, key)?;
        parse_time_text(&value).ok_or_else(|| ImportError::TimeFormatError {
            sheet: sheet.to_string(),
            row: row.row_number,
            field: key.to_string(),
            value,
        })
    }
}

fn parse_date_text(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(value, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
                .map(|dt| dt.date())
        })
        .or_else(|| {
            value
                .parse::<f64>()
                .ok()
                .filter(|serial| *serial >= 1.0)
                .and_then(excel_serial_to_datetime)
                .map(|dt| dt.date())
        })
}

fn parse_time_text(value: &str) -> Option<NaiveTime> {
    TIME_FORMATS
        .iter()
        .find_map(|f| NaiveTime::parse_from_str(value, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(value, f).ok())
                .map(|dt| dt.time())
        })
        .or_else(|| {
            value
                .parse::<f64>()
                .ok()
                .filter(|fraction| (0.0..1.0).contains(fraction))
                .and_then(excel_serial_to_datetime)
                .map(|dt| dt.time())
        })
}
