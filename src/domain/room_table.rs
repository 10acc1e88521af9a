// ==========================================
// 门诊诊室排班系统 - 诊室周表领域模型
// ==========================================
// 职责: 单诊室单周的逐日占用表
// 红线: 条目按日期递增；同日内保持排班发现顺序，不再排序
// ==========================================

use crate::domain::types::SlotKind;
use crate::domain::week::Week;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// 条目日期展示格式（如 "Wed 2024-06-05"）
pub const ENTRY_DATE_FORMAT: &str = "%a %Y-%m-%d";

/// 休假标记前缀
pub const LEAVE_PREFIX: &str = "LEAVE ";

// ==========================================
// RoomDayEntry - 诊室单日条目
// ==========================================
// 不变量: start_time/end_time 为空 <=> occupants 为空 或 人员休假
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDayEntry {
    pub date: NaiveDate,
    pub department: Option<String>,
    pub occupants: Option<String>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

impl RoomDayEntry {
    /// 当日无排班的空条目
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            department: None,
            occupants: None,
            start_time: None,
            end_time: None,
        }
    }

    /// 展示用日期文本
    pub fn date_label(&self) -> String {
        self.date.format(ENTRY_DATE_FORMAT).to_string()
    }

    pub fn kind(&self) -> SlotKind {
        match &self.occupants {
            None => SlotKind::Empty,
            Some(text) if text.starts_with(LEAVE_PREFIX) && self.start_time.is_none() => {
                SlotKind::Leave
            }
            Some(_) => SlotKind::Occupied,
        }
    }

    /// 是否已被休假覆盖
    pub fn is_leave(&self) -> bool {
        self.kind() == SlotKind::Leave
    }
}

// ==========================================
// RoomWeekTable - 诊室周表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomWeekTable {
    pub room: String,
    pub week: Week,
    pub entries: Vec<RoomDayEntry>,
}

impl RoomWeekTable {
    pub fn new(room: impl Into<String>, week: Week, entries: Vec<RoomDayEntry>) -> Self {
        Self {
            room: room.into(),
            week,
            entries,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomDayEntry> {
        self.entries.iter()
    }

    /// 指定日期的全部条目
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&RoomDayEntry> {
        self.entries.iter().filter(|e| e.date == date).collect()
    }

    /// 表内出现的科室（非空，去重，保持首次出现顺序）
    pub fn departments(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        for dept in self.entries.iter().filter_map(|e| e.department.as_ref()) {
            if !dept.is_empty() && !seen.contains(dept) {
                seen.push(dept.clone());
            }
        }
        seen
    }
}
