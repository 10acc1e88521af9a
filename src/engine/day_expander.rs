// ==========================================
// 门诊诊室排班系统 - 日展开引擎
// ==========================================
// 职责: 周期排班规则 → 指定诊室指定日期的生效排班
// 规则: room 匹配 + valid_from <= day <= valid_until + 星期匹配
// 红线: 不做冲突消解，多条同时生效全部返回，顺序同数据源
// ==========================================

use crate::domain::assignment::AssignmentRecord;
use chrono::{Datelike, NaiveDate};

#[derive(Debug, Default, Clone, Copy)]
pub struct DayExpander;

impl DayExpander {
    pub fn new() -> Self {
        Self
    }

    /// 查询某诊室某日生效的排班记录
    ///
    /// # 参数
    /// - `assignments`: 全部排班记录（数据源原始顺序）
    /// - `room`: 诊室编号
    /// - `day`: 日期
    pub fn active_on<'a>(
        &self,
        assignments: &'a [AssignmentRecord],
        room: &str,
        day: NaiveDate,
    ) -> Vec<&'a AssignmentRecord> {
        let weekday = day.weekday();
        assignments
            .iter()
            .filter(|r| r.room == room && r.covers(day) && r.weekday == weekday)
            .collect()
    }
}
