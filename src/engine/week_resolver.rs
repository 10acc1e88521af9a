// ==========================================
// 门诊诊室排班系统 - 周解析器
// ==========================================
// 职责: 日期范围 → 周六至周五的周标签列表；周标签 → 起止日期
// 输入: 用户选择的起止日期 / 周标签
// 输出: Vec<String> 周标签 / Week
// ==========================================

use crate::domain::week::{
    days_since, days_until, Week, DATE_FORMAT, WEEK_END_DAY, WEEK_LABEL_SEPARATOR, WEEK_START_DAY,
};
use crate::engine::error::{WeekError, WeekResult};
use chrono::{Datelike, Duration, NaiveDate};
use tracing::debug;

// ==========================================
// WeekResolver - 周解析器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct WeekResolver;

impl WeekResolver {
    pub fn new() -> Self {
        Self
    }

    /// 生成周标签列表
    ///
    /// 规则:
    /// 1) start 回退到当日或之前最近的周六
    /// 2) end 前进到当日或之后最近的周五
    /// 3) 自调整后的 start 起每 7 天一个窗口，窗口起点 >= 调整后的 end 时停止
    ///
    /// # 返回
    /// - Ok(Vec<String>): 周标签（调整后 start >= end 时为空列表）
    /// - Err(WeekError::InvalidRange): 调整超出 chrono 可表示范围
    pub fn generate_weeks(&self, start: NaiveDate, end: NaiveDate) -> WeekResult<Vec<String>> {
        Ok(self
            .generate(start, end)?
            .into_iter()
            .map(|week| week.label())
            .collect())
    }

    /// 生成周列表（结构化形式）
    pub fn generate(&self, start: NaiveDate, end: NaiveDate) -> WeekResult<Vec<Week>> {
        let invalid = || WeekError::InvalidRange {
            start: start.to_string(),
            end: end.to_string(),
        };

        let adjusted_start = start
            .checked_sub_signed(Duration::days(days_since(start.weekday(), WEEK_START_DAY)))
            .ok_or_else(invalid)?;
        let adjusted_end = end
            .checked_add_signed(Duration::days(days_until(end.weekday(), WEEK_END_DAY)))
            .ok_or_else(invalid)?;

        let mut weeks = Vec::new();
        let mut cursor = adjusted_start;
        while cursor < adjusted_end {
            let week_end = cursor
                .checked_add_signed(Duration::days(6))
                .ok_or_else(invalid)?;
            weeks.push(Week::new(cursor, week_end));
            cursor = cursor
                .checked_add_signed(Duration::days(7))
                .ok_or_else(invalid)?;
        }

        debug!(
            %start,
            %end,
            %adjusted_start,
            %adjusted_end,
            weeks = weeks.len(),
            "周列表生成完成"
        );
        Ok(weeks)
    }

    /// 解析周标签
    ///
    /// # 返回
    /// - Ok(Week): 起止日期
    /// - Err(WeekError::MalformedLabel): 缺少分隔符、日期无法解析，
    ///   或起止日期不是周六至周五的同一周
    pub fn parse_week_label(&self, label: &str) -> WeekResult<Week> {
        let malformed = |reason: String| WeekError::MalformedLabel {
            label: label.to_string(),
            reason,
        };

        let (start_text, end_text) = label
            .split_once(WEEK_LABEL_SEPARATOR)
            .ok_or_else(|| malformed(format!("缺少分隔符 {:?}", WEEK_LABEL_SEPARATOR)))?;

        let start = NaiveDate::parse_from_str(start_text, DATE_FORMAT)
            .map_err(|e| malformed(format!("起始日期 {:?}: {}", start_text, e)))?;
        let end = NaiveDate::parse_from_str(end_text, DATE_FORMAT)
            .map_err(|e| malformed(format!("结束日期 {:?}: {}", end_text, e)))?;

        if start.weekday() != WEEK_START_DAY {
            return Err(malformed(format!("起始日期 {} 不是{:?}", start, WEEK_START_DAY)));
        }
        if start.checked_add_signed(Duration::days(6)) != Some(end) {
            return Err(malformed(format!("结束日期 {} 不是起始日期后第 6 天", end)));
        }

        Ok(Week::new(start, end))
    }
}

/// 便捷函数: 生成周标签列表
pub fn generate_weeks(start: NaiveDate, end: NaiveDate) -> WeekResult<Vec<String>> {
    WeekResolver.generate_weeks(start, end)
}

/// 便捷函数: 解析周标签
pub fn parse_week_label(label: &str) -> WeekResult<Week> {
    WeekResolver.parse_week_label(label)
}
