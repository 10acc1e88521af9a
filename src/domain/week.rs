// ==========================================
// 门诊诊室排班系统 - 周领域模型
// ==========================================
// 周定义: 周六开始，周五结束（start + 6 天 = end）
// 标签格式: "<start> till <end>"，日期格式 %Y-%m-%d
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 周标签中的日期格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 周标签分隔符
pub const WEEK_LABEL_SEPARATOR: &str = " till ";

/// 周起始日
pub const WEEK_START_DAY: Weekday = Weekday::Sat;

/// 周结束日
pub const WEEK_END_DAY: Weekday = Weekday::Fri;

// ==========================================
// Week - 周六至周五的自然周
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Week {
    pub start: NaiveDate, // 周六
    pub end: NaiveDate,   // 周五
}

impl Week {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 包含指定日期的周（向前回退到最近的周六）
    ///
    /// 日期位于 chrono 可表示范围边缘时返回 None
    pub fn containing(day: NaiveDate) -> Option<Self> {
        let back = days_since(day.weekday(), WEEK_START_DAY);
        let start = day.checked_sub_signed(Duration::days(back))?;
        let end = start.checked_add_signed(Duration::days(6))?;
        Some(Self { start, end })
    }

    /// 规范标签: "2024-06-01 till 2024-06-07"
    pub fn label(&self) -> String {
        format!(
            "{}{}{}",
            self.start.format(DATE_FORMAT),
            WEEK_LABEL_SEPARATOR,
            self.end.format(DATE_FORMAT)
        )
    }

    /// 逐日迭代 [start, end]（两端含）
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// 从 `from` 回退到 `target` 需要的天数（0..=6）
pub(crate) fn days_since(from: Weekday, target: Weekday) -> i64 {
    let diff = from.num_days_from_monday() as i64 - target.num_days_from_monday() as i64;
    diff.rem_euclid(7)
}

/// 从 `from` 前进到 `target` 需要的天数（0..=6）
pub(crate) fn days_until(from: Weekday, target: Weekday) -> i64 {
    let diff = target.num_days_from_monday() as i64 - from.num_days_from_monday() as i64;
    diff.rem_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_label_format() {
        let week = Week::new(date(2024, 6, 1), date(2024, 6, 7));
        assert_eq!(week.label(), "2024-06-01 till 2024-06-07");
        assert_eq!(week.to_string(), week.label());
    }

    #[test]
    fn test_days_yields_seven_dates() {
        let week = Week::new(date(2024, 6, 1), date(2024, 6, 7));
        let days: Vec<NaiveDate> = week.days().collect();
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], date(2024, 6, 1));
        assert_eq!(days[6], date(2024, 6, 7));
    }

    #[test]
    fn test_containing_wednesday() {
        // 2024-06-05 为周三
        let week = Week::containing(date(2024, 6, 5)).unwrap();
        assert_eq!(week.start, date(2024, 6, 1));
        assert_eq!(week.end, date(2024, 6, 7));
    }

    #[test]
    fn test_containing_saturday_is_identity() {
        let week = Week::containing(date(2024, 6, 1)).unwrap();
        assert_eq!(week.start, date(2024, 6, 1));
    }

    #[test]
    fn test_day_offsets() {
        assert_eq!(days_since(Weekday::Sat, Weekday::Sat), 0);
        assert_eq!(days_since(Weekday::Fri, Weekday::Sat), 6);
        assert_eq!(days_since(Weekday::Mon, Weekday::Sat), 2);
        assert_eq!(days_until(Weekday::Fri, Weekday::Fri), 0);
        assert_eq!(days_until(Weekday::Sat, Weekday::Fri), 6);
        assert_eq!(days_until(Weekday::Wed, Weekday::Fri), 2);
    }
}
