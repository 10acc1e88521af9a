// ==========================================
// 门诊诊室排班系统 - 休假判定引擎
// ==========================================
// 职责: 判断人员在指定日期是否休假，并对占用条目做休假覆盖
// 红线: 仅检查主责人员 (person_a)；第二人员休假不影响条目
// ==========================================

use crate::domain::assignment::LeaveRecord;
use crate::domain::room_table::{RoomDayEntry, LEAVE_PREFIX};
use chrono::NaiveDate;

#[derive(Debug, Default, Clone, Copy)]
pub struct LeaveResolver;

impl LeaveResolver {
    pub fn new() -> Self {
        Self
    }

    /// 判断人员在指定日期是否休假（from <= day <= to）
    pub fn is_on_leave(&self, leaves: &[LeaveRecord], person: &str, day: NaiveDate) -> bool {
        leaves
            .iter()
            .any(|leave| leave.person == person && leave.covers(day))
    }

    /// 休假覆盖: 占用人员替换为 "LEAVE <person>"，时间置空
    ///
    /// # 返回
    /// - true: 已覆盖
    /// - false: 未休假，条目不变
    pub fn apply_overlay(
        &self,
        leaves: &[LeaveRecord],
        entry: &mut RoomDayEntry,
        person_a: &str,
    ) -> bool {
        if !self.is_on_leave(leaves, person_a, entry.date) {
            return false;
        }
        entry.occupants = Some(format!("{}{}", LEAVE_PREFIX, person_a));
        entry.start_time = None;
        entry.end_time = None;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn leave(person: &str, from: NaiveDate, to: NaiveDate) -> LeaveRecord {
        LeaveRecord {
            person: person.to_string(),
            from,
            to,
        }
    }

    #[test]
    fn test_is_on_leave_inclusive_bounds() {
        let leaves = vec![leave("Alice", date(2024, 6, 3), date(2024, 6, 5))];
        let resolver = LeaveResolver::new();

        assert!(resolver.is_on_leave(&leaves, "Alice", date(2024, 6, 3)));
        assert!(resolver.is_on_leave(&leaves, "Alice", date(2024, 6, 5)));
        assert!(!resolver.is_on_leave(&leaves, "Alice", date(2024, 6, 6)));
        assert!(!resolver.is_on_leave(&leaves, "Bob", date(2024, 6, 4)));
    }

    #[test]
    fn test_apply_overlay_replaces_occupants_and_times() {
        let leaves = vec![leave("Alice", date(2024, 6, 5), date(2024, 6, 5))];
        let mut entry = RoomDayEntry {
            date: date(2024, 6, 5),
            department: Some("ENT".to_string()),
            occupants: Some("Alice-Bob".to_string()),
            start_time: NaiveTime::from_hms_opt(9, 0, 0),
            end_time: NaiveTime::from_hms_opt(11, 0, 0),
        };

        assert!(LeaveResolver::new().apply_overlay(&leaves, &mut entry, "Alice"));
        assert_eq!(entry.occupants.as_deref(), Some("LEAVE Alice"));
        assert_eq!(entry.start_time, None);
        assert_eq!(entry.end_time, None);
        assert_eq!(entry.department.as_deref(), Some("ENT"));
    }
}
