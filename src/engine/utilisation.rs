// ==========================================
// 门诊诊室排班系统 - 利用率计算
// ==========================================
// 周容量: 6 天 × 12 小时 (08:00-20:00) + 1 天 × 5 小时 (08:00-13:00) = 77 小时
// 红线: 不截断，重叠或超量排班可使结果超过 100
// ==========================================

use crate::domain::room_table::RoomWeekTable;
use chrono::NaiveTime;

/// 每周可用小时数
pub const WEEKLY_CAPACITY_HOURS: i64 = 77;

/// 每周可用秒数
pub const WEEKLY_CAPACITY_SECONDS: i64 = WEEKLY_CAPACITY_HOURS * 3600;

const SECONDS_PER_DAY: i64 = 24 * 3600;

#[derive(Debug, Default, Clone, Copy)]
pub struct UtilisationCalculator;

impl UtilisationCalculator {
    pub fn new() -> Self {
        Self
    }

    /// 计算诊室周表利用率（0-100 百分比，未截断）
    ///
    /// 休假与空条目（时间为空）不计入
    pub fn utilisation(&self, table: &RoomWeekTable) -> f64 {
        let occupied = self.occupied_seconds(table);
        occupied as f64 / WEEKLY_CAPACITY_SECONDS as f64 * 100.0
    }

    /// 表内已占用总秒数
    pub fn occupied_seconds(&self, table: &RoomWeekTable) -> i64 {
        table
            .iter()
            .filter_map(|e| match (e.start_time, e.end_time) {
                (Some(start), Some(end)) => Some(slot_seconds(start, end)),
                _ => None,
            })
            .sum()
    }
}

/// 同日时间差（秒）
///
/// 结束早于开始时按跨午夜回绕
fn slot_seconds(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_seconds().rem_euclid(SECONDS_PER_DAY)
}
