// ==========================================
// 门诊诊室排班系统 - 诊室周表构建引擎
// ==========================================
// 职责: 编排 DayExpander + LeaveResolver，逐日生成诊室周表
// 输入: 排班快照 + 诊室 + 周
// 输出: RoomWeekTable（按日期递增；同日保持发现顺序）
// ==========================================

use crate::domain::assignment::ScheduleSnapshot;
use crate::domain::room_table::{RoomDayEntry, RoomWeekTable};
use crate::domain::week::Week;
use crate::engine::day_expander::DayExpander;
use crate::engine::leave_resolver::LeaveResolver;
use tracing::{instrument, trace};

// ==========================================
// RoomTableBuilder - 诊室周表构建器
// ==========================================
#[derive(Debug, Default, Clone, Copy)]
pub struct RoomTableBuilder {
    day_expander: DayExpander,
    leave_resolver: LeaveResolver,
}

impl RoomTableBuilder {
    pub fn new() -> Self {
        Self {
            day_expander: DayExpander::new(),
            leave_resolver: LeaveResolver::new(),
        }
    }

    /// 构建诊室周表
    ///
    /// 规则:
    /// 1) 对 [week.start, week.end] 每一天查询生效排班
    /// 2) 无生效排班 → 追加一条空条目
    /// 3) 每条生效排班 → 追加占用条目，主责人员休假则覆盖为 "LEAVE <person>"
    #[instrument(skip(self, snapshot, room, week), fields(
        room = %room,
        week = %week,
        assignments = snapshot.assignments.len(),
        leaves = snapshot.leaves.len()
    ))]
    pub fn build_week(&self, snapshot: &ScheduleSnapshot, room: &str, week: Week) -> RoomWeekTable {
        let mut entries = Vec::new();

        for day in week.days() {
            let active = self
                .day_expander
                .active_on(&snapshot.assignments, room, day);

            if active.is_empty() {
                entries.push(RoomDayEntry::empty(day));
                continue;
            }

            for record in active {
                let mut entry = RoomDayEntry {
                    date: day,
                    department: Some(record.department.clone()),
                    occupants: Some(record.occupants()),
                    start_time: Some(record.start_time),
                    end_time: Some(record.end_time),
                };
                if self
                    .leave_resolver
                    .apply_overlay(&snapshot.leaves, &mut entry, &record.person_a)
                {
                    trace!(%day, person = %record.person_a, "主责人员休假，条目已覆盖");
                }
                entries.push(entry);
            }
        }

        RoomWeekTable::new(room, week, entries)
    }
}
