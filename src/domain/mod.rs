// ==========================================
// 门诊诊室排班系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体、类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod assignment;
pub mod report;
pub mod room_table;
pub mod types;
pub mod week;

// 重导出核心类型
pub use assignment::{AssignmentRecord, LeaveRecord, ScheduleSnapshot};
pub use report::{ReportFilter, RoomReport};
pub use room_table::{RoomDayEntry, RoomWeekTable, ENTRY_DATE_FORMAT, LEAVE_PREFIX};
pub use types::{room_ids, SlotKind, DEFAULT_ROOM_COUNT, ROOM_PREFIX};
pub use week::{Week, DATE_FORMAT, WEEK_LABEL_SEPARATOR};
