// ==========================================
// 门诊诊室排班系统 - 引擎层
// ==========================================
// 职责: 周期排班重建规则
// 流程: WeekResolver → RoomTableBuilder(DayExpander + LeaveResolver) → UtilisationCalculator
// 红线: 引擎只读快照，不触发数据加载
// ==========================================

pub mod day_expander;
pub mod error;
pub mod leave_resolver;
pub mod room_table_builder;
pub mod utilisation;
pub mod week_resolver;

// 重导出核心引擎
pub use day_expander::DayExpander;
pub use error::{WeekError, WeekResult};
pub use leave_resolver::LeaveResolver;
pub use room_table_builder::RoomTableBuilder;
pub use utilisation::{UtilisationCalculator, WEEKLY_CAPACITY_HOURS, WEEKLY_CAPACITY_SECONDS};
pub use week_resolver::{generate_weeks, parse_week_label, WeekResolver};
