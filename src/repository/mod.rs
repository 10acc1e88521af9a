// ==========================================
// 门诊诊室排班系统 - 数据仓储层
// ==========================================
// 职责: 排班数据缓存与加载调度
// 存储: 进程内内存（不落盘）
// ==========================================

pub mod error;
pub mod schedule_store;

pub use error::{StoreError, StoreResult};
pub use schedule_store::{ScheduleLoader, ScheduleStore};
