// ==========================================
// 门诊诊室排班系统 - API 层
// ==========================================
// 职责: 提供报表 API 接口,供展示层/命令行调用
// ==========================================

pub mod error;
pub mod schedule_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use schedule_api::ScheduleApi;
