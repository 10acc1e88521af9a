// ==========================================
// 门诊诊室排班系统 - 核心库
// ==========================================
// 职责: 周期排班 + 休假日历 → 诊室周占用表 + 利用率
// 流程: 周解析 → 逐日展开排班 → 休假覆盖 → 利用率
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 引擎层 - 排班重建规则
pub mod engine;

// 导入层 - 外部表格
pub mod importer;

// 数据仓储层 - 缓存与加载
pub mod repository;

// 配置层 - 系统配置
pub mod config;

// API 层 - 报表接口
pub mod api;

// 导出 - CSV
pub mod export;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域实体
pub use domain::{
    AssignmentRecord, LeaveRecord, ReportFilter, RoomDayEntry, RoomReport, RoomWeekTable,
    ScheduleSnapshot, SlotKind, Week,
};

// 引擎
pub use engine::{
    generate_weeks, parse_week_label, DayExpander, LeaveResolver, RoomTableBuilder,
    UtilisationCalculator, WeekError, WeekResolver,
};

// 导入与仓储
pub use importer::{FetchError, ImportError, WorkbookScheduleLoader};
pub use repository::{ScheduleLoader, ScheduleStore, StoreError};

// API
pub use api::{ApiError, ScheduleApi};

// 配置
pub use config::AppConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "OPD Dashboard";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
