// ==========================================
// 门诊诊室排班系统 - 配置层
// ==========================================
// 职责: 系统配置加载（环境变量 / .env）
// ==========================================

pub mod config_manager;

// 重导出核心配置
pub use config_manager::{config_keys, AppConfig, ConfigError, ENV_PREFIX};
