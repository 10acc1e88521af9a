// ==========================================
// 门诊诊室排班系统 - 引擎层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 周解析/生成错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("日期范围无效: {start} ~ {end}（超出可表示日期范围）")]
    InvalidRange { start: String, end: String },

    #[error("周标签格式错误: {label:?}（期望 \"YYYY-MM-DD till YYYY-MM-DD\"）: {reason}")]
    MalformedLabel { label: String, reason: String },
}

/// Result 类型别名
pub type WeekResult<T> = Result<T, WeekError>;
