// ==========================================
// 门诊诊室排班系统 - API层错误类型
// ==========================================
// 职责: 汇总各层错误，供展示层区分处理
// ==========================================

use crate::engine::error::WeekError;
use crate::repository::error::StoreError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    #[error(transparent)]
    Week(#[from] WeekError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
