// ==========================================
// 门诊诊室排班系统 - 仓储层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::importer::error::{FetchError, ImportError};
use thiserror::Error;

/// 仓储层错误类型
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("排班表获取失败: {0}")]
    Fetch(#[from] FetchError),

    #[error("排班表数据格式错误: {0}")]
    MalformedData(#[from] ImportError),
}

impl StoreError {
    pub fn is_fetch_error(&self) -> bool {
        matches!(self, StoreError::Fetch(_))
    }
}

/// Result 类型别名
pub type StoreResult<T> = Result<T, StoreError>;
