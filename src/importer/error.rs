// ==========================================
// 门诊诊室排班系统 - 导入模块错误类型
// ==========================================
// 分类: 获取失败 (FetchError) / 数据格式错误 (ImportError)
// 红线: 不做静默恢复，错误原样上抛
// 工具: thiserror 派生宏
// ==========================================

use std::path::PathBuf;
use thiserror::Error;

/// 表格获取错误（网络/文件），不重试
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP 请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP 状态异常: url={url}, status={status}")]
    Status { url: String, status: u16 },

    #[error("文件读取失败 ({path}): {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 客户端初始化失败: {0}")]
    ClientBuild(String),
}

/// 表格数据格式错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    // ===== 工作簿/工作表 =====
    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("工作表不存在: {sheet}")]
    SheetNotFound { sheet: String },

    #[error("工作表无表头行: {sheet}")]
    MissingHeader { sheet: String },

    #[error("缺少必需列 (工作表 {sheet}): {column}")]
    MissingColumn { sheet: String, column: String },

    // ===== 字段解析 =====
    #[error("字段为空 (工作表 {sheet}, 行 {row}, 字段 {field})")]
    MissingValue {
        sheet: String,
        row: usize,
        field: String,
    },

    #[error("日期格式错误 (工作表 {sheet}, 行 {row}, 字段 {field}): {value}")]
    DateFormatError {
        sheet: String,
        row: usize,
        field: String,
        value: String,
    },

    #[error("时间格式错误 (工作表 {sheet}, 行 {row}, 字段 {field}): {value}")]
    TimeFormatError {
        sheet: String,
        row: usize,
        field: String,
        value: String,
    },

    #[error("星期格式错误 (工作表 {sheet}, 行 {row}, 字段 {field}): {value}")]
    WeekdayFormatError {
        sheet: String,
        row: usize,
        field: String,
        value: String,
    },
}

impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
