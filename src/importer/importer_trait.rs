// ==========================================
// 门诊诊室排班系统 - 导入 Trait
// ==========================================
// 职责: 定义表格获取与解析接口（不包含实现）
// 导入流程:
//   1. SpreadsheetSource 获取原始字节
//   2. SheetParser 解析工作表为原始行
//   3. FieldMapper 映射为排班/休假记录
// ==========================================

use crate::importer::error::{FetchError, ImportResult};
use async_trait::async_trait;
use std::collections::HashMap;

// ==========================================
// RawRow / RawSheet - 原始行与工作表
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    pub row_number: usize, // 表格中的行号（表头为第 1 行）
    pub cells: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSheet {
    pub name: String,
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>, // 已剔除全空行
}

impl RawSheet {
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }
}

// ==========================================
// SpreadsheetSource Trait
// ==========================================
// 用途: 表格字节获取（网络/本地文件）
// 实现者: HttpSpreadsheetSource, FileSpreadsheetSource
#[async_trait]
pub trait SpreadsheetSource: Send + Sync {
    /// 获取表格原始字节
    ///
    /// # 返回
    /// - Ok(Vec<u8>): xlsx 字节
    /// - Err(FetchError): 网络/文件错误（不重试）
    async fn fetch_spreadsheet(&self) -> Result<Vec<u8>, FetchError>;

    /// 数据源描述（用于日志）
    fn describe(&self) -> String;
}

// ==========================================
// SheetParser Trait
// ==========================================
// 用途: 工作簿字节 → 指定工作表原始行
// 实现者: ExcelParser
pub trait SheetParser: Send + Sync {
    /// 解析多个工作表（一次打开工作簿）
    ///
    /// # 返回
    /// 与 `sheets` 顺序一致的 RawSheet 列表
    fn parse_sheets(&self, bytes: &[u8], sheets: &[&str]) -> ImportResult<Vec<RawSheet>>;
}
