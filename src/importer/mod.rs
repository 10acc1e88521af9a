// ==========================================
// 门诊诊室排班系统 - 导入层
// ==========================================
// 职责: 外部表格获取与解析，生成排班/休假记录
// 支持: HTTP 共享链接, 本地 xlsx 文件
// ==========================================

// 模块声明
pub mod error;
pub mod field_mapper;
pub mod file_parser;
pub mod importer_trait;
pub mod schedule_importer;
pub mod sheet_source;

// 重导出核心类型
pub use error::{FetchError, ImportError, ImportResult};
pub use field_mapper::{leave_columns, schedule_columns, FieldMapper};
pub use file_parser::ExcelParser;
pub use schedule_importer::{SheetNames, WorkbookScheduleLoader};
pub use sheet_source::{FileSpreadsheetSource, HttpSpreadsheetSource};

// 重导出 Trait 接口
pub use importer_trait::{RawRow, RawSheet, SheetParser, SpreadsheetSource};
