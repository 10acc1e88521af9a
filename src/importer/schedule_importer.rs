// ==========================================
// 门诊诊室排班系统 - 工作簿排班加载器
// ==========================================
// 流程:
//   1. 获取工作簿字节（单次获取，两个工作表共用）
//   2. 解析 schedule / leaves 工作表
//   3. 字段映射为排班/休假记录
// ==========================================

use crate::domain::assignment::ScheduleSnapshot;
use crate::importer::error::ImportError;
use crate::importer::field_mapper::FieldMapper;
use crate::importer::file_parser::ExcelParser;
use crate::importer::importer_trait::{SheetParser, SpreadsheetSource};
use crate::repository::error::StoreResult;
use crate::repository::schedule_store::ScheduleLoader;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

/// 默认排班工作表名
pub const DEFAULT_SCHEDULE_SHEET: &str = "schedule";

/// 默认休假工作表名
pub const DEFAULT_LEAVE_SHEET: &str = "leaves";

// ==========================================
// SheetNames - 工作表名配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetNames {
    pub schedule: String,
    pub leaves: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Self {
            schedule: DEFAULT_SCHEDULE_SHEET.to_string(),
            leaves: DEFAULT_LEAVE_SHEET.to_string(),
        }
    }
}

// ==========================================
// WorkbookScheduleLoader
// ==========================================
pub struct WorkbookScheduleLoader {
    source: Arc<dyn SpreadsheetSource>,
    parser: Box<dyn SheetParser>,
    mapper: FieldMapper,
    sheets: SheetNames,
}

impl WorkbookScheduleLoader {
    /// 使用 Excel 解析器创建加载器
    pub fn new(source: Arc<dyn SpreadsheetSource>, sheets: SheetNames) -> Self {
        Self::with_parser(source, Box::new(ExcelParser), sheets)
    }

    pub fn with_parser(
        source: Arc<dyn SpreadsheetSource>,
        parser: Box<dyn SheetParser>,
        sheets: SheetNames,
    ) -> Self {
        Self {
            source,
            parser,
            mapper: FieldMapper,
            sheets,
        }
    }
}

#[async_trait]
impl ScheduleLoader for WorkbookScheduleLoader {
    #[instrument(skip(self), fields(source = %self.source.describe()))]
    async fn load(&self) -> StoreResult<ScheduleSnapshot> {
        let bytes = self.source.fetch_spreadsheet().await?;

        let mut sheets = self
            .parser
            .parse_sheets(
                &bytes,
                &[self.sheets.schedule.as_str(), self.sheets.leaves.as_str()],
            )?
            .into_iter();
        let schedule_sheet = sheets.next().ok_or_else(|| ImportError::SheetNotFound {
            sheet: self.sheets.schedule.clone(),
        })?;
        let leave_sheet = sheets.next().ok_or_else(|| ImportError::SheetNotFound {
            sheet: self.sheets.leaves.clone(),
        })?;

        let assignments = self.mapper.map_schedule_sheet(&schedule_sheet)?;
        let leaves = self.mapper.map_leave_sheet(&leave_sheet)?;
        debug!(
            assignments = assignments.len(),
            leaves = leaves.len(),
            "工作簿映射完成"
        );

        Ok(ScheduleSnapshot::new(assignments, leaves))
    }
}
