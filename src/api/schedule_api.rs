// ==========================================
// 门诊诊室排班系统 - 排班报表 API
// ==========================================
// 职责: 为展示层提供诊室周报表查询与数据刷新
// 架构: API 层 → ScheduleStore (快照) → 引擎层 (同步计算)
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::assignment::ScheduleSnapshot;
use crate::domain::report::{ReportFilter, RoomReport};
use crate::domain::room_table::RoomWeekTable;
use crate::domain::week::Week;
use crate::engine::{RoomTableBuilder, UtilisationCalculator, WeekResolver};
use crate::repository::ScheduleStore;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{info, instrument};

// ==========================================
// ScheduleApi - 排班报表 API
// ==========================================
pub struct ScheduleApi {
    store: Arc<ScheduleStore>,
    week_resolver: WeekResolver,
    table_builder: RoomTableBuilder,
    calculator: UtilisationCalculator,
}

impl ScheduleApi {
    pub fn new(store: Arc<ScheduleStore>) -> Self {
        Self {
            store,
            week_resolver: WeekResolver::new(),
            table_builder: RoomTableBuilder::new(),
            calculator: UtilisationCalculator::new(),
        }
    }

    // ==========================================
    // 基础查询
    // ==========================================

    /// 固定诊室列表
    pub fn rooms(&self) -> &[String] {
        self.store.rooms()
    }

    /// 刷新数据（缓存失效，下次查询重新加载）
    pub async fn refresh(&self) {
        self.store.invalidate().await;
    }

    /// 可选周列表
    pub fn week_options(&self, start: NaiveDate, end: NaiveDate) -> ApiResult<Vec<String>> {
        Ok(self.week_resolver.generate_weeks(start, end)?)
    }

    /// 解析周标签
    pub fn parse_week(&self, label: &str) -> ApiResult<Week> {
        Ok(self.week_resolver.parse_week_label(label)?)
    }

    pub async fn departments(&self) -> ApiResult<Vec<String>> {
        Ok(self.store.departments().await?)
    }

    pub async fn people(&self) -> ApiResult<Vec<String>> {
        Ok(self.store.people().await?)
    }

    // ==========================================
    // 诊室周表 / 报表
    // ==========================================

    /// 构建诊室周表
    pub async fn build_week(&self, room: &str, week_label: &str) -> ApiResult<RoomWeekTable> {
        self.ensure_room(room)?;
        let week = self.parse_week(week_label)?;
        let snapshot = self.store.snapshot().await?;
        Ok(self.table_builder.build_week(&snapshot, room, week))
    }

    /// 周表利用率（百分比）
    pub fn utilisation(&self, table: &RoomWeekTable) -> f64 {
        self.calculator.utilisation(table)
    }

    /// 单诊室报表
    pub async fn room_report(&self, room: &str, week_label: &str) -> ApiResult<RoomReport> {
        self.ensure_room(room)?;
        let week = self.parse_week(week_label)?;
        let snapshot = self.store.snapshot().await?;
        Ok(self.report_from_snapshot(&snapshot, room, week))
    }

    /// 全部诊室报表
    ///
    /// 规则:
    /// 1) refresh_data 置位时先重新加载数据并复位标志
    /// 2) 未选择周时取起止日期生成的第一周
    /// 3) 所有诊室基于同一份快照构建
    #[instrument(skip(self, filter), fields(week = ?filter.week, refresh = filter.refresh_data))]
    pub async fn room_reports(&self, filter: &mut ReportFilter) -> ApiResult<Vec<RoomReport>> {
        let reloaded = if filter.refresh_data {
            filter.refresh_data = false;
            Some(self.store.reload().await?)
        } else {
            None
        };

        let label = self.resolve_week_label(filter)?;
        let week = self.parse_week(&label)?;
        let snapshot = match reloaded {
            Some(snapshot) => snapshot,
            None => self.store.snapshot().await?,
        };

        let reports: Vec<RoomReport> = self
            .rooms()
            .iter()
            .map(|room| self.report_from_snapshot(&snapshot, room, week))
            .collect();

        info!(week = %week, rooms = reports.len(), "诊室周报表生成完成");
        Ok(reports)
    }

    // ==========================================
    // 内部方法
    // ==========================================

    fn report_from_snapshot(&self, snapshot: &ScheduleSnapshot, room: &str, week: Week) -> RoomReport {
        let table = self.table_builder.build_week(snapshot, room, week);
        RoomReport {
            room: room.to_string(),
            departments: table.departments(),
            utilisation: self.calculator.utilisation(&table),
            table,
        }
    }

    fn resolve_week_label(&self, filter: &ReportFilter) -> ApiResult<String> {
        if let Some(label) = filter.week.as_ref().filter(|l| !l.trim().is_empty()) {
            return Ok(label.clone());
        }

        let (start, end) = match (filter.start_date, filter.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(ApiError::InvalidInput(
                    "未选择周，且起止日期不完整".to_string(),
                ))
            }
        };

        self.week_options(start, end)?
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::InvalidInput(format!("日期范围内无可选周: {} ~ {}", start, end)))
    }

    fn ensure_room(&self, room: &str) -> ApiResult<()> {
        if self.rooms().iter().any(|r| r == room) {
            Ok(())
        } else {
            Err(ApiError::NotFound(format!("诊室不存在: {}", room)))
        }
    }
}
