// ==========================================
// 门诊诊室排班系统 - 报表领域模型
// ==========================================
// 职责: 诊室报表（表头 + 利用率 + 周表）与筛选条件
// ==========================================

use crate::domain::room_table::RoomWeekTable;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// RoomReport - 诊室周报表
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReport {
    pub room: String,
    pub departments: Vec<String>,
    pub utilisation: f64, // 百分比，未截断，可能超过 100
    pub table: RoomWeekTable,
}

impl RoomReport {
    /// 表头: "OPD-1 ENT, Eye"
    pub fn header(&self) -> String {
        if self.departments.is_empty() {
            format!("{} ", self.room)
        } else {
            format!("{} {}", self.room, self.departments.join(", "))
        }
    }

    /// 利用率文本: "Utilisation: 2.6%"
    pub fn utilisation_text(&self) -> String {
        format!("Utilisation: {:.1}%", self.utilisation)
    }
}

// ==========================================
// ReportFilter - 报表筛选条件
// ==========================================
// refresh_data 由外部刷新按钮置位，消费后复位
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub week: Option<String>,
    #[serde(default)]
    pub refresh_data: bool,
}

impl ReportFilter {
    pub fn for_week(label: impl Into<String>) -> Self {
        Self {
            week: Some(label.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::week::Week;

    #[test]
    fn test_header_and_utilisation_text() {
        let week = Week::new(
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 7).unwrap(),
        );
        let report = RoomReport {
            room: "OPD-3".to_string(),
            departments: vec!["ENT".to_string(), "Eye".to_string()],
            utilisation: 2.5974,
            table: RoomWeekTable::new("OPD-3", week, vec![]),
        };

        assert_eq!(report.header(), "OPD-3 ENT, Eye");
        assert_eq!(report.utilisation_text(), "Utilisation: 2.6%");
    }

    #[test]
    fn test_filter_for_week() {
        let filter = ReportFilter::for_week("2024-06-01 till 2024-06-07");
        assert_eq!(filter.week.as_deref(), Some("2024-06-01 till 2024-06-07"));
        assert!(!filter.refresh_data);
    }
}
