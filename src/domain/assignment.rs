// ==========================================
// 门诊诊室排班系统 - 排班与休假领域模型
// ==========================================
// 职责: 周期排班记录、休假记录、数据快照
// 红线: 记录载入后不可变，仅按字段相等比较
// ==========================================

use chrono::{DateTime, NaiveDate, NaiveTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

// ==========================================
// AssignmentRecord - 周期排班记录
// ==========================================
// 在 [valid_from, valid_until] 区间内，每逢 weekday 生效
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRecord {
    pub department: String,     // 科室
    pub person_a: String,       // 主责人员
    pub person_b: String,       // 第二人员（空字符串表示未安排）
    pub room: String,           // 诊室编号
    pub weekday: Weekday,       // 星期
    pub start_time: NaiveTime,  // 开始时间
    pub end_time: NaiveTime,    // 结束时间
    pub valid_from: NaiveDate,  // 生效日期（含）
    pub valid_until: NaiveDate, // 截止日期（含）
}

impl AssignmentRecord {
    /// 判断日期是否落在生效区间内（两端含）
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.valid_from <= day && day <= self.valid_until
    }

    /// 占用人员文本: "personA-personB"
    ///
    /// 第二人员为空时仍保留分隔符（如 "Alice-"）
    pub fn occupants(&self) -> String {
        format!("{}-{}", self.person_a, self.person_b)
    }
}

// ==========================================
// LeaveRecord - 休假记录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRecord {
    pub person: String,   // 休假人员
    pub from: NaiveDate,  // 开始日期（含）
    pub to: NaiveDate,    // 结束日期（含）
}

impl LeaveRecord {
    pub fn covers(&self, day: NaiveDate) -> bool {
        self.from <= day && day <= self.to
    }
}

// ==========================================
// ScheduleSnapshot - 排班数据快照
// ==========================================
// 一次完整加载的结果；缓存失效后整体替换，不做局部更新
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleSnapshot {
    pub assignments: Vec<AssignmentRecord>,
    pub leaves: Vec<LeaveRecord>,
    pub loaded_at: DateTime<Utc>,
}

impl ScheduleSnapshot {
    pub fn new(assignments: Vec<AssignmentRecord>, leaves: Vec<LeaveRecord>) -> Self {
        Self {
            assignments,
            leaves,
            loaded_at: Utc::now(),
        }
    }

    /// 科室列表（去重，空值除外，保持首次出现顺序）
    pub fn departments(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for record in &self.assignments {
            if !record.department.is_empty() && !seen.contains(&record.department) {
                seen.push(record.department.clone());
            }
        }
        seen
    }

    /// 人员列表（person_a 在前，person_b 在后；去重，空字符串除外）
    pub fn people(&self) -> Vec<String> {
        let mut seen: Vec<String> = Vec::new();
        let names = self
            .assignments
            .iter()
            .map(|r| &r.person_a)
            .chain(self.assignments.iter().map(|r| &r.person_b));
        for name in names {
            if !name.is_empty() && !seen.contains(name) {
                seen.push(name.clone());
            }
        }
        seen
    }
}
