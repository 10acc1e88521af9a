// ==========================================
// 测试辅助函数
// ==========================================
// 职责: 提供内存排班加载器、测试记录构造等功能
// ==========================================

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime, Weekday};
use opd_dashboard::api::ScheduleApi;
use opd_dashboard::domain::{AssignmentRecord, LeaveRecord, ScheduleSnapshot};
use opd_dashboard::logging;
use opd_dashboard::repository::{ScheduleLoader, ScheduleStore, StoreResult};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// 构造排班记录（默认 2024 全年有效，09:00-11:00）
pub fn assignment(room: &str, weekday: Weekday, person_a: &str, person_b: &str) -> AssignmentRecord {
    AssignmentRecord {
        department: "ENT".to_string(),
        person_a: person_a.to_string(),
        person_b: person_b.to_string(),
        room: room.to_string(),
        weekday,
        start_time: time(9, 0),
        end_time: time(11, 0),
        valid_from: date(2024, 1, 1),
        valid_until: date(2024, 12, 31),
    }
}

pub fn leave(person: &str, from: NaiveDate, to: NaiveDate) -> LeaveRecord {
    LeaveRecord {
        person: person.to_string(),
        from,
        to,
    }
}

/// 内存加载器: 返回可替换的记录集，并统计加载次数
pub struct MemoryLoader {
    data: Mutex<(Vec<AssignmentRecord>, Vec<LeaveRecord>)>,
    pub calls: AtomicUsize,
}

impl MemoryLoader {
    pub fn new(assignments: Vec<AssignmentRecord>, leaves: Vec<LeaveRecord>) -> Arc<Self> {
        Arc::new(Self {
            data: Mutex::new((assignments, leaves)),
            calls: AtomicUsize::new(0),
        })
    }

    /// 替换数据源内容（模拟表格被编辑）
    pub fn replace(&self, assignments: Vec<AssignmentRecord>, leaves: Vec<LeaveRecord>) {
        *self.data.lock().unwrap() = (assignments, leaves);
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScheduleLoader for MemoryLoader {
    async fn load(&self) -> StoreResult<ScheduleSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let (assignments, leaves) = self.data.lock().unwrap().clone();
        Ok(ScheduleSnapshot::new(assignments, leaves))
    }
}

/// 基于内存加载器构建 API
pub fn create_test_api(
    assignments: Vec<AssignmentRecord>,
    leaves: Vec<LeaveRecord>,
) -> (Arc<MemoryLoader>, ScheduleApi) {
    logging::init_test();
    let loader = MemoryLoader::new(assignments, leaves);
    let store = Arc::new(ScheduleStore::new(loader.clone(), 15));
    (loader, ScheduleApi::new(store))
}
