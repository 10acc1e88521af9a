// ==========================================
// 门诊诊室排班系统 - 领域类型定义
// ==========================================
// 职责: 诊室编号、时段类型等基础类型
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// 诊室编号前缀 (OPD-1 .. OPD-15)
pub const ROOM_PREFIX: &str = "OPD-";

/// 默认诊室数量
pub const DEFAULT_ROOM_COUNT: u32 = 15;

/// 生成固定诊室列表（静态配置，不从数据推导）
pub fn room_ids(count: u32) -> Vec<String> {
    (1..=count).map(|i| format!("{}{}", ROOM_PREFIX, i)).collect()
}

// ==========================================
// 时段类型 (Slot Kind)
// ==========================================
// 由 RoomDayEntry 字段推导，不单独存储
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotKind {
    Occupied, // 正常占用
    Leave,    // 主责人员休假
    Empty,    // 当日无排班
}

impl fmt::Display for SlotKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotKind::Occupied => write!(f, "OCCUPIED"),
            SlotKind::Leave => write!(f, "LEAVE"),
            SlotKind::Empty => write!(f, "EMPTY"),
        }
    }
}
