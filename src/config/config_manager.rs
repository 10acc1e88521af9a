// ==========================================
// 门诊诊室排班系统 - 配置管理器
// ==========================================
// 职责: 环境变量配置加载（支持 .env 文件）
// 前缀: OPD_（如 OPD_LINK / OPD_FILE）
// 红线: 配置显式注入构造函数，不使用全局状态
// ==========================================

use crate::domain::types::DEFAULT_ROOM_COUNT;
use crate::importer::error::FetchError;
use crate::importer::importer_trait::SpreadsheetSource;
use crate::importer::schedule_importer::{SheetNames, DEFAULT_LEAVE_SHEET, DEFAULT_SCHEDULE_SHEET};
use crate::importer::sheet_source::{FileSpreadsheetSource, HttpSpreadsheetSource};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "OPD_";

// ==========================================
// 配置键定义（不含前缀）
// ==========================================
pub mod config_keys {
    pub const LINK: &str = "LINK";
    pub const FILE: &str = "FILE";
    pub const SCHEDULE_SHEET: &str = "SCHEDULE_SHEET";
    pub const LEAVE_SHEET: &str = "LEAVE_SHEET";
    pub const ROOM_COUNT: &str = "ROOM_COUNT";
    pub const HTTP_TIMEOUT_SECS: &str = "HTTP_TIMEOUT_SECS";
    pub const SHARE_LINK: &str = "SHARE_LINK";
}

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("环境变量解析失败: {0}")]
    Env(#[from] envy::Error),

    #[error("未配置表格来源: 需设置 {prefix}LINK 或 {prefix}FILE", prefix = ENV_PREFIX)]
    MissingSource,

    #[error("配置值无效 (key: {key}, value: {value}): {message}")]
    InvalidValue {
        key: String,
        value: String,
        message: String,
    },

    #[error("数据源初始化失败: {0}")]
    Source(#[from] FetchError),
}

fn default_schedule_sheet() -> String {
    DEFAULT_SCHEDULE_SHEET.to_string()
}

fn default_leave_sheet() -> String {
    DEFAULT_LEAVE_SHEET.to_string()
}

fn default_room_count() -> u32 {
    DEFAULT_ROOM_COUNT
}

fn default_http_timeout_secs() -> u64 {
    30
}

// ==========================================
// AppConfig - 应用配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// 表格下载链接（优先于 file）
    #[serde(default)]
    pub link: Option<String>,

    /// 本地 xlsx 文件
    #[serde(default)]
    pub file: Option<PathBuf>,

    #[serde(default = "default_schedule_sheet")]
    pub schedule_sheet: String,

    #[serde(default = "default_leave_sheet")]
    pub leave_sheet: String,

    #[serde(default = "default_room_count")]
    pub room_count: u32,

    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// 面向用户的表格共享链接（仅展示，不用于下载）
    #[serde(default)]
    pub share_link: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            link: None,
            file: None,
            schedule_sheet: default_schedule_sheet(),
            leave_sheet: default_leave_sheet(),
            room_count: default_room_count(),
            http_timeout_secs: default_http_timeout_secs(),
            share_link: None,
        }
    }
}

impl AppConfig {
    /// 从环境变量加载（先读取 .env，文件不存在时忽略）
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Ok(path) = dotenv::dotenv() {
            debug!(path = %path.display(), "已加载 .env 文件");
        }
        Self::from_iter(std::env::vars())
    }

    /// 从键值对加载（键需带 OPD_ 前缀）
    pub fn from_iter<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let config: AppConfig = envy::prefixed(ENV_PREFIX).from_iter(vars)?;
        config.validate()?;
        Ok(config)
    }

    /// 校验配置值
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.room_count == 0 {
            return Err(ConfigError::InvalidValue {
                key: format!("{}{}", ENV_PREFIX, config_keys::ROOM_COUNT),
                value: self.room_count.to_string(),
                message: "诊室数量必须大于 0".to_string(),
            });
        }
        for (key, value) in [
            (config_keys::SCHEDULE_SHEET, &self.schedule_sheet),
            (config_keys::LEAVE_SHEET, &self.leave_sheet),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    key: format!("{}{}", ENV_PREFIX, key),
                    value: value.clone(),
                    message: "工作表名不能为空".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn sheet_names(&self) -> SheetNames {
        SheetNames {
            schedule: self.schedule_sheet.clone(),
            leaves: self.leave_sheet.clone(),
        }
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// 数据来源说明（共享链接未配置时为 None）
    pub fn share_link_notice(&self) -> Option<String> {
        let link = self.share_link.as_deref().map(str::trim).filter(|l| !l.is_empty())?;
        Some(format!(
            "This is the link to the excel file that contains the schedule and leaves sheets \
             that is used to generate the opd dashboard: {}",
            link
        ))
    }

    /// 按配置构建表格数据源（link 优先）
    pub fn spreadsheet_source(&self) -> Result<Arc<dyn SpreadsheetSource>, ConfigError> {
        if let Some(link) = self.link.as_deref().filter(|l| !l.trim().is_empty()) {
            let source = HttpSpreadsheetSource::new(link.trim(), self.http_timeout())?;
            return Ok(Arc::new(source));
        }
        if let Some(file) = &self.file {
            return Ok(Arc::new(FileSpreadsheetSource::new(file.clone())));
        }
        Err(ConfigError::MissingSource)
    }
}
