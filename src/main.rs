// ==========================================
// 门诊诊室排班系统 - 命令行入口
// ==========================================
// 职责: 加载配置 → 获取排班表 → 输出诊室周报表
// 输出: 文本（默认）/ JSON / CSV 文件
// ==========================================

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use opd_dashboard::api::ScheduleApi;
use opd_dashboard::config::AppConfig;
use opd_dashboard::domain::{ReportFilter, RoomReport, Week};
use opd_dashboard::export::write_reports_csv;
use opd_dashboard::importer::WorkbookScheduleLoader;
use opd_dashboard::logging;
use opd_dashboard::repository::ScheduleStore;
use std::fs::File;
use std::path::PathBuf;
use std::sync::Arc;

/// 门诊诊室周占用报表
#[derive(Parser, Debug)]
#[command(name = "opd-dashboard", version, about)]
struct Cli {
    /// 表格下载链接（覆盖 OPD_LINK）
    #[arg(long)]
    link: Option<String>,

    /// 本地 xlsx 文件（覆盖 OPD_FILE）
    #[arg(long)]
    file: Option<PathBuf>,

    /// 起始日期（默认今天）
    #[arg(long)]
    start: Option<NaiveDate>,

    /// 结束日期（默认当年 12-31）
    #[arg(long)]
    end: Option<NaiveDate>,

    /// 周标签，如 "2024-06-01 till 2024-06-07"（默认起始日期所在周）
    #[arg(long)]
    week: Option<String>,

    /// 仅输出指定诊室
    #[arg(long)]
    room: Option<String>,

    /// 仅列出可选周
    #[arg(long)]
    list_weeks: bool,

    /// 显示表格共享链接（OPD_SHARE_LINK）
    #[arg(long)]
    links: bool,

    /// 以 JSON 输出报表
    #[arg(long)]
    json: bool,

    /// 导出 CSV 文件
    #[arg(long)]
    csv: Option<PathBuf>,

    /// JSON 格式日志
    #[arg(long)]
    log_json: bool,
}

fn print_report(report: &RoomReport) {
    println!("{}", report.header());
    println!("{}", report.utilisation_text());
    println!(
        "  {:<16} {:<14} {:<28} {:<10} {:<10}",
        "date", "dept", "people", "start-time", "end-time"
    );
    for entry in report.table.iter() {
        let time = |t: Option<chrono::NaiveTime>| {
            t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
        };
        println!(
            "  {:<16} {:<14} {:<28} {:<10} {:<10}",
            entry.date_label(),
            entry.department.as_deref().unwrap_or(""),
            entry.occupants.as_deref().unwrap_or(""),
            time(entry.start_time),
            time(entry.end_time),
        );
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.log_json {
        logging::init_json();
    } else {
        logging::init();
    }

    tracing::info!("{} v{}", opd_dashboard::APP_NAME, opd_dashboard::VERSION);

    let mut config = AppConfig::from_env().context("加载配置失败")?;
    if cli.link.is_some() {
        config.link = cli.link.clone();
    }
    if cli.file.is_some() {
        config.file = cli.file.clone();
        if cli.link.is_none() {
            config.link = None;
        }
    }

    if cli.links {
        match config.share_link_notice() {
            Some(notice) => println!("{}", notice),
            None => println!("未配置 OPD_SHARE_LINK"),
        }
        return Ok(());
    }

    let start = cli.start.unwrap_or_else(|| Local::now().date_naive());
    let end = match cli.end {
        Some(end) => end,
        None => NaiveDate::from_ymd_opt(start.year(), 12, 31).context("无效的结束日期")?,
    };

    let source = config.spreadsheet_source().context("初始化表格数据源失败")?;
    let loader = WorkbookScheduleLoader::new(source, config.sheet_names());
    let store = Arc::new(ScheduleStore::new(Arc::new(loader), config.room_count));
    let api = ScheduleApi::new(store);

    if cli.list_weeks {
        for label in api.week_options(start, end)? {
            println!("{}", label);
        }
        return Ok(());
    }

    let mut filter = ReportFilter {
        start_date: Some(start),
        end_date: Some(end),
        week: cli.week.clone(),
        refresh_data: false,
    };

    let reports = match &cli.room {
        Some(room) => {
            let label = match &filter.week {
                Some(label) => label.clone(),
                None => match Week::containing(start) {
                    Some(week) if start <= end => week.label(),
                    _ => bail!("日期范围内无可选周: {} ~ {}", start, end),
                },
            };
            vec![api.room_report(room, &label).await?]
        }
        None => api.room_reports(&mut filter).await?,
    };

    if let Some(path) = &cli.csv {
        let file = File::create(path)
            .with_context(|| format!("无法创建 CSV 文件: {}", path.display()))?;
        write_reports_csv(file, &reports)?;
        tracing::info!(path = %path.display(), "CSV 导出完成");
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            print_report(report);
        }
    }

    Ok(())
}
