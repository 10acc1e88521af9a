// ==========================================
// 诊室周表场景测试
// ==========================================
// 测试目标: 周展开、休假覆盖、利用率的端到端行为
// ==========================================

mod test_helpers;

use chrono::Weekday;
use opd_dashboard::domain::SlotKind;
use opd_dashboard::engine::{WeekError, WEEKLY_CAPACITY_SECONDS};
use test_helpers::{assignment, create_test_api, date, leave, time};

const WEEK: &str = "2024-06-01 till 2024-06-07";

#[tokio::test]
async fn test_wednesday_assignment_without_leave() {
    let (_loader, api) = create_test_api(
        vec![assignment("OPD-1", Weekday::Wed, "Alice", "")],
        vec![],
    );

    let table = api.build_week("OPD-1", WEEK).await.unwrap();
    assert_eq!(table.len(), 7);

    let wednesday = table.entries_on(date(2024, 6, 5));
    assert_eq!(wednesday.len(), 1);
    assert_eq!(wednesday[0].occupants.as_deref(), Some("Alice-"));
    assert_eq!(wednesday[0].start_time, Some(time(9, 0)));
    assert_eq!(wednesday[0].end_time, Some(time(11, 0)));
    assert_eq!(wednesday[0].date_label(), "Wed 2024-06-05");

    let utilisation = api.utilisation(&table);
    let expected = (2.0 * 3600.0) / WEEKLY_CAPACITY_SECONDS as f64 * 100.0;
    assert!((utilisation - expected).abs() < 1e-9);
    assert!((utilisation - 2.597).abs() < 0.01);
}

#[tokio::test]
async fn test_wednesday_assignment_with_leave() {
    let (_loader, api) = create_test_api(
        vec![assignment("OPD-1", Weekday::Wed, "Alice", "")],
        vec![leave("Alice", date(2024, 6, 5), date(2024, 6, 5))],
    );

    let table = api.build_week("OPD-1", WEEK).await.unwrap();
    let wednesday = table.entries_on(date(2024, 6, 5));
    assert_eq!(wednesday[0].occupants.as_deref(), Some("LEAVE Alice"));
    assert_eq!(wednesday[0].start_time, None);
    assert_eq!(wednesday[0].end_time, None);
    assert_eq!(wednesday[0].kind(), SlotKind::Leave);

    assert_eq!(api.utilisation(&table), 0.0);
}

#[tokio::test]
async fn test_every_day_has_at_least_one_entry() {
    let (_loader, api) = create_test_api(
        vec![
            assignment("OPD-2", Weekday::Mon, "Bob", "Carol"),
            assignment("OPD-2", Weekday::Mon, "Dan", ""),
            assignment("OPD-2", Weekday::Sat, "Eve", ""),
        ],
        vec![],
    );

    let table = api.build_week("OPD-2", WEEK).await.unwrap();
    assert_eq!(table.len(), 8);
    for day in table.week.days() {
        assert!(!table.entries_on(day).is_empty(), "缺少日期 {}", day);
    }

    // 日期递增
    let dates: Vec<_> = table.iter().map(|e| e.date).collect();
    let mut sorted = dates.clone();
    sorted.sort();
    assert_eq!(dates, sorted);

    // 空日期条目全部为空值
    for entry in table.iter().filter(|e| e.kind() == SlotKind::Empty) {
        assert!(entry.department.is_none());
        assert!(entry.occupants.is_none());
        assert!(entry.start_time.is_none());
        assert!(entry.end_time.is_none());
    }
}

#[tokio::test]
async fn test_leave_entries_always_start_with_marker() {
    let (_loader, api) = create_test_api(
        vec![
            assignment("OPD-3", Weekday::Mon, "Alice", "Bob"),
            assignment("OPD-3", Weekday::Tue, "Alice", ""),
            assignment("OPD-3", Weekday::Wed, "Carol", "Alice"),
        ],
        vec![leave("Alice", date(2024, 6, 1), date(2024, 6, 7))],
    );

    let table = api.build_week("OPD-3", WEEK).await.unwrap();
    let leave_entries: Vec<_> = table.iter().filter(|e| e.is_leave()).collect();
    assert_eq!(leave_entries.len(), 2);
    for entry in leave_entries {
        assert!(entry.occupants.as_deref().unwrap().starts_with("LEAVE "));
        assert!(entry.start_time.is_none() && entry.end_time.is_none());
    }

    // 第二人员休假不覆盖
    let wednesday = table.entries_on(date(2024, 6, 5));
    assert_eq!(wednesday[0].occupants.as_deref(), Some("Carol-Alice"));
}

#[tokio::test]
async fn test_room_report_header() {
    let mut eye = assignment("OPD-4", Weekday::Thu, "Bob", "");
    eye.department = "Eye".to_string();
    let (_loader, api) = create_test_api(
        vec![assignment("OPD-4", Weekday::Wed, "Alice", ""), eye],
        vec![],
    );

    let report = api.room_report("OPD-4", WEEK).await.unwrap();
    assert_eq!(report.header(), "OPD-4 ENT, Eye");
    assert_eq!(report.utilisation_text(), "Utilisation: 5.2%");
}

#[tokio::test]
async fn test_unknown_room_and_bad_label() {
    let (_loader, api) = create_test_api(vec![], vec![]);

    assert!(matches!(
        api.build_week("OPD-99", WEEK).await,
        Err(opd_dashboard::ApiError::NotFound(_))
    ));
    assert!(matches!(
        api.build_week("OPD-1", "next week").await,
        Err(opd_dashboard::ApiError::Week(_))
    ));
}

#[tokio::test]
async fn test_label_must_be_saturday_to_friday() {
    let (loader, api) = create_test_api(vec![assignment("OPD-1", Weekday::Wed, "Dr A", "")], vec![]);

    // 起止颠倒
    assert!(matches!(
        api.build_week("OPD-1", "2024-06-07 till 2024-06-01").await,
        Err(opd_dashboard::ApiError::Week(WeekError::MalformedLabel { .. }))
    ));
    // 周一开始、跨四周
    assert!(matches!(
        api.room_report("OPD-1", "2024-06-03 till 2024-06-30").await,
        Err(opd_dashboard::ApiError::Week(WeekError::MalformedLabel { .. }))
    ));
    // 标签非法时不触发加载
    assert_eq!(loader.call_count(), 0);
}
