//! # Inventory Report Tests
//!
//! Snapshot, table, CSV, printable page and dispatch email built from the
//! same fixture list.

use chrono::{DateTime, TimeZone, Utc};
use hangar_docs::Branding;
use hangar_docs::part::{Part, TagColor};
use hangar_docs::report::{
    BLANK_CELL, Filters, ReportSnapshot, ReportTable, ReportType, dispatch, export, html,
};
use pretty_assertions::assert_eq;

const ITEMS: &str = include_str!("fixtures/report_items.json");
const SNAPSHOT_ITEMS: &str = include_str!("fixtures/report_items_v2.json");

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap()
}

fn snapshot(report_type: ReportType) -> ReportSnapshot {
    let items: Vec<Part> = serde_json::from_str(ITEMS).unwrap();
    let mut filters = Filters::new();
    filters.insert("location".into(), serde_json::json!("STORES B-12"));
    ReportSnapshot::build(items, filters, "j.doe", report_type, now())
}

#[test]
fn test_snapshot_summary() {
    let snapshot = snapshot(ReportType::TotalInventory);
    assert_eq!(snapshot.summary.total, 5);
    assert_eq!(snapshot.summary.by_status[&TagColor::Yellow], 2);
    assert_eq!(snapshot.summary.by_status[&TagColor::Green], 1);
    assert_eq!(snapshot.summary.by_status[&TagColor::White], 1);
    assert_eq!(snapshot.summary.by_status[&TagColor::Red], 1);
    assert!(snapshot.report_id.starts_with("RPT-20240501-"));
    assert_eq!(snapshot.version, "v2.0");
}

#[test]
fn test_snapshot_json_shape() {
    let json = serde_json::to_value(snapshot(ReportType::ByStatus)).unwrap();
    assert_eq!(json["reportType"], "BY_STATUS");
    assert_eq!(json["generatedBy"], "j.doe");
    assert_eq!(json["filtersApplied"]["location"], "STORES B-12");
    assert_eq!(json["summary"]["byStatus"]["YELLOW"], 2);
    assert_eq!(json["items"].as_array().unwrap().len(), 5);
}

#[test]
fn test_snapshot_items_from_backend() {
    let items: Vec<Part> = serde_json::from_str(SNAPSHOT_ITEMS).unwrap();
    assert_eq!(items[0].tag_color, TagColor::Yellow);
    assert_eq!(items[1].tag_color, TagColor::Red);

    let snapshot = ReportSnapshot::build(
        items,
        Filters::new(),
        "j.doe",
        ReportType::ByStatus,
        now(),
    );
    assert_eq!(snapshot.summary.by_status[&TagColor::Red], 1);
    assert_eq!(snapshot.summary.percentages[&TagColor::Yellow], 50.0);

    let table = ReportTable::from_snapshot(&snapshot);
    let column = |key: &str| table.columns.iter().position(|c| c.key == key).unwrap();
    assert_eq!(table.rows[0][column("technicianName")], "A. Ruiz");
    assert_eq!(table.rows[0][column("inspectorName")], "M. Soto");
    assert_eq!(table.rows[0][column("tat")], "120.5");
    assert_eq!(table.rows[1][column("technicianName")], "L. Vega");
    assert_eq!(table.rows[1][column("rejectionReason")], "Cracked housing");
    // Red parts carry no shelf life whatever the item says
    assert_eq!(table.rows[1][column("shelfLife")], BLANK_CELL);
}

#[test]
fn test_tables_never_leak_foreign_conditional_fields() {
    for report_type in ReportType::ALL {
        let table = ReportTable::from_snapshot(&snapshot(report_type));
        assert_eq!(table.rows.len(), 5);
        for row in &table.rows {
            assert_eq!(row.len(), table.columns.len());
            assert!(row.iter().all(|cell| cell != "SHOULD NOT APPEAR"));
        }
    }
}

#[test]
fn test_table_cells_follow_policy() {
    let table = ReportTable::from_snapshot(&snapshot(ReportType::TotalInventory));
    let column = |key: &str| table.columns.iter().position(|c| c.key == key).unwrap();
    let shelf = column("shelfLife");
    let removal = column("removalReason");
    let status = column("statusLabel");

    assert_eq!(table.rows[0][shelf], "2025-12-31");
    assert_eq!(table.rows[0][removal], BLANK_CELL);
    assert_eq!(table.rows[1][removal], "Scheduled overhaul");
    assert_eq!(table.rows[3][shelf], BLANK_CELL);
    assert_eq!(table.rows[3][status], TagColor::Red.policy().status_label);
}

#[test]
fn test_csv_export() {
    let table = ReportTable::from_snapshot(&snapshot(ReportType::ByLocation));
    let csv = export::to_csv_string(&table).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 6);
    let header: Vec<&str> = table.columns.iter().map(|c| c.label).collect();
    assert_eq!(lines[0], header.join(","));
    assert!(lines[1].starts_with("STORES B-12,"));
}

#[test]
fn test_printable_report() {
    let snapshot = snapshot(ReportType::ByPartNumber);
    let page = html::render_page(&snapshot, &Branding::default());
    assert!(page.contains("size: A4 landscape"));
    assert!(page.contains(&snapshot.report_id));
    assert!(page.contains("By Part Number"));
    assert!(page.contains("Generated by: j.doe"));
    assert!(page.contains(r#"data-status="YELLOW""#));
    assert!(!page.contains("SHOULD NOT APPEAR"));
    assert!(!page.contains(html::NO_ITEMS));
}

#[test]
fn test_empty_report_placeholder() {
    let snapshot = ReportSnapshot::build(
        Vec::new(),
        Filters::new(),
        "j.doe",
        ReportType::TotalInventory,
        now(),
    );
    let fragment = html::render_fragment(&snapshot, &Branding::default());
    assert!(fragment.contains(html::NO_ITEMS));
    assert!(fragment.contains("TOTAL UNITS: 0"));
}

#[test]
fn test_dispatch_email() {
    let snapshot = snapshot(ReportType::TotalInventory);
    let body = dispatch::render_dispatch(
        &snapshot,
        &Branding::default(),
        "https://hangar.example/",
        "abc123",
    )
    .unwrap();

    assert_eq!(
        body.subject,
        format!("World Class Aviation | Total Inventory | {}", snapshot.report_id)
    );
    assert!(body.html.contains(r#"href="https://hangar.example/api/reports/acknowledge/abc123""#));
    assert!(body.html.contains("STORES B-12"));
    assert!(body.inline_images.is_empty());
}

#[test]
fn test_dispatch_rejects_bad_base_url() {
    let snapshot = snapshot(ReportType::TotalInventory);
    assert!(dispatch::render_dispatch(&snapshot, &Branding::default(), "hangar", "abc").is_err());
}
