//! # Inventory Reports
//!
//! An immutable snapshot of a set of parts, and the views built from it:
//!
//! - [`ReportTable`]: a fixed column list per report type, every cell
//!   blank-safe
//! - [`export`]: CSV of a table
//! - [`html`]: the printable landscape report
//! - [`dispatch`]: the acknowledgement email sent with a report
//!
//! ```
//! use chrono::Utc;
//! use hangar_docs::part::{Part, TagColor};
//! use hangar_docs::report::{ReportSnapshot, ReportTable, ReportType};
//!
//! let parts = vec![
//!     Part { id: "1".into(), tag_color: TagColor::Yellow, ..Default::default() },
//!     Part { id: "2".into(), tag_color: TagColor::Red, ..Default::default() },
//! ];
//! let snapshot = ReportSnapshot::build(parts, Default::default(), "QA", ReportType::ByStatus, Utc::now());
//! assert_eq!(snapshot.summary.total, 2);
//! assert!(snapshot.report_id.starts_with("RPT-"));
//!
//! let table = ReportTable::from_snapshot(&snapshot);
//! assert_eq!(table.columns[0].label, "Status");
//! ```

pub mod dispatch;
pub mod export;
pub mod html;
mod table;

pub use table::{BLANK_CELL, Column, ColumnHeader, ReportTable, TableMeta};

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::error::{DocsError, Result};
use crate::part::{Part, TagColor};

/// Snapshot format version.
pub const SNAPSHOT_VERSION: &str = "v2.0";

/// Filters applied when the snapshot was taken, as sent by the client.
pub type Filters = BTreeMap<String, serde_json::Value>;

/// Which report a snapshot is rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    #[default]
    TotalInventory,
    ByStatus,
    ByLocation,
    ByPartNumber,
}

impl ReportType {
    pub const ALL: [ReportType; 4] = [
        Self::TotalInventory,
        Self::ByStatus,
        Self::ByLocation,
        Self::ByPartNumber,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Self::TotalInventory => "TOTAL_INVENTORY",
            Self::ByStatus => "BY_STATUS",
            Self::ByLocation => "BY_LOCATION",
            Self::ByPartNumber => "BY_PART_NUMBER",
        }
    }

    /// Human-readable name.
    pub fn label(self) -> &'static str {
        match self {
            Self::TotalInventory => "Total Inventory",
            Self::ByStatus => "By Card Type",
            Self::ByLocation => "By Location",
            Self::ByPartNumber => "By Part Number",
        }
    }
}

impl FromStr for ReportType {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.code() == normalized)
            .ok_or_else(|| DocsError::Config(format!("unknown report type '{}'", s)))
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Unit counts of a snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub total: usize,
    /// Every tag color is present, zero when no part carries it.
    pub by_status: BTreeMap<TagColor, usize>,
    /// Share of the total per tag color, in percent rounded to two
    /// decimals. Empty when the report has no items.
    #[serde(default)]
    pub percentages: BTreeMap<TagColor, f64>,
}

impl ReportSummary {
    pub fn compute(parts: &[Part]) -> Self {
        let mut by_status: BTreeMap<TagColor, usize> =
            TagColor::ALL.iter().map(|t| (*t, 0)).collect();
        for part in parts {
            *by_status.entry(part.tag_color).or_insert(0) += 1;
        }
        let total = parts.len();
        let percentages = if total == 0 {
            BTreeMap::new()
        } else {
            by_status
                .iter()
                .map(|(tag, count)| (*tag, round2(*count as f64 * 100.0 / total as f64)))
                .collect()
        };
        Self {
            total,
            by_status,
            percentages,
        }
    }

    /// Display form of a tag color's share, e.g. `33.33%`.
    pub fn percentage_label(&self, tag: TagColor) -> Option<String> {
        self.percentages.get(&tag).map(|p| format!("{:.2}%", p))
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// An immutable record of what a report contained when it was issued.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSnapshot {
    pub report_id: String,
    pub report_type: ReportType,
    pub generated_at: DateTime<Utc>,
    pub generated_by: String,
    #[serde(default)]
    pub filters_applied: Filters,
    pub items: Vec<Part>,
    pub summary: ReportSummary,
    pub version: String,
}

impl ReportSnapshot {
    pub fn build(
        items: Vec<Part>,
        filters: Filters,
        generated_by: &str,
        report_type: ReportType,
        now: DateTime<Utc>,
    ) -> Self {
        let summary = ReportSummary::compute(&items);
        let report_id = new_report_id(now);
        debug!(
            report = %report_id,
            report_type = %report_type,
            items = summary.total,
            "report snapshot built"
        );
        Self {
            report_id,
            report_type,
            generated_at: now,
            generated_by: generated_by.to_string(),
            filters_applied: filters,
            items,
            summary,
            version: SNAPSHOT_VERSION.to_string(),
        }
    }
}

/// `RPT-YYYYMMDD-XXXXXX`, the suffix being six random upper-case hex digits.
pub fn new_report_id(now: DateTime<Utc>) -> String {
    let random = Uuid::new_v4().simple().to_string();
    format!(
        "RPT-{}-{}",
        now.format("%Y%m%d"),
        random[..6].to_uppercase()
    )
}

/// Render a filter value for display.
pub(crate) fn filter_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => BLANK_CELL.to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_report_id_format() {
        let now = Utc.with_ymd_and_hms(2024, 7, 9, 0, 0, 0).unwrap();
        let id = new_report_id(now);
        assert_eq!(id.len(), "RPT-20240709-ABCDEF".len());
        assert!(id.starts_with("RPT-20240709-"));
        let suffix = &id[13..];
        assert!(suffix.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    #[test]
    fn test_summary_zero_filled() {
        let parts = vec![
            Part {
                tag_color: TagColor::Green,
                ..Default::default()
            },
            Part {
                tag_color: TagColor::Green,
                ..Default::default()
            },
        ];
        let summary = ReportSummary::compute(&parts);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.by_status.len(), 4);
        assert_eq!(summary.by_status[&TagColor::Green], 2);
        assert_eq!(summary.by_status[&TagColor::Red], 0);
    }

    #[test]
    fn test_summary_percentages_rounded() {
        let parts = vec![
            Part {
                tag_color: TagColor::Yellow,
                ..Default::default()
            },
            Part {
                tag_color: TagColor::Yellow,
                ..Default::default()
            },
            Part {
                tag_color: TagColor::Red,
                ..Default::default()
            },
        ];
        let summary = ReportSummary::compute(&parts);
        assert_eq!(summary.percentages.len(), 4);
        assert_eq!(summary.percentages[&TagColor::Yellow], 66.67);
        assert_eq!(summary.percentages[&TagColor::Red], 33.33);
        assert_eq!(summary.percentages[&TagColor::Green], 0.0);
        assert_eq!(summary.percentage_label(TagColor::Red).as_deref(), Some("33.33%"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["percentages"]["YELLOW"], 66.67);
    }

    #[test]
    fn test_summary_percentages_empty_without_items() {
        let summary = ReportSummary::compute(&[]);
        assert!(summary.percentages.is_empty());
        assert_eq!(summary.percentage_label(TagColor::Yellow), None);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["percentages"], serde_json::json!({}));
    }

    #[test]
    fn test_summary_serializes_codes() {
        let summary = ReportSummary::compute(&[]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["byStatus"]["YELLOW"], 0);
        assert_eq!(json["byStatus"]["RED"], 0);
    }

    #[test]
    fn test_report_type_parse() {
        assert_eq!(
            "total-inventory".parse::<ReportType>().unwrap(),
            ReportType::TotalInventory
        );
        assert_eq!("BY_STATUS".parse::<ReportType>().unwrap(), ReportType::ByStatus);
        assert_eq!(
            "by_part_number".parse::<ReportType>().unwrap(),
            ReportType::ByPartNumber
        );
        assert!("monthly".parse::<ReportType>().is_err());
    }

    #[test]
    fn test_snapshot_build() {
        let now = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let mut filters = Filters::new();
        filters.insert("location".into(), serde_json::json!("HANGAR 1"));
        let snapshot = ReportSnapshot::build(
            vec![Part::default()],
            filters,
            "inspector@wca",
            ReportType::ByLocation,
            now,
        );
        assert_eq!(snapshot.version, "v2.0");
        assert_eq!(snapshot.generated_at, now);
        assert_eq!(snapshot.summary.by_status[&TagColor::White], 1);
        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["reportType"], "BY_LOCATION");
        assert_eq!(json["filtersApplied"]["location"], "HANGAR 1");
    }

    #[test]
    fn test_filter_value() {
        assert_eq!(filter_value(&serde_json::json!("RED")), "RED");
        assert_eq!(filter_value(&serde_json::json!(3)), "3");
        assert_eq!(filter_value(&serde_json::Value::Null), "—");
    }
}
