//! Report tables: a fixed column list per report type.

use serde::Serialize;

use super::{ReportSnapshot, ReportType};
use crate::part::Part;
use crate::policy::ConditionField;

/// Cell text for an absent value.
pub const BLANK_CELL: &str = "—";

/// A report column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    StatusLabel,
    Pn,
    Sn,
    PartName,
    Brand,
    Model,
    Location,
    PhysicalStorageLocation,
    RegistrationDate,
    Tat,
    Tso,
    Trem,
    ShelfLife,
    Tc,
    Cso,
    Crem,
    Organization,
    CompanyAddress,
    CompanyPhone,
    CompanyEmail,
    TechnicianName,
    TechnicianLicense,
    InspectorName,
    InspectorLicense,
    RemovalReason,
    RejectionReason,
    FinalDisposition,
    Observations,
    TechnicalReport,
}

impl Column {
    /// Machine key, as used by the web client.
    pub fn key(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::StatusLabel => "statusLabel",
            Self::Pn => "pn",
            Self::Sn => "sn",
            Self::PartName => "partName",
            Self::Brand => "brand",
            Self::Model => "model",
            Self::Location => "location",
            Self::PhysicalStorageLocation => "physicalStorageLocation",
            Self::RegistrationDate => "registrationDate",
            Self::Tat => "tat",
            Self::Tso => "tso",
            Self::Trem => "trem",
            Self::ShelfLife => "shelfLife",
            Self::Tc => "tc",
            Self::Cso => "cso",
            Self::Crem => "crem",
            Self::Organization => "organization",
            Self::CompanyAddress => "companyAddress",
            Self::CompanyPhone => "companyPhone",
            Self::CompanyEmail => "companyEmail",
            Self::TechnicianName => "technicianName",
            Self::TechnicianLicense => "technicianLicense",
            Self::InspectorName => "inspectorName",
            Self::InspectorLicense => "inspectorLicense",
            Self::RemovalReason => "removalReason",
            Self::RejectionReason => "rejectionReason",
            Self::FinalDisposition => "finalDisposition",
            Self::Observations => "observations",
            Self::TechnicalReport => "technicalReport",
        }
    }

    /// Column header.
    pub fn label(self) -> &'static str {
        match self {
            Self::Id => "System ID",
            Self::StatusLabel => "Status",
            Self::Pn => "Part Number",
            Self::Sn => "Serial Number",
            Self::PartName => "Description",
            Self::Brand => "Brand",
            Self::Model => "Model",
            Self::Location => "Location",
            Self::PhysicalStorageLocation => "Bin/Shelf",
            Self::RegistrationDate => "Reg. Date",
            Self::Tat => "TAT/T.T",
            Self::Tso => "TSO",
            Self::Trem => "T.REM",
            Self::ShelfLife => "Shelf Life",
            Self::Tc => "T.C.",
            Self::Cso => "CSO",
            Self::Crem => "C.REM",
            Self::Organization => "Organization",
            Self::CompanyAddress => "Address",
            Self::CompanyPhone => "Phone",
            Self::CompanyEmail => "Email",
            Self::TechnicianName => "Tech Name",
            Self::TechnicianLicense => "Tech Lic.",
            Self::InspectorName => "Insp. Name",
            Self::InspectorLicense => "Insp. Lic.",
            Self::RemovalReason => "Removal Reason",
            Self::RejectionReason => "Rejection Reason",
            Self::FinalDisposition => "Disposition",
            Self::Observations => "Observations",
            Self::TechnicalReport => "Technical Report",
        }
    }

    /// The tag-conditional field behind this column, if any.
    fn condition_field(self) -> Option<ConditionField> {
        match self {
            Self::ShelfLife => Some(ConditionField::ShelfLife),
            Self::RemovalReason => Some(ConditionField::RemovalReason),
            Self::TechnicalReport => Some(ConditionField::TechnicalReport),
            Self::PhysicalStorageLocation => Some(ConditionField::PhysicalStorageLocation),
            Self::RejectionReason => Some(ConditionField::RejectionReason),
            Self::FinalDisposition => Some(ConditionField::FinalDisposition),
            _ => None,
        }
    }

    /// Cell value for `part`.
    ///
    /// Tag-conditional columns stay blank for parts whose tag color does not
    /// own the field, whatever the record carries.
    pub fn value(self, part: &Part) -> Option<&str> {
        if let Some(field) = self.condition_field() {
            return part
                .tag_color
                .policy()
                .shows(field)
                .then(|| field.value(part))
                .flatten();
        }
        let raw = match self {
            Self::Id => return Some(part.id.as_str()).filter(|s| !s.trim().is_empty()),
            Self::StatusLabel => return Some(part.tag_color.policy().status_label),
            Self::Pn => &part.pn,
            Self::Sn => &part.sn,
            Self::PartName => &part.part_name,
            Self::Brand => &part.brand,
            Self::Model => &part.model,
            Self::Location => &part.location,
            Self::RegistrationDate => &part.registration_date,
            Self::Tat => &part.tt_tat,
            Self::Tso => &part.tso,
            Self::Trem => &part.trem,
            Self::Tc => &part.tc,
            Self::Cso => &part.cso,
            Self::Crem => &part.crem,
            Self::Organization => &part.organization,
            Self::CompanyAddress => &part.company_address,
            Self::CompanyPhone => &part.company_phone,
            Self::CompanyEmail => &part.company_email,
            Self::TechnicianName => &part.technician_name,
            Self::TechnicianLicense => &part.technician_license,
            Self::InspectorName => &part.inspector_name,
            Self::InspectorLicense => &part.inspector_license,
            Self::Observations => &part.observations,
            Self::ShelfLife
            | Self::RemovalReason
            | Self::TechnicalReport
            | Self::PhysicalStorageLocation
            | Self::RejectionReason
            | Self::FinalDisposition => return None,
        };
        Part::text(raw)
    }
}

use Column::*;

const TOTAL_INVENTORY: &[Column] = &[
    StatusLabel,
    Pn,
    Sn,
    PartName,
    Brand,
    Model,
    Location,
    PhysicalStorageLocation,
    RegistrationDate,
    Tat,
    Tso,
    Trem,
    ShelfLife,
    Tc,
    Cso,
    Crem,
    Organization,
    CompanyAddress,
    CompanyPhone,
    CompanyEmail,
    TechnicianName,
    TechnicianLicense,
    InspectorName,
    InspectorLicense,
    RemovalReason,
    RejectionReason,
    FinalDisposition,
    Observations,
    TechnicalReport,
    Id,
];

const BY_STATUS: &[Column] = &[
    StatusLabel,
    Pn,
    Sn,
    PartName,
    Brand,
    Model,
    Location,
    PhysicalStorageLocation,
    RegistrationDate,
    Tat,
    Tso,
    Trem,
    ShelfLife,
    Tc,
    Cso,
    Crem,
    TechnicianName,
    InspectorName,
    RemovalReason,
    RejectionReason,
    Observations,
];

const BY_LOCATION: &[Column] = &[
    Location,
    StatusLabel,
    Pn,
    Sn,
    PartName,
    Brand,
    Model,
    PhysicalStorageLocation,
    RegistrationDate,
    Tat,
    Trem,
    ShelfLife,
    Observations,
];

const BY_PART_NUMBER: &[Column] = &[
    Pn,
    StatusLabel,
    Sn,
    PartName,
    Brand,
    Location,
    Tat,
    Tso,
    Trem,
    ShelfLife,
    Tc,
    Cso,
    Crem,
    Observations,
];

impl ReportType {
    /// Columns of this report, in order. The same list drives the table,
    /// the CSV export and the printed report.
    pub fn columns(self) -> &'static [Column] {
        match self {
            Self::TotalInventory => TOTAL_INVENTORY,
            Self::ByStatus => BY_STATUS,
            Self::ByLocation => BY_LOCATION,
            Self::ByPartNumber => BY_PART_NUMBER,
        }
    }
}

/// Column header as serialized for the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnHeader {
    pub key: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableMeta {
    pub report_type: ReportType,
    pub row_count: usize,
    pub empty: bool,
}

/// A report rendered as rows of display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportTable {
    pub columns: Vec<ColumnHeader>,
    /// One cell per column; absent values are [`BLANK_CELL`].
    pub rows: Vec<Vec<String>>,
    pub meta: TableMeta,
}

impl ReportTable {
    pub fn from_parts(parts: &[Part], report_type: ReportType) -> Self {
        let columns = report_type.columns();
        let rows: Vec<Vec<String>> = parts
            .iter()
            .map(|part| {
                columns
                    .iter()
                    .map(|c| c.value(part).unwrap_or(BLANK_CELL).to_string())
                    .collect()
            })
            .collect();
        Self {
            columns: columns
                .iter()
                .map(|c| ColumnHeader {
                    key: c.key(),
                    label: c.label(),
                })
                .collect(),
            meta: TableMeta {
                report_type,
                row_count: rows.len(),
                empty: rows.is_empty(),
            },
            rows,
        }
    }

    pub fn from_snapshot(snapshot: &ReportSnapshot) -> Self {
        Self::from_parts(&snapshot.items, snapshot.report_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::TagColor;

    fn cell<'a>(table: &'a ReportTable, row: usize, key: &str) -> &'a str {
        let index = table.columns.iter().position(|c| c.key == key).unwrap();
        &table.rows[row][index]
    }

    #[test]
    fn test_column_counts() {
        assert_eq!(ReportType::TotalInventory.columns().len(), 30);
        assert_eq!(ReportType::ByStatus.columns().len(), 21);
        assert_eq!(ReportType::ByLocation.columns().len(), 13);
        assert_eq!(ReportType::ByPartNumber.columns().len(), 14);
        assert_eq!(ReportType::ByLocation.columns()[0], Column::Location);
        assert_eq!(ReportType::ByPartNumber.columns()[0], Column::Pn);
    }

    #[test]
    fn test_empty_table_keeps_columns() {
        let table = ReportTable::from_parts(&[], ReportType::ByStatus);
        assert_eq!(table.columns.len(), 21);
        assert!(table.rows.is_empty());
        assert!(table.meta.empty);
        assert_eq!(table.meta.row_count, 0);
    }

    #[test]
    fn test_blank_cells() {
        let part = Part {
            pn: Some("ABC-123".into()),
            sn: Some("  ".into()),
            tag_color: TagColor::Yellow,
            ..Default::default()
        };
        let table = ReportTable::from_parts(&[part], ReportType::TotalInventory);
        assert_eq!(cell(&table, 0, "pn"), "ABC-123");
        assert_eq!(cell(&table, 0, "sn"), BLANK_CELL);
        assert_eq!(cell(&table, 0, "id"), BLANK_CELL);
        assert_eq!(cell(&table, 0, "statusLabel"), "Serviceable Material");
        assert!(table.rows[0].iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_conditional_columns_follow_tag() {
        let part = Part {
            tag_color: TagColor::Green,
            shelf_life: Some("2030-01-01".into()),
            removal_reason: Some("Vibration".into()),
            rejection_reason: Some("stale".into()),
            ..Default::default()
        };
        let table = ReportTable::from_parts(&[part], ReportType::TotalInventory);
        assert_eq!(cell(&table, 0, "removalReason"), "Vibration");
        assert_eq!(cell(&table, 0, "shelfLife"), BLANK_CELL);
        assert_eq!(cell(&table, 0, "rejectionReason"), BLANK_CELL);
    }

    #[test]
    fn test_serialized_shape() {
        let table = ReportTable::from_parts(&[Part::default()], ReportType::ByPartNumber);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][0]["key"], "pn");
        assert_eq!(json["columns"][0]["label"], "Part Number");
        assert_eq!(json["meta"]["reportType"], "BY_PART_NUMBER");
        assert_eq!(json["meta"]["rowCount"], 1);
        assert_eq!(json["meta"]["empty"], false);
    }
}
