//! # Part Records
//!
//! The canonical in-memory representation of one aviation component's
//! inventory and compliance data.
//!
//! The backend has used several spellings for the same column over time
//! (`part_name`, `partName`, `description`, ...). Those spellings are accepted
//! here, at the deserialization boundary, as serde aliases so the rest of the
//! crate only ever sees one name per field.
//!
//! Report snapshot items carry the tag twice, as `tagColor` and as the
//! internal `status` code. `status` is only read when no tag color column is
//! present.
//!
//! ```
//! use hangar_docs::part::{Part, TagColor};
//!
//! let part: Part = serde_json::from_str(r#"{
//!     "id": "p-1",
//!     "part_number": "ABC-123",
//!     "tag_color": "SERVICEABLE-YELLOW",
//!     "tt_tat": "120.5"
//! }"#).unwrap();
//!
//! assert_eq!(part.pn.as_deref(), Some("ABC-123"));
//! assert_eq!(part.tag_color, TagColor::Yellow);
//! assert_eq!(part.tt_tat.as_deref(), Some("120.5"));
//! ```

mod history;
mod tag;

pub use history::{EventKind, HistoryEvent};
pub use tag::TagColor;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// An inventory record for one part.
///
/// Every text attribute is optional; absent and whitespace-only values are
/// treated the same by the renderers (see [`Part::text`]). The tag color is
/// not: a record without one is rejected when it is deserialized, so the
/// `Default` impl is only a starting point for building parts in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(remote = "Self", rename_all = "camelCase")]
pub struct Part {
    #[serde(default)]
    pub id: String,
    #[serde(default, alias = "part_number", alias = "partNumber")]
    pub pn: Option<String>,
    #[serde(default, alias = "serial_number", alias = "serialNumber")]
    pub sn: Option<String>,
    #[serde(default, alias = "part_name", alias = "description")]
    pub part_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub location: Option<String>,

    #[serde(alias = "tag_color")]
    pub tag_color: TagColor,

    // Times and cycles
    #[serde(default, alias = "tt_tat", alias = "tat")]
    pub tt_tat: Option<String>,
    #[serde(default)]
    pub tso: Option<String>,
    #[serde(default)]
    pub trem: Option<String>,
    #[serde(default)]
    pub tc: Option<String>,
    #[serde(default)]
    pub cso: Option<String>,
    #[serde(default)]
    pub crem: Option<String>,

    // Tag-conditional fields
    #[serde(default, alias = "shelf_life")]
    pub shelf_life: Option<String>,
    #[serde(default, alias = "removal_reason")]
    pub removal_reason: Option<String>,
    #[serde(default, alias = "technical_report")]
    pub technical_report: Option<String>,
    #[serde(default, alias = "physical_storage_location")]
    pub physical_storage_location: Option<String>,
    #[serde(default, alias = "rejection_reason")]
    pub rejection_reason: Option<String>,
    #[serde(default, alias = "final_disposition")]
    pub final_disposition: Option<String>,

    // Aircraft removal
    #[serde(default, alias = "removed_from_ac", alias = "removedFromAC")]
    pub removed_from_ac: Option<String>,
    #[serde(default)]
    pub position: Option<String>,

    #[serde(default, alias = "remarks")]
    pub observations: Option<String>,

    // Organization
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default, alias = "company_address")]
    pub company_address: Option<String>,
    #[serde(default, alias = "company_phone")]
    pub company_phone: Option<String>,
    #[serde(default, alias = "company_email")]
    pub company_email: Option<String>,
    #[serde(default, alias = "registration_date")]
    pub registration_date: Option<String>,

    // Media (data URIs)
    #[serde(default)]
    pub photo: Option<String>,
    #[serde(default, alias = "technician_signature")]
    pub technician_signature: Option<String>,
    #[serde(default, alias = "inspector_signature")]
    pub inspector_signature: Option<String>,

    // Sign-off identity
    #[serde(default, alias = "technician_name", alias = "technician")]
    pub technician_name: Option<String>,
    #[serde(default, alias = "technician_license")]
    pub technician_license: Option<String>,
    #[serde(default, alias = "inspector_name", alias = "inspector")]
    pub inspector_name: Option<String>,
    #[serde(default, alias = "inspector_license")]
    pub inspector_license: Option<String>,
    /// Explicit sign-off flags. When absent, a present signature image
    /// counts as signed.
    #[serde(default, alias = "signed_by_technician")]
    pub signed_by_technician: Option<bool>,
    #[serde(default, alias = "signed_by_inspector")]
    pub signed_by_inspector: Option<bool>,

    /// Movement history, newest first.
    #[serde(default, deserialize_with = "deserialize_history")]
    pub history: Vec<HistoryEvent>,
}

/// Column names that carry the tag color itself.
const TAG_COLOR_KEYS: [&str; 2] = ["tagColor", "tag_color"];

impl<'de> Deserialize<'de> for Part {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::deserialize(deserializer)?;
        // `status` duplicates the tag color on snapshot items
        if let Some(status) = fields.remove("status") {
            if !TAG_COLOR_KEYS.iter().any(|k| fields.contains_key(*k)) {
                fields.insert("tagColor".to_string(), status);
            }
        }
        Part::deserialize(Value::Object(fields)).map_err(serde::de::Error::custom)
    }
}

impl Serialize for Part {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Part::serialize(self, serializer)
    }
}

/// Accept `null` for the history column as well as a list.
fn deserialize_history<'de, D>(deserializer: D) -> Result<Vec<HistoryEvent>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<Vec<HistoryEvent>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

impl Part {
    /// Blank-safe view of an optional text attribute: `None` for absent or
    /// whitespace-only values.
    pub fn text(value: &Option<String>) -> Option<&str> {
        value.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Whether the technician signed off.
    pub fn technician_signed(&self) -> bool {
        self.signed_by_technician
            .unwrap_or_else(|| Self::text(&self.technician_signature).is_some())
    }

    /// Whether the inspector signed off.
    pub fn inspector_signed(&self) -> bool {
        self.signed_by_inspector
            .unwrap_or_else(|| Self::text(&self.inspector_signature).is_some())
    }

    /// Identity fields used by the timeline header.
    pub fn identity(&self) -> PartIdentity {
        PartIdentity {
            id: self.id.clone(),
            pn: self.pn.clone(),
            sn: self.sn.clone(),
            part_name: self.part_name.clone(),
            tag_color: Some(self.tag_color),
        }
    }
}

/// Identity fields shared by every document about a part.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartIdentity {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub pn: Option<String>,
    #[serde(default)]
    pub sn: Option<String>,
    #[serde(default)]
    pub part_name: Option<String>,
    #[serde(default)]
    pub tag_color: Option<TagColor>,
}
