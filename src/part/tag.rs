//! Airworthiness tag colors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DocsError;

/// The four-valued airworthiness/status classification of a part.
///
/// Serializes as the backend's short code (`"YELLOW"`, ...). Parsing accepts
/// the short code, the status word and the combined form
/// (`"SERVICEABLE-YELLOW"`), case-insensitively; anything else is
/// [`DocsError::UnknownTagColor`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum TagColor {
    /// Serviceable material.
    Yellow,
    /// Repairable material.
    Green,
    /// Removed, no defect. Also the `Default`, which only exists so parts
    /// can be built with struct update syntax; deserialization never falls
    /// back to it.
    #[default]
    White,
    /// Rejected material.
    Red,
}

impl TagColor {
    /// Every tag color, in report order.
    pub const ALL: [TagColor; 4] = [Self::Yellow, Self::Green, Self::White, Self::Red];

    /// Backend short code.
    pub fn code(self) -> &'static str {
        match self {
            Self::Yellow => "YELLOW",
            Self::Green => "GREEN",
            Self::White => "WHITE",
            Self::Red => "RED",
        }
    }

    /// Combined classification name, e.g. `SERVICEABLE-YELLOW`.
    pub fn classification(self) -> &'static str {
        match self {
            Self::Yellow => "SERVICEABLE-YELLOW",
            Self::Green => "REPAIRABLE-GREEN",
            Self::White => "REMOVED-WHITE",
            Self::Red => "REJECTED-RED",
        }
    }
}

impl FromStr for TagColor {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['_', ' '], "-");
        match normalized.as_str() {
            "YELLOW" | "SERVICEABLE" | "SERVICEABLE-YELLOW" => Ok(Self::Yellow),
            "GREEN" | "REPAIRABLE" | "REPAIRABLE-GREEN" => Ok(Self::Green),
            "WHITE" | "REMOVED" | "REMOVED-WHITE" => Ok(Self::White),
            "RED" | "REJECTED" | "REJECTED-RED" => Ok(Self::Red),
            _ => Err(DocsError::UnknownTagColor(s.to_string())),
        }
    }
}

impl TryFrom<String> for TagColor {
    type Error = DocsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TagColor> for String {
    fn from(tag: TagColor) -> Self {
        tag.code().to_string()
    }
}

impl fmt::Display for TagColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_codes() {
        assert_eq!("YELLOW".parse::<TagColor>().unwrap(), TagColor::Yellow);
        assert_eq!("green".parse::<TagColor>().unwrap(), TagColor::Green);
        assert_eq!(" White ".parse::<TagColor>().unwrap(), TagColor::White);
        assert_eq!("RED".parse::<TagColor>().unwrap(), TagColor::Red);
    }

    #[test]
    fn test_parse_classification_names() {
        assert_eq!(
            "SERVICEABLE-YELLOW".parse::<TagColor>().unwrap(),
            TagColor::Yellow
        );
        assert_eq!("repairable_green".parse::<TagColor>().unwrap(), TagColor::Green);
        assert_eq!("Removed White".parse::<TagColor>().unwrap(), TagColor::White);
        assert_eq!("rejected".parse::<TagColor>().unwrap(), TagColor::Red);
    }

    #[test]
    fn test_parse_unknown_is_error() {
        let err = "BLUE".parse::<TagColor>().unwrap_err();
        assert!(matches!(err, DocsError::UnknownTagColor(ref v) if v == "BLUE"));
    }

    #[test]
    fn test_serde_uses_short_code() {
        let json = serde_json::to_string(&TagColor::Red).unwrap();
        assert_eq!(json, "\"RED\"");
        let back: TagColor = serde_json::from_str("\"REJECTED-RED\"").unwrap();
        assert_eq!(back, TagColor::Red);
        assert!(serde_json::from_str::<TagColor>("\"PURPLE\"").is_err());
    }

    #[test]
    fn test_classification_round_trips() {
        for tag in TagColor::ALL {
            assert_eq!(tag.classification().parse::<TagColor>().unwrap(), tag);
        }
    }
}
