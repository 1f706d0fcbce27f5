//! Movement history events consumed by the traceability timeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of movement an event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    #[serde(alias = "CREATED")]
    Creation,
    #[serde(alias = "MOVE", alias = "MOVEMENT")]
    LocationChange,
    #[serde(alias = "STATUS")]
    StatusChange,
    #[serde(alias = "UPDATE", alias = "EDIT")]
    DataUpdate,
}

impl EventKind {
    /// Bilingual display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Creation => "CREATION / CREACIÓN",
            Self::LocationChange => "LOCATION CHANGE / CAMBIO DE UBICACIÓN",
            Self::StatusChange => "STATUS CHANGE / CAMBIO DE ESTADO",
            Self::DataUpdate => "DATA UPDATE / ACTUALIZACIÓN DE DATOS",
        }
    }

    /// Wire code, as written in `data-kind` attributes.
    pub fn code(self) -> &'static str {
        match self {
            Self::Creation => "CREATION",
            Self::LocationChange => "LOCATION_CHANGE",
            Self::StatusChange => "STATUS_CHANGE",
            Self::DataUpdate => "DATA_UPDATE",
        }
    }

    /// Timeline marker color.
    pub fn marker_color(self) -> &'static str {
        match self {
            Self::Creation => "#10b981",
            Self::LocationChange => "#b8860b",
            Self::StatusChange => "#f43f5e",
            Self::DataUpdate => "#64748b",
        }
    }
}

/// One entry of a part's movement history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(alias = "date")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type", alias = "kind", alias = "eventType")]
    pub kind: EventKind,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "previous_location", alias = "from")]
    pub previous_location: Option<String>,
    #[serde(default, alias = "new_location", alias = "to")]
    pub new_location: Option<String>,
    #[serde(default, alias = "userName", alias = "performedBy")]
    pub user: Option<String>,
}

impl HistoryEvent {
    /// Create an event with only the required fields set.
    pub fn new(timestamp: DateTime<Utc>, kind: EventKind) -> Self {
        Self {
            id: None,
            timestamp,
            kind,
            description: None,
            previous_location: None,
            new_location: None,
            user: None,
        }
    }

    /// Set the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the previous and new locations.
    pub fn moved(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.previous_location = Some(from.into());
        self.new_location = Some(to.into());
        self
    }

    /// Set the new location only.
    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.new_location = Some(to.into());
        self
    }

    /// Set the acting user.
    pub fn by(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }
}
