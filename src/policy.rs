//! # Tag-Color Policy Table
//!
//! The single source of truth for everything derived from a part's tag
//! color: display color, bilingual title, FAA/EASA status label, the
//! certification statement printed on the record, and which
//! condition-specific fields section 04 shows.
//!
//! | Tag | Color | Condition fields |
//! |-----|-------|------------------|
//! | YELLOW | `#eab308` | shelf life |
//! | GREEN | `#10b981` | removal reason, technical report |
//! | WHITE | `#64748b` | removal reason, physical storage location |
//! | RED | `#f43f5e` | rejection reason, final disposition |
//!
//! The certification statements are legal text. They are reproduced
//! verbatim on every web, print and email rendering.

use crate::error::Result;
use crate::part::{Part, TagColor};

/// A statement in English with its Spanish counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub es: &'static str,
}

impl Bilingual {
    /// `"EN / ES"` single-line form.
    pub fn joined(&self) -> String {
        format!("{} / {}", self.en, self.es)
    }
}

/// A field shown in section 04 only for the tag colors that own it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionField {
    ShelfLife,
    RemovalReason,
    TechnicalReport,
    PhysicalStorageLocation,
    RejectionReason,
    FinalDisposition,
}

impl ConditionField {
    /// Bilingual label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ShelfLife => "SHELF LIFE / VIDA ÚTIL",
            Self::RemovalReason => "REMOVAL REASON / MOTIVO DE REMOCIÓN",
            Self::TechnicalReport => "TECHNICAL REPORT / REPORTE TÉCNICO",
            Self::PhysicalStorageLocation => {
                "PHYSICAL STORAGE LOCATION / UBICACIÓN FÍSICA DE ALMACENAMIENTO"
            }
            Self::RejectionReason => "REJECTION REASON / MOTIVO DE RECHAZO",
            Self::FinalDisposition => "FINAL DISPOSITION / DISPOSICIÓN FINAL",
        }
    }

    /// The part attribute backing this field.
    pub fn value(self, part: &Part) -> Option<&str> {
        let raw = match self {
            Self::ShelfLife => &part.shelf_life,
            Self::RemovalReason => &part.removal_reason,
            Self::TechnicalReport => &part.technical_report,
            Self::PhysicalStorageLocation => &part.physical_storage_location,
            Self::RejectionReason => &part.rejection_reason,
            Self::FinalDisposition => &part.final_disposition,
        };
        Part::text(raw)
    }

    /// Rendered in the attention style (expiry dates, rejection grounds).
    pub fn attention(self) -> bool {
        matches!(self, Self::ShelfLife | Self::RejectionReason)
    }

    /// Free-text fields keep their line breaks.
    pub fn multiline(self) -> bool {
        matches!(self, Self::TechnicalReport | Self::RejectionReason)
    }
}

/// Everything a renderer needs to know about one tag color.
#[derive(Debug, PartialEq, Eq)]
pub struct TagPolicy {
    pub tag: TagColor,
    pub color_hex: &'static str,
    /// Foreground color that stays legible on `color_hex`.
    pub text_hex: &'static str,
    pub title: Bilingual,
    /// FAA/EASA status terminology used by reports.
    pub status_label: &'static str,
    pub certification: Bilingual,
    /// Section 04 fields, in display order.
    pub condition_fields: &'static [ConditionField],
}

impl TagPolicy {
    /// Whether this policy renders `field`.
    pub fn shows(&self, field: ConditionField) -> bool {
        self.condition_fields.contains(&field)
    }
}

static SERVICEABLE: TagPolicy = TagPolicy {
    tag: TagColor::Yellow,
    color_hex: "#eab308",
    text_hex: "#0f172a",
    title: Bilingual {
        en: "SERVICEABLE MATERIAL",
        es: "MATERIAL APROBADO",
    },
    status_label: "Serviceable Material",
    certification: Bilingual {
        en: "The undersigned certifies that the part identified above was inspected and found serviceable in accordance with the applicable approved maintenance data, and is considered in condition for safe operation.",
        es: "El suscrito certifica que la parte identificada arriba fue inspeccionada y encontrada en condición de servicio de acuerdo con los datos de mantenimiento aprobados aplicables, y se considera en condición para una operación segura.",
    },
    condition_fields: &[ConditionField::ShelfLife],
};

static REPAIRABLE: TagPolicy = TagPolicy {
    tag: TagColor::Green,
    color_hex: "#10b981",
    text_hex: "#ffffff",
    title: Bilingual {
        en: "REPAIRABLE MATERIAL",
        es: "MATERIAL REPARABLE",
    },
    status_label: "Repairable Material",
    certification: Bilingual {
        en: "The undersigned certifies that the part identified above was removed for the reason stated and is repairable. It shall not be installed on any aircraft until repaired and approved for return to service by an authorized repair station.",
        es: "El suscrito certifica que la parte identificada arriba fue removida por el motivo indicado y es reparable. No deberá instalarse en ninguna aeronave hasta ser reparada y aprobada para retorno al servicio por una estación reparadora autorizada.",
    },
    condition_fields: &[ConditionField::RemovalReason, ConditionField::TechnicalReport],
};

static REMOVED: TagPolicy = TagPolicy {
    tag: TagColor::White,
    color_hex: "#64748b",
    text_hex: "#ffffff",
    title: Bilingual {
        en: "REMOVED – NO DEFECT",
        es: "REMOVIDO – SIN DEFECTO",
    },
    status_label: "Removed – No Defect",
    certification: Bilingual {
        en: "The undersigned certifies that the part identified above was removed with no known defect and is held in storage at the location stated. Its airworthiness status must be re-established by inspection before installation.",
        es: "El suscrito certifica que la parte identificada arriba fue removida sin defecto conocido y se encuentra almacenada en la ubicación indicada. Su condición de aeronavegabilidad debe restablecerse mediante inspección antes de su instalación.",
    },
    condition_fields: &[
        ConditionField::RemovalReason,
        ConditionField::PhysicalStorageLocation,
    ],
};

static REJECTED: TagPolicy = TagPolicy {
    tag: TagColor::Red,
    color_hex: "#f43f5e",
    text_hex: "#ffffff",
    title: Bilingual {
        en: "REJECTED MATERIAL",
        es: "MATERIAL RECHAZADO",
    },
    status_label: "Rejected Material",
    certification: Bilingual {
        en: "The undersigned certifies that the part identified above was rejected for the reason stated and is NOT AIRWORTHY. It shall be quarantined and must not be installed on any aircraft under any circumstances.",
        es: "El suscrito certifica que la parte identificada arriba fue rechazada por el motivo indicado y NO ES AERONAVEGABLE. Deberá ser puesta en cuarentena y no debe instalarse en ninguna aeronave bajo ninguna circunstancia.",
    },
    condition_fields: &[
        ConditionField::RejectionReason,
        ConditionField::FinalDisposition,
    ],
};

/// Look up the policy for a tag color.
pub fn policy_for(tag: TagColor) -> &'static TagPolicy {
    match tag {
        TagColor::Yellow => &SERVICEABLE,
        TagColor::Green => &REPAIRABLE,
        TagColor::White => &REMOVED,
        TagColor::Red => &REJECTED,
    }
}

/// Look up the policy for a raw tag code.
///
/// Fails with [`DocsError::UnknownTagColor`](crate::DocsError::UnknownTagColor)
/// for anything outside the four classifications rather than returning a
/// blank policy.
pub fn policy_for_code(code: &str) -> Result<&'static TagPolicy> {
    Ok(policy_for(code.parse()?))
}

impl TagColor {
    /// Shorthand for [`policy_for`].
    pub fn policy(self) -> &'static TagPolicy {
        policy_for(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsError;

    #[test]
    fn test_every_tag_has_complete_policy() {
        for tag in TagColor::ALL {
            let policy = policy_for(tag);
            assert_eq!(policy.tag, tag);
            assert!(!policy.title.en.is_empty() && !policy.title.es.is_empty());
            assert!(!policy.certification.en.is_empty());
            assert!(!policy.certification.es.is_empty());
            assert!(!policy.condition_fields.is_empty());
            assert!(policy.color_hex.starts_with('#'));
            assert!(!policy.status_label.is_empty());
        }
    }

    #[test]
    fn test_condition_fields_per_tag() {
        assert_eq!(
            policy_for(TagColor::Yellow).condition_fields,
            &[ConditionField::ShelfLife]
        );
        assert!(policy_for(TagColor::Green).shows(ConditionField::TechnicalReport));
        assert!(policy_for(TagColor::White).shows(ConditionField::PhysicalStorageLocation));
        assert!(policy_for(TagColor::Red).shows(ConditionField::FinalDisposition));
        assert!(!policy_for(TagColor::Green).shows(ConditionField::ShelfLife));
        assert!(!policy_for(TagColor::Yellow).shows(ConditionField::RejectionReason));
    }

    #[test]
    fn test_certification_texts_are_distinct() {
        let texts: Vec<_> = TagColor::ALL
            .iter()
            .map(|t| policy_for(*t).certification.en)
            .collect();
        for (i, a) in texts.iter().enumerate() {
            for b in &texts[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_policy_for_code() {
        assert_eq!(policy_for_code("red").unwrap().tag, TagColor::Red);
        assert!(matches!(
            policy_for_code("MAGENTA"),
            Err(DocsError::UnknownTagColor(_))
        ));
    }

    #[test]
    fn test_condition_value_is_blank_safe() {
        let part = Part {
            shelf_life: Some("  ".into()),
            removal_reason: Some("FOD".into()),
            ..Default::default()
        };
        assert_eq!(ConditionField::ShelfLife.value(&part), None);
        assert_eq!(ConditionField::RemovalReason.value(&part), Some("FOD"));
    }
}
