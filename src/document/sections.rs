//! Section builders for the part record, in document order.

use chrono::{DateTime, Utc};

use crate::components::{
    CID_INSPECTOR_SIGNATURE, CID_PART_PHOTO, CID_TECH_SIGNATURE, Checkbox, Component,
    DocumentHeader, Field, ImageSlot, MetricBox, Paragraph, Row, Section, Stack,
};
use crate::config::Branding;
use crate::part::{Part, TagColor};
use crate::policy::{TagPolicy, policy_for};
use crate::render::{EmitContext, escape};

/// Placeholder in an empty signature box.
pub const SIGNATURE_PLACEHOLDER: &str = "PENDING SIGNATURE / FIRMA PENDIENTE";

/// Placeholder in an empty photo box.
pub const PHOTO_PLACEHOLDER: &str = "NO PHOTO / SIN FOTO";

/// Footer timestamp format.
pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// The six times-and-cycles boxes: (metric key, label).
pub const METRICS: [(&str, &str); 6] = [
    ("tt-tat", "TAT/T.T"),
    ("tso", "TSO"),
    ("trem", "T.REM"),
    ("tc", "T.C."),
    ("cso", "CSO"),
    ("crem", "C.REM"),
];

fn text(value: &Option<String>) -> Option<&str> {
    Part::text(value)
}

pub(crate) fn header(
    part: &Part,
    policy: &'static TagPolicy,
    branding: &Branding,
    qr_src: Option<String>,
) -> DocumentHeader {
    let mut subtitle = format!(
        "P/N {} | S/N {}",
        text(&part.pn).unwrap_or(""),
        text(&part.sn).unwrap_or("")
    );
    if let Some(name) = text(&part.part_name) {
        subtitle.push_str(" | ");
        subtitle.push_str(name);
    }
    DocumentHeader::new(&branding.company_name, &branding.document_title)
        .subtitle(subtitle)
        .accent(&branding.primary_color)
        .tag(policy)
        .qr(qr_src)
}

pub(crate) fn administrative(part: &Part) -> Section {
    Section::new("administrative")
        .banner("01. ADMINISTRATIVE RECORD / REGISTRO ADMINISTRATIVO")
        .child(
            Row::new()
                .child(Field::new("ORGANIZATION / ORGANIZACIÓN", text(&part.organization)).span(60))
                .child(
                    Field::new("REG. DATE / FECHA DE REGISTRO", text(&part.registration_date))
                        .span(40)
                        .label_width(50),
                ),
        )
        .child(Field::new("ADDRESS / DIRECCIÓN", text(&part.company_address)).label_width(21))
        .child(
            Row::new()
                .child(Field::new("PHONE / TELÉFONO", text(&part.company_phone)).span(50))
                .child(Field::new("EMAIL / CORREO", text(&part.company_email)).span(50)),
        )
}

pub(crate) fn identification(part: &Part) -> Section {
    let details = Stack::new()
        .span(72)
        .child(Field::new("DESCRIPTION / DESCRIPCIÓN", text(&part.part_name)))
        .child(
            Row::new()
                .child(Field::new("P/N", text(&part.pn)).span(50).label_width(30))
                .child(Field::new("S/N", text(&part.sn)).span(50).label_width(30)),
        )
        .child(
            Row::new()
                .child(Field::new("BRAND / MARCA", text(&part.brand)).span(50).label_width(45))
                .child(Field::new("MODEL / MODELO", text(&part.model)).span(50).label_width(45)),
        )
        .child(Field::new("LOCATION / UBICACIÓN", text(&part.location)));

    Section::new("identification")
        .banner("02. TECHNICAL IDENTIFICATION / IDENTIFICACIÓN TÉCNICA")
        .child(
            Row::new().child(details).child(
                ImageSlot::new(CID_PART_PHOTO, text(&part.photo))
                    .alt("Part photo")
                    .placeholder(PHOTO_PLACEHOLDER)
                    .height(120)
                    .span(28),
            ),
        )
}

pub(crate) fn times_and_cycles(part: &Part) -> Section {
    let values = [
        &part.tt_tat,
        &part.tso,
        &part.trem,
        &part.tc,
        &part.cso,
        &part.crem,
    ];
    let row = METRICS
        .iter()
        .zip(values)
        .fold(Row::new(), |row, ((key, label), value)| {
            row.child(MetricBox::new(*label, text(value)).key(*key))
        });
    Section::new("times")
        .banner("03. TIMES & CYCLES / TIEMPOS Y CICLOS")
        .child(row)
}

pub(crate) fn condition(part: &Part, policy: &'static TagPolicy) -> Section {
    let statuses = TagColor::ALL.iter().fold(Row::new(), |row, tag| {
        row.child(Checkbox::new(policy_for(*tag).title.en, *tag == part.tag_color))
    });

    let removal = Row::new()
        .child(
            Field::new("REMOVED FROM A/C / REMOVIDO DE AERONAVE", text(&part.removed_from_ac))
                .span(60)
                .label_width(45),
        )
        .child(Field::new("POSITION / POSICIÓN", text(&part.position)).span(40).label_width(40));

    let mut section = Section::new("condition")
        .banner("04. CONDITION & REMOVAL / CONDICIÓN Y REMOCIÓN")
        .child(statuses)
        .child(removal);
    for field in policy.condition_fields {
        section = section.child(
            Field::new(field.label(), field.value(part))
                .attention_if(field.attention())
                .multiline(field.multiline()),
        );
    }
    section
}

pub(crate) fn remarks(part: &Part) -> Section {
    Section::new("remarks")
        .banner("05. TECHNICAL REPORTS & REMARKS / REPORTES TÉCNICOS Y OBSERVACIONES")
        .child(
            Field::new("OBSERVATIONS / OBSERVACIONES", text(&part.observations))
                .label_width(25)
                .multiline(true),
        )
}

fn signer_row(
    role: &str,
    name: Option<&str>,
    license: Option<&str>,
    cid: &'static str,
    signature: Option<&str>,
    signed: bool,
) -> Row {
    let identity = Stack::new()
        .span(60)
        .child(Field::new(role, name))
        .child(Field::new("LICENSE / LICENCIA", license))
        .child(Checkbox::new("SIGNED / FIRMADO", signed));
    Row::new().keep_together().child(identity).child(
        ImageSlot::new(cid, signature)
            .alt(role)
            .placeholder(SIGNATURE_PLACEHOLDER)
            .height(64)
            .span(40),
    )
}

/// The only splittable section: a page break may fall between the two
/// signer rows, never inside one.
pub(crate) fn signatures(part: &Part) -> Section {
    Section::new("signatures")
        .banner("06. SIGNATURES / FIRMAS")
        .splittable()
        .child(signer_row(
            "TECHNICIAN / TÉCNICO",
            text(&part.technician_name),
            text(&part.technician_license),
            CID_TECH_SIGNATURE,
            text(&part.technician_signature),
            part.technician_signed(),
        ))
        .child(signer_row(
            "INSPECTOR / INSPECTOR",
            text(&part.inspector_name),
            text(&part.inspector_license),
            CID_INSPECTOR_SIGNATURE,
            text(&part.inspector_signature),
            part.inspector_signed(),
        ))
}

pub(crate) fn certification(policy: &'static TagPolicy) -> Section {
    Section::new("certification")
        .banner("CERTIFICATION / CERTIFICACIÓN")
        .child(Paragraph::new(policy.certification.en).lang("en"))
        .child(
            Paragraph::new(policy.certification.es)
                .lang("es")
                .style("margin:4px 0;font-size:10px;line-height:1.4;color:#475569;font-style:italic;"),
        )
}

/// Record id, generation time and branding footer line.
pub(crate) struct Footer {
    record_id: String,
    generated_at: String,
    text: String,
}

impl Footer {
    pub(crate) fn new(part: &Part, branding: &Branding, generated_at: DateTime<Utc>) -> Self {
        Self {
            record_id: part.id.clone(),
            generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
            text: branding.footer_text.clone(),
        }
    }
}

impl Component for Footer {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(
            r#"<div class="wca-footer" style="margin-top:10px;padding-top:6px;border-top:1px solid #0f172a;font-size:8px;color:#475569;page-break-inside:avoid;break-inside:avoid;">"#,
        );
        ctx.push(r#"<table role="presentation" style="width:100%;border-collapse:collapse;"><tr>"#);
        ctx.push(&format!(
            r#"<td style="text-align:left;">RECORD ID / ID DE REGISTRO: <span class="wca-footer__record" style="font-family:'Courier New',Courier,monospace;">{}</span></td>"#,
            escape(&self.record_id)
        ));
        ctx.push(&format!(
            r#"<td style="text-align:right;">GENERATED / GENERADO: <span class="wca-footer__generated">{}</span></td>"#,
            escape(&self.generated_at)
        ));
        ctx.push("</tr></table>");
        ctx.push(r#"<div style="text-align:center;margin-top:4px;font-weight:bold;">"#);
        ctx.text(&self.text);
        ctx.push("</div></div>");
    }
}
