//! # Traceability Timeline
//!
//! A vertical timeline of a part's movement history with summary figures,
//! under the same header and the same three-mode contract as the part
//! record.
//!
//! The caller owns the history and its order (newest first); events are
//! rendered exactly in the order given. Summary figures are recomputed on
//! every call.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use hangar_docs::part::{EventKind, HistoryEvent, PartIdentity};
//! use hangar_docs::render::RenderOptions;
//! use hangar_docs::timeline::{TimelineSummary, render_timeline};
//!
//! let history = vec![
//!     HistoryEvent::new(Utc.with_ymd_and_hms(2024, 3, 2, 9, 0, 0).unwrap(), EventKind::LocationChange)
//!         .moved("HANGAR 1", "STORES B"),
//!     HistoryEvent::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap(), EventKind::Creation)
//!         .to("HANGAR 1"),
//! ];
//!
//! let summary = TimelineSummary::compute(&history);
//! assert_eq!((summary.total_events, summary.move_count, summary.distinct_locations), (2, 1, 2));
//!
//! let html = render_timeline(&history, &PartIdentity::default(), &RenderOptions::web())?;
//! assert!(html.contains("STORES B"));
//! # Ok::<(), hangar_docs::DocsError>(())
//! ```

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

use crate::components::{Component, DocumentHeader, MetricBox, Row, Section};
use crate::document::{Assembler, DOC_STYLE, GENERATED_AT_FORMAT};
use crate::error::Result;
use crate::part::{EventKind, HistoryEvent, Part, PartIdentity};
use crate::render::{EmitContext, RenderOptions, escape};

/// Shown instead of an empty event list.
pub const NO_RECORDS: &str = "NO MOVEMENT RECORDS / SIN REGISTROS DE MOVIMIENTO";

const EVENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Figures derived from a history list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineSummary {
    pub total_events: usize,
    /// Events of kind [`EventKind::LocationChange`].
    pub move_count: usize,
    /// Distinct non-blank destination locations.
    pub distinct_locations: usize,
    pub earliest: Option<DateTime<Utc>>,
}

impl TimelineSummary {
    pub fn compute(history: &[HistoryEvent]) -> Self {
        let locations: BTreeSet<&str> = history
            .iter()
            .filter_map(|e| Part::text(&e.new_location))
            .collect();
        Self {
            total_events: history.len(),
            move_count: history
                .iter()
                .filter(|e| e.kind == EventKind::LocationChange)
                .count(),
            distinct_locations: locations.len(),
            earliest: history.iter().map(|e| e.timestamp).min(),
        }
    }
}

impl Component for TimelineSummary {
    fn emit(&self, ctx: &mut EmitContext) {
        let earliest = self.earliest.map(|t| t.format("%Y-%m-%d").to_string());
        let total = self.total_events.to_string();
        let moves = self.move_count.to_string();
        let locations = self.distinct_locations.to_string();
        Row::new()
            .child(MetricBox::new("TOTAL EVENTS / EVENTOS", Some(total.as_str())).key("total-events"))
            .child(MetricBox::new("MOVEMENTS / MOVIMIENTOS", Some(moves.as_str())).key("move-count"))
            .child(
                MetricBox::new("LOCATIONS / UBICACIONES", Some(locations.as_str()))
                    .key("distinct-locations"),
            )
            .child(
                MetricBox::new("FIRST RECORD / PRIMER REGISTRO", earliest.as_deref())
                    .key("earliest-date"),
            )
            .emit(ctx);
    }
}

/// One event block with its kind marker.
struct EventBlock(HistoryEvent);

impl Component for EventBlock {
    fn emit(&self, ctx: &mut EmitContext) {
        let event = &self.0;
        ctx.push(&format!(
            r#"<table class="wca-event" data-kind="{}" role="presentation" style="width:100%;border-collapse:collapse;"><tr>"#,
            event.kind.code()
        ));
        ctx.push(&format!(
            r#"<td class="wca-event__marker" style="width:6px;background-color:{};"></td>"#,
            event.kind.marker_color()
        ));
        ctx.push(r#"<td style="padding:6px 10px;border:1px solid #cbd5e1;border-left:none;vertical-align:top;">"#);

        ctx.push(r#"<div style="font-size:9px;font-weight:900;text-transform:uppercase;">"#);
        ctx.text(event.kind.label());
        ctx.push(r#"<span class="wca-event__time" style="float:right;font-family:'Courier New',Courier,monospace;font-weight:normal;">"#);
        ctx.text(&event.timestamp.format(EVENT_TIME_FORMAT).to_string());
        ctx.push("</span></div>");

        if let Some(description) = Part::text(&event.description) {
            ctx.push(r#"<div class="wca-event__description" style="font-size:10px;margin-top:3px;">"#);
            ctx.text(description);
            ctx.push("</div>");
        }

        let from = Part::text(&event.previous_location);
        let to = Part::text(&event.new_location);
        if from.is_some() || to.is_some() {
            ctx.push(r#"<div class="wca-event__route" style="font-size:9px;margin-top:3px;">"#);
            if let Some(from) = from {
                ctx.push("FROM / DESDE: <strong>");
                ctx.text(from);
                ctx.push("</strong> ");
            }
            if let Some(to) = to {
                ctx.push("TO / HACIA: <strong>");
                ctx.text(to);
                ctx.push("</strong>");
            }
            ctx.push("</div>");
        }

        if let Some(user) = Part::text(&event.user) {
            ctx.push(r#"<div class="wca-event__user" style="font-size:8px;color:#475569;margin-top:3px;">USER / USUARIO: "#);
            ctx.text(user);
            ctx.push("</div>");
        }
        ctx.push("</td></tr></table>");
    }
}

/// Placeholder block for an empty history.
struct NoRecords;

impl Component for NoRecords {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(
            r#"<div class="wca-placeholder wca-timeline__empty" style="padding:24px;border:1px dashed #94a3b8;text-align:center;font-size:10px;font-weight:bold;color:#94a3b8;">"#,
        );
        ctx.text(NO_RECORDS);
        ctx.push("</div>");
    }
}

impl Assembler {
    /// Render the traceability timeline for a part.
    pub fn timeline(
        &self,
        history: &[HistoryEvent],
        identity: &PartIdentity,
        options: &RenderOptions,
    ) -> Result<String> {
        let qr_src = self.qr_reference(&identity.id, options)?;
        let summary = TimelineSummary::compute(history);
        debug!(
            part = %identity.id,
            mode = %options.mode,
            events = summary.total_events,
            "rendering timeline"
        );

        let branding = self.branding();
        let mut header = DocumentHeader::new(
            &branding.company_name,
            "TRACEABILITY TIMELINE / LÍNEA DE TRAZABILIDAD",
        )
        .subtitle(format!(
            "P/N {} | S/N {}{}",
            Part::text(&identity.pn).unwrap_or(""),
            Part::text(&identity.sn).unwrap_or(""),
            Part::text(&identity.part_name)
                .map(|n| format!(" | {}", n))
                .unwrap_or_default()
        ))
        .accent(&branding.primary_color)
        .qr(qr_src);
        if let Some(tag) = identity.tag_color {
            header = header.tag(tag.policy());
        }

        let mut ctx = EmitContext::new(options.mode);
        ctx.push(&format!(
            r#"<div class="wca-doc wca-timeline" data-record="{}" style="{}">"#,
            escape(&identity.id),
            DOC_STYLE
        ));
        header.emit(&mut ctx);
        Section::new("summary")
            .banner("SUMMARY / RESUMEN")
            .child(summary)
            .emit(&mut ctx);

        // Splittable between events, never inside one
        let mut events = Section::new("events")
            .banner("MOVEMENT HISTORY / HISTORIAL DE MOVIMIENTOS")
            .splittable();
        if history.is_empty() {
            events = events.child(NoRecords);
        }
        for (index, event) in history.iter().enumerate() {
            events = events
                .child(Section::new(format!("event-{}", index + 1)).child(EventBlock(event.clone())));
        }
        events.emit(&mut ctx);

        ctx.push(&format!(
            r#"<div class="wca-footer" style="margin-top:10px;padding-top:6px;border-top:1px solid #0f172a;font-size:8px;color:#475569;text-align:center;">GENERATED / GENERADO: {} | {}</div>"#,
            escape(&options.generated_at.format(GENERATED_AT_FORMAT).to_string()),
            escape(&branding.footer_text)
        ));
        ctx.push("</div>");
        Ok(ctx.finish())
    }
}

/// Render the traceability timeline with the default branding.
pub fn render_timeline(
    history: &[HistoryEvent],
    identity: &PartIdentity,
    options: &RenderOptions,
) -> Result<String> {
    Assembler::default().timeline(history, identity, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::part::TagColor;
    use crate::render::RenderMode;
    use chrono::TimeZone;

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 8, 30, 0).unwrap()
    }

    fn history() -> Vec<HistoryEvent> {
        vec![
            HistoryEvent::new(at(5), EventKind::LocationChange)
                .moved("STORES B", "QUARANTINE")
                .by("J. Perez"),
            HistoryEvent::new(at(4), EventKind::StatusChange).description("Tag changed to RED"),
            HistoryEvent::new(at(3), EventKind::LocationChange).moved("HANGAR 1", "STORES B"),
            HistoryEvent::new(at(2), EventKind::LocationChange).moved("RECEIVING", "HANGAR 1"),
            HistoryEvent::new(at(1), EventKind::Creation).to("RECEIVING"),
        ]
    }

    fn identity() -> PartIdentity {
        PartIdentity {
            id: "t-1".into(),
            pn: Some("ABC-123".into()),
            sn: Some("SN001".into()),
            part_name: None,
            tag_color: Some(TagColor::Red),
        }
    }

    #[test]
    fn test_summary() {
        let summary = TimelineSummary::compute(&history());
        assert_eq!(summary.total_events, 5);
        assert_eq!(summary.move_count, 3);
        // RECEIVING, HANGAR 1, STORES B, QUARANTINE
        assert_eq!(summary.distinct_locations, 4);
        assert_eq!(summary.earliest, Some(at(1)));
    }

    #[test]
    fn test_summary_ignores_blank_locations() {
        let events = vec![
            HistoryEvent::new(at(2), EventKind::DataUpdate).to("  "),
            HistoryEvent::new(at(1), EventKind::LocationChange).to("BIN 4"),
            HistoryEvent::new(at(3), EventKind::LocationChange).to("BIN 4"),
        ];
        let summary = TimelineSummary::compute(&events);
        assert_eq!(summary.distinct_locations, 1);
        assert_eq!(summary.move_count, 2);
        assert_eq!(summary.earliest, Some(at(1)));
    }

    #[test]
    fn test_summary_empty() {
        assert_eq!(TimelineSummary::compute(&[]), TimelineSummary::default());
    }

    #[test]
    fn test_render_summary_values() {
        let html = render_timeline(&history(), &identity(), &RenderOptions::print()).unwrap();
        assert!(html.contains(r#"data-metric="total-events""#));
        let metric = |key: &str| {
            let start = html.find(&format!(r#"data-metric="{}""#, key)).unwrap();
            let value = start + html[start..].find("wca-metric__value").unwrap();
            let open = value + html[value..].find('>').unwrap() + 1;
            let close = open + html[open..].find('<').unwrap();
            html[open..close].to_string()
        };
        assert_eq!(metric("total-events"), "5");
        assert_eq!(metric("move-count"), "3");
        assert_eq!(metric("distinct-locations"), "4");
        assert_eq!(metric("earliest-date"), "2024-03-01");
    }

    #[test]
    fn test_events_in_given_order() {
        let html = render_timeline(&history(), &identity(), &RenderOptions::web()).unwrap();
        let quarantine = html.find("QUARANTINE").unwrap();
        let receiving = html.rfind("RECEIVING").unwrap();
        assert!(quarantine < receiving);
        assert_eq!(html.matches(r#"class="wca-event""#).count(), 5);
        assert!(html.contains("J. Perez"));
        assert!(!html.contains(NO_RECORDS));
    }

    #[test]
    fn test_each_event_is_atomic() {
        let html = render_timeline(&history(), &identity(), &RenderOptions::print()).unwrap();
        for n in 1..=5 {
            let start = html.find(&format!(r#"data-section="event-{}""#, n)).unwrap();
            let end = start + html[start..].find('>').unwrap();
            assert!(html[start..end].contains("break-inside:avoid"));
        }
    }

    #[test]
    fn test_empty_history_placeholder() {
        for mode in RenderMode::ALL {
            let html = render_timeline(&[], &identity(), &RenderOptions::new(mode)).unwrap();
            assert!(html.contains(NO_RECORDS));
            assert!(!html.contains(r#"class="wca-event""#));
        }
    }

    #[test]
    fn test_header_matches_record_header() {
        let html = render_timeline(&[], &identity(), &RenderOptions::web()).unwrap();
        assert!(html.contains("World Class Aviation"));
        assert!(html.contains("REJECTED MATERIAL / MATERIAL RECHAZADO"));
        assert!(html.contains("P/N ABC-123 | S/N SN001"));
    }

    #[test]
    fn test_timeline_identical_across_modes() {
        let options = RenderOptions::web().with_qr("https://hangar.example");
        let web = render_timeline(&history(), &identity(), &options).unwrap();
        for mode in [RenderMode::Print, RenderMode::Email] {
            let other = render_timeline(&history(), &identity(), &options.with_mode(mode)).unwrap();
            assert_eq!(web, other);
        }
    }
}
