//! Printable inventory report: a landscape A4 page per snapshot.

use super::{ReportSnapshot, ReportTable};
use crate::config::Branding;
use crate::document::print::{Orientation, page_shell};
use crate::part::TagColor;
use crate::render::{EmitContext, RenderMode, escape};

/// Timestamp format used on the report.
const ISSUED_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

/// Shown in place of rows for an empty report.
pub const NO_ITEMS: &str = "NO RECORDS FOUND / SIN REGISTROS";

const TH_STYLE: &str = "padding:4px;border:1px solid #0f172a;background-color:#0f172a;color:#ffffff;\
font-size:7px;font-weight:bold;text-transform:uppercase;text-align:left;";

const TD_STYLE: &str = "padding:3px 4px;border:1px solid #94a3b8;font-size:7px;vertical-align:top;";

fn header(ctx: &mut EmitContext, snapshot: &ReportSnapshot, branding: &Branding) {
    ctx.push(&format!(
        r#"<table class="wca-report__header" role="presentation" style="width:100%;border-collapse:collapse;border-bottom:3px solid {};margin-bottom:8px;"><tr>"#,
        escape(&branding.primary_color)
    ));
    ctx.push(r#"<td style="vertical-align:bottom;"><div style="font-size:16px;font-weight:900;letter-spacing:2px;text-transform:uppercase;">"#);
    ctx.text(&branding.company_name);
    ctx.push(r#"</div><div style="font-size:10px;font-weight:bold;">"#);
    ctx.text(&format!(
        "INVENTORY REPORT / REPORTE DE INVENTARIO | {}",
        snapshot.report_type.label()
    ));
    ctx.push("</div></td>");

    ctx.push(r#"<td style="vertical-align:bottom;text-align:right;font-size:8px;line-height:1.5;">"#);
    ctx.push("Report ID: <strong class=\"wca-report__id\" style=\"font-family:'Courier New',Courier,monospace;\">");
    ctx.text(&snapshot.report_id);
    ctx.push("</strong><br>Issued: ");
    ctx.text(&snapshot.generated_at.format(ISSUED_FORMAT).to_string());
    ctx.push("<br>Generated by: ");
    ctx.text(&snapshot.generated_by);
    ctx.push("<br>Confidentiality: Privileged</td></tr></table>");
}

fn status_strip(ctx: &mut EmitContext, snapshot: &ReportSnapshot) {
    ctx.push(r#"<table class="wca-report__summary" role="presentation" style="width:100%;border-collapse:collapse;margin-bottom:8px;"><tr>"#);
    ctx.push(r#"<td style="padding:4px 8px;border:1px solid #0f172a;font-size:9px;font-weight:900;">TOTAL UNITS: "#);
    ctx.text(&snapshot.summary.total.to_string());
    ctx.push("</td>");
    for tag in TagColor::ALL {
        let policy = tag.policy();
        let count = snapshot.summary.by_status.get(&tag).copied().unwrap_or(0);
        ctx.push(&format!(
            r#"<td data-status="{}" style="padding:4px 8px;border:1px solid #0f172a;font-size:8px;"><span style="display:inline-block;width:8px;height:8px;background-color:{};margin-right:4px;"></span>"#,
            tag.code(),
            policy.color_hex
        ));
        ctx.text(policy.status_label);
        ctx.push(&format!(": <strong>{}</strong>", count));
        if let Some(share) = snapshot.summary.percentage_label(tag) {
            ctx.push(&format!(r#" <span class="wca-report__share">({})</span>"#, share));
        }
        ctx.push("</td>");
    }
    ctx.push("</tr></table>");
}

fn table(ctx: &mut EmitContext, table: &ReportTable) {
    ctx.push(r#"<table class="wca-report__table" style="width:100%;border-collapse:collapse;">"#);
    ctx.push(r#"<thead style="display:table-header-group;"><tr>"#);
    for column in &table.columns {
        ctx.push(&format!(r#"<th data-column="{}" style="{}">"#, column.key, TH_STYLE));
        ctx.text(column.label);
        ctx.push("</th>");
    }
    ctx.push("</tr></thead><tbody>");
    if table.meta.empty {
        ctx.push(&format!(
            r#"<tr><td colspan="{}" class="wca-placeholder" style="{}text-align:center;font-weight:bold;color:#94a3b8;padding:16px;">"#,
            table.columns.len(),
            TD_STYLE
        ));
        ctx.text(NO_ITEMS);
        ctx.push("</td></tr>");
    }
    for row in &table.rows {
        ctx.push(r#"<tr style="page-break-inside:avoid;break-inside:avoid;">"#);
        for cell in row {
            ctx.push(&format!(r#"<td style="{}">"#, TD_STYLE));
            ctx.text(cell);
            ctx.push("</td>");
        }
        ctx.push("</tr>");
    }
    ctx.push("</tbody></table>");
}

/// Render the report body markup.
pub fn render_fragment(snapshot: &ReportSnapshot, branding: &Branding) -> String {
    let mut ctx = EmitContext::new(RenderMode::Print);
    ctx.push(r#"<div class="wca-report" style="font-family:Arial,Helvetica,sans-serif;color:#0f172a;">"#);
    header(&mut ctx, snapshot, branding);
    status_strip(&mut ctx, snapshot);
    table(&mut ctx, &ReportTable::from_snapshot(snapshot));
    ctx.push(r#"<div class="wca-footer" style="margin-top:8px;padding-top:4px;border-top:1px solid #0f172a;font-size:7px;text-align:center;">"#);
    ctx.text(&format!(
        "CERTIFIED RECORD | {}",
        snapshot.generated_at.format(ISSUED_FORMAT)
    ));
    ctx.push("<br>");
    ctx.text(&branding.footer_text);
    ctx.push("</div></div>");
    ctx.finish()
}

/// Render the report as a landscape A4 page.
pub fn render_page(snapshot: &ReportSnapshot, branding: &Branding) -> String {
    page_shell(
        &snapshot.report_id,
        Orientation::Landscape,
        &render_fragment(snapshot, branding),
    )
}
