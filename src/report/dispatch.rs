//! Report dispatch email: summary, applied filters, status breakdown and an
//! acknowledge link. The report itself travels as an attachment.

use super::{ReportSnapshot, filter_value};
use crate::config::Branding;
use crate::document::email::{EmailBody, mail_shell};
use crate::error::{DocsError, Result};
use crate::part::TagColor;
use crate::qr::{encode_component, normalize_base_url};
use crate::render::{EmitContext, RenderMode, escape};

/// `{base_url}/api/reports/acknowledge/{token}`.
pub fn acknowledge_url(base_url: &str, token: &str) -> Result<String> {
    let base = normalize_base_url(base_url)?;
    let token = token.trim();
    if token.is_empty() {
        return Err(DocsError::InvalidRecord(
            "acknowledge token is required".to_string(),
        ));
    }
    Ok(format!(
        "{}/api/reports/acknowledge/{}",
        base,
        encode_component(token)
    ))
}

fn info_row(ctx: &mut EmitContext, label: &str, value: &str) {
    ctx.push(r#"<tr><td style="padding:8px 16px;background-color:#f8fafc;border-bottom:1px solid #e2e8f0;width:40%;font-size:10px;color:#64748b;text-transform:uppercase;">"#);
    ctx.text(label);
    ctx.push(r#"</td><td style="padding:8px 16px;border-bottom:1px solid #e2e8f0;font-size:13px;font-weight:900;color:#0f172a;">"#);
    ctx.text(value);
    ctx.push("</td></tr>");
}

/// Render the dispatch email for `snapshot`.
pub fn render_dispatch(
    snapshot: &ReportSnapshot,
    branding: &Branding,
    base_url: &str,
    token: &str,
) -> Result<EmailBody> {
    let approval_url = acknowledge_url(base_url, token)?;
    let mut ctx = EmitContext::new(RenderMode::Email);

    ctx.push(r#"<table role="presentation" cellpadding="0" cellspacing="0" style="width:100%;max-width:600px;margin:0 auto;background-color:#ffffff;font-family:Arial,Helvetica,sans-serif;">"#);

    // Branded header
    ctx.push(&format!(
        r#"<tr><td style="background-color:{};padding:24px 32px;">"#,
        escape(&branding.primary_color)
    ));
    ctx.push(r#"<div style="color:#ffffff;font-size:14px;font-weight:900;text-transform:uppercase;letter-spacing:2px;">"#);
    ctx.text(&branding.company_name);
    ctx.push(r#"</div><div style="color:#f8fafc;font-size:11px;text-transform:uppercase;">Report Dispatch - Approval Required</div></td></tr>"#);

    // Report id and issue time
    ctx.push(r#"<tr><td style="padding:24px 32px;border-bottom:1px solid #e2e8f0;">"#);
    ctx.push(r#"<div style="font-size:10px;color:#94a3b8;text-transform:uppercase;">Report ID</div>"#);
    ctx.push(r#"<div class="wca-report__id" style="font-size:16px;font-weight:900;font-family:'Courier New',Courier,monospace;">"#);
    ctx.text(&snapshot.report_id);
    ctx.push(r#"</div><div style="font-size:10px;color:#94a3b8;text-transform:uppercase;margin-top:8px;">Generated</div><div style="font-size:12px;font-weight:bold;">"#);
    ctx.text(&snapshot.generated_at.format("%Y-%m-%d %H:%M UTC").to_string());
    ctx.push("</div></td></tr>");

    // Summary
    ctx.push(r#"<tr><td style="padding:24px 32px;"><table role="presentation" cellpadding="0" cellspacing="0" style="width:100%;border:2px solid #0f172a;">"#);
    ctx.push(r#"<tr><td colspan="2" style="background-color:#0f172a;padding:12px 16px;color:#ffffff;font-size:11px;font-weight:900;text-transform:uppercase;">Report Summary / Resumen del Reporte</td></tr>"#);
    info_row(&mut ctx, "Report Type / Tipo", snapshot.report_type.label());
    info_row(&mut ctx, "Total Units / Unidades", &snapshot.summary.total.to_string());
    info_row(&mut ctx, "Generated By / Generado por", &snapshot.generated_by);
    ctx.push("</table>");

    if !snapshot.filters_applied.is_empty() {
        ctx.push(r#"<table class="wca-filters" role="presentation" cellpadding="0" cellspacing="0" style="width:100%;margin-top:12px;">"#);
        ctx.push(r#"<tr><td colspan="2" style="font-size:10px;color:#94a3b8;text-transform:uppercase;padding-bottom:4px;">Applied Filters</td></tr>"#);
        for (key, value) in &snapshot.filters_applied {
            ctx.push(r#"<tr><td style="padding:4px 8px;font-size:11px;color:#64748b;">"#);
            ctx.text(key);
            ctx.push(r#"</td><td style="padding:4px 8px;font-size:11px;color:#1e293b;font-weight:bold;">"#);
            ctx.text(&filter_value(value));
            ctx.push("</td></tr>");
        }
        ctx.push("</table>");
    }

    // Status breakdown
    ctx.push(r#"<table class="wca-status" role="presentation" cellpadding="0" cellspacing="0" style="width:100%;margin-top:16px;"><tr>"#);
    for tag in TagColor::ALL {
        let policy = tag.policy();
        let count = snapshot.summary.by_status.get(&tag).copied().unwrap_or(0);
        ctx.push(&format!(
            r#"<td data-status="{}" style="padding:8px;text-align:center;"><div style="width:12px;height:12px;background-color:{};margin:0 auto 4px auto;"></div><div style="font-size:18px;font-weight:900;color:#0f172a;">{}</div><div style="font-size:9px;color:#94a3b8;text-transform:uppercase;">"#,
            tag.code(),
            policy.color_hex,
            count
        ));
        ctx.text(policy.status_label);
        ctx.push("</div>");
        if let Some(share) = snapshot.summary.percentage_label(tag) {
            ctx.push(&format!(
                r#"<div class="wca-status__share" style="font-size:10px;color:#475569;">{}</div>"#,
                share
            ));
        }
        ctx.push("</td>");
    }
    ctx.push("</tr></table></td></tr>");

    // Acknowledge button
    ctx.push(&format!(
        r#"<tr><td style="padding:8px 32px 32px 32px;text-align:center;"><a class="wca-ack" href="{}" style="display:inline-block;background-color:#0f172a;color:#ffffff;padding:14px 28px;font-size:12px;font-weight:900;text-transform:uppercase;letter-spacing:1px;text-decoration:none;">Acknowledge &amp; Sign Receipt</a></td></tr>"#,
        escape(&approval_url)
    ));

    ctx.push(r#"<tr><td style="padding:16px 32px;border-top:1px solid #e2e8f0;font-size:9px;color:#64748b;text-align:center;">"#);
    ctx.text(&branding.footer_text);
    ctx.push("</td></tr></table>");

    let subject = format!(
        "{} | {} | {}",
        branding.company_name,
        snapshot.report_type.label(),
        snapshot.report_id
    );
    let (fragment, inline_images) = ctx.into_parts();
    Ok(EmailBody {
        html: mail_shell(&subject, &fragment),
        subject,
        inline_images,
    })
}
