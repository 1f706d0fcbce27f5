//! # Document Header
//!
//! Branding bar shared by the part record and the traceability timeline.

use super::{Component, QrImage};
use crate::policy::TagPolicy;
use crate::render::{EmitContext, escape};

/// Header with company branding, an optional tag-color banner and an
/// optional QR code.
pub struct DocumentHeader {
    company: String,
    title: String,
    subtitle: Option<String>,
    accent_hex: String,
    policy: Option<&'static TagPolicy>,
    qr_src: Option<String>,
}

impl DocumentHeader {
    pub fn new(company: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            title: title.into(),
            subtitle: None,
            accent_hex: "#b8860b".to_string(),
            policy: None,
            qr_src: None,
        }
    }

    /// Line under the title, typically the part identity.
    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Brand color of the bottom rule.
    pub fn accent(mut self, hex: impl Into<String>) -> Self {
        self.accent_hex = hex.into();
        self
    }

    /// Show the tag banner for `policy`.
    pub fn tag(mut self, policy: &'static TagPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    /// Show a QR image with the given source.
    pub fn qr(mut self, src: Option<String>) -> Self {
        self.qr_src = src;
        self
    }
}

impl Component for DocumentHeader {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(&format!(
            r#"<table class="wca-header" role="presentation" style="width:100%;border-collapse:collapse;border-bottom:3px solid {};margin-bottom:8px;page-break-inside:avoid;break-inside:avoid;"><tr>"#,
            escape(&self.accent_hex)
        ));
        ctx.push(r#"<td style="vertical-align:top;padding:4px 0;">"#);
        ctx.push(
            r#"<div class="wca-header__company" style="font-size:18px;font-weight:900;letter-spacing:2px;text-transform:uppercase;color:#0f172a;">"#,
        );
        ctx.text(&self.company);
        ctx.push("</div>");
        ctx.push(
            r#"<div class="wca-header__title" style="font-size:10px;font-weight:bold;color:#475569;">"#,
        );
        ctx.text(&self.title);
        ctx.push("</div>");
        if let Some(subtitle) = &self.subtitle {
            ctx.push(
                r#"<div class="wca-header__subtitle" style="font-size:9px;font-family:'Courier New',Courier,monospace;color:#0f172a;">"#,
            );
            ctx.text(subtitle);
            ctx.push("</div>");
        }
        if let Some(policy) = self.policy {
            ctx.push(&format!(
                r#"<div class="wca-tag" data-tag="{}" style="display:inline-block;margin-top:6px;padding:4px 10px;background-color:{};color:{};font-size:11px;font-weight:900;text-transform:uppercase;">"#,
                policy.tag.code(),
                policy.color_hex,
                policy.text_hex
            ));
            ctx.text(&policy.title.joined());
            ctx.push("</div>");
        }
        ctx.push("</td>");
        if let Some(src) = &self.qr_src {
            ctx.push(r#"<td style="width:96px;vertical-align:top;">"#);
            QrImage::new(src.as_str()).emit(ctx);
            ctx.push("</td>");
        }
        ctx.push("</tr></table>");
    }
}
