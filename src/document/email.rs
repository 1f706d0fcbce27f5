//! Email adapter.
//!
//! Images are referenced as `cid:<id>`; the mail transport attaches each
//! [`InlineImage`] under its content id. The QR image, when present, is a
//! plain reference and is not attached.

use serde::{Deserialize, Serialize};

use super::Assembler;
use crate::error::Result;
use crate::part::Part;
use crate::render::{InlineImage, RenderMode, RenderOptions, escape};

/// A ready-to-send HTML mail body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailBody {
    pub subject: String,
    pub html: String,
    /// Exactly the images the markup references by content id.
    pub inline_images: Vec<InlineImage>,
}

/// Wrap a fragment in a mail-client-safe outer table.
pub fn mail_shell(title: &str, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html><head><meta charset="utf-8"><title>{}</title></head>"#,
            r#"<body style="margin:0;padding:0;background-color:#f8fafc;">"#,
            r#"<table role="presentation" width="100%" cellpadding="0" cellspacing="0" style="background-color:#f8fafc;">"#,
            r#"<tr><td align="center" style="padding:20px 0;">"#,
            "{}",
            "</td></tr></table></body></html>\n"
        ),
        escape(title),
        body
    )
}

/// Subject line for a part record.
pub fn subject(assembler: &Assembler, part: &Part) -> String {
    format!(
        "{} | Technical Record | P/N {} | S/N {} | {}",
        assembler.branding().company_name,
        Part::text(&part.pn).unwrap_or("N/A"),
        Part::text(&part.sn).unwrap_or("N/A"),
        part.tag_color.policy().status_label
    )
}

/// Render the part record as an email body with its inline images.
pub fn render_part(assembler: &Assembler, part: &Part, options: &RenderOptions) -> Result<EmailBody> {
    let ctx = assembler.assemble_context(part, &options.with_mode(RenderMode::Email))?;
    let (fragment, inline_images) = ctx.into_parts();
    let subject = subject(assembler, part);
    Ok(EmailBody {
        html: mail_shell(&subject, &fragment),
        subject,
        inline_images,
    })
}
