//! Web adapter: the fragment mounted into the browser's part-detail view,
//! and a standalone preview page around it.

use super::Assembler;
use crate::error::Result;
use crate::part::Part;
use crate::render::{RenderMode, RenderOptions, escape};

/// Render the part record fragment for in-page display.
pub fn render_part(assembler: &Assembler, part: &Part, options: &RenderOptions) -> Result<String> {
    assembler.assemble(part, &options.with_mode(RenderMode::Web))
}

/// Wrap a fragment in a minimal HTML page for browser preview.
pub fn preview_page(title: &str, fragment: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#,
            "<title>{}</title></head>",
            r#"<body style="margin:0;padding:24px 0;background-color:#e2e8f0;">"#,
            "{}</body></html>\n"
        ),
        escape(title),
        fragment
    )
}

/// Render the part record as a complete preview page.
pub fn render_page(assembler: &Assembler, part: &Part, options: &RenderOptions) -> Result<String> {
    let fragment = render_part(assembler, part, options)?;
    Ok(preview_page(&page_title(assembler, part), &fragment))
}

pub(crate) fn page_title(assembler: &Assembler, part: &Part) -> String {
    match Part::text(&part.pn) {
        Some(pn) => format!("{} | {}", assembler.branding().company_name, pn),
        None => assembler.branding().company_name.clone(),
    }
}
