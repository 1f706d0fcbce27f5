//! Print adapter: a full HTML page with a fixed A4 page box, handed to the
//! DOM-to-PDF rasterizer.
//!
//! Pagination relies on the `break-inside:avoid` hints emitted by sections
//! and signer rows; the page CSS only fixes the box and margins.

use super::Assembler;
use crate::error::Result;
use crate::part::Part;
use crate::render::{RenderMode, RenderOptions, escape};

/// Page orientation of the A4 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

impl Orientation {
    fn page_rule(self) -> &'static str {
        match self {
            Self::Portrait => "@page { size: A4 portrait; margin: 12mm; }",
            Self::Landscape => "@page { size: A4 landscape; margin: 10mm; }",
        }
    }
}

/// Shared print stylesheet. Colors must survive "print backgrounds: off".
pub const PRINT_CSS: &str = concat!(
    "html, body { margin: 0; padding: 0; background: #ffffff; }\n",
    "* { -webkit-print-color-adjust: exact; print-color-adjust: exact; }\n",
    "table { page-break-inside: auto; }\n",
    "tr { page-break-inside: avoid; break-inside: avoid; }\n",
    "img { max-width: 100%; }\n",
);

/// Wrap `body` in a printable page.
pub fn page_shell(title: &str, orientation: Orientation, body: &str) -> String {
    format!(
        concat!(
            "<!DOCTYPE html>\n",
            r#"<html lang="en"><head><meta charset="utf-8">"#,
            "<title>{title}</title>",
            "<style>\n{page}\n{css}</style></head>",
            r#"<body class="wca-print">"#,
            "{body}</body></html>\n"
        ),
        title = escape(title),
        page = orientation.page_rule(),
        css = PRINT_CSS,
        body = body
    )
}

/// Render the part record as a printable A4 page.
pub fn render_part(assembler: &Assembler, part: &Part, options: &RenderOptions) -> Result<String> {
    let fragment = assembler.assemble(part, &options.with_mode(RenderMode::Print))?;
    Ok(page_shell(
        &super::web::page_title(assembler, part),
        Orientation::Portrait,
        &fragment,
    ))
}
