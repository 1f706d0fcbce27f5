//! # Field Components
//!
//! Labeled value cells, metric boxes, checkboxes and section banners.

use super::Component;
use crate::render::{EmitContext, escape, escape_multiline};

/// Placeholder shown in a metric box with no value.
///
/// A value that was deliberately left blank and one that was never entered
/// render the same.
pub const METRIC_PLACEHOLDER: &str = "—";

const LABEL_STYLE: &str = "padding:4px 6px;border:1px solid #0f172a;background-color:#f1f5f9;\
font-size:8px;font-weight:bold;text-transform:uppercase;color:#0f172a;vertical-align:top;";

const VALUE_STYLE: &str = "padding:4px 6px;border:1px solid #0f172a;font-size:11px;\
color:#0f172a;vertical-align:top;height:14px;";

const ATTENTION_STYLE: &str = "background-color:#fef3c7;font-weight:900;color:#92400e;";

/// A labeled value cell.
///
/// ```
/// use hangar_docs::components::{ComponentExt, Field};
/// use hangar_docs::render::RenderMode;
///
/// let html = Field::new("P/N", Some("ABC-123")).span(50).render(RenderMode::Web);
/// assert!(html.contains("ABC-123"));
///
/// // Absent values render an empty cell, never "null"
/// let blank = Field::new("S/N", None).render(RenderMode::Web);
/// assert!(!blank.contains("null"));
/// ```
pub struct Field {
    label: String,
    value: Option<String>,
    span: u8,
    label_width: u8,
    attention: bool,
    multiline: bool,
}

impl Field {
    /// Create a full-width field with a 35% label column.
    pub fn new(label: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            span: 100,
            label_width: 35,
            attention: false,
            multiline: false,
        }
    }

    /// Share of the enclosing row, in percent.
    pub fn span(mut self, percent: u8) -> Self {
        self.span = percent.clamp(1, 100);
        self
    }

    /// Width of the label column within the field, in percent.
    pub fn label_width(mut self, percent: u8) -> Self {
        self.label_width = percent.clamp(1, 99);
        self
    }

    /// Highlight the value.
    pub fn attention(mut self) -> Self {
        self.attention = true;
        self
    }

    /// Set the attention style conditionally.
    pub fn attention_if(mut self, attention: bool) -> Self {
        self.attention = attention;
        self
    }

    /// Keep line breaks in the value.
    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }
}

impl Component for Field {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(
            r#"<table class="wca-field" role="presentation" style="width:100%;border-collapse:collapse;table-layout:fixed;"><tr>"#,
        );
        ctx.push(&format!(
            r#"<td class="wca-field__label" style="width:{}%;{}">"#,
            self.label_width, LABEL_STYLE
        ));
        ctx.text(&self.label);
        ctx.push("</td>");

        if self.attention {
            ctx.push(&format!(
                r#"<td class="wca-field__value wca-field__value--attention" style="{}{}">"#,
                VALUE_STYLE, ATTENTION_STYLE
            ));
        } else {
            ctx.push(&format!(
                r#"<td class="wca-field__value" style="{}">"#,
                VALUE_STYLE
            ));
        }
        if let Some(value) = &self.value {
            if self.multiline {
                ctx.push(&escape_multiline(value));
            } else {
                ctx.text(value);
            }
        }
        ctx.push("</td></tr></table>");
    }

    fn row_share(&self) -> Option<u8> {
        Some(self.span)
    }
}

/// A boxed metric with a centered monospace value.
pub struct MetricBox {
    label: String,
    value: Option<String>,
    key: Option<String>,
}

impl MetricBox {
    pub fn new(label: impl Into<String>, value: Option<&str>) -> Self {
        Self {
            label: label.into(),
            value: value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            key: None,
        }
    }

    /// Machine-readable key written as `data-metric`.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }
}

impl Component for MetricBox {
    fn emit(&self, ctx: &mut EmitContext) {
        match &self.key {
            Some(key) => ctx.push(&format!(
                r#"<div class="wca-metric" data-metric="{}" style="border:1px solid #0f172a;text-align:center;">"#,
                escape(key)
            )),
            None => ctx.push(
                r#"<div class="wca-metric" style="border:1px solid #0f172a;text-align:center;">"#,
            ),
        }
        ctx.push(
            r#"<div class="wca-metric__label" style="padding:3px;background-color:#f1f5f9;border-bottom:1px solid #0f172a;font-size:8px;font-weight:bold;text-transform:uppercase;">"#,
        );
        ctx.text(&self.label);
        ctx.push("</div>");
        ctx.push(
            r#"<div class="wca-metric__value" style="padding:6px 3px;font-family:'Courier New',Courier,monospace;font-size:13px;font-weight:bold;">"#,
        );
        ctx.text(self.value.as_deref().unwrap_or(METRIC_PLACEHOLDER));
        ctx.push("</div></div>");
    }
}

/// A binary checkbox with a label.
pub struct Checkbox {
    label: String,
    checked: bool,
}

impl Checkbox {
    pub fn new(label: impl Into<String>, checked: bool) -> Self {
        Self {
            label: label.into(),
            checked,
        }
    }
}

impl Component for Checkbox {
    fn emit(&self, ctx: &mut EmitContext) {
        let (class, mark) = if self.checked {
            ("wca-checkbox wca-checkbox--checked", "X")
        } else {
            ("wca-checkbox", "&nbsp;")
        };
        ctx.push(&format!(
            r#"<span class="{}" style="display:inline-block;margin-right:10px;font-size:9px;font-weight:bold;white-space:nowrap;">"#,
            class
        ));
        ctx.push(
            r#"<span class="wca-checkbox__box" style="display:inline-block;width:11px;height:11px;line-height:11px;border:1px solid #0f172a;text-align:center;font-size:9px;margin-right:4px;vertical-align:middle;">"#,
        );
        ctx.push(mark);
        ctx.push("</span>");
        ctx.text(&self.label);
        ctx.push("</span>");
    }
}

/// A dark section title bar.
pub struct SectionBanner {
    title: String,
}

impl SectionBanner {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Component for SectionBanner {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(
            r#"<div class="wca-banner" style="background-color:#0f172a;color:#ffffff;padding:4px 8px;font-size:10px;font-weight:900;letter-spacing:1px;text-transform:uppercase;">"#,
        );
        ctx.text(&self.title);
        ctx.push("</div>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::render::RenderMode;

    #[test]
    fn test_field_renders_label_and_value() {
        let html = Field::new("P/N", Some("ABC-123")).render(RenderMode::Web);
        assert!(html.contains(">P/N</td>"));
        assert!(html.contains(">ABC-123</td>"));
        assert!(html.contains("width:35%"));
    }

    #[test]
    fn test_field_absent_value_is_empty_cell() {
        let html = Field::new("S/N", None).render(RenderMode::Print);
        assert!(html.contains(r#"class="wca-field__value""#));
        assert!(html.ends_with("\"></td></tr></table>"));
        assert!(!html.contains("undefined"));
        assert!(!html.contains("null"));
    }

    #[test]
    fn test_field_escapes_value() {
        let html = Field::new("NOTE", Some("<script>")).render(RenderMode::Web);
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_field_attention_style() {
        let html = Field::new("SHELF LIFE", Some("2025-12-31"))
            .attention()
            .render(RenderMode::Web);
        assert!(html.contains("wca-field__value--attention"));
    }

    #[test]
    fn test_field_multiline() {
        let html = Field::new("REPORT", Some("line 1\nline 2"))
            .multiline(true)
            .render(RenderMode::Web);
        assert!(html.contains("line 1<br>line 2"));
    }

    #[test]
    fn test_field_span_and_label_width() {
        let field = Field::new("A", None).span(50).label_width(40);
        assert_eq!(field.row_share(), Some(50));
        assert!(field.render(RenderMode::Web).contains("width:40%"));
    }

    #[test]
    fn test_metric_box_placeholder() {
        let html = MetricBox::new("TSO", None).render(RenderMode::Web);
        assert!(html.contains(METRIC_PLACEHOLDER));
        let blank = MetricBox::new("TSO", Some("  ")).render(RenderMode::Web);
        assert_eq!(html, blank);
    }

    #[test]
    fn test_metric_box_key() {
        let html = MetricBox::new("TSO", Some("300")).key("tso").render(RenderMode::Web);
        assert!(html.contains(r#"data-metric="tso""#));
        assert!(html.contains(">300</div>"));
    }

    #[test]
    fn test_checkbox_states() {
        let on = Checkbox::new("SIGNED", true).render(RenderMode::Web);
        let off = Checkbox::new("SIGNED", false).render(RenderMode::Web);
        assert!(on.contains("wca-checkbox--checked"));
        assert!(on.contains(">X</span>"));
        assert!(!off.contains("wca-checkbox--checked"));
    }

    #[test]
    fn test_section_banner() {
        let html = SectionBanner::new("01. ADMIN & RECORD").render(RenderMode::Web);
        assert!(html.contains("01. ADMIN &amp; RECORD"));
    }
}
