//! # Layout Components
//!
//! Rows, vertical stacks and page-break-aware sections.
//!
//! Layout uses presentation tables rather than flexbox: mail clients and the
//! PDF rasterizer both handle tables predictably.

use super::Component;
use crate::render::{EmitContext, escape, escape_multiline};

/// Keeps a block on one page when rasterized.
const KEEP_TOGETHER: &str = "page-break-inside:avoid;break-inside:avoid;";

/// Horizontal arrangement of cells.
///
/// Children with a fixed [`row_share`](Component::row_share) get that width;
/// the remainder is split evenly between the others.
pub struct Row {
    children: Vec<Box<dyn Component>>,
    keep_together: bool,
}

impl Default for Row {
    fn default() -> Self {
        Self::new()
    }
}

impl Row {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            keep_together: false,
        }
    }

    /// Add a child cell.
    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Never split this row across a page boundary.
    pub fn keep_together(mut self) -> Self {
        self.keep_together = true;
        self
    }

    /// Resolve each child's width in percent.
    fn widths(&self) -> Vec<u32> {
        let fixed: u32 = self
            .children
            .iter()
            .filter_map(|c| c.row_share())
            .map(u32::from)
            .sum();
        let flexible = self
            .children
            .iter()
            .filter(|c| c.row_share().is_none())
            .count() as u32;
        let share = if flexible > 0 {
            100u32.saturating_sub(fixed) / flexible
        } else {
            0
        };
        self.children
            .iter()
            .map(|c| c.row_share().map(u32::from).unwrap_or(share))
            .collect()
    }
}

impl Component for Row {
    fn emit(&self, ctx: &mut EmitContext) {
        let keep = if self.keep_together { KEEP_TOGETHER } else { "" };
        ctx.push(&format!(
            r#"<table class="wca-row" role="presentation" style="width:100%;border-collapse:collapse;table-layout:fixed;margin:0;{}"><tr>"#,
            keep
        ));
        for (child, width) in self.children.iter().zip(self.widths()) {
            ctx.push(&format!(
                r#"<td class="wca-cell" style="width:{}%;padding:0;vertical-align:top;">"#,
                width
            ));
            child.emit(ctx);
            ctx.push("</td>");
        }
        ctx.push("</tr></table>");
    }
}

/// Vertical list of components, usable as a row cell.
pub struct Stack {
    children: Vec<Box<dyn Component>>,
    span: Option<u8>,
}

impl Default for Stack {
    fn default() -> Self {
        Self::new()
    }
}

impl Stack {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            span: None,
        }
    }

    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Share of the enclosing row, in percent.
    pub fn span(mut self, percent: u8) -> Self {
        self.span = Some(percent.clamp(1, 100));
        self
    }
}

impl Component for Stack {
    fn emit(&self, ctx: &mut EmitContext) {
        for child in &self.children {
            child.emit(ctx);
        }
    }

    fn row_share(&self) -> Option<u8> {
        self.span
    }
}

/// A numbered document section.
///
/// Sections are atomic by default: the rasterizer keeps them on one page.
/// A splittable section may break between its children, which should then
/// be rows marked [`Row::keep_together`].
pub struct Section {
    key: String,
    banner: Option<String>,
    children: Vec<Box<dyn Component>>,
    splittable: bool,
}

impl Section {
    /// Create a section identified by `key` (written as `data-section`).
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            banner: None,
            children: Vec::new(),
            splittable: false,
        }
    }

    /// Title bar above the content.
    pub fn banner(mut self, title: impl Into<String>) -> Self {
        self.banner = Some(title.into());
        self
    }

    pub fn child<C: Component + 'static>(mut self, component: C) -> Self {
        self.children.push(Box::new(component));
        self
    }

    /// Allow page breaks between children.
    pub fn splittable(mut self) -> Self {
        self.splittable = true;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn is_splittable(&self) -> bool {
        self.splittable
    }
}

impl Component for Section {
    fn emit(&self, ctx: &mut EmitContext) {
        let keep = if self.splittable { "" } else { KEEP_TOGETHER };
        ctx.push(&format!(
            r#"<section class="wca-section" data-section="{}" style="margin:0 0 8px 0;{}">"#,
            escape(&self.key),
            keep
        ));
        if let Some(title) = &self.banner {
            super::SectionBanner::new(title.as_str()).emit(ctx);
        }
        for child in &self.children {
            child.emit(ctx);
        }
        ctx.push("</section>");
    }
}

/// A block of free text.
pub struct Paragraph {
    text: String,
    lang: Option<&'static str>,
    style: &'static str,
}

impl Paragraph {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            lang: None,
            style: "margin:4px 0;font-size:10px;line-height:1.4;color:#0f172a;",
        }
    }

    /// Language of the text (`lang` attribute).
    pub fn lang(mut self, lang: &'static str) -> Self {
        self.lang = Some(lang);
        self
    }

    /// Replace the default inline style.
    pub fn style(mut self, style: &'static str) -> Self {
        self.style = style;
        self
    }
}

impl Component for Paragraph {
    fn emit(&self, ctx: &mut EmitContext) {
        match self.lang {
            Some(lang) => ctx.push(&format!(
                r#"<p lang="{}" style="{}">"#,
                lang, self.style
            )),
            None => ctx.push(&format!(r#"<p style="{}">"#, self.style)),
        }
        ctx.push(&escape_multiline(&self.text));
        ctx.push("</p>");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{ComponentExt, Field, MetricBox};
    use crate::render::RenderMode;

    #[test]
    fn test_row_width_distribution() {
        let row = Row::new()
            .child(Field::new("A", None).span(50))
            .child(MetricBox::new("B", None))
            .child(MetricBox::new("C", None));
        assert_eq!(row.widths(), vec![50, 25, 25]);
    }

    #[test]
    fn test_row_even_split() {
        let row = Row::new()
            .child(MetricBox::new("A", None))
            .child(MetricBox::new("B", None))
            .child(MetricBox::new("C", None));
        assert_eq!(row.widths(), vec![33, 33, 33]);
    }

    #[test]
    fn test_row_keep_together() {
        let html = Row::new().keep_together().render(RenderMode::Print);
        assert!(html.contains("break-inside:avoid"));
        let loose = Row::new().render(RenderMode::Print);
        assert!(!loose.contains("break-inside:avoid"));
    }

    #[test]
    fn test_section_is_atomic_by_default() {
        let html = Section::new("admin").banner("01. ADMIN").render(RenderMode::Print);
        assert!(html.starts_with(r#"<section class="wca-section" data-section="admin""#));
        assert!(html.contains("break-inside:avoid"));
        assert!(html.contains("01. ADMIN"));
    }

    #[test]
    fn test_splittable_section() {
        let section = Section::new("signatures").splittable();
        assert!(section.is_splittable());
        let html = section.render(RenderMode::Print);
        assert!(!html.contains("break-inside:avoid"));
    }

    #[test]
    fn test_stack_share() {
        let stack = Stack::new().span(70).child(Field::new("A", None));
        assert_eq!(stack.row_share(), Some(70));
    }

    #[test]
    fn test_paragraph_lang() {
        let html = Paragraph::new("Hola").lang("es").render(RenderMode::Web);
        assert!(html.starts_with(r#"<p lang="es""#));
        assert!(html.contains("Hola</p>"));
    }
}
