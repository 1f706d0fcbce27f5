//! # Media Components
//!
//! Photo and signature slots, and the QR image.

use super::Component;
use crate::render::{EmitContext, escape};

/// Content id of the technician signature in email mode.
pub const CID_TECH_SIGNATURE: &str = "tech_signature";
/// Content id of the inspector signature in email mode.
pub const CID_INSPECTOR_SIGNATURE: &str = "inspector_signature";
/// Content id of the part photo in email mode.
pub const CID_PART_PHOTO: &str = "part_photo";

/// A bounded box holding an optional image.
///
/// The box is always emitted. With no image it carries a placeholder, so an
/// absent signature is visibly absent rather than a broken `<img>`.
pub struct ImageSlot {
    cid: &'static str,
    data_uri: Option<String>,
    alt: String,
    placeholder: String,
    height_px: u32,
    span: Option<u8>,
}

impl ImageSlot {
    /// Create a slot referenced as `cid` in email mode.
    pub fn new(cid: &'static str, data_uri: Option<&str>) -> Self {
        Self {
            cid,
            data_uri: data_uri
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string),
            alt: String::new(),
            placeholder: String::new(),
            height_px: 60,
            span: None,
        }
    }

    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = alt.into();
        self
    }

    /// Text shown when there is no image.
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    /// Fixed box height in pixels.
    pub fn height(mut self, px: u32) -> Self {
        self.height_px = px;
        self
    }

    /// Share of the enclosing row, in percent.
    pub fn span(mut self, percent: u8) -> Self {
        self.span = Some(percent.clamp(1, 100));
        self
    }
}

impl Component for ImageSlot {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(&format!(
            r#"<div class="wca-media" data-slot="{}" style="height:{}px;border:1px solid #0f172a;text-align:center;overflow:hidden;">"#,
            self.cid, self.height_px
        ));
        match &self.data_uri {
            Some(data_uri) => {
                let src = ctx.image_src(self.cid, data_uri);
                ctx.push(&format!(
                    r#"<img src="{}" alt="{}" style="max-height:{}px;max-width:100%;">"#,
                    escape(&src),
                    escape(&self.alt),
                    self.height_px
                ));
            }
            None => {
                ctx.push(&format!(
                    r#"<div class="wca-placeholder" style="line-height:{}px;font-size:8px;font-weight:bold;color:#94a3b8;text-transform:uppercase;">"#,
                    self.height_px
                ));
                ctx.text(&self.placeholder);
                ctx.push("</div>");
            }
        }
        ctx.push("</div>");
    }

    fn row_share(&self) -> Option<u8> {
        self.span
    }
}

/// A QR code image with a caption.
///
/// The source is whatever the QR encoding service returned; it is embedded
/// as-is in every mode.
pub struct QrImage {
    src: String,
    caption: String,
    size_px: u32,
}

impl QrImage {
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            caption: "SCAN / ESCANEAR".to_string(),
            size_px: 84,
        }
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn size(mut self, px: u32) -> Self {
        self.size_px = px;
        self
    }
}

impl Component for QrImage {
    fn emit(&self, ctx: &mut EmitContext) {
        ctx.push(r#"<div class="wca-qr" style="text-align:center;">"#);
        ctx.push(&format!(
            r#"<img class="wca-qr__image" src="{}" alt="QR" width="{}" height="{}" style="display:block;margin:0 auto;">"#,
            escape(&self.src),
            self.size_px,
            self.size_px
        ));
        ctx.push(r#"<div style="font-size:7px;font-weight:bold;">"#);
        ctx.text(&self.caption);
        ctx.push("</div></div>");
    }

    fn row_share(&self) -> Option<u8> {
        Some(18)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::ComponentExt;
    use crate::render::RenderMode;

    const SIG: &str = "data:image/png;base64,iVBORw0KGgo=";

    #[test]
    fn test_slot_uses_data_uri_on_web_and_print() {
        for mode in [RenderMode::Web, RenderMode::Print] {
            let html = ImageSlot::new(CID_TECH_SIGNATURE, Some(SIG)).render(mode);
            assert!(html.contains(&format!(r#"src="{}""#, SIG)));
        }
    }

    #[test]
    fn test_slot_uses_cid_in_email() {
        let html = ImageSlot::new(CID_TECH_SIGNATURE, Some(SIG)).render(RenderMode::Email);
        assert!(html.contains(r#"src="cid:tech_signature""#));
        assert!(!html.contains("base64"));
    }

    #[test]
    fn test_slot_placeholder_when_absent() {
        for mode in [RenderMode::Web, RenderMode::Print, RenderMode::Email] {
            let html = ImageSlot::new(CID_INSPECTOR_SIGNATURE, None)
                .placeholder("PENDING SIGNATURE")
                .render(mode);
            assert!(html.contains("wca-placeholder"));
            assert!(html.contains("PENDING SIGNATURE"));
            assert!(!html.contains("<img"));
        }
    }

    #[test]
    fn test_slot_blank_data_uri_is_absent() {
        let html = ImageSlot::new(CID_PART_PHOTO, Some("  ")).render(RenderMode::Web);
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_qr_image_embeds_reference_verbatim() {
        let html = QrImage::new("https://qr.example/?data=a&size=1").render(RenderMode::Email);
        assert!(html.contains(r#"src="https://qr.example/?data=a&amp;size=1""#));
    }
}
