//! # Part Record Assembler
//!
//! One assembler produces the compliance record for every delivery context.
//! The section order is fixed:
//!
//! | # | Section | Notes |
//! |---|---------|-------|
//! | - | Header | branding, tag banner, optional QR |
//! | 01 | Administrative record | organization and contact |
//! | 02 | Technical identification | identity fields, photo slot |
//! | 03 | Times & cycles | six metric boxes, always present |
//! | 04 | Condition & removal | fields chosen by the tag policy |
//! | 05 | Technical reports & remarks | observations |
//! | 06 | Signatures | the only splittable section |
//! | - | Certification | verbatim bilingual statement |
//! | - | Footer | record id, generation timestamp |
//!
//! The mode changes image sources only (see [`crate::render`]). The
//! per-mode adapters in [`web`], [`print`] and [`email`] wrap the same
//! markup for their transport.
//!
//! ```
//! use hangar_docs::document::Assembler;
//! use hangar_docs::part::{Part, TagColor};
//! use hangar_docs::render::RenderOptions;
//!
//! let part = Part { id: "p-1".into(), tag_color: TagColor::Red, ..Default::default() };
//! let html = Assembler::default().assemble(&part, &RenderOptions::print())?;
//! assert!(html.contains("REJECTION REASON"));
//! assert!(!html.contains("SHELF LIFE"));
//! # Ok::<(), hangar_docs::DocsError>(())
//! ```

pub mod email;
pub mod print;
mod sections;
pub mod web;

pub use sections::{GENERATED_AT_FORMAT, METRICS, PHOTO_PLACEHOLDER, SIGNATURE_PLACEHOLDER};

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::components::Component;
use crate::config::{Branding, Config};
use crate::error::Result;
use crate::part::Part;
use crate::qr::{QrEncoder, QrServerEncoder};
use crate::render::{EmitContext, RenderOptions, escape};

// ============================================================================
// ASSEMBLER
// ============================================================================

/// Renders part records and traceability timelines.
///
/// Holds only immutable configuration, so one instance can serve many
/// concurrent renders.
pub struct Assembler {
    branding: Branding,
    qr: Box<dyn QrEncoder>,
}

impl Default for Assembler {
    fn default() -> Self {
        Self {
            branding: Branding::default(),
            qr: Box::new(QrServerEncoder::default()),
        }
    }
}

impl Assembler {
    pub fn new(branding: Branding, qr: Box<dyn QrEncoder>) -> Self {
        Self { branding, qr }
    }

    /// Assembler using the configured branding and QR encoder.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.branding.clone(), config.qr.build())
    }

    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    pub fn with_qr_encoder(mut self, qr: Box<dyn QrEncoder>) -> Self {
        self.qr = qr;
        self
    }

    pub fn branding(&self) -> &Branding {
        &self.branding
    }

    /// Render `part` to a markup fragment.
    pub fn assemble(&self, part: &Part, options: &RenderOptions) -> Result<String> {
        Ok(self.assemble_context(part, options)?.finish())
    }

    /// Render `part` and keep the context, which also lists the images
    /// referenced by content id in email mode.
    pub fn assemble_context(&self, part: &Part, options: &RenderOptions) -> Result<EmitContext> {
        let policy = part.tag_color.policy();
        let qr_src = self.qr_reference(&part.id, options)?;
        debug!(
            part = %part.id,
            mode = %options.mode,
            tag = policy.tag.code(),
            qr = qr_src.is_some(),
            "assembling part record"
        );

        let body: [Box<dyn Component>; 9] = [
            Box::new(sections::header(part, policy, &self.branding, qr_src)),
            Box::new(sections::administrative(part)),
            Box::new(sections::identification(part)),
            Box::new(sections::times_and_cycles(part)),
            Box::new(sections::condition(part, policy)),
            Box::new(sections::remarks(part)),
            Box::new(sections::signatures(part)),
            Box::new(sections::certification(policy)),
            Box::new(sections::Footer::new(part, &self.branding, options.generated_at)),
        ];

        let mut ctx = EmitContext::new(options.mode);
        ctx.push(&format!(
            r#"<div class="wca-doc" data-record="{}" data-tag="{}" style="{}">"#,
            escape(&part.id),
            policy.tag.code(),
            DOC_STYLE
        ));
        for block in &body {
            block.emit(&mut ctx);
        }
        ctx.push("</div>");

        trace!(
            part = %part.id,
            bytes = ctx.html.len(),
            inline_images = ctx.inline_images().len(),
            "part record assembled"
        );
        Ok(ctx)
    }

    /// The QR image reference for `part_id`, if the options ask for one.
    pub fn qr_reference(&self, part_id: &str, options: &RenderOptions) -> Result<Option<String>> {
        match options.scan_url(part_id)? {
            Some(url) => self.qr.image_ref(&url).map(Some),
            None => Ok(None),
        }
    }

    /// Render many records in parallel, one result per input, in input order.
    pub fn render_batch(&self, parts: &[Part], options: &RenderOptions) -> Vec<Result<String>> {
        debug!(count = parts.len(), mode = %options.mode, "rendering batch");
        parts
            .par_iter()
            .map(|part| self.assemble(part, options))
            .collect()
    }
}

/// Outer container style, sized to the A4 content box.
pub(crate) const DOC_STYLE: &str = "font-family:Arial,Helvetica,sans-serif;color:#0f172a;\
background-color:#ffffff;max-width:794px;margin:0 auto;padding:16px;box-sizing:border-box;";

// ============================================================================
// CONVENIENCE
// ============================================================================

/// Render `part` with the default branding and QR encoder.
pub fn assemble(part: &Part, options: &RenderOptions) -> Result<String> {
    Assembler::default().assemble(part, options)
}

/// Render many records with the default branding and QR encoder.
pub fn render_batch(parts: &[Part], options: &RenderOptions) -> Vec<Result<String>> {
    Assembler::default().render_batch(parts, options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DocsError;
    use crate::part::TagColor;
    use crate::qr::InlineSvgEncoder;
    use crate::render::RenderMode;
    use chrono::TimeZone;
    use chrono::Utc;

    fn options(mode: RenderMode) -> RenderOptions {
        RenderOptions::new(mode).at(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap())
    }

    fn part(tag: TagColor) -> Part {
        Part {
            id: "rec-1".into(),
            pn: Some("ABC-123".into()),
            sn: Some("SN001".into()),
            tag_color: tag,
            ..Default::default()
        }
    }

    #[test]
    fn test_section_order() {
        let html = assemble(&part(TagColor::Green), &options(RenderMode::Web)).unwrap();
        let order = [
            "wca-header",
            r#"data-section="administrative""#,
            r#"data-section="identification""#,
            r#"data-section="times""#,
            r#"data-section="condition""#,
            r#"data-section="remarks""#,
            r#"data-section="signatures""#,
            r#"data-section="certification""#,
            "wca-footer",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {}", needle)))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_removal_metadata_in_condition_section() {
        for tag in TagColor::ALL {
            let record = Part {
                removed_from_ac: Some("LV-ABC".into()),
                position: Some("ENG 2".into()),
                ..part(tag)
            };
            let html = assemble(&record, &options(RenderMode::Web)).unwrap();
            let condition = html.find(r#"data-section="condition""#).unwrap();
            let remarks = html.find(r#"data-section="remarks""#).unwrap();
            let section = &html[condition..remarks];
            assert!(section.contains("REMOVED FROM A/C"));
            assert!(section.contains("LV-ABC"));
            assert!(section.contains("ENG 2"));
        }
    }

    #[test]
    fn test_signed_checkbox_follows_sign_off_flags() {
        let checked = |record: &Part| {
            let html = assemble(record, &options(RenderMode::Print)).unwrap();
            let signatures = html.find(r#"data-section="signatures""#).unwrap();
            let inspector = signatures + html[signatures..].find("INSPECTOR / INSPECTOR").unwrap();
            let end = html.find(r#"data-section="certification""#).unwrap();
            (
                html[signatures..inspector].contains("wca-checkbox--checked"),
                html[inspector..end].contains("wca-checkbox--checked"),
            )
        };

        // Flags win over the images
        let flagged = Part {
            signed_by_technician: Some(true),
            signed_by_inspector: Some(false),
            inspector_signature: Some("data:image/png;base64,AAAA".into()),
            ..part(TagColor::Yellow)
        };
        assert_eq!(checked(&flagged), (true, false));

        // No flags: a signature image counts as signed
        let unflagged = Part {
            inspector_signature: Some("data:image/png;base64,AAAA".into()),
            ..part(TagColor::Yellow)
        };
        assert_eq!(checked(&unflagged), (false, true));
    }

    #[test]
    fn test_footer_timestamp() {
        let html = assemble(&part(TagColor::White), &options(RenderMode::Print)).unwrap();
        assert!(html.contains("2024-05-01 12:00:00 UTC"));
        assert!(html.contains(r#"data-record="rec-1""#));
    }

    #[test]
    fn test_only_signatures_split() {
        let html = assemble(&part(TagColor::Yellow), &options(RenderMode::Print)).unwrap();
        for key in [
            "administrative",
            "identification",
            "times",
            "condition",
            "remarks",
            "certification",
        ] {
            let start = html.find(&format!(r#"data-section="{}""#, key)).unwrap();
            let tag_end = start + html[start..].find('>').unwrap();
            assert!(html[start..tag_end].contains("break-inside:avoid"), "{}", key);
        }
        let start = html.find(r#"data-section="signatures""#).unwrap();
        let tag_end = start + html[start..].find('>').unwrap();
        assert!(!html[start..tag_end].contains("break-inside:avoid"));
    }

    #[test]
    fn test_qr_embedded_when_requested() {
        let assembler = Assembler::default().with_qr_encoder(Box::new(InlineSvgEncoder::default()));
        let opts = options(RenderMode::Email).with_qr("https://hangar.example");
        let html = assembler.assemble(&part(TagColor::Yellow), &opts).unwrap();
        assert!(html.contains(r#"src="data:image/svg+xml,"#));

        let without = assembler
            .assemble(&part(TagColor::Yellow), &options(RenderMode::Email))
            .unwrap();
        assert!(!without.contains("wca-qr"));
    }

    #[test]
    fn test_qr_without_base_url_fails() {
        let mut opts = options(RenderMode::Print);
        opts.include_qr = true;
        let err = assemble(&part(TagColor::Yellow), &opts).unwrap_err();
        assert!(matches!(err, DocsError::MissingBaseUrl));
    }

    #[test]
    fn test_remote_qr_reference() {
        let opts = options(RenderMode::Web).with_qr("https://hangar.example/");
        let reference = Assembler::default()
            .qr_reference("rec-1", &opts)
            .unwrap()
            .unwrap();
        assert!(reference.contains("data=https%3A%2F%2Fhangar.example%2F%23%2Fscan%2Frec-1"));
    }

    #[test]
    fn test_branding_override() {
        let branding = Branding {
            company_name: "Test Aero MRO".into(),
            ..Default::default()
        };
        let html = Assembler::default()
            .with_branding(branding)
            .assemble(&part(TagColor::Red), &options(RenderMode::Web))
            .unwrap();
        assert!(html.contains("Test Aero MRO"));
    }

    #[test]
    fn test_render_batch_keeps_order() {
        let parts: Vec<Part> = (0..8)
            .map(|i| Part {
                id: format!("rec-{}", i),
                ..part(TagColor::ALL[i % 4])
            })
            .collect();
        let results = render_batch(&parts, &options(RenderMode::Print));
        assert_eq!(results.len(), 8);
        for (i, result) in results.iter().enumerate() {
            let html = result.as_ref().unwrap();
            assert!(html.contains(&format!(r#"data-record="rec-{}""#, i)));
        }
    }
}
