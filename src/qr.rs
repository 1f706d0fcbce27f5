//! # QR Encoding Service
//!
//! Documents never draw QR pixels themselves. They build the scan-target
//! deep link and ask a [`QrEncoder`] for an image reference, which is
//! embedded as an ordinary `<img src>` without interpretation.
//!
//! Two encoders ship with the crate:
//!
//! - [`QrServerEncoder`]: an external HTTP image-generation API
//!   (the reference is a URL the mail client or browser fetches)
//! - [`InlineSvgEncoder`]: a local SVG rendered into a data URI, for
//!   offline use
//!
//! ```
//! use hangar_docs::qr::{QrEncoder, QrServerEncoder, scan_url};
//!
//! let url = scan_url("https://hangar.example.com", "p-1")?;
//! assert_eq!(url, "https://hangar.example.com/#/scan/p-1");
//!
//! let src = QrServerEncoder::default().image_ref(&url)?;
//! assert!(src.starts_with("https://api.qrserver.com/"));
//! # Ok::<(), hangar_docs::DocsError>(())
//! ```

use qrcode::{EcLevel, QrCode};

use crate::error::{DocsError, Result};

/// Default external QR image API.
pub const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Default rendered QR edge length in pixels.
pub const DEFAULT_QR_SIZE: u32 = 150;

/// Produces an image reference for a URL.
pub trait QrEncoder: Send + Sync {
    /// Return something usable as an `<img src>` that encodes `target`.
    fn image_ref(&self, target: &str) -> Result<String>;
}

/// Trim a web app base URL and check it can prefix a link.
pub fn normalize_base_url(base_url: &str) -> Result<&str> {
    let base = base_url.trim().trim_end_matches('/');
    if !(base.starts_with("https://") || base.starts_with("http://")) || base.contains(' ') {
        return Err(DocsError::InvalidBaseUrl(base_url.to_string()));
    }
    Ok(base)
}

/// Build the scan-target URL `{base_url}/#/scan/{part_id}`.
pub fn scan_url(base_url: &str, part_id: &str) -> Result<String> {
    let base = normalize_base_url(base_url)?;
    let id = part_id.trim();
    if id.is_empty() {
        return Err(DocsError::InvalidRecord(
            "part id is required for a scan link".to_string(),
        ));
    }
    Ok(format!("{}/#/scan/{}", base, encode_component(id)))
}

/// Percent-encode everything outside the RFC 3986 unreserved set.
pub fn encode_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// External HTTP QR image API (`?size=WxH&data=...`).
#[derive(Debug, Clone)]
pub struct QrServerEncoder {
    endpoint: String,
    size_px: u32,
}

impl Default for QrServerEncoder {
    fn default() -> Self {
        Self::new(DEFAULT_QR_ENDPOINT)
    }
}

impl QrServerEncoder {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            size_px: DEFAULT_QR_SIZE,
        }
    }

    /// Set the requested image size in pixels.
    pub fn size(mut self, size_px: u32) -> Self {
        self.size_px = size_px.max(32);
        self
    }
}

impl QrEncoder for QrServerEncoder {
    fn image_ref(&self, target: &str) -> Result<String> {
        let separator = if self.endpoint.contains('?') { '&' } else { '?' };
        Ok(format!(
            "{}{}size={}x{}&data={}",
            self.endpoint,
            separator,
            self.size_px,
            self.size_px,
            encode_component(target)
        ))
    }
}

/// Local encoder producing an SVG data URI.
#[derive(Debug, Clone)]
pub struct InlineSvgEncoder {
    size_px: u32,
}

impl Default for InlineSvgEncoder {
    fn default() -> Self {
        Self {
            size_px: DEFAULT_QR_SIZE,
        }
    }
}

/// Modules of light border around the symbol.
const QUIET_ZONE: usize = 4;

impl InlineSvgEncoder {
    pub fn new(size_px: u32) -> Self {
        Self {
            size_px: size_px.max(32),
        }
    }

    /// Render `target` as a standalone SVG document.
    pub fn svg(&self, target: &str) -> Result<String> {
        let code = QrCode::with_error_correction_level(target, EcLevel::M)
            .map_err(|e| DocsError::QrEncoding(format!("QR code generation failed: {}", e)))?;

        let width = code.width();
        let extent = width + 2 * QUIET_ZONE;

        // One unit square per dark module
        let mut path = String::new();
        for y in 0..width {
            for x in 0..width {
                if code[(x, y)] == qrcode::Color::Dark {
                    path.push_str(&format!(
                        "M{} {}h1v1h-1z",
                        x + QUIET_ZONE,
                        y + QUIET_ZONE
                    ));
                }
            }
        }

        Ok(format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {e} {e}" "#,
                r#"width="{s}" height="{s}" shape-rendering="crispEdges">"#,
                r##"<rect width="{e}" height="{e}" fill="#ffffff"/>"##,
                r##"<path d="{p}" fill="#000000"/></svg>"##
            ),
            e = extent,
            s = self.size_px,
            p = path
        ))
    }
}

impl QrEncoder for InlineSvgEncoder {
    fn image_ref(&self, target: &str) -> Result<String> {
        let svg = self.svg(target)?;
        Ok(format!("data:image/svg+xml,{}", encode_component(&svg)))
    }
}
