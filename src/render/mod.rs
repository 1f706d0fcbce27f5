//! # Rendering Modes and Context
//!
//! A document is rendered for exactly one [`RenderMode`]. The mode changes
//! only how images are referenced:
//!
//! | Mode | Photo / signature `src` |
//! |------|-------------------------|
//! | `web` | the record's data URI |
//! | `print` | the record's data URI |
//! | `email` | `cid:<content-id>`, resolved by the mail transport |
//!
//! Everything else, QR inclusion included, is identical across modes.

mod escape;

pub use escape::{escape, escape_multiline};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{DocsError, Result};
use crate::qr;

/// The delivery context a document is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Interactive display in the browser.
    #[default]
    Web,
    /// Paged output for the DOM-to-PDF rasterizer.
    Print,
    /// HTML email body.
    Email,
}

impl RenderMode {
    pub const ALL: [RenderMode; 3] = [Self::Web, Self::Print, Self::Email];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Print => "print",
            Self::Email => "email",
        }
    }
}

impl FromStr for RenderMode {
    type Err = DocsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "web" | "modal" | "display" => Ok(Self::Web),
            "print" | "pdf" => Ok(Self::Print),
            "email" | "mail" => Ok(Self::Email),
            other => Err(DocsError::Config(format!("unknown render mode '{}'", other))),
        }
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for a single render call.
///
/// Built fresh per call. `generated_at` is the timestamp printed in the
/// document footer; pin it to make output reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub include_qr: bool,
    /// Required when `include_qr` is set.
    pub base_url: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl RenderOptions {
    /// Options for `mode`, without QR, stamped with the current time.
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            include_qr: false,
            base_url: None,
            generated_at: Utc::now(),
        }
    }

    pub fn web() -> Self {
        Self::new(RenderMode::Web)
    }

    pub fn print() -> Self {
        Self::new(RenderMode::Print)
    }

    pub fn email() -> Self {
        Self::new(RenderMode::Email)
    }

    /// Embed a QR code linking to `{base_url}/#/scan/{id}`.
    pub fn with_qr(mut self, base_url: impl Into<String>) -> Self {
        self.include_qr = true;
        self.base_url = Some(base_url.into());
        self
    }

    /// Pin the footer timestamp.
    pub fn at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }

    /// Same options for a different mode.
    pub fn with_mode(&self, mode: RenderMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// The scan-target URL for `part_id`, or `None` when QR is off.
    ///
    /// Fails fast when QR is requested without a usable base URL: a wrong
    /// code on a printed tag is worse than none.
    pub fn scan_url(&self, part_id: &str) -> Result<Option<String>> {
        if !self.include_qr {
            return Ok(None);
        }
        let base = self
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(DocsError::MissingBaseUrl)?;
        qr::scan_url(base, part_id).map(Some)
    }
}

/// An image referenced by content id in email mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineImage {
    /// Content identifier, without the `cid:` scheme.
    pub cid: String,
    /// The record's original data URI.
    pub data_uri: String,
}

/// Context passed to component `emit()` methods, carrying the markup buffer
/// and the render mode.
pub struct EmitContext {
    /// The markup being built.
    pub html: String,
    pub mode: RenderMode,
    inline_images: Vec<InlineImage>,
}

impl EmitContext {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            html: String::with_capacity(16 * 1024),
            mode,
            inline_images: Vec::new(),
        }
    }

    /// Push raw markup.
    pub fn push(&mut self, markup: &str) {
        self.html.push_str(markup);
    }

    /// Push escaped text.
    pub fn text(&mut self, text: &str) {
        self.html.push_str(&escape(text));
    }

    /// Resolve an image source for the current mode.
    ///
    /// In email mode the data URI is recorded as an inline attachment and
    /// `cid:<cid>` is returned; otherwise the data URI itself.
    pub fn image_src(&mut self, cid: &str, data_uri: &str) -> String {
        match self.mode {
            RenderMode::Email => {
                if !self.inline_images.iter().any(|i| i.cid == cid) {
                    self.inline_images.push(InlineImage {
                        cid: cid.to_string(),
                        data_uri: data_uri.to_string(),
                    });
                }
                format!("cid:{}", cid)
            }
            RenderMode::Web | RenderMode::Print => data_uri.to_string(),
        }
    }

    /// Images referenced by content id so far.
    pub fn inline_images(&self) -> &[InlineImage] {
        &self.inline_images
    }

    /// Consume the context, returning markup and inline images.
    pub fn into_parts(self) -> (String, Vec<InlineImage>) {
        (self.html, self.inline_images)
    }

    /// Consume the context, returning the markup.
    pub fn finish(self) -> String {
        self.html
    }
}
