//! # Hangar Docs - Aviation Compliance Record Rendering
//!
//! Hangar Docs turns aviation part inventory records into HTML compliance
//! documents. One assembler produces the same document for three delivery
//! contexts:
//!
//! - **Web**: a fragment mounted into the browser's part-detail view
//! - **Print**: a paged A4 document handed to a DOM-to-PDF rasterizer
//! - **Email**: a mail body whose images are referenced by content id
//!
//! ## Quick Start
//!
//! ```
//! use hangar_docs::{document, part::{Part, TagColor}, render::RenderOptions};
//!
//! let part = Part {
//!     id: "a1b2".into(),
//!     pn: Some("ABC-123".into()),
//!     sn: Some("SN001".into()),
//!     tag_color: TagColor::Yellow,
//!     shelf_life: Some("2025-12-31".into()),
//!     ..Default::default()
//! };
//!
//! let html = document::assemble(&part, &RenderOptions::web())?;
//! assert!(html.contains("SHELF LIFE"));
//! # Ok::<(), hangar_docs::DocsError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`part`] | Part records, tag colors and movement history |
//! | [`policy`] | Tag-color policy table (colors, titles, certification text) |
//! | [`components`] | Field, metric, checkbox, banner and layout primitives |
//! | [`render`] | Rendering modes, options and the emit context |
//! | [`document`] | Part document assembler and per-mode adapters |
//! | [`timeline`] | Traceability timeline renderer |
//! | [`qr`] | QR encoding service collaborators |
//! | [`report`] | Inventory report snapshots, CSV, print and dispatch email |
//! | [`config`] | Branding, QR and server configuration |
//! | [`server`] | HTTP preview surface |
//! | [`error`] | Error types |

pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod logging;
pub mod part;
pub mod policy;
pub mod qr;
pub mod render;
pub mod report;
pub mod server;
pub mod timeline;

// Re-exports for convenience
pub use config::{Branding, Config};
pub use document::{Assembler, assemble};
pub use error::{DocsError, Result};
pub use part::{Part, TagColor};
pub use render::{RenderMode, RenderOptions};
pub use timeline::render_timeline;
