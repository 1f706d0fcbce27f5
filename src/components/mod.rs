//! # Declarative Components
//!
//! Building blocks for compliance documents. Each component writes its
//! markup into an [`EmitContext`]; containers hold children.
//!
//! ```
//! use hangar_docs::components::*;
//! use hangar_docs::render::RenderMode;
//!
//! let section = Section::new("times")
//!     .banner("03. TIMES & CYCLES / TIEMPOS Y CICLOS")
//!     .child(
//!         Row::new()
//!             .child(MetricBox::new("TSO", Some("1200")))
//!             .child(MetricBox::new("CSO", None)),
//!     );
//!
//! let html = section.render(RenderMode::Web);
//! assert!(html.contains("1200"));
//! ```
//!
//! All styling is inline so a fragment renders the same when mounted in the
//! browser, rasterized to PDF, or opened in a mail client.

mod field;
mod header;
mod layout;
mod media;

pub use field::*;
pub use header::*;
pub use layout::*;
pub use media::*;

use crate::render::{EmitContext, RenderMode};

/// Trait for declarative components.
pub trait Component {
    /// Emit markup for this component into the context.
    fn emit(&self, ctx: &mut EmitContext);

    /// Share of the enclosing [`Row`] in percent, if fixed.
    fn row_share(&self) -> Option<u8> {
        None
    }
}

/// Extension trait for rendering components standalone.
pub trait ComponentExt: Component {
    /// Render this component to a markup string.
    fn render(&self, mode: RenderMode) -> String {
        let mut ctx = EmitContext::new(mode);
        self.emit(&mut ctx);
        ctx.finish()
    }
}

// Blanket implementation for all components
impl<T: Component + ?Sized> ComponentExt for T {}

// Allow boxed components
impl Component for Box<dyn Component> {
    fn emit(&self, ctx: &mut EmitContext) {
        self.as_ref().emit(ctx);
    }

    fn row_share(&self) -> Option<u8> {
        self.as_ref().row_share()
    }
}

// Allow references to components
impl<T: Component + ?Sized> Component for &T {
    fn emit(&self, ctx: &mut EmitContext) {
        (*self).emit(ctx);
    }

    fn row_share(&self) -> Option<u8> {
        (*self).row_share()
    }
}
