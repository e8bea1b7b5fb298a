//! Pane module: the paint contract and the name → factory registry.
//!
//! Panes paint domain content (source listing, backtrace, threads, ...)
//! inside the content rectangle the screen manager hands them. The engine
//! only needs their geometry-mutation and paint contract; everything about
//! WHAT they draw lives outside this crate, apart from the small built-in
//! [`TextPane`].

mod registry;
mod text;

pub use registry::{PaneFactory, PaneRegistry};
pub use text::TextPane;

use crate::error::DrawResult;
use crate::layout::Rect;
use crate::terminal::OutputBuffer;

/// A drawable unit bound to one resolved region for one draw cycle.
///
/// Instances are created per cycle via a [`PaneRegistry`] factory with the
/// full region rectangle, shrunk to the content rectangle after borders
/// are painted, asked to paint once, and discarded.
pub trait Pane {
    /// Current geometry.
    fn bounds(&self) -> Rect;

    /// Replace the geometry. Called with the content rectangle (region
    /// minus the one-cell border inset) before painting; the rectangle may
    /// be empty, which panes treat as nothing to draw.
    fn set_bounds(&mut self, bounds: Rect);

    /// Paint the pane's content into the output as positioned writes
    /// confined to `bounds()`.
    ///
    /// # Errors
    /// A pane failure is contained by the screen manager: the cycle falls
    /// into the error-panel path instead of propagating.
    fn paint(&mut self, out: &mut OutputBuffer) -> DrawResult<()>;
}
