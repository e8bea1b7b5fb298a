//! # Lattice
//!
//! A layout-and-draw engine for multi-pane terminal debugger dashboards.
//!
//! Lattice turns a declarative, size-adaptive layout description plus the
//! current terminal dimensions into concrete screen rectangles, draws
//! merged single-line borders between them, delegates content painting to
//! pluggable panes, and guarantees the terminal is restored to a sane
//! state no matter what fails mid-draw.
//!
//! ## Core Concepts
//!
//! - **Layout templates**: proportional `Row`/`Column`/`Span`/`Space`
//!   trees picked by terminal size, resolved fresh every draw cycle
//! - **Exact tiling**: children always sum to the parent dimension, no
//!   gaps and no overlaps, for any weights
//! - **Merged borders**: shared edges render junction glyphs (`├ ┬ ┼`)
//!   instead of double-drawn frames
//! - **Self-healing cycles**: a failing pane renders an error panel, and
//!   cooked mode / echo / cursor are restored on every exit path
//!
//! ## Example
//!
//! ```rust,ignore
//! use lattice::{LayoutNode, LayoutTemplate, PaneRegistry, ScreenConfig, ScreenManager, Weighted};
//! use lattice::{CrosstermTerminal, TextPane};
//!
//! let template = LayoutTemplate::new(LayoutNode::row(vec![
//!     Weighted::with_weight(3, LayoutNode::span("source")),
//!     Weighted::new(LayoutNode::span("backtrace")),
//! ]));
//!
//! let mut registry = PaneRegistry::new();
//! registry.register("source", |rect| Box::new(TextPane::new(rect)));
//!
//! let mut screen = ScreenManager::new(
//!     ScreenConfig::with_templates(vec![template]),
//!     registry,
//!     CrosstermTerminal::new(),
//!     std::io::stdout(),
//! );
//! screen.update()?; // on every debugger stop
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod border;
pub mod diag;
pub mod error;
pub mod layout;
pub mod pane;
pub mod screen;
pub mod terminal;

// Re-exports for convenience
pub use border::{BorderPlan, SpacePolicy};
pub use diag::{DiagnosticLog, MemoryLog};
pub use error::{DrawError, DrawResult};
pub use layout::{pick, resolve, LayoutNode, LayoutTemplate, Rect, ResolvedRegion, Weighted};
pub use pane::{Pane, PaneFactory, PaneRegistry, TextPane};
pub use screen::{InterceptGate, ScreenConfig, ScreenManager, TeeWriter};
pub use terminal::{CrosstermTerminal, OutputBuffer, TerminalControl};
