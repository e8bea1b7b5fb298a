//! Layout module: declarative templates resolved into concrete regions.
//!
//! Templates describe proportional screen partitioning independent of the
//! actual terminal size; the resolver applies the picked template to the
//! viewport measured at the start of each draw cycle. Nothing here is
//! cached across cycles.

mod rect;
mod resolver;
mod template;

pub use rect::Rect;
pub use resolver::{resolve, ResolvedRegion};
pub use template::{pick, LayoutNode, LayoutTemplate, Weighted};
