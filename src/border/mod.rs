//! Border module: merged box-drawing borders between resolved regions.
//!
//! Instead of drawing each region's frame independently (which would
//! double-draw shared edges and miss junctions), the full region set is
//! classified into a grid of arm-direction sets first, and every border
//! cell renders the one glyph matching its merged arms.

mod arms;
mod plan;

pub use arms::{glyph, Arms};
pub use plan::{BorderPlan, SpacePolicy};
