//! Border plan: the logical grid of junction glyphs for one draw cycle.
//!
//! Each participating region contributes the outline of its frame; cells
//! shared by several outlines accumulate arms and render as the merged
//! junction glyph instead of two independent borders drawn side by side.
//! Cells are independent of one another, so draw order is immaterial.
//!
//! Resolved regions tile the viewport exactly, so two adjacent regions
//! never share a cell. Their frames still must share a border line:
//! an interior edge is therefore drawn on the shared boundary column/row
//! (the neighbor's first column/row), where the neighbor's own outline
//! lands too and the arms of both merge into `├ ┬ ┼` glyphs. Edges with
//! no participating neighbor stay on the region's last column/row, which
//! is what simplifies outer corners to plain `┌ ┐ └ ┘`.

use std::collections::BTreeMap;

use super::arms::{glyph, Arms};
use crate::layout::{Rect, ResolvedRegion};
use crate::terminal::OutputBuffer;

/// Whether blank filler regions contribute border segments.
///
/// `Space` leaves always participate in tiling; whether the area they
/// occupy gets framed like a pane is a policy choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpacePolicy {
    /// Blank regions draw no frame of their own; a pane next to one keeps
    /// its border on its own last column/row. Default.
    #[default]
    Open,
    /// Blank regions are framed exactly like pane regions.
    Bordered,
}

/// The resolved border glyphs for a set of regions.
#[derive(Debug, Clone)]
pub struct BorderPlan {
    // BTreeMap keyed (y, x) so painting emits cells in row-major order.
    cells: BTreeMap<(u16, u16), Arms>,
}

impl BorderPlan {
    /// Classify border cells for the full region set of a cycle.
    ///
    /// Zero-sized regions are skipped; a 1x1 region has no drawable
    /// segment in any direction and contributes nothing.
    pub fn build(regions: &[ResolvedRegion], policy: SpacePolicy) -> Self {
        let participants: Vec<Rect> = regions
            .iter()
            .filter(|r| r.pane.is_some() || policy == SpacePolicy::Bordered)
            .map(|r| r.rect)
            .filter(|rect| !rect.is_empty())
            .collect();

        let mut cells = BTreeMap::new();
        for rect in &participants {
            outline(frame_of(*rect, &participants), &mut cells);
        }
        cells.retain(|_, arms| !arms.is_empty());
        Self { cells }
    }

    /// Number of border cells in the plan.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the plan draws nothing.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The glyph at a cell, if the cell is on a border.
    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        self.cells.get(&(y, x)).copied().map(glyph)
    }

    /// Iterate `(x, y, glyph)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, u16, char)> + '_ {
        self.cells.iter().map(|(&(y, x), &arms)| (x, y, glyph(arms)))
    }

    /// Emit every border cell as a positioned write.
    ///
    /// Does not clear the screen; the screen manager clears before the
    /// cycle starts painting.
    pub fn paint(&self, out: &mut OutputBuffer) {
        let mut cursor: Option<(u16, u16)> = None;
        for (x, y, ch) in self.iter() {
            // Contiguous cells on one row continue without re-positioning.
            if cursor != Some((x, y)) {
                out.cursor_move(x, y);
            }
            out.write_char(ch);
            cursor = Some((x + 1, y));
        }
    }
}

/// The edge columns/rows (inclusive) a region's frame occupies.
struct Frame {
    left: u16,
    top: u16,
    right: u16,
    bottom: u16,
}

/// Place a region's frame edges.
///
/// The right edge moves onto `rect.right()` when another participant
/// starts exactly there on an overlapping row span (the shared boundary
/// column); likewise the bottom edge onto `rect.bottom()`. The left and
/// top edges always sit on the region's own first column/row — a
/// neighbor on that side is the one extending its edge over here.
fn frame_of(rect: Rect, participants: &[Rect]) -> Frame {
    let shares_right = participants
        .iter()
        .any(|o| o.x == rect.right() && o.y < rect.bottom() && rect.y < o.bottom());
    let shares_bottom = participants
        .iter()
        .any(|o| o.y == rect.bottom() && o.x < rect.right() && rect.x < o.right());
    Frame {
        left: rect.x,
        top: rect.y,
        right: if shares_right { rect.right() } else { rect.right() - 1 },
        bottom: if shares_bottom { rect.bottom() } else { rect.bottom() - 1 },
    }
}

/// Add one frame's outline arms into the cell grid.
fn outline(frame: Frame, cells: &mut BTreeMap<(u16, u16), Arms>) {
    // Horizontal runs along the top and bottom edges. Corner cells pick up
    // their vertical arm from the second loop, which starts at the corner
    // rows too.
    for x in frame.left..=frame.right {
        let mut arms = Arms::empty();
        if x > frame.left {
            arms |= Arms::LEFT;
        }
        if x < frame.right {
            arms |= Arms::RIGHT;
        }
        *cells.entry((frame.top, x)).or_default() |= arms;
        *cells.entry((frame.bottom, x)).or_default() |= arms;
    }
    // Vertical runs along the left and right edges.
    for y in frame.top..=frame.bottom {
        let mut arms = Arms::empty();
        if y > frame.top {
            arms |= Arms::UP;
        }
        if y < frame.bottom {
            arms |= Arms::DOWN;
        }
        *cells.entry((y, frame.left)).or_default() |= arms;
        *cells.entry((y, frame.right)).or_default() |= arms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{resolve, LayoutNode, LayoutTemplate, Weighted};

    fn region(name: Option<&str>, rect: Rect) -> ResolvedRegion {
        ResolvedRegion {
            pane: name.map(String::from),
            rect,
        }
    }

    #[test]
    fn test_single_region_corners() {
        let plan = BorderPlan::build(&[region(Some("source"), Rect::new(0, 0, 10, 5))], SpacePolicy::Open);

        assert_eq!(plan.glyph_at(0, 0), Some('┌'));
        assert_eq!(plan.glyph_at(9, 0), Some('┐'));
        assert_eq!(plan.glyph_at(0, 4), Some('└'));
        assert_eq!(plan.glyph_at(9, 4), Some('┘'));
        assert_eq!(plan.glyph_at(5, 0), Some('─'));
        assert_eq!(plan.glyph_at(0, 2), Some('│'));
        assert_eq!(plan.glyph_at(5, 2), None);
    }

    #[test]
    fn test_tiled_vertical_edge_merges() {
        // Exact tiling: the regions touch but never overlap. Both frames
        // land on the shared boundary column 40.
        let regions = [
            region(Some("left"), Rect::new(0, 0, 40, 24)),
            region(Some("right"), Rect::new(40, 0, 40, 24)),
        ];
        let plan = BorderPlan::build(&regions, SpacePolicy::Open);

        assert_eq!(plan.glyph_at(40, 0), Some('┬'));
        assert_eq!(plan.glyph_at(40, 12), Some('│'));
        assert_eq!(plan.glyph_at(40, 23), Some('┴'));
        // No second vertical line on the left region's own last column,
        // just the top edge passing through.
        assert_eq!(plan.glyph_at(39, 0), Some('─'));
        assert_eq!(plan.glyph_at(39, 12), None);
    }

    #[test]
    fn test_t_junction_where_third_region_touches() {
        // left | right, with right split horizontally: the split's edge
        // meets the shared column in a T-junction, plain vertical line
        // elsewhere along that edge.
        let regions = [
            region(Some("left"), Rect::new(0, 0, 40, 24)),
            region(Some("right-top"), Rect::new(40, 0, 40, 12)),
            region(Some("right-bottom"), Rect::new(40, 12, 40, 12)),
        ];
        let plan = BorderPlan::build(&regions, SpacePolicy::Open);

        // Where right's internal horizontal edge meets the shared column.
        assert_eq!(plan.glyph_at(40, 12), Some('├'));
        // Elsewhere along the shared edge: plain vertical line.
        assert_eq!(plan.glyph_at(40, 6), Some('│'));
        assert_eq!(plan.glyph_at(40, 18), Some('│'));
        // Outer right end of that internal edge.
        assert_eq!(plan.glyph_at(79, 12), Some('┤'));
        assert_eq!(plan.glyph_at(40, 0), Some('┬'));
    }

    #[test]
    fn test_four_way_cross() {
        let regions = [
            region(Some("a"), Rect::new(0, 0, 40, 12)),
            region(Some("b"), Rect::new(40, 0, 40, 12)),
            region(Some("c"), Rect::new(0, 12, 40, 12)),
            region(Some("d"), Rect::new(40, 12, 40, 12)),
        ];
        let plan = BorderPlan::build(&regions, SpacePolicy::Open);

        assert_eq!(plan.glyph_at(40, 12), Some('┼'));
        assert_eq!(plan.glyph_at(40, 0), Some('┬'));
        assert_eq!(plan.glyph_at(0, 12), Some('├'));
        assert_eq!(plan.glyph_at(79, 12), Some('┤'));
        assert_eq!(plan.glyph_at(40, 23), Some('┴'));
    }

    #[test]
    fn test_resolver_output_merges_end_to_end() {
        // The geometry the engine actually produces: resolve a two-span
        // column and plan its borders directly.
        let template = LayoutTemplate::new(LayoutNode::column(vec![
            Weighted::new(LayoutNode::span("source")),
            Weighted::new(LayoutNode::span("backtrace")),
        ]));
        let regions = resolve(&template, Rect::from_size(80, 24));
        let plan = BorderPlan::build(&regions, SpacePolicy::Open);

        // One shared line on the boundary column, not two frames.
        assert_eq!(plan.glyph_at(40, 0), Some('┬'));
        assert_eq!(plan.glyph_at(40, 12), Some('│'));
        assert_eq!(plan.glyph_at(40, 23), Some('┴'));
        assert_eq!(plan.glyph_at(39, 0), Some('─'));
        assert_eq!(plan.glyph_at(39, 12), None);
        // Outer frame corners stay plain.
        assert_eq!(plan.glyph_at(0, 0), Some('┌'));
        assert_eq!(plan.glyph_at(79, 23), Some('┘'));
    }

    #[test]
    fn test_space_policy_open_skips_blank_regions() {
        let regions = [
            region(Some("menu"), Rect::new(0, 0, 40, 24)),
            region(None, Rect::new(40, 0, 40, 24)),
        ];

        let open = BorderPlan::build(&regions, SpacePolicy::Open);
        // No participating neighbor: the pane keeps a snug frame on its
        // own last column, and the blank area draws nothing at all.
        assert_eq!(open.glyph_at(39, 0), Some('┐'));
        assert_eq!(open.glyph_at(39, 12), Some('│'));
        assert_eq!(open.glyph_at(40, 0), None);
        assert_eq!(open.glyph_at(79, 0), None);

        let bordered = BorderPlan::build(&regions, SpacePolicy::Bordered);
        assert_eq!(bordered.glyph_at(40, 0), Some('┬'));
        assert_eq!(bordered.glyph_at(40, 12), Some('│'));
        assert_eq!(bordered.glyph_at(79, 0), Some('┐'));
    }

    #[test]
    fn test_zero_sized_regions_draw_nothing() {
        let plan = BorderPlan::build(&[region(Some("a"), Rect::ZERO)], SpacePolicy::Bordered);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_one_by_one_region_draws_nothing() {
        // A 1x1 frame has no segment in any direction; it must not leave
        // a stray armless cell behind.
        let plan = BorderPlan::build(&[region(Some("a"), Rect::new(3, 3, 1, 1))], SpacePolicy::Open);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_paint_emits_positioned_writes() {
        let plan = BorderPlan::build(&[region(Some("a"), Rect::new(1, 1, 3, 3))], SpacePolicy::Open);
        let mut out = OutputBuffer::new();
        plan.paint(&mut out);

        let bytes = String::from_utf8(out.as_bytes().to_vec()).unwrap();
        // Top row starts at (1,1): ANSI is 1-indexed row;col.
        assert!(bytes.contains("\x1b[2;2H"));
        assert!(bytes.contains('┌'));
        assert!(bytes.contains('┘'));
    }
}
