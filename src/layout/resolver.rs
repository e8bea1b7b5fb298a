//! Layout resolver: template tree + viewport → flat list of regions.
//!
//! Resolution happens once per draw cycle. The output is depth-first
//! ordered and exactly tiles the viewport: for every `Row`/`Column`, the
//! children's dimensions sum to the parent's dimension with no gap and no
//! overlap, for any positive weights.

use super::rect::Rect;
use super::template::{LayoutNode, LayoutTemplate, Weighted};

/// A concrete rectangle produced for one template leaf.
///
/// Regions are created fresh every cycle and never mutated afterwards,
/// only replaced by the next cycle's resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRegion {
    /// The bound pane name, or `None` for blank filler.
    pub pane: Option<String>,
    /// The region's screen rectangle.
    pub rect: Rect,
}

/// Resolve a template against a viewport rectangle.
pub fn resolve(template: &LayoutTemplate, viewport: Rect) -> Vec<ResolvedRegion> {
    let mut regions = Vec::new();
    resolve_node(&template.node, viewport, &mut regions);
    regions
}

fn resolve_node(node: &LayoutNode, rect: Rect, out: &mut Vec<ResolvedRegion>) {
    match node {
        LayoutNode::Row(children) => {
            for (child, share) in partition(children, rect.height) {
                let offset = rect.y + share.start;
                let child_rect = Rect::new(rect.x, offset, rect.width, share.len);
                resolve_node(&child.node, child_rect, out);
            }
        }
        LayoutNode::Column(children) => {
            for (child, share) in partition(children, rect.width) {
                let offset = rect.x + share.start;
                let child_rect = Rect::new(offset, rect.y, share.len, rect.height);
                resolve_node(&child.node, child_rect, out);
            }
        }
        LayoutNode::Span(name) => out.push(ResolvedRegion {
            pane: Some(name.clone()),
            rect,
        }),
        LayoutNode::Space => out.push(ResolvedRegion { pane: None, rect }),
    }
}

/// One child's slice of a partitioned dimension.
struct Share {
    start: u16,
    len: u16,
}

/// Partition `total` cells among weighted children.
///
/// Each child gets `floor(total * weight / weight_sum)`; the rounding
/// remainder goes entirely to the last child, so the shares always sum to
/// `total` exactly. Children whose floor share is 0 still appear, with a
/// zero-sized slice; picking templates whose minimums avoid that in
/// practice is the caller's job.
fn partition(children: &[Weighted], total: u16) -> impl Iterator<Item = (&Weighted, Share)> {
    let weight_sum: u32 = children.iter().map(|c| u32::from(c.weight)).sum();
    let count = children.len();
    let mut cursor: u16 = 0;

    children.iter().enumerate().map(move |(i, child)| {
        let len = if i + 1 == count {
            total - cursor
        } else {
            #[allow(clippy::cast_possible_truncation)]
            let floor = (u32::from(total) * u32::from(child.weight) / weight_sum.max(1)) as u16;
            floor
        };
        let share = Share { start: cursor, len };
        cursor += len;
        (child, share)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::template::LayoutNode;

    fn spans(names: &[&str], weights: &[u16]) -> Vec<Weighted> {
        names
            .iter()
            .zip(weights)
            .map(|(name, &w)| Weighted::with_weight(w, LayoutNode::span(*name)))
            .collect()
    }

    #[test]
    fn test_row_partitions_height() {
        let template = LayoutTemplate::new(LayoutNode::row(spans(&["a", "b"], &[1, 1])));
        let regions = resolve(&template, Rect::from_size(80, 25));

        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].rect, Rect::new(0, 0, 80, 12));
        // Remainder row goes to the last child.
        assert_eq!(regions[1].rect, Rect::new(0, 12, 80, 13));
    }

    #[test]
    fn test_column_partitions_width() {
        let template = LayoutTemplate::new(LayoutNode::column(spans(&["a", "b", "c"], &[1, 2, 1])));
        let regions = resolve(&template, Rect::from_size(100, 24));

        assert_eq!(regions[0].rect, Rect::new(0, 0, 25, 24));
        assert_eq!(regions[1].rect, Rect::new(25, 0, 50, 24));
        assert_eq!(regions[2].rect, Rect::new(75, 0, 25, 24));
    }

    #[test]
    fn test_tiling_invariant_odd_splits() {
        // Weights that never divide the total evenly.
        for total in [7u16, 23, 53, 101] {
            let template = LayoutTemplate::new(LayoutNode::row(spans(&["a", "b", "c"], &[1, 1, 1])));
            let regions = resolve(&template, Rect::from_size(10, total));

            let sum: u16 = regions.iter().map(|r| r.rect.height).sum();
            assert_eq!(sum, total, "children must tile the parent exactly");

            for (i, a) in regions.iter().enumerate() {
                for b in &regions[i + 1..] {
                    assert!(!a.rect.intersects(&b.rect), "{:?} overlaps {:?}", a.rect, b.rect);
                }
            }
        }
    }

    #[test]
    fn test_degenerate_viewport_yields_zero_sized_regions() {
        let template = LayoutTemplate::new(LayoutNode::row(spans(&["a", "b", "c"], &[1, 1, 1])));
        let regions = resolve(&template, Rect::from_size(10, 2));

        assert_eq!(regions.len(), 3);
        let sum: u16 = regions.iter().map(|r| r.rect.height).sum();
        assert_eq!(sum, 2);
        assert!(regions.iter().any(|r| r.rect.height == 0));
    }

    #[test]
    fn test_nested_tree_depth_first_order() {
        // Row [ span(top), column [ span(left), span(right) ] ]
        let tree = LayoutNode::row(vec![
            Weighted::new(LayoutNode::span("top")),
            Weighted::new(LayoutNode::column(vec![
                Weighted::new(LayoutNode::span("left")),
                Weighted::new(LayoutNode::span("right")),
            ])),
        ]);
        let regions = resolve(&LayoutTemplate::new(tree), Rect::from_size(80, 24));

        let names: Vec<_> = regions.iter().map(|r| r.pane.as_deref()).collect();
        assert_eq!(names, [Some("top"), Some("left"), Some("right")]);
        assert_eq!(regions[1].rect.y, 12);
        assert_eq!(regions[2].rect.x, 40);
    }

    #[test]
    fn test_space_emits_unnamed_region() {
        let tree = LayoutNode::row(vec![
            Weighted::new(LayoutNode::span("menu")),
            Weighted::new(LayoutNode::Space),
        ]);
        let regions = resolve(&LayoutTemplate::new(tree), Rect::from_size(40, 10));

        assert_eq!(regions[1].pane, None);
        assert_eq!(regions[1].rect.height, 5);
    }
}
