//! Layout templates: declarative, size-independent screen partitioning.
//!
//! A template is a tree of rows, columns, named spans, and blank filler.
//! Templates carry no absolute sizes; the resolver applies them to the
//! viewport measured at draw time. An application supplies an ordered set
//! of templates (largest/most specific first) and [`pick`] selects the one
//! matching the current terminal size.

/// One node of a layout template tree.
///
/// Every leaf reachable from a root is either [`LayoutNode::Span`] or
/// [`LayoutNode::Space`].
#[derive(Debug, Clone)]
pub enum LayoutNode {
    /// Stack children top-to-bottom, partitioning the available height.
    Row(Vec<Weighted>),
    /// Stack children left-to-right, partitioning the available width.
    Column(Vec<Weighted>),
    /// A leaf bound to a symbolic pane name ("source", "backtrace", ...).
    Span(String),
    /// A leaf occupying space but drawing no content.
    Space,
}

impl LayoutNode {
    /// A row with the given children.
    pub fn row(children: Vec<Weighted>) -> Self {
        Self::Row(children)
    }

    /// A column with the given children.
    pub fn column(children: Vec<Weighted>) -> Self {
        Self::Column(children)
    }

    /// A span leaf bound to a pane name.
    pub fn span(name: impl Into<String>) -> Self {
        Self::Span(name.into())
    }
}

/// A child node together with its relative weight.
#[derive(Debug, Clone)]
pub struct Weighted {
    /// Relative share of the parent's partitioned dimension. Must be
    /// positive; the default is 1.
    pub weight: u16,
    /// The child node.
    pub node: LayoutNode,
}

impl Weighted {
    /// Wrap a node with the default weight of 1.
    pub fn new(node: LayoutNode) -> Self {
        Self { weight: 1, node }
    }

    /// Wrap a node with an explicit weight.
    ///
    /// # Panics
    /// Panics if `weight` is 0; zero-weight children are a configuration
    /// error, not a runtime condition.
    pub fn with_weight(weight: u16, node: LayoutNode) -> Self {
        assert!(weight > 0, "layout weights must be positive");
        Self { weight, node }
    }
}

impl From<LayoutNode> for Weighted {
    fn from(node: LayoutNode) -> Self {
        Self::new(node)
    }
}

/// A root layout template: a node tree plus optional size thresholds.
#[derive(Debug, Clone)]
pub struct LayoutTemplate {
    /// The partition tree.
    pub node: LayoutNode,
    /// Minimum viewport width, satisfied only by strictly greater widths.
    pub min_width: Option<u16>,
    /// Minimum viewport height, satisfied only by strictly greater heights.
    pub min_height: Option<u16>,
}

impl LayoutTemplate {
    /// Create an unconstrained template.
    pub fn new(node: LayoutNode) -> Self {
        Self {
            node,
            min_width: None,
            min_height: None,
        }
    }

    /// Require the viewport to be strictly wider than `width`.
    #[must_use]
    pub fn with_min_width(mut self, width: u16) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Require the viewport to be strictly taller than `height`.
    #[must_use]
    pub fn with_min_height(mut self, height: u16) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Check the template's thresholds against a viewport size.
    ///
    /// The comparison is strict: `min_width = Some(80)` requires
    /// `width > 80`. An absent threshold is always satisfied.
    pub fn matches(&self, width: u16, height: u16) -> bool {
        self.min_width.is_none_or(|min| width > min)
            && self.min_height.is_none_or(|min| height > min)
    }
}

/// Select the template to draw for the given viewport size.
///
/// Linear scan, first match wins; the caller orders templates from most
/// specific/large to most general/small. When nothing matches, the FIRST
/// entry is returned regardless of its own thresholds — this fallback is
/// load-bearing, it guarantees a drawable template even on pathologically
/// small terminals. Returns `None` only for an empty slice.
pub fn pick(templates: &[LayoutTemplate], width: u16, height: u16) -> Option<&LayoutTemplate> {
    templates
        .iter()
        .find(|t| t.matches(width, height))
        .or_else(|| templates.first())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constrained() -> LayoutTemplate {
        LayoutTemplate::new(LayoutNode::span("source"))
            .with_min_width(80)
            .with_min_height(24)
    }

    fn catch_all() -> LayoutTemplate {
        LayoutTemplate::new(LayoutNode::span("source"))
    }

    #[test]
    fn test_pick_first_match() {
        let set = [constrained(), catch_all()];
        let picked = pick(&set, 100, 30).unwrap();
        assert_eq!(picked.min_width, Some(80));
    }

    #[test]
    fn test_pick_falls_through_to_unconstrained() {
        let set = [constrained(), catch_all()];
        let picked = pick(&set, 60, 20).unwrap();
        assert_eq!(picked.min_width, None);
    }

    #[test]
    fn test_pick_is_strictly_greater_than() {
        let set = [constrained(), catch_all()];
        // Exactly at the thresholds does not qualify.
        let picked = pick(&set, 80, 24).unwrap();
        assert_eq!(picked.min_width, None);
    }

    #[test]
    fn test_pick_falls_back_to_first_entry() {
        // No catch-all at all: the first template wins even though its own
        // thresholds are unmet.
        let set = [constrained()];
        let picked = pick(&set, 10, 5).unwrap();
        assert_eq!(picked.min_width, Some(80));
    }

    #[test]
    fn test_pick_empty_set() {
        assert!(pick(&[], 80, 24).is_none());
    }

    #[test]
    #[should_panic(expected = "positive")]
    fn test_zero_weight_rejected() {
        let _ = Weighted::with_weight(0, LayoutNode::Space);
    }
}
