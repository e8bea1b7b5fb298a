//! Pane registry: symbolic names resolved to pane factories.

use std::collections::HashMap;

use super::Pane;
use crate::layout::Rect;

/// Constructor for one pane kind, invoked once per draw cycle with the
/// pane's full region rectangle.
pub type PaneFactory = Box<dyn Fn(Rect) -> Box<dyn Pane> + Send>;

/// Maps symbolic pane names to factories.
///
/// Lookup is tolerant: a name with no registered factory is skipped by the
/// draw cycle (no pane painted, border still drawn), never treated as
/// fatal. Unrecognized names in a layout therefore degrade to empty
/// framed regions rather than breaking the dashboard.
#[derive(Default)]
pub struct PaneRegistry {
    factories: HashMap<String, PaneFactory>,
}

impl PaneRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under a symbolic name, replacing any previous
    /// registration for that name.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(Rect) -> Box<dyn Pane> + Send + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
    }

    /// Look up a factory by name.
    pub fn lookup(&self, name: &str) -> Option<&PaneFactory> {
        self.factories.get(name)
    }

    /// Instantiate a pane for a region, or `None` for unknown names.
    pub fn instantiate(&self, name: &str, rect: Rect) -> Option<Box<dyn Pane>> {
        self.lookup(name).map(|factory| factory(rect))
    }

    /// Number of registered pane kinds.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Check if no pane kinds are registered.
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}

impl std::fmt::Debug for PaneRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.factories.keys().collect();
        names.sort();
        f.debug_struct("PaneRegistry").field("names", &names).finish()
    }
}
