//! Panel visibility controller
//!
//! This module owns the open/closed state of every overlay panel on the
//! dashboard (dropdown menus, modal dialogs) and the rules for changing it:
//! trigger activation, explicit close, and the outside-interaction pass
//! that dismisses open panels. It holds no rendering logic; every actual
//! state transition is recorded as a [`PanelChange`](crate::types::PanelChange)
//! for the rendering collaborator to consume.

mod controller;

pub use controller::ChromeController;

use std::collections::HashSet;

/// Where a pointer interaction landed, from the controller's point of view.
///
/// The embedding page resolves the raw event target once (walking element
/// ancestry, in a DOM setting) and answers containment queries against
/// panel and trigger region identifiers.
pub trait PointerTarget {
    /// Whether the target lies within the region identified by `region_id`.
    fn is_within(&self, region_id: &str) -> bool;
}

/// Pointer target described by the identifiers of every region containing it.
#[derive(Debug, Clone, Default)]
pub struct AncestryTarget {
    regions: HashSet<String>,
}

impl AncestryTarget {
    pub fn new<I, S>(regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            regions: regions.into_iter().map(Into::into).collect(),
        }
    }

    /// A target on the bare page surface, outside every registered region.
    pub fn page_surface() -> Self {
        Self::default()
    }
}

impl PointerTarget for AncestryTarget {
    fn is_within(&self, region_id: &str) -> bool {
        self.regions.contains(region_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ancestry_containment() {
        let target = AncestryTarget::new(["help-dropdown", "help-link"]);
        assert!(target.is_within("help-dropdown"));
        assert!(!target.is_within("user-dropdown"));
    }

    #[test]
    fn test_page_surface_is_outside_everything() {
        let target = AncestryTarget::page_surface();
        assert!(!target.is_within("help-dropdown"));
    }
}
