//! Panel registry and visibility rules

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::{ChromeError, Error, Result};
use crate::types::{IndicatorState, PanelChange, PanelConfig};

use super::PointerTarget;

/// A registered panel and its current visibility.
#[derive(Debug, Clone)]
struct Panel {
    config: PanelConfig,
    visible: bool,
}

/// Owns the open/closed state of each registered panel.
///
/// Panels are registered once at startup and live for the whole session;
/// they are only ever toggled. All operations run to completion on the
/// caller's thread, and change notifications accumulate until
/// [`drain_changes`](Self::drain_changes) hands them to the rendering
/// collaborator — so a full interaction event is applied before anything
/// is redrawn.
#[derive(Debug, Default)]
pub struct ChromeController {
    panels: HashMap<String, Panel>,
    changes: Vec<PanelChange>,
}

impl ChromeController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a panel to the registry, closed.
    pub fn register(&mut self, config: PanelConfig) -> Result<()> {
        if self.panels.contains_key(&config.id) {
            return Err(Error::Chrome(ChromeError::DuplicatePanel(config.id)));
        }

        info!("Registering panel: {} (trigger: {})", config.id, config.trigger_id);

        self.panels.insert(
            config.id.clone(),
            Panel {
                config,
                visible: false,
            },
        );
        Ok(())
    }

    /// Set a panel visible. No-op, with no notification, if already open.
    pub fn open(&mut self, panel_id: &str) -> Result<()> {
        self.set_visible(panel_id, true)
    }

    /// Set a panel hidden. No-op, with no notification, if already closed.
    pub fn close(&mut self, panel_id: &str) -> Result<()> {
        self.set_visible(panel_id, false)
    }

    /// Flip a panel's visibility.
    pub fn toggle(&mut self, panel_id: &str) -> Result<()> {
        let open = self.is_open(panel_id)?;
        self.set_visible(panel_id, !open)
    }

    pub fn is_open(&self, panel_id: &str) -> Result<bool> {
        self.panels
            .get(panel_id)
            .map(|panel| panel.visible)
            .ok_or_else(|| Error::Chrome(ChromeError::UnknownPanel(panel_id.to_string())))
    }

    pub fn config(&self, panel_id: &str) -> Result<&PanelConfig> {
        self.panels
            .get(panel_id)
            .map(|panel| &panel.config)
            .ok_or_else(|| Error::Chrome(ChromeError::UnknownPanel(panel_id.to_string())))
    }

    /// The panel a trigger is associated with, if any.
    pub fn find_by_trigger(&self, trigger_id: &str) -> Option<&PanelConfig> {
        self.panels
            .values()
            .map(|panel| &panel.config)
            .find(|config| config.trigger_id == trigger_id)
    }

    pub fn configs(&self) -> impl Iterator<Item = &PanelConfig> {
        self.panels.values().map(|panel| &panel.config)
    }

    /// Close every open panel the pointer target lies outside of.
    ///
    /// All open panels are evaluated in one pass, so a single interaction
    /// never leaves a partially-updated panel set. A panel whose trigger is
    /// the target itself is left alone: the trigger's own activation decides
    /// that panel's fate, and force-closing here would undo it.
    pub fn handle_outside_interaction(&mut self, target: &dyn PointerTarget) {
        let mut closed = 0usize;
        for panel in self.panels.values_mut() {
            if panel.visible
                && !target.is_within(&panel.config.id)
                && !target.is_within(&panel.config.trigger_id)
            {
                Self::transition(panel, false, &mut self.changes);
                closed += 1;
            }
        }
        if closed > 0 {
            debug!("Outside interaction closed {} panel(s)", closed);
        }
    }

    /// Drain the change notifications accumulated since the last call.
    pub fn drain_changes(&mut self) -> Vec<PanelChange> {
        std::mem::take(&mut self.changes)
    }

    fn set_visible(&mut self, panel_id: &str, visible: bool) -> Result<()> {
        let panel = self
            .panels
            .get_mut(panel_id)
            .ok_or_else(|| Error::Chrome(ChromeError::UnknownPanel(panel_id.to_string())))?;

        Self::transition(panel, visible, &mut self.changes);
        Ok(())
    }

    /// Apply a visibility transition and record it. Silently ignores
    /// transitions to the current state, so no-ops never notify.
    fn transition(panel: &mut Panel, visible: bool, changes: &mut Vec<PanelChange>) {
        if panel.visible == visible {
            return;
        }

        panel.visible = visible;
        debug!(
            "Panel {} -> {}",
            panel.config.id,
            if visible { "open" } else { "closed" }
        );
        changes.push(PanelChange {
            panel_id: panel.config.id.clone(),
            visible,
            indicator: panel
                .config
                .indicator
                .map(|_| IndicatorState::from_visible(visible)),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chrome::AncestryTarget;
    use crate::types::IndicatorKind;
    use pretty_assertions::assert_eq;

    fn controller_with(configs: Vec<PanelConfig>) -> ChromeController {
        let mut controller = ChromeController::new();
        for config in configs {
            controller.register(config).unwrap();
        }
        controller
    }

    #[test]
    fn test_registered_panel_starts_closed() {
        let controller = controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);
        assert!(!controller.is_open("help-dropdown").unwrap());
    }

    #[test]
    fn test_duplicate_registration_fails() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);
        let result = controller.register(PanelConfig::dropdown("help-dropdown", "help-btn"));
        assert!(matches!(
            result,
            Err(Error::Chrome(ChromeError::DuplicatePanel(id))) if id == "help-dropdown"
        ));
    }

    #[test]
    fn test_unknown_panel_fails() {
        let mut controller = ChromeController::new();
        assert!(matches!(
            controller.open("nonexistent"),
            Err(Error::Chrome(ChromeError::UnknownPanel(id))) if id == "nonexistent"
        ));
        assert!(controller.is_open("nonexistent").is_err());
    }

    #[test]
    fn test_toggle_is_an_involution() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);

        controller.toggle("help-dropdown").unwrap();
        controller.toggle("help-dropdown").unwrap();
        assert!(!controller.is_open("help-dropdown").unwrap());

        controller.open("help-dropdown").unwrap();
        controller.drain_changes();

        controller.toggle("help-dropdown").unwrap();
        controller.toggle("help-dropdown").unwrap();
        assert!(controller.is_open("help-dropdown").unwrap());
    }

    #[test]
    fn test_open_is_idempotent_and_notifies_once() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);

        controller.open("help-dropdown").unwrap();
        controller.open("help-dropdown").unwrap();

        assert!(controller.is_open("help-dropdown").unwrap());
        let changes = controller.drain_changes();
        assert_eq!(
            changes,
            vec![PanelChange {
                panel_id: "help-dropdown".to_string(),
                visible: true,
                indicator: None,
            }]
        );
    }

    #[test]
    fn test_close_when_closed_is_silent() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);
        controller.close("help-dropdown").unwrap();
        assert!(controller.drain_changes().is_empty());
    }

    #[test]
    fn test_opening_one_panel_leaves_others_closed() {
        let mut controller = controller_with(vec![
            PanelConfig::dropdown("help-dropdown", "help-btn"),
            PanelConfig::dropdown("user-dropdown", "user-menu"),
        ]);
        controller.open("help-dropdown").unwrap();
        assert!(!controller.is_open("user-dropdown").unwrap());
    }

    #[test]
    fn test_interaction_inside_panel_keeps_it_open() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);
        controller.open("help-dropdown").unwrap();
        controller.drain_changes();

        controller.handle_outside_interaction(&AncestryTarget::new(["help-dropdown"]));

        assert!(controller.is_open("help-dropdown").unwrap());
        assert!(controller.drain_changes().is_empty());
    }

    #[test]
    fn test_interaction_on_trigger_never_force_closes() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);
        controller.open("help-dropdown").unwrap();
        controller.drain_changes();

        controller.handle_outside_interaction(&AncestryTarget::new(["help-btn"]));

        assert!(controller.is_open("help-dropdown").unwrap());
        assert!(controller.drain_changes().is_empty());
    }

    #[test]
    fn test_outside_interaction_closes_every_open_panel() {
        let mut controller = controller_with(vec![
            PanelConfig::dropdown("help-dropdown", "help-btn"),
            PanelConfig::dropdown("user-dropdown", "user-menu")
                .with_indicator(IndicatorKind::Chevron),
            PanelConfig::dropdown("notification-dropdown", "notification-btn"),
        ]);
        controller.open("help-dropdown").unwrap();
        controller.open("user-dropdown").unwrap();
        controller.drain_changes();

        controller.handle_outside_interaction(&AncestryTarget::page_surface());

        assert!(!controller.is_open("help-dropdown").unwrap());
        assert!(!controller.is_open("user-dropdown").unwrap());

        let mut changes = controller.drain_changes();
        changes.sort_by(|a, b| a.panel_id.cmp(&b.panel_id));
        assert_eq!(
            changes,
            vec![
                PanelChange {
                    panel_id: "help-dropdown".to_string(),
                    visible: false,
                    indicator: None,
                },
                PanelChange {
                    panel_id: "user-dropdown".to_string(),
                    visible: false,
                    indicator: Some(IndicatorState::Collapsed),
                },
            ]
        );
    }

    #[test]
    fn test_outside_interaction_skips_closed_panels() {
        let mut controller = controller_with(vec![
            PanelConfig::dropdown("help-dropdown", "help-btn"),
            PanelConfig::dropdown("user-dropdown", "user-menu"),
        ]);
        controller.open("user-dropdown").unwrap();
        controller.drain_changes();

        controller.handle_outside_interaction(&AncestryTarget::page_surface());

        // Only the panel that was open produces a notification.
        let changes = controller.drain_changes();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].panel_id, "user-dropdown");
    }

    #[test]
    fn test_help_dropdown_scenario() {
        let mut controller =
            controller_with(vec![PanelConfig::dropdown("help-dropdown", "help-btn")]);

        controller.toggle("help-dropdown").unwrap();
        assert!(controller.is_open("help-dropdown").unwrap());

        controller.handle_outside_interaction(&AncestryTarget::new(["page-header"]));
        assert!(!controller.is_open("help-dropdown").unwrap());
    }

    #[test]
    fn test_indicator_state_travels_with_changes() {
        let mut controller = controller_with(vec![
            PanelConfig::dropdown("mobile-menu", "mobile-menu-btn")
                .with_indicator(IndicatorKind::NavToggle),
        ]);

        controller.open("mobile-menu").unwrap();
        let opened = controller.drain_changes();
        assert_eq!(opened[0].indicator, Some(IndicatorState::Expanded));

        controller.close("mobile-menu").unwrap();
        let closed = controller.drain_changes();
        assert_eq!(closed[0].indicator, Some(IndicatorState::Collapsed));
    }

    #[test]
    fn test_find_by_trigger() {
        let controller = controller_with(vec![
            PanelConfig::dropdown("help-dropdown", "help-btn"),
            PanelConfig::modal("signing-modal", "sign-handover-btn"),
        ]);

        let config = controller.find_by_trigger("sign-handover-btn").unwrap();
        assert_eq!(config.id, "signing-modal");
        assert!(controller.find_by_trigger("unknown-btn").is_none());
    }
}
