//! Panel and indicator type definitions

use serde::{Deserialize, Serialize};

/// How a panel responds to its trigger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    /// Trigger activation toggles: open when closed, closed when open.
    Dropdown,
    /// Trigger activation opens only; re-activation while open is a no-op.
    /// Modals close through an explicit close control or an outside
    /// interaction (a backdrop click resolves outside the dialog region).
    Modal,
}

/// Which glyph pair a panel's companion indicator cycles between.
///
/// The mapping from kind and state to a concrete glyph lives in rendering
/// code; the controller only tracks the enumerated state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorKind {
    /// Collapsed/expanded chevron next to the trigger label.
    Chevron,
    /// Hamburger/close pair on the mobile navigation toggle.
    NavToggle,
}

/// Two-valued indicator state mirroring panel visibility.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorState {
    Collapsed,
    Expanded,
}

impl IndicatorState {
    pub fn from_visible(visible: bool) -> Self {
        if visible {
            Self::Expanded
        } else {
            Self::Collapsed
        }
    }
}

/// Static description of one panel, registered at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelConfig {
    /// Panel region identifier (the overlay element).
    pub id: String,
    /// Identifier of the control that opens or toggles the panel.
    pub trigger_id: String,
    pub kind: PanelKind,
    /// Companion indicator, for panels whose trigger shows open/closed state.
    pub indicator: Option<IndicatorKind>,
}

impl PanelConfig {
    pub fn new(
        id: impl Into<String>,
        trigger_id: impl Into<String>,
        kind: PanelKind,
    ) -> Self {
        Self {
            id: id.into(),
            trigger_id: trigger_id.into(),
            kind,
            indicator: None,
        }
    }

    /// Dropdown-style panel: trigger toggles.
    pub fn dropdown(id: impl Into<String>, trigger_id: impl Into<String>) -> Self {
        Self::new(id, trigger_id, PanelKind::Dropdown)
    }

    /// Modal-style panel: trigger opens only.
    pub fn modal(id: impl Into<String>, trigger_id: impl Into<String>) -> Self {
        Self::new(id, trigger_id, PanelKind::Modal)
    }

    pub fn with_indicator(mut self, kind: IndicatorKind) -> Self {
        self.indicator = Some(kind);
        self
    }
}

/// Change notification emitted on every actual visibility transition.
///
/// Consumed by the rendering collaborator to show/hide the panel markup,
/// swap the companion indicator glyph, and update assistive-technology
/// state attributes. No-op operations emit nothing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PanelChange {
    pub panel_id: String,
    pub visible: bool,
    /// New indicator state, for panels that carry an indicator.
    pub indicator: Option<IndicatorState>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_set_kind_and_indicator() {
        let dropdown =
            PanelConfig::dropdown("user-dropdown", "user-menu").with_indicator(IndicatorKind::Chevron);
        assert_eq!(dropdown.kind, PanelKind::Dropdown);
        assert_eq!(dropdown.indicator, Some(IndicatorKind::Chevron));

        let modal = PanelConfig::modal("signing-modal", "sign-handover-btn");
        assert_eq!(modal.kind, PanelKind::Modal);
        assert!(modal.indicator.is_none());
    }

    #[test]
    fn test_indicator_state_mirrors_visibility() {
        assert_eq!(IndicatorState::from_visible(true), IndicatorState::Expanded);
        assert_eq!(IndicatorState::from_visible(false), IndicatorState::Collapsed);
    }
}
