//! Presentation state driven by chrome change notifications
//!
//! The controller owns truth; this presenter owns what the page should be
//! showing: the hidden flag on the panel markup, the `aria-expanded` value
//! on its trigger, and the companion indicator glyph. The embedding page
//! reads these after every interaction and patches the DOM accordingly.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use assettrack_core::{IndicatorKind, IndicatorState, PanelChange, PanelConfig};

use crate::components::icon::{indicator_icon, IconName};

/// Presentation state for one mounted panel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelView {
    pub panel_id: String,
    pub trigger_id: String,
    /// Whether the panel markup carries the hidden class.
    pub hidden: bool,
    /// Value for the trigger's `aria-expanded` attribute.
    pub aria_expanded: bool,
    /// Companion indicator glyph, for panels that have one.
    pub indicator_icon: Option<IconName>,
    #[serde(skip)]
    indicator_kind: Option<IndicatorKind>,
}

/// Holds a [`PanelView`] per mounted panel and keeps them in sync with the
/// controller's change notifications.
#[derive(Debug, Default)]
pub struct ChromePresenter {
    views: BTreeMap<String, PanelView>,
}

impl ChromePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount presentation state for a registered panel, hidden.
    pub fn mount(&mut self, config: &PanelConfig) {
        self.views.insert(
            config.id.clone(),
            PanelView {
                panel_id: config.id.clone(),
                trigger_id: config.trigger_id.clone(),
                hidden: true,
                aria_expanded: false,
                indicator_icon: config
                    .indicator
                    .map(|kind| indicator_icon(kind, IndicatorState::Collapsed)),
                indicator_kind: config.indicator,
            },
        );
    }

    /// Apply one change notification.
    ///
    /// An unknown id means the page never mounted the panel. That is a
    /// markup problem, not a state problem: log it and keep the page alive.
    pub fn apply(&mut self, change: &PanelChange) {
        let Some(view) = self.views.get_mut(&change.panel_id) else {
            warn!("Change notification for unmounted panel: {}", change.panel_id);
            return;
        };

        view.hidden = !change.visible;
        view.aria_expanded = change.visible;
        if let (Some(kind), Some(state)) = (view.indicator_kind, change.indicator) {
            view.indicator_icon = Some(indicator_icon(kind, state));
        }
    }

    pub fn apply_all(&mut self, changes: &[PanelChange]) {
        for change in changes {
            self.apply(change);
        }
    }

    pub fn view(&self, panel_id: &str) -> Option<&PanelView> {
        self.views.get(panel_id)
    }

    pub fn views(&self) -> impl Iterator<Item = &PanelView> {
        self.views.values()
    }

    /// Serializable snapshot of every panel's presentation state, keyed by
    /// panel id. This is the surface the embedding page consumes.
    pub fn snapshot(&self) -> serde_json::Value {
        serde_json::to_value(&self.views).unwrap_or_default()
    }
}
