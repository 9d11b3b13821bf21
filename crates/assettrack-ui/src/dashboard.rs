//! The AssetTrack dashboard chrome
//!
//! Wires the dashboard's fixed panel set to the visibility controller and
//! fans change notifications out to the presenter. Every pointer
//! interaction enters through [`Dashboard::pointer_event`]: trigger
//! handling runs first, then one outside-interaction pass for the same
//! event, then the accumulated changes reach the presenter.

use std::sync::Arc;

use tracing::info;

use assettrack_core::chrome::PointerTarget;
use assettrack_core::{
    ChromeController, ChromeError, Error, IndicatorKind, PanelConfig, PanelKind,
    PreferenceStore, Result, ThemeMode, ThemeSwitcher,
};

use crate::components::icon::{theme_icon, IconName};
use crate::present::{ChromePresenter, PanelView};

/// Panel and control identifiers, matching the page markup.
pub mod ids {
    pub const USER_DROPDOWN: &str = "user-dropdown";
    pub const USER_MENU_BTN: &str = "user-menu";

    pub const HELP_DROPDOWN: &str = "help-dropdown";
    pub const HELP_BTN: &str = "help-btn";

    pub const NOTIFICATION_DROPDOWN: &str = "notification-dropdown";
    pub const NOTIFICATION_BTN: &str = "notification-btn";

    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const MOBILE_MENU_BTN: &str = "mobile-menu-btn";

    pub const SIGNING_MODAL: &str = "signing-modal";
    pub const SIGNING_TRIGGER: &str = "sign-handover-btn";

    pub const WELCOME_MODAL: &str = "welcome-modal";
    pub const WELCOME_TRIGGER: &str = "create-welcome-btn";

    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const THEME_TOGGLE_MOBILE: &str = "theme-toggle-mobile";
}

/// Owns the controller, the presenter, and the theme preference for one
/// dashboard page.
pub struct Dashboard {
    chrome: ChromeController,
    presenter: ChromePresenter,
    theme: ThemeSwitcher,
}

impl Dashboard {
    /// Build the chrome with the dashboard's panel set, theme loaded from
    /// the given store.
    pub fn new(store: Arc<dyn PreferenceStore>) -> Result<Self> {
        let mut chrome = ChromeController::new();
        let mut presenter = ChromePresenter::new();

        for config in Self::panel_set() {
            presenter.mount(&config);
            chrome.register(config)?;
        }

        let theme = ThemeSwitcher::load(store)?;

        Ok(Self {
            chrome,
            presenter,
            theme,
        })
    }

    fn panel_set() -> Vec<PanelConfig> {
        vec![
            PanelConfig::dropdown(ids::USER_DROPDOWN, ids::USER_MENU_BTN)
                .with_indicator(IndicatorKind::Chevron),
            PanelConfig::dropdown(ids::HELP_DROPDOWN, ids::HELP_BTN),
            PanelConfig::dropdown(ids::NOTIFICATION_DROPDOWN, ids::NOTIFICATION_BTN),
            PanelConfig::dropdown(ids::MOBILE_MENU, ids::MOBILE_MENU_BTN)
                .with_indicator(IndicatorKind::NavToggle),
            PanelConfig::modal(ids::SIGNING_MODAL, ids::SIGNING_TRIGGER),
            PanelConfig::modal(ids::WELCOME_MODAL, ids::WELCOME_TRIGGER),
        ]
    }

    /// Handle one pointer interaction on the page surface.
    ///
    /// Resolves the target against theme controls and panel triggers, then
    /// runs the outside pass for the same event. The trigger exemption in
    /// the controller keeps a just-opened panel from reclosing here.
    pub fn pointer_event(&mut self, target: &dyn PointerTarget) -> Result<()> {
        if target.is_within(ids::THEME_TOGGLE) || target.is_within(ids::THEME_TOGGLE_MOBILE) {
            self.toggle_theme()?;
        }

        let hit = self
            .chrome
            .configs()
            .find(|config| target.is_within(&config.trigger_id))
            .map(|config| (config.id.clone(), config.kind));
        if let Some((panel_id, kind)) = hit {
            self.dispatch(&panel_id, kind)?;
        }

        self.chrome.handle_outside_interaction(target);
        self.flush();
        Ok(())
    }

    /// Programmatic trigger activation, for embedders that bind controls
    /// directly instead of routing raw pointer events.
    pub fn activate_trigger(&mut self, trigger_id: &str) -> Result<()> {
        let (panel_id, kind) = self
            .chrome
            .find_by_trigger(trigger_id)
            .map(|config| (config.id.clone(), config.kind))
            .ok_or_else(|| {
                Error::Chrome(ChromeError::UnknownTrigger(trigger_id.to_string()))
            })?;

        self.dispatch(&panel_id, kind)?;
        self.flush();
        Ok(())
    }

    /// Explicit close request (a modal's cancel control).
    pub fn close_panel(&mut self, panel_id: &str) -> Result<()> {
        self.chrome.close(panel_id)?;
        self.flush();
        Ok(())
    }

    pub fn open_panel(&mut self, panel_id: &str) -> Result<()> {
        self.chrome.open(panel_id)?;
        self.flush();
        Ok(())
    }

    pub fn is_open(&self, panel_id: &str) -> Result<bool> {
        self.chrome.is_open(panel_id)
    }

    /// Flip the theme preference and persist it.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode> {
        let mode = self.theme.toggle()?;
        info!("Theme switched to {}", mode.as_str());
        Ok(mode)
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme.current()
    }

    /// Glyph the theme controls should currently show.
    pub fn theme_control_icon(&self) -> IconName {
        theme_icon(self.theme.current())
    }

    pub fn view(&self, panel_id: &str) -> Option<&PanelView> {
        self.presenter.view(panel_id)
    }

    pub fn presenter(&self) -> &ChromePresenter {
        &self.presenter
    }

    /// Dropdowns toggle on their trigger; modals only open, and close
    /// through their cancel control or an outside interaction.
    fn dispatch(&mut self, panel_id: &str, kind: PanelKind) -> Result<()> {
        match kind {
            PanelKind::Dropdown => self.chrome.toggle(panel_id),
            PanelKind::Modal => self.chrome.open(panel_id),
        }
    }

    fn flush(&mut self) {
        let changes = self.chrome.drain_changes();
        self.presenter.apply_all(&changes);
    }
}
