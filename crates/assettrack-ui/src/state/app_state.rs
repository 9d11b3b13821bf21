//! Main application state

use std::sync::Arc;

use assettrack_core::{Result, Storage, ThemeMode};

use crate::dashboard::Dashboard;
use crate::theme::Theme;

/// Main application state
///
/// Owns the persistence handle, the dashboard chrome, and the palette the
/// page is currently styled with.
pub struct AppState {
    /// Preference storage
    pub storage: Arc<Storage>,
    /// Dashboard chrome (controller + presenter + theme preference)
    pub dashboard: Dashboard,
    /// Active palette, derived from the theme preference
    pub theme: Theme,
}

impl AppState {
    pub fn new(storage: Arc<Storage>) -> Result<Self> {
        let dashboard = Dashboard::new(storage.clone())?;
        let theme = Theme::for_mode(dashboard.theme_mode());

        Ok(Self {
            storage,
            dashboard,
            theme,
        })
    }

    /// Flip the theme preference and restyle.
    pub fn toggle_theme(&mut self) -> Result<ThemeMode> {
        let mode = self.dashboard.toggle_theme()?;
        self.theme = Theme::for_mode(mode);
        Ok(mode)
    }
}
