//! Preference persistence contract and the theme preference
//!
//! The chrome persists exactly one preference today, the theme, but the
//! store contract is a plain key-value surface so any persistent or
//! session-scoped backend can fulfill it.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Key the theme preference is persisted under.
pub const THEME_KEY: &str = "theme";

/// Minimal key-value preference contract.
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The dashboard's color scheme preference.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Stored text to mode. Absent or unrecognized values fall back to the
    /// default, so a corrupt slot never breaks startup.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => ThemeMode::Light,
            Some("dark") => ThemeMode::Dark,
            _ => ThemeMode::default(),
        }
    }

    pub fn flipped(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Two-valued theme preference with write-through persistence.
///
/// Reads the persisted slot once at construction; every explicit toggle
/// writes the new mode back immediately. Not a panel: the theme control
/// has no outside-interaction behavior.
pub struct ThemeSwitcher {
    store: Arc<dyn PreferenceStore>,
    mode: ThemeMode,
}

impl ThemeSwitcher {
    pub fn load(store: Arc<dyn PreferenceStore>) -> Result<Self> {
        let mode = ThemeMode::from_stored(store.get(THEME_KEY)?.as_deref());
        info!("Theme preference loaded: {}", mode.as_str());
        Ok(Self { store, mode })
    }

    pub fn current(&self) -> ThemeMode {
        self.mode
    }

    /// Flip the mode and persist it. A write failure propagates so memory
    /// and disk never silently diverge.
    pub fn toggle(&mut self) -> Result<ThemeMode> {
        let next = self.mode.flipped();
        self.store.set(THEME_KEY, next.as_str())?;
        self.mode = next;
        debug!("Theme switched to {}", next.as_str());
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[test]
    fn test_theme_mode_defaults_to_dark() {
        assert_eq!(ThemeMode::from_stored(None), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("solarized")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_stored(Some("light")), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_writes_through() {
        let store = Arc::new(MemoryStore::new());

        let mut switcher = ThemeSwitcher::load(store.clone()).unwrap();
        assert_eq!(switcher.current(), ThemeMode::Dark);

        assert_eq!(switcher.toggle().unwrap(), ThemeMode::Light);

        // A fresh switcher over the same store observes the flipped mode.
        let reloaded = ThemeSwitcher::load(store).unwrap();
        assert_eq!(reloaded.current(), ThemeMode::Light);
    }

    #[test]
    fn test_toggle_round_trip() {
        let store = Arc::new(MemoryStore::new());
        let mut switcher = ThemeSwitcher::load(store).unwrap();

        switcher.toggle().unwrap();
        switcher.toggle().unwrap();
        assert_eq!(switcher.current(), ThemeMode::Dark);
    }

    #[test]
    fn test_toggle_persists_exactly_once_per_flip() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_get()
            .with(eq(THEME_KEY))
            .returning(|_| Ok(None));
        store
            .expect_set()
            .with(eq(THEME_KEY), eq("light"))
            .times(1)
            .returning(|_, _| Ok(()));

        let mut switcher = ThemeSwitcher::load(Arc::new(store)).unwrap();
        assert_eq!(switcher.toggle().unwrap(), ThemeMode::Light);
    }
}
