//! AssetTrack UI Library
//!
//! Rendering collaborator for the AssetTrack dashboard chrome: consumes
//! the core controller's change notifications and keeps presentation state
//! (visibility flags, indicator glyphs, assistive-technology attributes)
//! for the embedding page.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │ Header                                                       │
//! │  [logo]  [nav links]   [theme] [bell] [help] [user ▾] [menu] │
//! ├───────────┬──────────────────────────┬───────────────────────┤
//! │           │                          │ user-dropdown         │
//! │           │  notification-dropdown   │ help-dropdown         │
//! │           │                          │                       │
//! │  mobile-menu (small screens)                                 │
//! │                                                              │
//! │        signing-modal / welcome-modal (overlay, backdrop)     │
//! └──────────────────────────────────────────────────────────────┘
//! ```

pub mod components;
pub mod dashboard;
pub mod present;
pub mod state;
pub mod theme;

// Re-exports
pub use components::{asset_icon, indicator_icon, theme_icon, IconName};
pub use dashboard::Dashboard;
pub use present::{ChromePresenter, PanelView};
pub use state::AppState;
pub use theme::{layout, Rgba, Spacing, Theme, ThemeColors, Typography};
