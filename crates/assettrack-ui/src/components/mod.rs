//! Reusable UI components
//!
//! Glyph naming and mapping for the dashboard chrome.

pub mod icon;

pub use icon::{asset_icon, indicator_icon, theme_icon, IconName};
