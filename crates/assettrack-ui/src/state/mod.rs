//! Application state management
//!
//! Centralized state for the AssetTrack dashboard chrome.

mod app_state;

pub use app_state::*;
