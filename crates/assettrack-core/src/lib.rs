//! AssetTrack Core Library
//!
//! This crate provides the state layer for the AssetTrack dashboard chrome:
//! - Panel visibility controller (dropdowns, modals, outside-interaction)
//! - Theme preference with a pluggable key-value store
//! - SQLite-based preference persistence
//! - Handover signing session state
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    assettrack-core                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  chrome/       - Panel registry, visibility rules           │
//! │  prefs/        - Preference contract, theme preference      │
//! │  storage/      - SQLite database, migrations, queries       │
//! │  handover/     - Signing session state                      │
//! │  types/        - Shared type definitions                    │
//! │  error.rs      - Error types                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rendering lives entirely in collaborators: this crate emits
//! [`PanelChange`](types::PanelChange) notifications and never touches
//! icons, markup, or styling.

pub mod chrome;
pub mod error;
pub mod handover;
pub mod prefs;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use error::{ChromeError, Error, Result, StorageError};
pub use types::*;

// Re-export chrome components
pub use chrome::{AncestryTarget, ChromeController, PointerTarget};

// Re-export preference components
pub use prefs::{MemoryStore, PreferenceStore, ThemeMode, ThemeSwitcher, THEME_KEY};

// Re-export handover session state
pub use handover::{SignaturePad, SigningSession};

// Re-export storage
pub use storage::Storage;
