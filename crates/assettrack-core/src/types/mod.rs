//! Core type definitions for the AssetTrack chrome
//!
//! This module contains all shared types used across the workspace:
//! panel/indicator types, handover signing types, and welcome pack types.

mod chrome_types;
mod handover_types;
mod welcome_types;

pub use chrome_types::*;
pub use handover_types::*;
pub use welcome_types::*;

use serde::{Deserialize, Serialize};

/// A persisted preference row.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreferenceEntry {
    pub key: String,
    pub value: String,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
